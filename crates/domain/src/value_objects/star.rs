//! Star value objects and the spectral classification tables
//!
//! A star's type constrains which spectral classes it may carry, and the
//! class fixes its colour:
//!
//! | Type            | Classes |
//! |-----------------|---------|
//! | Blue supergiant | O, B    |
//! | Blue giant      | O, B    |
//! | White dwarf     | B, A    |
//! | Yellow dwarf    | F, G    |
//! | Orange dwarf    | K       |
//! | Red dwarf       | M       |
//! | Red giant       | K, M    |

use super::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use crate::error::ErrorCode;

define_text! {
    /// A validated star name (trimmed, 2-100 chars)
    StarName, ErrorCode::InvalidStarValue, "Star name",
    min = NAME_MIN_LENGTH, max = NAME_MAX_LENGTH
}

closed_set! {
    StarType, ErrorCode::InvalidStarType, "Star type" {
        BlueSupergiant => "Blue supergiant",
        BlueGiant => "Blue giant",
        WhiteDwarf => "White dwarf",
        YellowDwarf => "Yellow dwarf",
        OrangeDwarf => "Orange dwarf",
        RedDwarf => "Red dwarf",
        RedGiant => "Red giant",
    }
}

closed_set! {
    /// Harvard spectral class
    StarClass, ErrorCode::InvalidStarClass, "Star class",
    normalize = |raw: &str| raw.to_ascii_uppercase(), {
        O => "O",
        B => "B",
        A => "A",
        F => "F",
        G => "G",
        K => "K",
        M => "M",
    }
}

closed_set! {
    StarColor, ErrorCode::InvalidStarColor, "Star color" {
        Blue => "blue",
        BlueWhite => "blue-white",
        White => "white",
        YellowWhite => "yellow-white",
        Yellow => "yellow",
        Orange => "orange",
        Red => "red",
    }
}

impl StarType {
    /// Spectral classes a star of this type may carry.
    pub fn allowed_classes(self) -> &'static [StarClass] {
        match self {
            Self::BlueSupergiant | Self::BlueGiant => &[StarClass::O, StarClass::B],
            Self::WhiteDwarf => &[StarClass::B, StarClass::A],
            Self::YellowDwarf => &[StarClass::F, StarClass::G],
            Self::OrangeDwarf => &[StarClass::K],
            Self::RedDwarf => &[StarClass::M],
            Self::RedGiant => &[StarClass::K, StarClass::M],
        }
    }

    pub fn allows(self, class: StarClass) -> bool {
        self.allowed_classes().contains(&class)
    }
}

impl StarClass {
    /// The colour every star of this class displays.
    pub fn color(self) -> StarColor {
        match self {
            Self::O => StarColor::Blue,
            Self::B => StarColor::BlueWhite,
            Self::A => StarColor::White,
            Self::F => StarColor::YellowWhite,
            Self::G => StarColor::Yellow,
            Self::K => StarColor::Orange,
            Self::M => StarColor::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_objects_normalize() {
        assert_eq!(StarType::new("Blue giant").unwrap().to_string(), "Blue giant");
        assert_eq!(StarClass::new("G").unwrap(), StarClass::G);
        assert_eq!(StarClass::new(" g ").unwrap(), StarClass::G);
        assert_eq!(StarName::new("  Sun-1  ").unwrap().as_str(), "Sun-1");
    }

    #[test]
    fn test_invalid_name() {
        let err = StarName::new("x").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidStarValue);
    }

    #[test]
    fn test_invalid_tokens() {
        assert_eq!(StarType::new("Brown dwarf").unwrap_err().code(), ErrorCode::InvalidStarType);
        assert_eq!(StarClass::new("Q").unwrap_err().code(), ErrorCode::InvalidStarClass);
        assert_eq!(StarColor::new("green").unwrap_err().code(), ErrorCode::InvalidStarColor);
    }

    #[test]
    fn test_every_type_allows_at_least_one_class() {
        for star_type in StarType::ALL {
            assert!(!star_type.allowed_classes().is_empty());
        }
    }

    #[test]
    fn test_yellow_dwarf_rejects_b() {
        assert!(StarType::YellowDwarf.allows(StarClass::G));
        assert!(!StarType::YellowDwarf.allows(StarClass::B));
    }

    #[test]
    fn test_class_colors() {
        assert_eq!(StarClass::B.color(), StarColor::BlueWhite);
        assert_eq!(StarClass::G.color().as_str(), "yellow");
        assert_eq!(StarClass::M.color(), StarColor::Red);
    }
}
