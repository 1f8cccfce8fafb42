//! Moon value objects

use super::{NAME_MAX_LENGTH, NAME_MIN_LENGTH};
use crate::error::ErrorCode;

define_text! {
    /// A validated moon name (trimmed, 2-100 chars)
    MoonName, ErrorCode::InvalidMoonName, "Moon name",
    min = NAME_MIN_LENGTH, max = NAME_MAX_LENGTH
}

closed_set! {
    MoonSize, ErrorCode::InvalidMoonSize, "Moon size" {
        Dwarf => "dwarf",
        Small => "small",
        Medium => "medium",
        Large => "large",
        Giant => "giant",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_objects_normalize() {
        assert_eq!(MoonName::new("  Luna-1  ").unwrap().as_str(), "Luna-1");
        assert_eq!(MoonSize::new("dwarf").unwrap().to_string(), "dwarf");
    }

    #[test]
    fn test_invalid_size() {
        let err = MoonSize::new("huge").unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidMoonSize);
    }

    #[test]
    fn test_invalid_name() {
        assert_eq!(MoonName::new(" ").unwrap_err().code(), ErrorCode::InvalidMoonName);
        assert_eq!(MoonName::new("L").unwrap_err().code(), ErrorCode::InvalidMoonName);
    }
}
