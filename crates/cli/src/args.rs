//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};
use starmap_shared::{Family, OutputShape};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "starmap-check",
    about = "Decode a JSON payload as a family's API shape and print its DTO or View",
    version
)]
#[command(group(ArgGroup::new("shape_flag").args(["view", "dto"])))]
pub struct Args {
    /// Entity family: system, asteroid, planet, moon, star, donation, log,
    /// metric, user or auth
    #[arg(value_name = "FAMILY")]
    pub family: Family,

    /// JSON payload to read; stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the presentation View
    #[arg(long)]
    pub view: bool,

    /// Print the persistence DTO
    #[arg(long)]
    pub dto: bool,

    /// Default output shape when neither --view nor --dto is given
    #[arg(
        long,
        env = "STARMAP_OUTPUT",
        value_name = "SHAPE",
        default_value_t = OutputShape::Dto
    )]
    pub output: OutputShape,
}

impl Args {
    /// Resolves the output shape: `--view`/`--dto`, then `--output` or
    /// `STARMAP_OUTPUT`, then DTO.
    pub fn shape(&self) -> OutputShape {
        if self.view {
            OutputShape::View
        } else if self.dto {
            OutputShape::Dto
        } else {
            self.output
        }
    }

    /// The file to read, or `None` for stdin.
    pub fn input(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("starmap-check").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_family_only() {
        let args = parse(&["planet"]).unwrap();
        assert_eq!(args.family, Family::Planet);
        assert_eq!(args.input(), None);
        assert!(!args.view && !args.dto);
    }

    #[test]
    fn test_file_and_flag_in_any_order() {
        let args = parse(&["--view", "star", "sun.json"]).unwrap();
        assert_eq!(args.family, Family::Star);
        assert_eq!(args.input(), Some(Path::new("sun.json")));
        assert_eq!(args.shape(), OutputShape::View);
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = parse(&["log", "-"]).unwrap();
        assert_eq!(args.input(), None);
    }

    #[test]
    fn test_usage_errors() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["comet"]).is_err());
        assert!(parse(&["moon", "a.json", "b.json"]).is_err());
        assert!(parse(&["moon", "--yaml"]).is_err());
        assert!(parse(&["moon", "--view", "--dto"]).is_err());
        assert!(parse(&["moon", "--output", "xml"]).is_err());
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_shape_precedence() {
        let flagged = parse(&["user", "--dto", "--output", "view"]).unwrap();
        assert_eq!(flagged.shape(), OutputShape::Dto);

        let configured = parse(&["user", "--output", "VIEW"]).unwrap();
        assert_eq!(configured.shape(), OutputShape::View);
    }
}
