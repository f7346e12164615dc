use clap::{ArgAction, Parser};
use find_root::constants::{ANCESTOR_DEPTH, MARKER_DIR};
use std::path::PathBuf;

/// Command-line flags for `find-root`
#[derive(Parser, Debug)]
#[command(
    name = "find-root",
    version,
    about = "Prints the project root used to resolve test files.",
    long_about = None
)]
pub struct Cli {
    /// Subdirectory that marks the project root
    #[arg(long, default_value = MARKER_DIR)]
    pub marker: String,

    /// Parents probed above the working and executable directories
    #[arg(long, default_value_t = ANCESTOR_DEPTH)]
    pub depth: usize,

    /// Start from this directory instead of the working directory
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,

    /// Fail instead of falling back to the working directory
    #[arg(long)]
    pub strict: bool,

    /// Print a JSON report instead of the bare path
    #[arg(long)]
    pub json: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["find-root"]).unwrap();

        assert_eq!(cli.marker, "src");
        assert_eq!(cli.depth, 3);
        assert_eq!(cli.from, None);
        assert!(!cli.strict);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "find-root", "--marker", ".git", "--depth", "5", "--from", "/tmp/build", "--strict",
            "--json", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.marker, ".git");
        assert_eq!(cli.depth, 5);
        assert_eq!(cli.from, Some(PathBuf::from("/tmp/build")));
        assert!(cli.strict);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;

        let command = Cli::command();
        command.clone().debug_assert();

        assert_eq!(command.get_name(), "find-root");
        assert_eq!(
            command.get_about().map(|about| about.to_string()),
            Some("Prints the project root used to resolve test files.".to_string())
        );
    }

    #[test]
    fn test_rejects_non_numeric_depth() {
        assert!(Cli::try_parse_from(["find-root", "--depth", "many"]).is_err());
    }
}
