//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level argument parser for the `focusup` binary.
///
/// There are no subcommands; the binary always drops into the
/// interactive shell and these flags only shape how it starts.
#[derive(Debug, Parser)]
#[command(
    name = "focusup",
    version,
    about = "In-memory to-do list with a mock sign-in flow"
)]
pub struct Cli {
    /// Start with an empty task list instead of the built-in samples.
    #[arg(long, conflicts_with = "seed_file")]
    pub empty: bool,

    /// Load the initial task list from a YAML seed file.
    #[arg(long, value_name = "PATH")]
    pub seed_file: Option<PathBuf>,

    /// Sign in as EMAIL at startup, skipping the mock login.
    #[arg(long, value_name = "EMAIL")]
    pub user: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn parses_bare_invocation() {
        let cli = Cli::try_parse_from(["focusup"]).unwrap();
        assert!(!cli.empty);
        assert!(cli.seed_file.is_none());
        assert!(cli.user.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "focusup",
            "--seed-file",
            "tasks.yaml",
            "--user",
            "ana@example.com",
        ])
        .unwrap();
        assert_eq!(cli.seed_file.unwrap().to_str(), Some("tasks.yaml"));
        assert_eq!(cli.user.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn empty_conflicts_with_seed_file() {
        let err = Cli::try_parse_from(["focusup", "--empty", "--seed-file", "tasks.yaml"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["focusup", "--nope"]).is_err());
    }
}
