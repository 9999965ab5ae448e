//! Startup configuration resolved from flags and `FOCUSUP_*` variables.

use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

/// Where the initial task collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The built-in sample tasks.
    Builtin,
    /// Start with no tasks at all.
    Empty,
    /// Load the collection from a YAML seed file.
    File(PathBuf),
}

/// Resolved startup configuration.
///
/// Command-line flags win over environment variables; the environment is
/// read through `FOCUSUP_SEED` (`builtin`, `empty`, or a file path) and
/// `FOCUSUP_USER`. Loading a `.env` file, if any, happens before this in
/// [`crate::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the initial tasks come from.
    pub seed: SeedSource,
    /// Email to sign in as at startup, skipping the mock login.
    pub auto_user: Option<String>,
}

impl Config {
    /// Resolves the configuration from parsed flags and the environment.
    #[must_use]
    pub fn resolve(cli: &Cli) -> Self {
        let seed = if cli.empty {
            SeedSource::Empty
        } else if let Some(path) = &cli.seed_file {
            SeedSource::File(path.clone())
        } else {
            seed_from_env()
        };
        let auto_user = cli
            .user
            .clone()
            .or_else(|| env::var("FOCUSUP_USER").ok())
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());
        Self { seed, auto_user }
    }
}

fn seed_from_env() -> SeedSource {
    match env::var("FOCUSUP_SEED") {
        Ok(value) => match value.trim() {
            "" | "builtin" => SeedSource::Builtin,
            "empty" => SeedSource::Empty,
            path => SeedSource::File(PathBuf::from(path)),
        },
        Err(_) => SeedSource::Builtin,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, PoisonError};

    use clap::Parser;

    use super::*;

    /// Serializes tests that touch the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_clean_env<T>(body: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        env::remove_var("FOCUSUP_SEED");
        env::remove_var("FOCUSUP_USER");
        let result = body();
        env::remove_var("FOCUSUP_SEED");
        env::remove_var("FOCUSUP_USER");
        result
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_to_builtin_seed_and_no_user() {
        let config = with_clean_env(|| Config::resolve(&cli(&["focusup"])));
        assert_eq!(config.seed, SeedSource::Builtin);
        assert_eq!(config.auto_user, None);
    }

    #[test]
    fn empty_flag_selects_the_empty_seed() {
        let config = with_clean_env(|| Config::resolve(&cli(&["focusup", "--empty"])));
        assert_eq!(config.seed, SeedSource::Empty);
    }

    #[test]
    fn seed_file_flag_selects_a_file() {
        let config =
            with_clean_env(|| Config::resolve(&cli(&["focusup", "--seed-file", "my.yaml"])));
        assert_eq!(config.seed, SeedSource::File(PathBuf::from("my.yaml")));
    }

    #[test]
    fn seed_env_is_read_when_no_flag_is_given() {
        let (from_env, from_path) = with_clean_env(|| {
            env::set_var("FOCUSUP_SEED", "empty");
            let from_env = Config::resolve(&cli(&["focusup"]));
            env::set_var("FOCUSUP_SEED", "custom.yaml");
            let from_path = Config::resolve(&cli(&["focusup"]));
            (from_env, from_path)
        });

        assert_eq!(from_env.seed, SeedSource::Empty);
        assert_eq!(
            from_path.seed,
            SeedSource::File(PathBuf::from("custom.yaml"))
        );
    }

    #[test]
    fn seed_flag_wins_over_the_environment() {
        let config = with_clean_env(|| {
            env::set_var("FOCUSUP_SEED", "custom.yaml");
            Config::resolve(&cli(&["focusup", "--empty"]))
        });

        assert_eq!(config.seed, SeedSource::Empty);
    }

    #[test]
    fn user_env_is_trimmed_and_blank_means_absent() {
        let (set, blank) = with_clean_env(|| {
            env::set_var("FOCUSUP_USER", "  env@example.com  ");
            let set = Config::resolve(&cli(&["focusup"]));
            env::set_var("FOCUSUP_USER", "   ");
            let blank = Config::resolve(&cli(&["focusup"]));
            (set, blank)
        });

        assert_eq!(set.auto_user.as_deref(), Some("env@example.com"));
        assert_eq!(blank.auto_user, None);
    }

    #[test]
    fn user_flag_wins_over_the_environment() {
        let config = with_clean_env(|| {
            env::set_var("FOCUSUP_USER", "env@example.com");
            Config::resolve(&cli(&["focusup", "--user", "flag@example.com"]))
        });

        assert_eq!(config.auto_user.as_deref(), Some("flag@example.com"));
    }
}
