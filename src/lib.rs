//! Core library entry for the `focusup` CLI.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod ports;
pub mod session;
pub mod shell;
pub mod store;
pub mod task;

use std::io::{BufRead, Write};

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::{Config, SeedSource};
use crate::context::AppContext;
use crate::session::Session;
use crate::shell::Shell;
use crate::store::TaskStore;

/// Runs the application with the provided arguments and I/O handles.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the seed file
/// cannot be read or validated, or terminal I/O fails.
pub fn run<I, T, R, W>(args: I, reader: R, mut writer: W) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    R: BufRead,
    W: Write,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // clap renders --help and --version as "errors"; they are not.
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(writer, "{err}").map_err(|e| format!("write error: {e}"))?;
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };

    let _ = dotenvy::dotenv();
    let config = Config::resolve(&cli);

    let tasks = match &config.seed {
        SeedSource::Builtin => store::builtin_tasks(),
        SeedSource::Empty => Vec::new(),
        SeedSource::File(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read seed file {}: {e}", path.display()))?;
            store::parse_seed_file(&contents)?
        }
    };

    let session = match &config.auto_user {
        Some(email) => Session::signed_in_as(email),
        None => Session::new(),
    };

    let shell = Shell::new(
        AppContext::live(),
        TaskStore::with_tasks(tasks),
        session,
        reader,
        writer,
    );
    shell.run()
}
