//! `taskdeck` command line.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the slot database.
//! - Run one user intent through `AppState` and render the result.

mod commands;
mod config;
mod render;

use clap::Parser;
use commands::Command;
use config::Config;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck_core::db::{open_db, DbError};
use taskdeck_core::{AppState, SqliteSlotStore, StatusFilter};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("no platform data directory; pass --data-dir or set TASKDECK_DATA_DIR")]
    NoDataDir,
    #[error("cannot use data directory `{path}`: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot open task database: {0}")]
    Db(#[from] DbError),
}

#[derive(Parser, Debug)]
#[command(name = "taskdeck", version, about = "Local to-do list")]
struct Cli {
    /// Directory holding the task database and logs.
    #[arg(long, env = "TASKDECK_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "TASKDECK_LOG", global = true)]
    log_level: Option<String>,

    /// Disable ANSI styling.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taskdeck: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::resolve(cli.data_dir, cli.log_level)?;
    std::fs::create_dir_all(&config.data_dir).map_err(|source| CliError::DataDir {
        path: config.data_dir.clone(),
        source,
    })?;

    if let Err(err) = taskdeck_core::init_logging(&config.log_level, config.log_dir()) {
        eprintln!("taskdeck: logging disabled: {err}");
    }

    let command = cli.command.unwrap_or(Command::List {
        status: StatusFilter::All,
        category: None,
    });
    info!(
        "event=cli_command module=cli status=start command={}",
        command.name()
    );

    let conn = open_db(config.db_path())?;
    let slots = SqliteSlotStore::new(&conn);
    let mut app = AppState::load(&slots);

    let outcome = commands::execute(&mut app, command, cli.plain);
    for notice in &outcome.notices {
        eprintln!("{notice}");
    }
    print!("{}", outcome.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use crate::commands::Command;
    use clap::{CommandFactory, Parser};
    use taskdeck_core::StatusFilter;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["taskdeck"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.plain);
    }

    #[test]
    fn list_parses_filters() {
        let cli =
            Cli::try_parse_from(["taskdeck", "list", "--status", "pending", "-c", "Work"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::List {
                status: StatusFilter::Pending,
                category: Some("Work".to_string()),
            })
        );
    }

    #[test]
    fn unknown_status_is_rejected_by_the_parser() {
        let err = Cli::try_parse_from(["taskdeck", "list", "--status", "done"]).unwrap_err();
        assert!(err.to_string().contains("unknown status filter `done`"));
    }

    #[test]
    fn add_defaults_to_general_category() {
        let cli = Cli::try_parse_from(["taskdeck", "add", "Buy", "milk"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Add {
                title: vec!["Buy".to_string(), "milk".to_string()],
                category: "General".to_string(),
            })
        );
    }
}
