//! Runtime configuration resolved from CLI flags and environment.
//!
//! # Invariants
//! - `data_dir` is absolute once resolved, so the log directory is too.

use crate::CliError;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "taskdeck";
const DB_FILE_NAME: &str = "taskdeck.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Resolves the data directory; `None` falls back to the platform data dir.
    pub fn resolve(data_dir: Option<PathBuf>, log_level: Option<String>) -> Result<Self, CliError> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => dirs::data_dir()
                .ok_or(CliError::NoDataDir)?
                .join(APP_DIR_NAME),
        };
        let data_dir = absolutize(&data_dir)?;
        let log_level =
            log_level.unwrap_or_else(|| taskdeck_core::default_log_level().to_string());
        Ok(Self {
            data_dir,
            log_level,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }
}

fn absolutize(path: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|source| CliError::DataDir {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::path::PathBuf;

    #[test]
    fn relative_data_dir_becomes_absolute() {
        let config = Config::resolve(Some(PathBuf::from("state")), None).unwrap();
        assert!(config.data_dir.is_absolute());
        assert!(config.data_dir.ends_with("state"));
        assert!(config.log_dir().is_absolute());
    }

    #[test]
    fn derived_paths_live_under_data_dir() {
        let config =
            Config::resolve(Some(PathBuf::from("/tmp/taskdeck")), Some("warn".into())).unwrap();
        assert_eq!(config.db_path(), PathBuf::from("/tmp/taskdeck/taskdeck.sqlite3"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/taskdeck/logs"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn log_level_defaults_to_build_mode_level() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/taskdeck")), None).unwrap();
        assert_eq!(config.log_level, taskdeck_core::default_log_level());
    }
}
