use crate::persistence::{ensure_dir, find_local_data_dir, global_data_dir};
use crate::persistence::{schedule_repo::PLANNER_FILE, names_repo::TASK_NAMES_FILE};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Explicit directory wins, then a local .weekplan, then the user data dir
    pub fn resolve(data_dir: Option<PathBuf>, log_level: Option<String>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => {
                let current_dir = env::current_dir().context("Could not determine current directory")?;
                match find_local_data_dir(&current_dir) {
                    Some(local) => local,
                    None => global_data_dir()?,
                }
            }
        };

        Ok(Self {
            data_dir: ensure_dir(&data_dir)?,
            log_level: log_level.unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn planner_file(&self) -> PathBuf {
        self.data_dir.join(PLANNER_FILE)
    }

    pub fn task_names_file(&self) -> PathBuf {
        self.data_dir.join(TASK_NAMES_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("plans");

        let config = Config::resolve(Some(dir.clone()), None).unwrap();

        assert!(dir.is_dir());
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.planner_file(), dir.join("Planner.json"));
        assert_eq!(config.task_names_file(), dir.join("TaskNames.json"));
        assert_eq!(config.log_dir(), dir.join("logs"));
    }

    #[test]
    fn test_log_level_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(Some(temp_dir.path().to_path_buf()), Some("debug".to_string())).unwrap();
        assert_eq!(config.log_level, "debug");
    }
}
