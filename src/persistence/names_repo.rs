use super::json::{load_json, save_json};
use crate::planner::TaskNames;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const TASK_NAMES_FILE: &str = "TaskNames.json";

/// Reads and writes the reusable task names
#[derive(Debug, Clone)]
pub struct TaskNamesRepository {
    path: PathBuf,
}

impl TaskNamesRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(TASK_NAMES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<BTreeSet<String>> {
        Ok(load_json(&self.path)?.unwrap_or_default())
    }

    pub fn save(&self, names: &TaskNames) -> Result<()> {
        save_json(&self.path, names.as_set())
            .with_context(|| format!("Failed to save task names: {}", self.path.display()))
    }
}
