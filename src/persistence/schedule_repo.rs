use super::json::{load_json, save_json};
use crate::domain::{parse_time, Task, Weekday};
use crate::planner::ScheduleMap;
use anyhow::{Context, Result};
use log::info;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const PLANNER_FILE: &str = "Planner.json";

/// On-disk shape: weekday -> "HH:MM" -> task
type StoredSchedule = BTreeMap<Weekday, BTreeMap<String, Task>>;

/// Reads and writes the schedule file
#[derive(Debug, Clone)]
pub struct ScheduleRepository {
    path: PathBuf,
}

impl ScheduleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PLANNER_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or blank file loads as an empty schedule
    pub fn load(&self) -> Result<ScheduleMap> {
        let stored: StoredSchedule = load_json(&self.path)?.unwrap_or_default();

        let mut map = ScheduleMap::new();
        for (weekday, bucket) in stored {
            let day = map.entry(weekday).or_default();
            for (key, task) in bucket {
                let time = parse_time(&key)
                    .with_context(|| format!("Bad time key `{}` under {} in {}", key, weekday, self.path.display()))?;
                day.insert(time, task);
            }
        }

        info!(
            "event=schedule_load path=\"{}\" tasks={}",
            self.path.display(),
            map.values().map(BTreeMap::len).sum::<usize>()
        );
        Ok(map)
    }

    /// Every weekday is written, empty ones as `{}`
    pub fn save(&self, schedule: &ScheduleMap) -> Result<()> {
        let stored: StoredSchedule = Weekday::all()
            .iter()
            .map(|weekday| {
                let bucket: BTreeMap<String, Task> = schedule
                    .get(weekday)
                    .map(|tasks| {
                        tasks
                            .iter()
                            .map(|(time, task)| (time.format("%H:%M").to_string(), task.clone()))
                            .collect()
                    })
                    .unwrap_or_default();
                (*weekday, bucket)
            })
            .collect();

        save_json(&self.path, &stored)
            .with_context(|| format!("Failed to save schedule: {}", self.path.display()))?;
        info!("event=schedule_save path=\"{}\" status=ok", self.path.display());
        Ok(())
    }
}
