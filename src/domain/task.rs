use super::enums::Weekday;
use super::errors::PlannerError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest allowed priority
pub const MIN_PRIORITY: u8 = 1;
/// Highest allowed priority
pub const MAX_PRIORITY: u8 = 10;

/// Format used for times on screen, in panel ids and on disk
pub const TIME_FORMAT: &str = "%H:%M";

/// Position of a task in the week; at most one task may occupy a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub weekday: Weekday,
    pub time: NaiveTime,
}

impl Slot {
    pub fn new(weekday: Weekday, time: NaiveTime) -> Self {
        Self { weekday, time }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.weekday, self.time.format(TIME_FORMAT))
    }
}

/// One scheduled activity
///
/// Equality compares every field. Stores look tasks up by [`Task::slot`],
/// so two tasks with the same slot but different fields are "the same task"
/// for mutation purposes while still being distinguishable as edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "taskName")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    #[serde(rename = "isDone", default)]
    pub done: bool,
    pub weekday: Weekday,
    pub priority: u8,
}

impl Task {
    /// Build a validated task; seconds are dropped from `time`
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        time: NaiveTime,
        weekday: Weekday,
        priority: u8,
        done: bool,
    ) -> Result<Self, PlannerError> {
        let task = Self {
            name: name.into().trim().to_string(),
            description: description.into(),
            time: truncate_to_minute(time),
            done,
            weekday,
            priority,
        };
        task.validate()?;
        Ok(task)
    }

    /// Check invariants that public fields cannot enforce on their own
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::Validation("task name is empty".to_string()));
        }
        if self.name.trim() != self.name {
            return Err(PlannerError::Validation(format!(
                "task name `{}` has surrounding whitespace",
                self.name
            )));
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority) {
            return Err(PlannerError::Validation(format!(
                "priority {} is outside {}..={}",
                self.priority, MIN_PRIORITY, MAX_PRIORITY
            )));
        }
        if self.time.second() != 0 || self.time.nanosecond() != 0 {
            return Err(PlannerError::Validation(format!(
                "time {} is not truncated to minutes",
                self.time
            )));
        }
        Ok(())
    }

    pub fn slot(&self) -> Slot {
        Slot::new(self.weekday, self.time)
    }

    /// Priority when done, otherwise nothing
    pub fn points_earned(&self) -> u8 {
        if self.done {
            self.priority
        } else {
            0
        }
    }

    pub fn points_possible(&self) -> u8 {
        self.priority
    }

    /// Copy with a different done flag
    pub fn with_done(&self, done: bool) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }

    /// `name(earned/possible)` as shown in grid cells and panel headers
    pub fn label(&self) -> String {
        format!(
            "{}({}/{})",
            self.name,
            self.points_earned(),
            self.points_possible()
        )
    }

    /// `HH:MM_name`, the key of a task's panel in the weekday planner
    pub fn panel_id(&self) -> String {
        format!("{}_{}", self.time_label(), self.name)
    }

    pub fn time_label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// Metric used when summing points over a weekday
pub type PointSelector = fn(&Task) -> u32;

/// Selector for points already achieved
pub fn earned_points(task: &Task) -> u32 {
    u32::from(task.points_earned())
}

/// Selector for points available
pub fn possible_points(task: &Task) -> u32 {
    u32::from(task.points_possible())
}

/// Drop seconds and sub-seconds
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Parse `HH:MM`
pub fn parse_time(text: &str) -> Result<NaiveTime, PlannerError> {
    NaiveTime::parse_from_str(text.trim(), TIME_FORMAT)
        .map_err(|e| PlannerError::Validation(format!("time `{}` is not HH:MM: {}", text.trim(), e)))
}

/// Serde adapter storing times as `HH:MM` strings
mod hh_mm {
    use super::{parse_time, TIME_FORMAT};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_time(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn gym() -> Task {
        Task::new("Gym", "", at(9, 0), Weekday::Monday, 5, false).unwrap()
    }

    #[test]
    fn test_task_new_validates() {
        assert!(Task::new("  ", "", at(9, 0), Weekday::Monday, 5, false).is_err());
        assert!(Task::new("Gym", "", at(9, 0), Weekday::Monday, 0, false).is_err());
        assert!(Task::new("Gym", "", at(9, 0), Weekday::Monday, 11, false).is_err());
        assert!(Task::new("Gym", "", at(9, 0), Weekday::Monday, 10, false).is_ok());
    }

    #[test]
    fn test_task_new_truncates_seconds() {
        let time = NaiveTime::from_hms_opt(9, 15, 42).unwrap();
        let task = Task::new("Read", "", time, Weekday::Friday, 2, false).unwrap();
        assert_eq!(task.time, at(9, 15));
    }

    #[test]
    fn test_validate_catches_hand_built_task() {
        let mut task = gym();
        task.priority = 42;
        assert!(matches!(task.validate(), Err(PlannerError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_untrimmed_name() {
        assert_eq!(Task::new(" Gym ", "", at(9, 0), Weekday::Monday, 5, false).unwrap().name, "Gym");

        let mut task = gym();
        task.name = " Gym".to_string();
        assert!(matches!(task.validate(), Err(PlannerError::Validation(_))));
    }

    #[test]
    fn test_points() {
        let task = gym();
        assert_eq!(task.points_earned(), 0);
        assert_eq!(task.points_possible(), 5);

        let done = task.with_done(true);
        assert_eq!(done.points_earned(), 5);
        assert_eq!(earned_points(&done), 5);
        assert_eq!(possible_points(&done), 5);
    }

    #[test]
    fn test_copy_is_independent() {
        let task = gym();
        let mut copy = task.clone();
        copy.done = true;
        assert!(!task.done);
        assert_eq!(task.slot(), copy.slot());
        assert_ne!(task, copy);
    }

    #[test]
    fn test_labels() {
        let task = gym();
        assert_eq!(task.label(), "Gym(0/5)");
        assert_eq!(task.panel_id(), "09:00_Gym");
        assert_eq!(task.slot().to_string(), "Monday 09:00");
    }

    #[test]
    fn test_json_shape() {
        let task = gym().with_done(true);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "taskName": "Gym",
                "description": "",
                "time": "09:00",
                "isDone": true,
                "weekday": "MONDAY",
                "priority": 5
            })
        );

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time(" 07:30 ").unwrap(), at(7, 30));
        assert!(parse_time("7.30").is_err());
        assert!(parse_time("25:00").is_err());
    }
}
