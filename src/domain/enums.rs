use super::errors::PlannerError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week a task is scheduled on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in calendar order, Monday first
    pub fn all() -> &'static [Weekday; 7] {
        &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    }

    /// Zero-based position (Monday = 0), also the column index in the week grid minus one
    pub fn position(&self) -> usize {
        match self {
            Self::Monday => 0,
            Self::Tuesday => 1,
            Self::Wednesday => 2,
            Self::Thursday => 3,
            Self::Friday => 4,
            Self::Saturday => 5,
            Self::Sunday => 6,
        }
    }

    pub fn from_position(position: usize) -> Option<Self> {
        Self::all().get(position).copied()
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Following weekday, wrapping Sunday back to Monday
    pub fn next(&self) -> Self {
        Self::all()[(self.position() + 1) % 7]
    }

    /// Preceding weekday, wrapping Monday back to Sunday
    pub fn previous(&self) -> Self {
        Self::all()[(self.position() + 6) % 7]
    }

    /// Weekday of the local clock
    pub fn today() -> Self {
        Self::from(chrono::Local::now().weekday())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = PlannerError;

    /// Accepts full names or three-letter abbreviations, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|day| {
                let name = day.name().to_lowercase();
                name == wanted || name[..3] == wanted
            })
            .ok_or_else(|| PlannerError::Validation(format!("unknown weekday `{}`", s.trim())))
    }
}

/// Which main pane is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Weekly grid of all tasks
    Grid,
    /// Full list for one weekday
    Day,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    TaskForm,
    Cleaner,
    Alert, // Blocking notice, any key dismisses
}
