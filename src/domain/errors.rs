use super::task::Slot;
use std::fmt;
use thiserror::Error;

/// The three in-memory representations of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Canonical weekday -> time -> task map
    Schedule,
    /// Weekly table shown on the main screen
    Grid,
    /// Per-weekday ordered task panels
    WeekdayPlanner,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Schedule => "schedule",
            Self::Grid => "grid",
            Self::WeekdayPlanner => "weekday-planner",
        };
        f.write_str(name)
    }
}

/// Failure taxonomy for planner operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// Argument rejected before any store was touched
    #[error("invalid task: {0}")]
    Validation(String),

    /// The owning store refused the change and did not mutate
    #[error("{store} rejected {slot}: {reason}")]
    Conflict {
        store: StoreKind,
        slot: Slot,
        reason: &'static str,
    },

    /// Undoing an already-applied step failed; stores may now disagree
    #[error("rollback step `{step}` failed: {source}")]
    Compensation {
        step: String,
        source: Box<PlannerError>,
    },
}

impl PlannerError {
    pub fn conflict(store: StoreKind, slot: Slot, reason: &'static str) -> Self {
        Self::Conflict { store, slot, reason }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Weekday;
    use chrono::NaiveTime;

    #[test]
    fn test_conflict_message() {
        let slot = Slot::new(Weekday::Monday, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        let err = PlannerError::conflict(StoreKind::Grid, slot, "cell occupied");
        assert_eq!(err.to_string(), "grid rejected Monday 09:00: cell occupied");
        assert!(err.is_conflict());
    }

    #[test]
    fn test_compensation_keeps_source() {
        let inner = PlannerError::Validation("empty name".to_string());
        let err = PlannerError::Compensation {
            step: "schedule.delete".to_string(),
            source: Box::new(inner.clone()),
        };
        assert!(err.to_string().contains("schedule.delete"));
        assert!(err.to_string().contains("empty name"));
        assert!(!err.is_conflict());
    }
}
