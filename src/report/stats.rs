use crate::domain::{earned_points, possible_points, Weekday};
use crate::planner::ScheduleStore;

/// Points for one weekday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStats {
    pub weekday: Weekday,
    pub tasks: usize,
    pub done: usize,
    pub earned: u32,
    pub possible: u32,
}

/// Points for the whole week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekStats {
    pub days: Vec<DayStats>,
    pub earned: u32,
    pub possible: u32,
}

impl WeekStats {
    /// Share of possible points achieved, 0 when nothing is scheduled
    pub fn completion_percent(&self) -> f64 {
        if self.possible == 0 {
            0.0
        } else {
            f64::from(self.earned) / f64::from(self.possible) * 100.0
        }
    }
}

pub fn calculate_day_stats(schedule: &ScheduleStore, weekday: Weekday) -> DayStats {
    let tasks = schedule.tasks_for(weekday);
    DayStats {
        weekday,
        tasks: tasks.len(),
        done: tasks.iter().filter(|task| task.done).count(),
        earned: schedule.count_points(weekday, Some(earned_points)),
        possible: schedule.count_points(weekday, Some(possible_points)),
    }
}

pub fn calculate_week_stats(schedule: &ScheduleStore) -> WeekStats {
    let days: Vec<DayStats> = Weekday::all()
        .iter()
        .map(|weekday| calculate_day_stats(schedule, *weekday))
        .collect();

    WeekStats {
        earned: days.iter().map(|day| day.earned).sum(),
        possible: days.iter().map(|day| day.possible).sum(),
        days,
    }
}
