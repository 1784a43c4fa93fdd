use super::schedule::ScheduleStore;
use super::store::TaskStore;
use crate::domain::{PlannerError, StoreKind, Task, Weekday};
use chrono::NaiveTime;

/// Card shown for one task in the full-day view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPanel {
    /// `HH:MM_name`
    pub id: String,
    pub time: NaiveTime,
    pub label: String,
    pub description: String,
    pub done: bool,
}

impl TaskPanel {
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.panel_id(),
            time: task.time,
            label: task.label(),
            description: task.description.clone(),
            done: task.done,
        }
    }
}

/// Per-weekday ordered lists of task panels
#[derive(Debug, Clone, Default)]
pub struct WeekdayPlanner {
    days: [Vec<TaskPanel>; 7],
}

impl WeekdayPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_schedule(schedule: &ScheduleStore) -> Self {
        let mut planner = Self::new();
        for task in schedule.iter() {
            let _ = planner.add_task(task);
        }
        planner
    }

    /// Panels of one weekday, earliest first
    pub fn panels(&self, weekday: Weekday) -> &[TaskPanel] {
        &self.days[weekday.position()]
    }

    fn panels_mut(&mut self, weekday: Weekday) -> &mut Vec<TaskPanel> {
        &mut self.days[weekday.position()]
    }

    fn find(&self, weekday: Weekday, id: &str) -> Option<usize> {
        self.panels(weekday).iter().position(|panel| panel.id == id)
    }

    fn has_time(&self, weekday: Weekday, time: NaiveTime) -> bool {
        self.panels(weekday).iter().any(|panel| panel.time == time)
    }

    /// Panel exists and shows exactly this task
    pub fn is_task_in_weekday_planner(&self, task: &Task) -> bool {
        let expected = TaskPanel::from_task(task);
        self.find(task.weekday, &expected.id)
            .map(|index| self.panels(task.weekday)[index] == expected)
            .unwrap_or(false)
    }

    fn insert_sorted(&mut self, weekday: Weekday, panel: TaskPanel) {
        let panels = self.panels_mut(weekday);
        let at = panels.partition_point(|existing| existing.time <= panel.time);
        panels.insert(at, panel);
    }
}

impl TaskStore for WeekdayPlanner {
    fn add_task(&mut self, task: &Task) -> Result<(), PlannerError> {
        let panel = TaskPanel::from_task(task);
        if self.find(task.weekday, &panel.id).is_some() {
            return Err(PlannerError::conflict(StoreKind::WeekdayPlanner, task.slot(), "panel id already present"));
        }
        if self.has_time(task.weekday, task.time) {
            return Err(PlannerError::conflict(StoreKind::WeekdayPlanner, task.slot(), "time already taken"));
        }
        self.insert_sorted(task.weekday, panel);
        Ok(())
    }

    fn delete_task(&mut self, task: &Task) -> Result<(), PlannerError> {
        let index = self
            .find(task.weekday, &task.panel_id())
            .ok_or_else(|| PlannerError::conflict(StoreKind::WeekdayPlanner, task.slot(), "no panel for this task"))?;
        self.panels_mut(task.weekday).remove(index);
        Ok(())
    }

    fn edit_task(&mut self, original: &Task, edited: &Task) -> Result<(), PlannerError> {
        if original == edited {
            return Err(PlannerError::conflict(StoreKind::WeekdayPlanner, original.slot(), "edit changes nothing"));
        }
        let index = self
            .find(original.weekday, &original.panel_id())
            .ok_or_else(|| PlannerError::conflict(StoreKind::WeekdayPlanner, original.slot(), "no panel for this task"))?;
        if edited.slot() != original.slot() && self.has_time(edited.weekday, edited.time) {
            return Err(PlannerError::conflict(StoreKind::WeekdayPlanner, edited.slot(), "time already taken"));
        }

        self.panels_mut(original.weekday).remove(index);
        self.insert_sorted(edited.weekday, TaskPanel::from_task(edited));
        Ok(())
    }

    fn contains(&self, task: &Task) -> bool {
        self.is_task_in_weekday_planner(task)
    }

    fn task_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}
