use super::store::TaskStore;
use crate::domain::{PlannerError, PointSelector, Slot, StoreKind, Task, Weekday};
use chrono::NaiveTime;
use log::warn;
use std::collections::{BTreeMap, BTreeSet};

/// Weekday -> time -> task, as loaded from and saved to disk
pub type ScheduleMap = BTreeMap<Weekday, BTreeMap<NaiveTime, Task>>;

/// Canonical mapping from slot to task; the source of truth
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    /// One bucket per weekday, indexed by `Weekday::position`
    days: [BTreeMap<NaiveTime, Task>; 7],
}

impl ScheduleStore {
    /// Empty schedule with a bucket for every weekday
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a loaded map, re-keying every task by its own slot
    ///
    /// Tasks that fail validation or collide with an earlier task are skipped.
    pub fn from_map(map: ScheduleMap) -> Self {
        Self::from_tasks(map.into_values().flat_map(|bucket| bucket.into_values()))
    }

    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut store = Self::new();
        for mut task in tasks {
            task.name = task.name.trim().to_string();
            if let Err(err) = task.validate() {
                warn!("event=schedule_load status=skipped reason=\"{}\"", err);
                continue;
            }
            if let Err(err) = store.add_task(&task) {
                warn!("event=schedule_load status=skipped reason=\"{}\"", err);
            }
        }
        store
    }

    /// Snapshot in the persisted shape; every weekday is present
    pub fn as_map(&self) -> ScheduleMap {
        Weekday::all()
            .iter()
            .map(|day| (*day, self.bucket(*day).clone()))
            .collect()
    }

    fn bucket(&self, weekday: Weekday) -> &BTreeMap<NaiveTime, Task> {
        &self.days[weekday.position()]
    }

    fn bucket_mut(&mut self, weekday: Weekday) -> &mut BTreeMap<NaiveTime, Task> {
        &mut self.days[weekday.position()]
    }

    fn is_slot_occupied(&self, slot: Slot) -> bool {
        self.bucket(slot.weekday).contains_key(&slot.time)
    }

    /// Task occupying a slot, if any
    pub fn task_at(&self, weekday: Weekday, time: NaiveTime) -> Option<&Task> {
        self.bucket(weekday).get(&time)
    }

    /// Tasks of one weekday in time order
    pub fn tasks_for(&self, weekday: Weekday) -> Vec<Task> {
        self.bucket(weekday).values().cloned().collect()
    }

    /// Empty one weekday's bucket directly, returning what it held
    pub fn clear_weekday(&mut self, weekday: Weekday) -> Vec<Task> {
        std::mem::take(self.bucket_mut(weekday)).into_values().collect()
    }

    /// All tasks, Monday first, each day in time order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.days.iter().flat_map(|bucket| bucket.values())
    }

    /// Every distinct time used on any weekday, ascending
    pub fn collect_sorted_times(&self) -> BTreeSet<NaiveTime> {
        self.days
            .iter()
            .flat_map(|bucket| bucket.keys().copied())
            .collect()
    }

    /// Sum a per-task metric over one weekday; 0 when no selector is given
    pub fn count_points(&self, weekday: Weekday, selector: Option<PointSelector>) -> u32 {
        match selector {
            Some(select) => self.bucket(weekday).values().map(select).sum(),
            None => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.days.iter().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TaskStore for ScheduleStore {
    fn add_task(&mut self, task: &Task) -> Result<(), PlannerError> {
        let slot = task.slot();
        if self.is_slot_occupied(slot) {
            return Err(PlannerError::conflict(StoreKind::Schedule, slot, "slot already occupied"));
        }
        self.bucket_mut(slot.weekday).insert(slot.time, task.clone());
        Ok(())
    }

    /// Succeeds only when a removal actually happened
    fn delete_task(&mut self, task: &Task) -> Result<(), PlannerError> {
        let slot = task.slot();
        if !self.contains(task) {
            return Err(PlannerError::conflict(StoreKind::Schedule, slot, "task not in schedule"));
        }
        self.bucket_mut(slot.weekday).remove(&slot.time);
        Ok(())
    }

    fn edit_task(&mut self, original: &Task, edited: &Task) -> Result<(), PlannerError> {
        if original == edited {
            return Err(PlannerError::conflict(StoreKind::Schedule, original.slot(), "edit changes nothing"));
        }
        if !self.contains(original) {
            return Err(PlannerError::conflict(StoreKind::Schedule, original.slot(), "task not in schedule"));
        }
        if edited.slot() != original.slot() && self.is_slot_occupied(edited.slot()) {
            return Err(PlannerError::conflict(StoreKind::Schedule, edited.slot(), "slot already occupied"));
        }

        self.bucket_mut(original.weekday).remove(&original.time);
        self.bucket_mut(edited.weekday).insert(edited.time, edited.clone());
        Ok(())
    }

    fn contains(&self, task: &Task) -> bool {
        self.task_at(task.weekday, task.time) == Some(task)
    }

    fn task_count(&self) -> usize {
        self.len()
    }
}
