use super::grid::GridProjection;
use super::saga::{self, SagaReport, Step};
use super::schedule::{ScheduleMap, ScheduleStore};
use super::store::TaskStore;
use super::weekday::WeekdayPlanner;
use crate::domain::{PlannerError, StoreKind, Task, Weekday};
use chrono::NaiveTime;
use log::{error, info, warn};

/// Store order for adds and deletes
const ADD_ORDER: [StoreKind; 3] = [StoreKind::Schedule, StoreKind::Grid, StoreKind::WeekdayPlanner];
const DELETE_ORDER: [StoreKind; 3] = ADD_ORDER;
/// Store order for edits
const EDIT_ORDER: [StoreKind; 3] = [StoreKind::Schedule, StoreKind::WeekdayPlanner, StoreKind::Grid];

/// A single-task change requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Add(Task),
    Edit { original: Task, edited: Task },
}

/// The three representations of the schedule
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub schedule: ScheduleStore,
    pub grid: GridProjection,
    pub days: WeekdayPlanner,
}

/// Lookup of the three stores by kind, as the sagas address them
pub trait StoreSet {
    fn store(&self, kind: StoreKind) -> &dyn TaskStore;
    fn store_mut(&mut self, kind: StoreKind) -> &mut dyn TaskStore;
}

impl StoreSet for Stores {
    fn store(&self, kind: StoreKind) -> &dyn TaskStore {
        match kind {
            StoreKind::Schedule => &self.schedule,
            StoreKind::Grid => &self.grid,
            StoreKind::WeekdayPlanner => &self.days,
        }
    }

    fn store_mut(&mut self, kind: StoreKind) -> &mut dyn TaskStore {
        match kind {
            StoreKind::Schedule => &mut self.schedule,
            StoreKind::Grid => &mut self.grid,
            StoreKind::WeekdayPlanner => &mut self.days,
        }
    }
}

/// Single writer for the three stores
///
/// Every mutation runs as a saga over the stores in a fixed order. Whatever
/// the saga reports, the boolean handed back to callers comes from checking
/// membership in all three stores afterwards. Rollback steps that fail are
/// turned into alerts for the user.
#[derive(Debug, Default)]
pub struct Coordinator<S = Stores> {
    stores: S,
    alerts: Vec<String>,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded schedule and derive both projections from it
    pub fn from_schedule(schedule: ScheduleStore) -> Self {
        let grid = GridProjection::from_schedule(&schedule);
        let days = WeekdayPlanner::from_schedule(&schedule);
        info!(
            "event=coordinator_init tasks={} times={}",
            schedule.len(),
            schedule.collect_sorted_times().len()
        );
        Self::with_stores(Stores { schedule, grid, days })
    }

    pub fn from_map(map: ScheduleMap) -> Self {
        Self::from_schedule(ScheduleStore::from_map(map))
    }

    pub fn schedule(&self) -> &ScheduleStore {
        &self.stores.schedule
    }

    pub fn grid(&self) -> &GridProjection {
        &self.stores.grid
    }

    pub fn weekday_planner(&self) -> &WeekdayPlanner {
        &self.stores.days
    }

    #[cfg(test)]
    fn stores_mut(&mut self) -> &mut Stores {
        &mut self.stores
    }

    /// Projections hold exactly what the schedule holds
    pub fn is_consistent(&self) -> bool {
        let count = self.stores.schedule.len();
        self.stores.grid.task_count() == count
            && self.stores.days.task_count() == count
            && self.stores.schedule.iter().all(|task| self.is_task_added(task))
    }

    /// Delete whatever occupies a slot
    pub fn delete_at(&mut self, weekday: Weekday, time: NaiveTime) -> bool {
        match self.stores.schedule.task_at(weekday, time).cloned() {
            Some(task) => self.delete(&task),
            None => false,
        }
    }

    /// Empty the selected weekdays without rollback
    ///
    /// Returns how many tasks were removed from the schedule.
    pub fn delete_weekdays(&mut self, weekdays: &[Weekday]) -> usize {
        let mut removed = 0;
        for weekday in weekdays {
            let tasks = self.stores.schedule.clear_weekday(*weekday);
            for task in &tasks {
                if let Err(err) = self.stores.grid.delete_task(task) {
                    warn!("event=weekday_clear store=grid status=failed reason=\"{}\"", err);
                }
                if let Err(err) = self.stores.days.delete_task(task) {
                    warn!("event=weekday_clear store=weekday-planner status=failed reason=\"{}\"", err);
                }
            }
            info!("event=weekday_clear weekday={} removed={}", weekday, tasks.len());
            removed += tasks.len();
        }
        removed
    }

    /// Mark every done task of the selected weekdays as not done
    ///
    /// Each reset is an ordinary edit. Returns how many edits succeeded.
    pub fn reset_points(&mut self, weekdays: &[Weekday]) -> usize {
        let mut reset = 0;
        for weekday in weekdays {
            for task in self.stores.schedule.tasks_for(*weekday) {
                if task.done && self.edit(&task, &task.with_done(false)) {
                    reset += 1;
                }
            }
        }
        info!("event=points_reset weekdays={} reset={}", weekdays.len(), reset);
        reset
    }
}

impl<S: StoreSet + 'static> Coordinator<S> {
    pub fn with_stores(stores: S) -> Self {
        Self {
            stores,
            alerts: Vec::new(),
        }
    }

    /// Alerts raised since the last call
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn apply(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::Add(task) => self.add(&task),
            Mutation::Edit { original, edited } => self.edit(&original, &edited),
        }
    }

    /// Present in every store
    pub fn is_task_added(&self, task: &Task) -> bool {
        ADD_ORDER.iter().all(|kind| self.stores.store(*kind).contains(task))
    }

    /// `edited` is in every store and `original` is gone from them
    ///
    /// When the slot is unchanged the projections may render both versions
    /// identically, so only the schedule can tell them apart.
    pub fn is_task_edited(&self, original: &Task, edited: &Task) -> bool {
        if !self.is_task_added(edited) || self.stores.store(StoreKind::Schedule).contains(original) {
            return false;
        }
        original.slot() == edited.slot()
            || (!self.stores.store(StoreKind::Grid).contains(original)
                && !self.stores.store(StoreKind::WeekdayPlanner).contains(original))
    }

    fn is_task_absent(&self, task: &Task) -> bool {
        DELETE_ORDER.iter().all(|kind| !self.stores.store(*kind).contains(task))
    }

    /// Add a task to every store
    ///
    /// Adding a task that is already fully present reports success.
    pub fn add(&mut self, task: &Task) -> bool {
        if let Err(err) = task.validate() {
            warn!("event=task_add status=rejected reason=\"{}\"", err);
            return false;
        }

        let steps = ADD_ORDER
            .iter()
            .map(|kind| {
                let kind = *kind;
                let (forward, backward) = (task.clone(), task.clone());
                Step::new(
                    format!("add to {}", kind),
                    move |stores: &mut S| stores.store_mut(kind).add_task(&forward),
                    move |stores: &mut S| stores.store_mut(kind).delete_task(&backward),
                )
            })
            .collect();

        let report = saga::run(&mut self.stores, steps);
        self.record("task_add", &task.slot().to_string(), report);
        self.is_task_added(task)
    }

    /// Replace `original` with `edited` in every store
    pub fn edit(&mut self, original: &Task, edited: &Task) -> bool {
        if original == edited {
            warn!("event=task_edit status=rejected reason=\"edit changes nothing\"");
            return false;
        }
        if let Err(err) = original.validate().and_then(|_| edited.validate()) {
            warn!("event=task_edit status=rejected reason=\"{}\"", err);
            return false;
        }

        let steps = EDIT_ORDER
            .iter()
            .map(|kind| {
                let kind = *kind;
                let (from, to) = (original.clone(), edited.clone());
                Step::new(
                    format!("edit in {}", kind),
                    move |stores: &mut S| stores.store_mut(kind).edit_task(&from, &to),
                    {
                        let (from, to) = (original.clone(), edited.clone());
                        move |stores: &mut S| stores.store_mut(kind).edit_task(&to, &from)
                    },
                )
            })
            .collect();

        let report = saga::run(&mut self.stores, steps);
        self.record("task_edit", &format!("{} -> {}", original.slot(), edited.slot()), report);
        self.is_task_edited(original, edited)
    }

    /// Remove a task from every store
    ///
    /// Succeeds only when the task was there to remove.
    pub fn delete(&mut self, task: &Task) -> bool {
        let steps = DELETE_ORDER
            .iter()
            .map(|kind| {
                let kind = *kind;
                let (forward, backward) = (task.clone(), task.clone());
                Step::new(
                    format!("delete from {}", kind),
                    move |stores: &mut S| stores.store_mut(kind).delete_task(&forward),
                    move |stores: &mut S| stores.store_mut(kind).add_task(&backward),
                )
            })
            .collect();

        let report = saga::run(&mut self.stores, steps);
        let committed = report.is_committed();
        self.record("task_delete", &task.slot().to_string(), report);
        committed && self.is_task_absent(task)
    }

    fn record(&mut self, operation: &str, target: &str, report: SagaReport) {
        match &report.failed_step {
            None => info!("event={} target=\"{}\" status=committed", operation, target),
            Some((step, err)) => info!(
                "event={} target=\"{}\" status=rolled_back step=\"{}\" reason=\"{}\"",
                operation, target, step, err
            ),
        }
        if !report.has_double_fault() {
            return;
        }
        for failure in report.compensation_failures {
            error!("event={} target=\"{}\" status=double_fault reason=\"{}\"", operation, target, failure);
            self.alerts.push(alert_text(target, &failure));
        }
    }
}

fn alert_text(target: &str, failure: &PlannerError) -> String {
    format!(
        "Could not undo a partial change to {}. The views may be out of sync with the schedule: {}",
        target, failure
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::saga::SagaState;
    use pretty_assertions::assert_eq;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn gym() -> Task {
        Task::new("Gym", "", at(9, 0), Weekday::Monday, 5, false).unwrap()
    }

    fn task(name: &str, weekday: Weekday, h: u32, priority: u8, done: bool) -> Task {
        Task::new(name, "", at(h, 0), weekday, priority, done).unwrap()
    }

    fn monday_col() -> usize {
        Weekday::Monday.position() + 1
    }

    fn tuesday_col() -> usize {
        Weekday::Tuesday.position() + 1
    }

    #[test]
    fn test_add_updates_all_stores() {
        let mut coordinator = Coordinator::new();
        assert!(coordinator.add(&gym()));

        assert_eq!(coordinator.schedule().tasks_for(Weekday::Monday), vec![gym()]);
        assert_eq!(coordinator.grid().value_at(1, 0).unwrap(), "09:00");
        assert_eq!(coordinator.grid().value_at(1, monday_col()).unwrap(), "Gym(0/5)");
        let panels = coordinator.weekday_planner().panels(Weekday::Monday);
        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].id, "09:00_Gym");
        assert!(coordinator.is_consistent());
    }

    #[test]
    fn test_edit_moves_task_to_tuesday_done() {
        let mut coordinator = Coordinator::new();
        let original = gym();
        coordinator.add(&original);

        let mut edited = original.with_done(true);
        edited.weekday = Weekday::Tuesday;
        assert!(coordinator.edit(&original, &edited));

        assert!(coordinator.schedule().tasks_for(Weekday::Monday).is_empty());
        assert_eq!(coordinator.schedule().tasks_for(Weekday::Tuesday), vec![edited.clone()]);

        let grid = coordinator.grid();
        assert_eq!(grid.value_at(1, monday_col()).unwrap(), "-");
        assert_eq!(grid.value_at(1, tuesday_col()).unwrap(), "Gym(5/5)");
        assert!(grid.cell(1, tuesday_col()).unwrap().is_done());

        let days = coordinator.weekday_planner();
        assert!(days.panels(Weekday::Monday).is_empty());
        assert_eq!(days.panels(Weekday::Tuesday)[0].id, "09:00_Gym");
        assert!(coordinator.is_consistent());
    }

    #[test]
    fn test_add_to_occupied_slot_touches_nothing() {
        let mut coordinator = Coordinator::new();
        coordinator.add(&gym());

        let rival = task("Read", Weekday::Monday, 9, 2, false);
        assert!(!coordinator.add(&rival));

        assert!(!coordinator.schedule().contains(&rival));
        assert_eq!(coordinator.grid().value_at(1, monday_col()).unwrap(), "Gym(0/5)");
        assert_eq!(coordinator.weekday_planner().panels(Weekday::Monday).len(), 1);
        assert!(coordinator.is_consistent());
        assert!(coordinator.take_alerts().is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut coordinator = Coordinator::new();
        assert!(coordinator.add(&gym()));
        assert!(coordinator.add(&gym()));
        assert_eq!(coordinator.schedule().len(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_task() {
        let mut coordinator = Coordinator::new();
        let mut broken = gym();
        broken.priority = 0;
        assert!(!coordinator.add(&broken));
        assert!(coordinator.schedule().is_empty());
    }

    #[test]
    fn test_add_rejects_padded_name() {
        let mut coordinator = Coordinator::new();
        let mut padded = gym();
        padded.name = " Gym".to_string();

        assert!(!coordinator.add(&padded));
        assert!(coordinator.weekday_planner().panels(Weekday::Monday).is_empty());
    }

    #[test]
    fn test_no_op_edit_is_rejected() {
        let mut coordinator = Coordinator::new();
        coordinator.add(&gym());

        assert!(!coordinator.edit(&gym(), &gym()));
        assert_eq!(coordinator.schedule().tasks_for(Weekday::Monday), vec![gym()]);
        assert!(coordinator.is_consistent());
    }

    #[test]
    fn test_grid_refusal_rolls_back_schedule() {
        let mut coordinator = Coordinator::new();
        // Stale cell left in the grid only
        let stale = task("Stale", Weekday::Monday, 9, 1, false);
        coordinator.stores_mut().grid.add_task(&stale).unwrap();

        assert!(!coordinator.add(&gym()));
        assert!(!coordinator.schedule().contains(&gym()));
        assert!(!coordinator.weekday_planner().contains(&gym()));
        assert!(coordinator.take_alerts().is_empty());
    }

    #[test]
    fn test_grid_refusal_rolls_back_edit() {
        let mut coordinator = Coordinator::new();
        let original = gym();
        coordinator.add(&original);
        let blocker = task("Blocker", Weekday::Tuesday, 9, 1, false);
        coordinator.stores_mut().grid.add_task(&blocker).unwrap();

        let mut edited = original.clone();
        edited.weekday = Weekday::Tuesday;
        assert!(!coordinator.edit(&original, &edited));

        assert!(coordinator.schedule().contains(&original));
        assert!(coordinator.weekday_planner().contains(&original));
        assert!(coordinator.grid().contains(&original));
        assert!(!coordinator.weekday_planner().contains(&edited));
    }

    #[test]
    fn test_delete() {
        let mut coordinator = Coordinator::new();
        coordinator.add(&gym());

        assert!(coordinator.delete(&gym()));
        assert!(coordinator.schedule().is_empty());
        assert_eq!(coordinator.grid().row_count(), 2);
        assert!(coordinator.weekday_planner().panels(Weekday::Monday).is_empty());

        // Nothing to remove
        assert!(!coordinator.delete(&gym()));
    }

    #[test]
    fn test_delete_at() {
        let mut coordinator = Coordinator::new();
        coordinator.add(&gym());

        assert!(!coordinator.delete_at(Weekday::Monday, at(10, 0)));
        assert!(coordinator.delete_at(Weekday::Monday, at(9, 0)));
        assert!(coordinator.schedule().is_empty());
    }

    #[test]
    fn test_delete_rolls_back_when_projection_is_stale() {
        let mut coordinator = Coordinator::new();
        coordinator.add(&gym());
        coordinator.stores_mut().days.delete_task(&gym()).unwrap();

        assert!(!coordinator.delete(&gym()));
        assert!(coordinator.schedule().contains(&gym()));
        assert!(coordinator.grid().contains(&gym()));
    }

    #[test]
    fn test_delete_weekdays() {
        let mut coordinator = Coordinator::new();
        coordinator.add(&task("A", Weekday::Monday, 8, 1, false));
        coordinator.add(&task("B", Weekday::Monday, 9, 1, true));
        coordinator.add(&task("C", Weekday::Wednesday, 9, 1, false));

        assert_eq!(coordinator.delete_weekdays(&[Weekday::Monday, Weekday::Friday]), 2);
        assert_eq!(coordinator.schedule().len(), 1);
        assert_eq!(coordinator.grid().times(), vec![at(9, 0)]);
        assert!(coordinator.is_consistent());
    }

    #[test]
    fn test_reset_points_only_touches_selected_weekdays() {
        let mut coordinator = Coordinator::new();
        coordinator.add(&task("A", Weekday::Monday, 8, 3, true));
        coordinator.add(&task("B", Weekday::Monday, 9, 4, true));
        coordinator.add(&task("C", Weekday::Tuesday, 9, 2, true));

        assert_eq!(coordinator.reset_points(&[Weekday::Monday]), 2);

        assert!(coordinator.schedule().tasks_for(Weekday::Monday).iter().all(|t| !t.done));
        assert!(coordinator.schedule().tasks_for(Weekday::Tuesday)[0].done);
        assert_eq!(coordinator.grid().summary(Weekday::Monday), (0, 7));
        assert_eq!(coordinator.grid().summary(Weekday::Tuesday), (2, 2));
        assert!(coordinator.weekday_planner().panels(Weekday::Monday).iter().all(|p| !p.done));
        assert!(coordinator.is_consistent());
    }

    #[test]
    fn test_apply_dispatches_mutations() {
        let mut coordinator = Coordinator::new();
        assert!(coordinator.apply(Mutation::Add(gym())));
        assert!(coordinator.apply(Mutation::Edit {
            original: gym(),
            edited: gym().with_done(true),
        }));
        assert_eq!(coordinator.grid().summary(Weekday::Monday), (5, 5));
    }

    #[test]
    fn test_double_fault_raises_alert() {
        let mut coordinator = Coordinator::new();
        let failure = PlannerError::Compensation {
            step: "add to grid".to_string(),
            source: Box::new(PlannerError::conflict(StoreKind::Grid, gym().slot(), "cell already empty")),
        };
        let report = SagaReport {
            state: SagaState::RolledBack,
            failed_step: None,
            compensation_failures: vec![failure],
        };

        coordinator.record("task_add", "Monday 09:00", report);

        let alerts = coordinator.take_alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("Monday 09:00"));
        assert!(coordinator.take_alerts().is_empty());
    }

    /// Passes everything through, except deletes once `refuse` is set
    #[derive(Debug, Default)]
    struct RefusingDeletes<T> {
        inner: T,
        refuse: bool,
    }

    impl<T: TaskStore> TaskStore for RefusingDeletes<T> {
        fn add_task(&mut self, task: &Task) -> Result<(), PlannerError> {
            self.inner.add_task(task)
        }

        fn delete_task(&mut self, task: &Task) -> Result<(), PlannerError> {
            if self.refuse {
                return Err(PlannerError::conflict(StoreKind::Grid, task.slot(), "delete refused"));
            }
            self.inner.delete_task(task)
        }

        fn edit_task(&mut self, original: &Task, edited: &Task) -> Result<(), PlannerError> {
            self.inner.edit_task(original, edited)
        }

        fn contains(&self, task: &Task) -> bool {
            self.inner.contains(task)
        }

        fn task_count(&self) -> usize {
            self.inner.task_count()
        }
    }

    #[derive(Debug, Default)]
    struct StuckGridStores {
        schedule: ScheduleStore,
        grid: RefusingDeletes<GridProjection>,
        days: WeekdayPlanner,
    }

    impl StoreSet for StuckGridStores {
        fn store(&self, kind: StoreKind) -> &dyn TaskStore {
            match kind {
                StoreKind::Schedule => &self.schedule,
                StoreKind::Grid => &self.grid,
                StoreKind::WeekdayPlanner => &self.days,
            }
        }

        fn store_mut(&mut self, kind: StoreKind) -> &mut dyn TaskStore {
            match kind {
                StoreKind::Schedule => &mut self.schedule,
                StoreKind::Grid => &mut self.grid,
                StoreKind::WeekdayPlanner => &mut self.days,
            }
        }
    }

    #[test]
    fn test_failed_rollback_of_add_raises_alert() {
        let mut stores = StuckGridStores::default();
        stores.grid.refuse = true;
        // The day list already has a panel at 09:00, so the last step fails
        stores.days.add_task(&task("Stale", Weekday::Monday, 9, 1, false)).unwrap();
        let mut coordinator = Coordinator::with_stores(stores);

        assert!(!coordinator.add(&gym()));

        // Schedule was rolled back, the grid could not be
        assert!(!coordinator.stores.schedule.contains(&gym()));
        assert!(coordinator.stores.grid.contains(&gym()));

        let alerts = coordinator.take_alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("Monday 09:00"));
        assert!(coordinator.take_alerts().is_empty());
    }

    #[test]
    fn test_clean_rollback_raises_no_alert() {
        let mut stores = StuckGridStores::default();
        stores.days.add_task(&task("Stale", Weekday::Monday, 9, 1, false)).unwrap();
        let mut coordinator = Coordinator::with_stores(stores);

        assert!(!coordinator.add(&gym()));
        assert!(!coordinator.stores.grid.contains(&gym()));
        assert!(coordinator.take_alerts().is_empty());
    }

    #[test]
    fn test_from_map_builds_projections() {
        let mut map = ScheduleMap::new();
        map.entry(Weekday::Monday).or_default().insert(at(9, 0), gym());
        map.entry(Weekday::Friday)
            .or_default()
            .insert(at(18, 0), task("Run", Weekday::Friday, 18, 3, true));

        let coordinator = Coordinator::from_map(map);
        assert_eq!(coordinator.schedule().len(), 2);
        assert_eq!(coordinator.grid().row_count(), 4);
        assert!(coordinator.is_consistent());
    }
}
