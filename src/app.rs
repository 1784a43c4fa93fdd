use crate::config::Config;
use crate::domain::{parse_time, PlannerError, Task, UiMode, View, Weekday, MAX_PRIORITY, MIN_PRIORITY};
use crate::persistence::{ScheduleRepository, TaskNamesRepository};
use crate::planner::{Coordinator, Mutation, TaskNames};
use anyhow::Result;
use chrono::{Local, NaiveTime, Timelike};
use log::{error, info, warn};
use std::path::Path;

/// Whether the form creates a task or replaces an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Adding,
    Editing(Task),
}

/// Field with keyboard focus in the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Time,
    Weekday,
    Priority,
    Done,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Description,
        FormField::Time,
        FormField::Weekday,
        FormField::Priority,
        FormField::Done,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Time => "Time (HH:MM)",
            FormField::Weekday => "Weekday",
            FormField::Priority => "Priority",
            FormField::Done => "Done",
        }
    }
}

/// Editable copy of a task
///
/// The stored task is never touched while the user types; submitting builds
/// a fresh `Task` from these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    pub mode: FormMode,
    pub name: String,
    pub description: String,
    pub time: String,
    pub weekday: Weekday,
    pub priority: u8,
    pub done: bool,
    pub field: FormField,
    pub error: Option<String>,
}

impl TaskForm {
    pub fn adding(weekday: Weekday, time: Option<NaiveTime>) -> Self {
        Self {
            mode: FormMode::Adding,
            name: String::new(),
            description: String::new(),
            time: time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default(),
            weekday,
            priority: MIN_PRIORITY,
            done: false,
            field: FormField::Name,
            error: None,
        }
    }

    pub fn editing(task: &Task) -> Self {
        Self {
            mode: FormMode::Editing(task.clone()),
            name: task.name.clone(),
            description: task.description.clone(),
            time: task.time_label(),
            weekday: task.weekday,
            priority: task.priority,
            done: task.done,
            field: FormField::Name,
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Adding => " Add Task ",
            FormMode::Editing(_) => " Edit Task ",
        }
    }

    pub fn build_task(&self) -> Result<Task, PlannerError> {
        let time = parse_time(&self.time)?;
        Task::new(
            self.name.as_str(),
            self.description.as_str(),
            time,
            self.weekday,
            self.priority,
            self.done,
        )
    }

    pub fn to_mutation(&self) -> Result<Mutation, PlannerError> {
        let task = self.build_task()?;
        Ok(match &self.mode {
            FormMode::Adding => Mutation::Add(task),
            FormMode::Editing(original) => Mutation::Edit {
                original: original.clone(),
                edited: task,
            },
        })
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn previous_field(&mut self) {
        self.field = self.field.previous();
    }

    /// Typing only reaches the text fields
    pub fn add_char(&mut self, c: char) {
        match self.field {
            FormField::Name => self.name.push(c),
            FormField::Description => self.description.push(c),
            FormField::Time => {
                if c.is_ascii_digit() || c == ':' {
                    self.time.push(c);
                }
            }
            FormField::Done if c == ' ' => self.done = !self.done,
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Time => {
                self.time.pop();
            }
            _ => {}
        }
    }

    /// Left/Right on the choice fields
    pub fn adjust(&mut self, forward: bool) {
        match self.field {
            FormField::Weekday => {
                self.weekday = if forward { self.weekday.next() } else { self.weekday.previous() };
            }
            FormField::Priority => {
                self.priority = if forward {
                    (self.priority + 1).min(MAX_PRIORITY)
                } else {
                    self.priority.saturating_sub(1).max(MIN_PRIORITY)
                };
            }
            FormField::Done => self.done = !self.done,
            _ => {}
        }
    }

    /// Drop the current name from the catalog
    pub fn forget_name(&mut self, names: &mut TaskNames) -> bool {
        let forgotten = names.remove(&self.name);
        if forgotten {
            info!("event=task_name_remove name=\"{}\"", self.name.trim());
            self.name.clear();
        }
        forgotten
    }

    /// Replace the name with the neighbouring catalog entry
    pub fn cycle_name(&mut self, names: &TaskNames, forward: bool) {
        let current = self.name.trim();
        let picked = if forward {
            names.next_after(current)
        } else {
            names.previous_before(current)
        };
        if let Some(name) = picked {
            self.name = name.to_string();
        }
    }
}

/// Weekdays picked in the cleaner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanerState {
    pub selected: [bool; 7],
}

impl CleanerState {
    pub fn toggle(&mut self, weekday: Weekday) {
        let slot = &mut self.selected[weekday.position()];
        *slot = !*slot;
    }

    /// Select everything, or clear when everything is already selected
    pub fn toggle_all(&mut self) {
        let all = self.selected.iter().all(|picked| *picked);
        self.selected = [!all; 7];
    }

    pub fn is_selected(&self, weekday: Weekday) -> bool {
        self.selected[weekday.position()]
    }

    pub fn weekdays(&self) -> Vec<Weekday> {
        Weekday::all()
            .iter()
            .copied()
            .filter(|weekday| self.is_selected(*weekday))
            .collect()
    }
}

/// Where the schedule and the name catalog are kept
#[derive(Debug, Clone)]
pub struct Storage {
    pub schedule: ScheduleRepository,
    pub names: TaskNamesRepository,
}

impl Storage {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            schedule: ScheduleRepository::in_dir(dir),
            names: TaskNamesRepository::in_dir(dir),
        }
    }
}

/// Main application state
pub struct AppState {
    pub coordinator: Coordinator,
    pub task_names: TaskNames,
    pub storage: Storage,
    pub view: View,
    pub ui_mode: UiMode,
    pub selected_weekday: Weekday,
    pub selected_row: usize,   // Time row in the grid view
    pub selected_panel: usize, // Panel in the day view
    pub form: Option<TaskForm>,
    pub cleaner: Option<CleanerState>,
    pub alerts: Vec<String>,
    pub status: Option<String>,
    pub needs_save: bool,
    pub now: NaiveTime,
    pub today: Weekday,
}

impl AppState {
    pub fn new(coordinator: Coordinator, task_names: TaskNames, storage: Storage) -> Self {
        let today = Weekday::today();
        let mut app = Self {
            coordinator,
            task_names,
            storage,
            view: View::Grid,
            ui_mode: UiMode::Normal,
            selected_weekday: today,
            selected_row: 0,
            selected_panel: 0,
            form: None,
            cleaner: None,
            alerts: Vec::new(),
            status: None,
            needs_save: false,
            now: Local::now().time(),
            today,
        };
        app.collect_alerts();
        app
    }

    /// Load both files from the data directory
    ///
    /// A file that cannot be read is reported in an alert and the planner
    /// starts without it.
    pub fn load(config: &Config) -> Self {
        let storage = Storage::in_dir(config.data_dir());
        let mut alerts = Vec::new();

        let coordinator = match storage.schedule.load() {
            Ok(map) => Coordinator::from_map(map),
            Err(err) => {
                error!("event=schedule_load status=failed reason=\"{:#}\"", err);
                alerts.push(format!("The schedule could not be read and starts empty: {:#}", err));
                Coordinator::new()
            }
        };

        let task_names = match storage.names.load() {
            Ok(names) => TaskNames::from_names(names),
            Err(err) => {
                error!("event=task_names_load status=failed reason=\"{:#}\"", err);
                alerts.push(format!("Task names could not be read: {:#}", err));
                TaskNames::new()
            }
        };

        let mut app = Self::new(coordinator, task_names, storage);
        app.push_alerts(alerts);
        app
    }

    /// Refresh the clock used to highlight the current slot
    pub fn tick(&mut self) {
        let now = Local::now();
        self.now = now.time();
        self.today = Weekday::from(chrono::Datelike::weekday(&now));
    }

    pub fn current_hour(&self) -> u32 {
        self.now.hour()
    }

    pub fn toggle_view(&mut self) {
        self.view = match self.view {
            View::Grid => View::Day,
            View::Day => View::Grid,
        };
        self.clamp_selection();
    }

    /// Time of the highlighted grid row
    pub fn selected_time(&self) -> Option<NaiveTime> {
        match self.view {
            View::Grid => self.coordinator.grid().times().get(self.selected_row).copied(),
            View::Day => self
                .coordinator
                .weekday_planner()
                .panels(self.selected_weekday)
                .get(self.selected_panel)
                .map(|panel| panel.time),
        }
    }

    /// Task under the cursor, if the cell or panel holds one
    pub fn selected_task(&self) -> Option<Task> {
        let time = self.selected_time()?;
        self.coordinator
            .schedule()
            .task_at(self.selected_weekday, time)
            .cloned()
    }

    pub fn move_selection_up(&mut self) {
        match self.view {
            View::Grid => self.selected_row = self.selected_row.saturating_sub(1),
            View::Day => self.selected_panel = self.selected_panel.saturating_sub(1),
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.view {
            View::Grid => self.selected_row += 1,
            View::Day => self.selected_panel += 1,
        }
        self.clamp_selection();
    }

    pub fn move_selection_left(&mut self) {
        self.selected_weekday = self.selected_weekday.previous();
        self.on_weekday_changed();
    }

    pub fn move_selection_right(&mut self) {
        self.selected_weekday = self.selected_weekday.next();
        self.on_weekday_changed();
    }

    fn on_weekday_changed(&mut self) {
        if self.view == View::Day {
            self.selected_panel = 0;
        }
    }

    /// Keep the cursor inside the rows that exist after a mutation
    pub fn clamp_selection(&mut self) {
        let rows = self.coordinator.grid().times().len();
        self.selected_row = self.selected_row.min(rows.saturating_sub(1));

        let panels = self
            .coordinator
            .weekday_planner()
            .panels(self.selected_weekday)
            .len();
        self.selected_panel = self.selected_panel.min(panels.saturating_sub(1));
    }

    pub fn start_add_task(&mut self) {
        self.form = Some(TaskForm::adding(self.selected_weekday, self.selected_time()));
        self.ui_mode = UiMode::TaskForm;
    }

    pub fn start_edit_task(&mut self) {
        match self.selected_task() {
            Some(task) => {
                self.form = Some(TaskForm::editing(&task));
                self.ui_mode = UiMode::TaskForm;
            }
            None => self.status = Some("Nothing to edit here".to_string()),
        }
    }

    /// Hand the form to the coordinator; the form stays open on refusal
    pub fn submit_task_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };

        let mutation = match form.to_mutation() {
            Ok(mutation) => mutation,
            Err(err) => {
                form.error = Some(err.to_string());
                return;
            }
        };

        let (task, verb) = match &mutation {
            Mutation::Add(task) => (task.clone(), "Added"),
            Mutation::Edit { edited, .. } => (edited.clone(), "Updated"),
        };

        if self.coordinator.apply(mutation) {
            if self.task_names.add(&task.name) {
                info!("event=task_name_add name=\"{}\"", task.name);
            }
            self.form = None;
            self.ui_mode = UiMode::Normal;
            self.needs_save = true;
            self.selected_weekday = task.weekday;
            self.select_time(task.time);
            self.status = Some(format!("{} {} on {}", verb, task.label(), task.slot()));
        } else if let Some(form) = self.form.as_mut() {
            form.error = Some(format!("{} is taken or nothing changed", task.slot()));
        }
        self.collect_alerts();
    }

    pub fn cancel_task_form(&mut self) {
        self.form = None;
        self.ui_mode = UiMode::Normal;
    }

    fn select_time(&mut self, time: NaiveTime) {
        match self.view {
            View::Grid => {
                if let Some(row) = self.coordinator.grid().times().iter().position(|t| *t == time) {
                    self.selected_row = row;
                }
            }
            View::Day => {
                let panels = self.coordinator.weekday_planner().panels(self.selected_weekday);
                if let Some(index) = panels.iter().position(|panel| panel.time == time) {
                    self.selected_panel = index;
                }
            }
        }
    }

    pub fn delete_selected(&mut self) {
        let (Some(task), Some(time)) = (self.selected_task(), self.selected_time()) else {
            self.status = Some("Nothing to delete here".to_string());
            return;
        };

        if self.coordinator.delete_at(self.selected_weekday, time) {
            self.needs_save = true;
            self.status = Some(format!("Deleted {} from {}", task.name, task.slot()));
        } else {
            self.status = Some(format!("Could not delete {}", task.name));
        }
        self.clamp_selection();
        self.collect_alerts();
    }

    pub fn open_cleaner(&mut self) {
        self.cleaner = Some(CleanerState::default());
        self.ui_mode = UiMode::Cleaner;
    }

    pub fn close_cleaner(&mut self) {
        self.cleaner = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn cleaner_toggle(&mut self, weekday: Weekday) {
        if let Some(cleaner) = self.cleaner.as_mut() {
            cleaner.toggle(weekday);
        }
    }

    pub fn cleaner_toggle_all(&mut self) {
        if let Some(cleaner) = self.cleaner.as_mut() {
            cleaner.toggle_all();
        }
    }

    fn cleaner_selection(&self) -> Vec<Weekday> {
        self.cleaner
            .as_ref()
            .map(CleanerState::weekdays)
            .unwrap_or_default()
    }

    /// Remove every task of the picked weekdays
    pub fn cleaner_delete(&mut self) {
        let weekdays = self.cleaner_selection();
        if weekdays.is_empty() {
            self.status = Some("Pick at least one weekday".to_string());
            return;
        }
        let removed = self.coordinator.delete_weekdays(&weekdays);
        self.needs_save |= removed > 0;
        if !self.coordinator.is_consistent() {
            warn!("event=weekday_clear status=inconsistent");
            self.push_alerts(vec![
                "Clearing left the grid or the day lists out of sync with the schedule".to_string(),
            ]);
        }
        self.status = Some(format!("Removed {} task(s)", removed));
        self.close_cleaner();
        self.clamp_selection();
        self.collect_alerts();
    }

    /// Mark every task of the picked weekdays as not done
    pub fn cleaner_reset_points(&mut self) {
        let weekdays = self.cleaner_selection();
        if weekdays.is_empty() {
            self.status = Some("Pick at least one weekday".to_string());
            return;
        }
        let reset = self.coordinator.reset_points(&weekdays);
        self.needs_save |= reset > 0;
        self.status = Some(format!("Reset points of {} task(s)", reset));
        self.close_cleaner();
        self.collect_alerts();
    }

    fn push_alerts(&mut self, alerts: Vec<String>) {
        if alerts.is_empty() {
            return;
        }
        self.alerts.extend(alerts);
        self.ui_mode = UiMode::Alert;
    }

    /// Move rollback failures from the coordinator into the alert queue
    pub fn collect_alerts(&mut self) {
        let alerts = self.coordinator.take_alerts();
        self.push_alerts(alerts);
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.first().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        if !self.alerts.is_empty() {
            self.alerts.remove(0);
        }
        if self.alerts.is_empty() {
            self.ui_mode = if self.form.is_some() { UiMode::TaskForm } else { UiMode::Normal };
        }
    }

    /// Write the schedule and the task names
    pub fn save(&mut self) -> Result<()> {
        self.storage.schedule.save(&self.coordinator.schedule().as_map())?;
        self.storage.names.save(&self.task_names)?;
        self.needs_save = false;
        Ok(())
    }

    /// Save from the keyboard; failures end up in an alert
    pub fn save_with_status(&mut self) {
        match self.save() {
            Ok(()) => self.status = Some("Saved".to_string()),
            Err(err) => {
                error!("event=save status=failed reason=\"{:#}\"", err);
                self.push_alerts(vec![format!("Saving failed: {:#}", err)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn create_test_app() -> (AppState, TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut coordinator = Coordinator::new();
        coordinator.add(&Task::new("Gym", "", at(9, 0), Weekday::Monday, 5, false).unwrap());
        coordinator.add(&Task::new("Read", "", at(21, 0), Weekday::Monday, 2, true).unwrap());

        let mut app = AppState::new(coordinator, TaskNames::new(), Storage::in_dir(temp_dir.path()));
        app.selected_weekday = Weekday::Monday;
        (app, temp_dir)
    }

    fn fill_form(app: &mut AppState, name: &str, time: &str) {
        let form = app.form.as_mut().unwrap();
        form.name = name.to_string();
        form.time = time.to_string();
    }

    #[test]
    fn test_selected_task_in_both_views() {
        let (mut app, _dir) = create_test_app();
        assert_eq!(app.selected_task().unwrap().name, "Gym");

        app.move_selection_down();
        assert_eq!(app.selected_task().unwrap().name, "Read");
        app.move_selection_down();
        assert_eq!(app.selected_row, 1);

        app.toggle_view();
        assert_eq!(app.view, View::Day);
        assert_eq!(app.selected_task().unwrap().name, "Gym");

        app.move_selection_right();
        assert_eq!(app.selected_task(), None);
    }

    #[test]
    fn test_add_task_through_form() {
        let (mut app, _dir) = create_test_app();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::TaskForm);
        fill_form(&mut app, "Swim", "07:30");

        app.submit_task_form();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.form.is_none());
        assert!(app.needs_save);
        assert!(app.task_names.contains("Swim"));
        assert_eq!(app.selected_task().unwrap().name, "Swim");
        assert!(app.coordinator.is_consistent());
    }

    #[test]
    fn test_form_stays_open_on_refusal() {
        let (mut app, _dir) = create_test_app();
        app.start_add_task();
        fill_form(&mut app, "Run", "09:00");

        app.submit_task_form();

        assert_eq!(app.ui_mode, UiMode::TaskForm);
        assert!(app.form.as_ref().unwrap().error.is_some());
        assert_eq!(app.coordinator.schedule().len(), 2);
        assert!(!app.task_names.contains("Run"));
    }

    #[test]
    fn test_form_reports_bad_time() {
        let (mut app, _dir) = create_test_app();
        app.start_add_task();
        fill_form(&mut app, "Run", "9");

        app.submit_task_form();

        let error = app.form.as_ref().unwrap().error.clone().unwrap();
        assert!(error.contains("HH:MM"));
    }

    #[test]
    fn test_edit_task_through_form() {
        let (mut app, _dir) = create_test_app();
        app.start_edit_task();
        {
            let form = app.form.as_mut().unwrap();
            assert!(matches!(form.mode, FormMode::Editing(_)));
            form.field = FormField::Weekday;
            form.adjust(true);
            form.field = FormField::Done;
            form.adjust(true);
        }

        app.submit_task_form();

        assert_eq!(app.selected_weekday, Weekday::Tuesday);
        let moved = app.selected_task().unwrap();
        assert!(moved.done);
        assert!(app.coordinator.schedule().tasks_for(Weekday::Tuesday).contains(&moved));
    }

    #[test]
    fn test_unchanged_edit_is_refused() {
        let (mut app, _dir) = create_test_app();
        app.start_edit_task();
        app.submit_task_form();
        assert_eq!(app.ui_mode, UiMode::TaskForm);
    }

    #[test]
    fn test_delete_selected() {
        let (mut app, _dir) = create_test_app();
        app.delete_selected();
        assert_eq!(app.coordinator.schedule().len(), 1);
        assert_eq!(app.selected_task().unwrap().name, "Read");
    }

    #[test]
    fn test_cleaner_reset_and_delete() {
        let (mut app, _dir) = create_test_app();
        app.open_cleaner();
        app.cleaner_toggle(Weekday::Monday);
        app.cleaner_reset_points();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.coordinator.grid().summary(Weekday::Monday), (0, 7));

        app.open_cleaner();
        app.cleaner_toggle_all();
        assert_eq!(app.cleaner.as_ref().unwrap().weekdays().len(), 7);
        app.cleaner_delete();
        assert!(app.coordinator.schedule().is_empty());
        assert_eq!(app.selected_row, 0);
    }

    #[test]
    fn test_cleaner_needs_a_weekday() {
        let (mut app, _dir) = create_test_app();
        app.open_cleaner();
        app.cleaner_delete();
        assert_eq!(app.ui_mode, UiMode::Cleaner);
        assert_eq!(app.coordinator.schedule().len(), 2);
    }

    #[test]
    fn test_alert_queue() {
        let (mut app, _dir) = create_test_app();
        app.push_alerts(vec!["first".to_string(), "second".to_string()]);
        assert_eq!(app.ui_mode, UiMode::Alert);
        assert_eq!(app.current_alert(), Some("first"));

        app.dismiss_alert();
        assert_eq!(app.current_alert(), Some("second"));
        app.dismiss_alert();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (mut app, dir) = create_test_app();
        app.task_names.add("Gym");
        app.save().unwrap();
        assert!(!app.needs_save);

        let config = Config::resolve(Some(dir.path().to_path_buf()), None).unwrap();
        let loaded = AppState::load(&config);
        assert_eq!(loaded.coordinator.schedule().len(), 2);
        assert!(loaded.task_names.contains("Gym"));
        assert!(loaded.alerts.is_empty());
    }

    #[test]
    fn test_load_reports_corrupt_schedule() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("Planner.json"), "not json").unwrap();

        let config = Config::resolve(Some(temp_dir.path().to_path_buf()), None).unwrap();
        let app = AppState::load(&config);

        assert!(app.coordinator.schedule().is_empty());
        assert_eq!(app.ui_mode, UiMode::Alert);
        assert_eq!(app.alerts.len(), 1);
    }

    #[test]
    fn test_form_field_cycle() {
        let mut form = TaskForm::adding(Weekday::Friday, None);
        for _ in 0..FormField::ALL.len() {
            form.next_field();
        }
        assert_eq!(form.field, FormField::Name);
        form.previous_field();
        assert_eq!(form.field, FormField::Done);
    }

    #[test]
    fn test_form_priority_bounds() {
        let mut form = TaskForm::adding(Weekday::Friday, None);
        form.field = FormField::Priority;
        form.adjust(false);
        assert_eq!(form.priority, MIN_PRIORITY);
        for _ in 0..20 {
            form.adjust(true);
        }
        assert_eq!(form.priority, MAX_PRIORITY);
    }

    #[test]
    fn test_form_cycles_catalog_names() {
        let names = TaskNames::from_names(["Cook".to_string(), "Gym".to_string()]);
        let mut form = TaskForm::adding(Weekday::Friday, Some(at(8, 0)));
        assert_eq!(form.time, "08:00");

        form.cycle_name(&names, true);
        assert_eq!(form.name, "Cook");
        form.cycle_name(&names, true);
        assert_eq!(form.name, "Gym");
        form.cycle_name(&names, false);
        assert_eq!(form.name, "Cook");
    }

    #[test]
    fn test_forget_name() {
        let mut names = TaskNames::from_names(["Gym".to_string()]);
        let mut form = TaskForm::adding(Weekday::Friday, None);
        form.name = "Gym".to_string();

        assert!(form.forget_name(&mut names));
        assert!(names.is_empty());
        assert_eq!(form.name, "");
        assert!(!form.forget_name(&mut names));
    }

    #[test]
    fn test_time_field_accepts_digits_only() {
        let mut form = TaskForm::adding(Weekday::Friday, None);
        form.field = FormField::Time;
        for c in "1a0:3x0".chars() {
            form.add_char(c);
        }
        assert_eq!(form.time, "10:30");
        form.backspace();
        assert_eq!(form.time, "10:3");
    }
}
