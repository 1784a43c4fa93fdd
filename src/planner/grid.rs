use super::schedule::ScheduleStore;
use super::store::TaskStore;
use crate::domain::{PlannerError, StoreKind, Task, Weekday};
use chrono::NaiveTime;

/// Text of an empty cell
pub const EMPTY_CELL: &str = "-";
/// First column of the summary row
pub const SUMMARY_LABEL: &str = "POINTS";

/// Rendered content of one occupied cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub label: String,
    pub earned: u8,
    pub possible: u8,
}

impl GridCell {
    pub fn from_task(task: &Task) -> Self {
        Self {
            label: task.label(),
            earned: task.points_earned(),
            possible: task.points_possible(),
        }
    }

    /// Drawn struck through when every point is achieved
    pub fn is_done(&self) -> bool {
        self.earned == self.possible
    }
}

/// One time-of-day row; a cell per weekday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub time: NaiveTime,
    pub cells: [Option<GridCell>; 7],
}

impl GridRow {
    fn new(time: NaiveTime) -> Self {
        Self {
            time,
            cells: Default::default(),
        }
    }

    fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// Weekday x time table backing the main screen
///
/// Addressed like a table model: row 0 is the weekday header, rows
/// `1..=times` are time rows in ascending order, and the last row holds the
/// achieved/possible points per weekday. Column 0 carries the row labels,
/// columns `1..=7` are Monday to Sunday.
#[derive(Debug, Clone, Default)]
pub struct GridProjection {
    rows: Vec<GridRow>,
    /// (earned, possible) per weekday
    summary: [(u32, u32); 7],
}

impl GridProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project an existing schedule
    pub fn from_schedule(schedule: &ScheduleStore) -> Self {
        let mut grid = Self::new();
        for task in schedule.iter() {
            // Schedule slots are unique, so every insert lands in an empty cell
            let _ = grid.add_task(task);
        }
        grid
    }

    fn row_index(&self, time: NaiveTime) -> Result<usize, usize> {
        self.rows.binary_search_by_key(&time, |row| row.time)
    }

    fn cell_at(&self, weekday: Weekday, time: NaiveTime) -> Option<&GridCell> {
        let index = self.row_index(time).ok()?;
        self.rows[index].cells[weekday.position()].as_ref()
    }

    fn recompute_summary(&mut self, weekday: Weekday) {
        let column = weekday.position();
        self.summary[column] = self
            .rows
            .iter()
            .filter_map(|row| row.cells[column].as_ref())
            .fold((0, 0), |(earned, possible), cell| {
                (earned + u32::from(cell.earned), possible + u32::from(cell.possible))
            });
    }

    /// Locate by slot and compare the rendered cell
    pub fn is_task_in_planner(&self, task: &Task) -> bool {
        self.cell_at(task.weekday, task.time) == Some(&GridCell::from_task(task))
    }

    /// Clear whatever occupies a slot
    pub fn delete_at(&mut self, weekday: Weekday, time: NaiveTime) -> Result<(), PlannerError> {
        let slot = crate::domain::Slot::new(weekday, time);
        let index = self
            .row_index(time)
            .map_err(|_| PlannerError::conflict(StoreKind::Grid, slot, "no row for this time"))?;

        if self.rows[index].cells[weekday.position()].take().is_none() {
            return Err(PlannerError::conflict(StoreKind::Grid, slot, "cell already empty"));
        }
        if self.rows[index].is_empty() {
            self.rows.remove(index);
        }
        self.recompute_summary(weekday);
        Ok(())
    }

    /// Time rows in ascending order
    pub fn times(&self) -> Vec<NaiveTime> {
        self.rows.iter().map(|row| row.time).collect()
    }

    /// (earned, possible) for one weekday
    pub fn summary(&self, weekday: Weekday) -> (u32, u32) {
        self.summary[weekday.position()]
    }

    /// Header + time rows + summary
    pub fn row_count(&self) -> usize {
        self.rows.len() + 2
    }

    pub fn column_count(&self) -> usize {
        Weekday::all().len() + 1
    }

    /// Time of a table row; `None` for the header and summary rows
    pub fn time_at(&self, row: usize) -> Option<NaiveTime> {
        row.checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .map(|grid_row| grid_row.time)
    }

    /// Weekday of a table column; `None` for the label column
    pub fn weekday_at(&self, column: usize) -> Option<Weekday> {
        column.checked_sub(1).and_then(Weekday::from_position)
    }

    /// Occupied cell at a table position
    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        let time = self.time_at(row)?;
        let weekday = self.weekday_at(column)?;
        self.cell_at(weekday, time)
    }

    /// Text of any table position, header and summary included
    pub fn value_at(&self, row: usize, column: usize) -> Option<String> {
        if row >= self.row_count() || column >= self.column_count() {
            return None;
        }

        let is_header = row == 0;
        let is_summary = row == self.row_count() - 1;

        let text = match (is_header, is_summary, self.weekday_at(column)) {
            (true, _, None) => String::new(),
            (true, _, Some(day)) => day.name().to_string(),
            (_, true, None) => SUMMARY_LABEL.to_string(),
            (_, true, Some(day)) => {
                let (earned, possible) = self.summary(day);
                format!("{}/{}", earned, possible)
            }
            (_, _, None) => self.time_at(row)?.format("%H:%M").to_string(),
            (_, _, Some(_)) => self
                .cell(row, column)
                .map(|cell| cell.label.clone())
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
        };
        Some(text)
    }
}

impl TaskStore for GridProjection {
    fn add_task(&mut self, task: &Task) -> Result<(), PlannerError> {
        let column = task.weekday.position();
        let index = match self.row_index(task.time) {
            Ok(index) => {
                if self.rows[index].cells[column].is_some() {
                    return Err(PlannerError::conflict(StoreKind::Grid, task.slot(), "cell already occupied"));
                }
                index
            }
            Err(insert_at) => {
                self.rows.insert(insert_at, GridRow::new(task.time));
                insert_at
            }
        };

        self.rows[index].cells[column] = Some(GridCell::from_task(task));
        self.recompute_summary(task.weekday);
        Ok(())
    }

    fn delete_task(&mut self, task: &Task) -> Result<(), PlannerError> {
        if !self.is_task_in_planner(task) {
            return Err(PlannerError::conflict(StoreKind::Grid, task.slot(), "cell does not show this task"));
        }
        self.delete_at(task.weekday, task.time)
    }

    /// Validated up front so a refusal leaves every row untouched
    fn edit_task(&mut self, original: &Task, edited: &Task) -> Result<(), PlannerError> {
        if original == edited {
            return Err(PlannerError::conflict(StoreKind::Grid, original.slot(), "edit changes nothing"));
        }
        if !self.is_task_in_planner(original) {
            return Err(PlannerError::conflict(StoreKind::Grid, original.slot(), "cell does not show this task"));
        }
        if edited.slot() != original.slot() && self.cell_at(edited.weekday, edited.time).is_some() {
            return Err(PlannerError::conflict(StoreKind::Grid, edited.slot(), "cell already occupied"));
        }

        self.delete_task(original)?;
        self.add_task(edited)
    }

    fn contains(&self, task: &Task) -> bool {
        self.is_task_in_planner(task)
    }

    fn task_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }
}
