use crate::domain::{PlannerError, Task};

/// Operations every representation of the schedule supports
///
/// The coordinator drives mutations through this trait so that each step of
/// a saga and its inverse can be expressed once for all three stores.
pub trait TaskStore {
    /// Insert `task` at its slot, refusing occupied slots
    fn add_task(&mut self, task: &Task) -> Result<(), PlannerError>;

    /// Remove `task`, refusing when it is not present
    fn delete_task(&mut self, task: &Task) -> Result<(), PlannerError>;

    /// Replace `original` with `edited`, all or nothing
    fn edit_task(&mut self, original: &Task, edited: &Task) -> Result<(), PlannerError>;

    /// Membership check used to verify the outcome of a mutation
    fn contains(&self, task: &Task) -> bool;

    /// Number of tasks held
    fn task_count(&self) -> usize;
}
