pub mod enums;
pub mod errors;
pub mod task;

pub use enums::{UiMode, View, Weekday};
pub use errors::{PlannerError, StoreKind};
pub use task::{
    earned_points, parse_time, possible_points, PointSelector, Slot, Task, MAX_PRIORITY,
    MIN_PRIORITY,
};
