pub mod catalog;
pub mod coordinator;
pub mod grid;
pub mod saga;
pub mod schedule;
pub mod store;
pub mod weekday;

pub use catalog::TaskNames;
pub use coordinator::{Coordinator, Mutation};
pub use grid::GridProjection;
pub use schedule::{ScheduleMap, ScheduleStore};
pub use weekday::WeekdayPlanner;
