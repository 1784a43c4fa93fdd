pub mod generator;
pub mod stats;

pub use generator::{format_day, format_grid, format_week_summary};
pub use stats::calculate_week_stats;
