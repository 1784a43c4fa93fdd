pub mod files;
pub mod json;
pub mod names_repo;
pub mod schedule_repo;

pub use files::{ensure_dir, find_local_data_dir, global_data_dir, init_local_data_dir};
pub use names_repo::TaskNamesRepository;
pub use schedule_repo::ScheduleRepository;
