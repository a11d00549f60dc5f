pub mod project;
pub mod task;
pub mod time_unit;

pub use project::Project;
pub use task::Task;
pub use time_unit::TimeUnit;
