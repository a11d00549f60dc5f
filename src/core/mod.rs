pub mod projects;
pub mod tasks;
pub mod urgency;
