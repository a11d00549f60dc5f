pub mod colors;
pub mod id;
pub mod time;
