pub mod add;
pub mod cache;
pub mod config;
pub mod del;
pub mod done;
pub mod dup;
pub mod edit;
pub mod export;
pub mod fetch;
pub mod init;
pub mod list;
pub mod project;
pub mod select;
