//! Unified application error type.
//! All modules (storage, core, cache, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time unit: {0}")]
    InvalidTimeUnit(String),

    #[error("Invalid time remaining: {0}")]
    InvalidTimeRemaining(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No project found with id {0}")]
    ProjectNotFound(String),

    #[error("No task found with id {0}")]
    TaskNotFound(String),

    #[error("No projects exist yet; create one with `project --add`")]
    NoProjects,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Cache / network errors
    // ---------------------------
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Not cached and network unavailable: {0}")]
    CacheMiss(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
