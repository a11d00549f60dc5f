use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const MS_PER_MINUTE: i64 = 60 * 1000;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Unit attached to a task's `time_remaining` figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }

    /// Parse a persisted unit string. Unknown or empty values fall back
    /// to hours, matching the permissive decode of the stored CSV.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "minutes" => TimeUnit::Minutes,
            "days" => TimeUnit::Days,
            _ => TimeUnit::Hours,
        }
    }

    pub fn to_ms(&self, amount: i64) -> i64 {
        match self {
            TimeUnit::Minutes => amount * MS_PER_MINUTE,
            TimeUnit::Hours => amount * MS_PER_HOUR,
            TimeUnit::Days => amount * MS_PER_DAY,
        }
    }

    pub fn to_minutes(&self, amount: i64) -> i64 {
        self.to_ms(amount) / MS_PER_MINUTE
    }
}
