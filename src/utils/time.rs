//! Time utilities: epoch-millisecond clock and human-readable remaining time.

use chrono::Utc;

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a millisecond span as a compact human figure, largest unit
/// first: "3d 4h", "2h 15m", "45m".
pub fn format_remaining(ms: i64) -> String {
    let total_mins = ms / 60_000;
    let days = total_mins / (24 * 60);
    let hours = (total_mins % (24 * 60)) / 60;
    let mins = total_mins % 60;

    if days > 0 {
        format!("{}d {}h", days, hours)
    } else if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
