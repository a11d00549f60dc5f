//! Id generation. Ids are caller-generated strings derived from the
//! epoch-millisecond clock, unique enough for a single-user store.

use std::sync::atomic::{AtomicI64, Ordering};

use super::time::now_ms;

static LAST: AtomicI64 = AtomicI64::new(0);

/// Monotonic epoch-ms value; bumps by one when called twice within the
/// same millisecond so two tasks created back to back never collide.
fn next_stamp() -> i64 {
    let now = now_ms();
    LAST.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(if now > last { now } else { last + 1 })
    })
    .map(|last| if now > last { now } else { last + 1 })
    .unwrap_or(now)
}

pub fn task_id() -> String {
    next_stamp().to_string()
}

pub fn project_id() -> String {
    format!("proj_{}", next_stamp())
}
