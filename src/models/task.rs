use super::time_unit::TimeUnit;

/// A unit of work owned by exactly one project.
///
/// `deadline` is derived once at creation time as `now + time_remaining
/// in unit`; the `time_remaining`/`unit` pair is kept for display and is
/// never re-derived from the deadline afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub time_remaining: i64,
    pub unit: TimeUnit,
    pub completed: bool,
    /// Absolute deadline, epoch milliseconds.
    pub deadline: i64,
}

impl Task {
    pub fn new(
        id: String,
        title: String,
        description: String,
        time_remaining: i64,
        unit: TimeUnit,
        now_ms: i64,
    ) -> Self {
        Self {
            id,
            title,
            description,
            time_remaining,
            unit,
            completed: false,
            deadline: now_ms + unit.to_ms(time_remaining),
        }
    }

    /// Milliseconds until the deadline, clamped at zero once overdue.
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        (self.deadline - now_ms).max(0)
    }

    pub fn is_overdue(&self, now_ms: i64) -> bool {
        !self.completed && self.deadline <= now_ms
    }

    /// Duplicate for the `dup` operation: fresh id, " (copy)" suffix,
    /// completion reset.
    pub fn duplicate(&self, new_id: String) -> Self {
        Self {
            id: new_id,
            title: format!("{} (copy)", self.title),
            completed: false,
            ..self.clone()
        }
    }
}
