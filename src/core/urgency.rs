//! Urgency classification, display-only. Tiers come from the minutes
//! left until the deadline; overdue tasks clamp to zero minutes and so
//! classify as maximally urgent.

use std::cmp::Ordering;

use crate::models::Task;
use crate::utils::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Now,
    Upcoming,
    Later,
    Distant,
    Completed,
}

impl Urgency {
    pub fn of(task: &Task, now_ms: i64) -> Self {
        if task.completed {
            return Urgency::Completed;
        }
        let mins = task.remaining_ms(now_ms) / 60_000;
        if mins <= 60 {
            Urgency::Now
        } else if mins <= 480 {
            Urgency::Upcoming
        } else if mins <= 960 {
            Urgency::Later
        } else {
            Urgency::Distant
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Now => "now",
            Urgency::Upcoming => "upcoming",
            Urgency::Later => "later",
            Urgency::Distant => "distant",
            Urgency::Completed => "done",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Urgency::Now => colors::RED,
            Urgency::Upcoming => colors::YELLOW,
            Urgency::Later => colors::CYAN,
            Urgency::Distant => colors::GREEN,
            Urgency::Completed => colors::GREY,
        }
    }
}

/// Display order: incomplete tasks first, soonest deadline on top,
/// completed tasks at the bottom.
pub fn display_cmp(a: &Task, b: &Task) -> Ordering {
    match (a.completed, b.completed) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => a.deadline.cmp(&b.deadline),
    }
}
