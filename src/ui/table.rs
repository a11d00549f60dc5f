//! Task table rendering for the `list` command.

use unicode_width::UnicodeWidthStr;

use crate::core::urgency::Urgency;
use crate::models::Task;
use crate::utils::colors;
use crate::utils::time::format_remaining;

const DESCRIPTION_WRAP: usize = 64;

/// One renderable row: the task plus the project label shown in the
/// all-tasks view.
pub struct Row<'a> {
    pub task: &'a Task,
    pub project: Option<&'a str>,
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

fn estimate(task: &Task) -> String {
    format!("{} {}", task.time_remaining, task.unit.as_str())
}

fn left(task: &Task, now_ms: i64) -> String {
    if task.completed {
        "-".to_string()
    } else if task.is_overdue(now_ms) {
        "overdue".to_string()
    } else {
        format_remaining(task.remaining_ms(now_ms))
    }
}

/// Render rows as an aligned table, one urgency-colored line per task,
/// with wrapped descriptions underneath when `details` is set.
pub fn render(rows: &[Row<'_>], now_ms: i64, details: bool) -> String {
    let with_project = rows.iter().any(|r| r.project.is_some());

    let mut header = vec!["ID", "TASK", "EST", "LEFT", "STATE"];
    if with_project {
        header.push("PROJECT");
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let urgency = Urgency::of(row.task, now_ms);
            let mut line = vec![
                row.task.id.clone(),
                row.task.title.clone(),
                estimate(row.task),
                left(row.task, now_ms),
                urgency.label().to_string(),
            ];
            if with_project {
                line.push(row.project.unwrap_or("-").to_string());
            }
            line
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|line| UnicodeWidthStr::width(line[i].as_str()))
                .chain([UnicodeWidthStr::width(*h)])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    for (i, h) in header.iter().enumerate() {
        out.push_str(&colors::paint(colors::BOLD, &pad(h, widths[i])));
        out.push_str("  ");
    }
    out.push('\n');

    for (row, line) in rows.iter().zip(&cells) {
        let color = Urgency::of(row.task, now_ms).color();
        for (i, cell) in line.iter().enumerate() {
            out.push_str(&colors::paint(color, &pad(cell, widths[i])));
            out.push_str("  ");
        }
        out.push('\n');

        if details && !row.task.description.is_empty() {
            for wrapped in textwrap::wrap(&row.task.description, DESCRIPTION_WRAP) {
                out.push_str(&colors::paint(colors::GREY, &format!("    {}", wrapped)));
                out.push('\n');
            }
        }
    }

    out
}

/// Completion summary line, e.g. `3 / 8 tasks complete (38%)`.
pub fn completion_line(completed: usize, total: usize) -> String {
    let percent = if total == 0 {
        0
    } else {
        (completed as f64 / total as f64 * 100.0).round() as i64
    };
    format!("{} / {} tasks complete ({}%)", completed, total, percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeUnit;

    fn task(id: &str, title: &str) -> Task {
        Task::new(id.into(), title.into(), "Some notes".into(), 2, TimeUnit::Hours, 0)
    }

    #[test]
    fn render_includes_all_columns() {
        let t = task("1", "Write docs");
        let rows = vec![Row {
            task: &t,
            project: Some("Website"),
        }];
        let out = render(&rows, 0, false);
        assert!(out.contains("Write docs"));
        assert!(out.contains("2 hours"));
        assert!(out.contains("PROJECT"));
        assert!(out.contains("Website"));
    }

    #[test]
    fn details_wrap_description() {
        let t = task("1", "T");
        let rows = vec![Row {
            task: &t,
            project: None,
        }];
        let out = render(&rows, 0, true);
        assert!(out.contains("Some notes"));
        assert!(!out.contains("PROJECT"));
    }

    #[test]
    fn overdue_task_shows_overdue() {
        let t = task("1", "Late");
        let out = render(
            &[Row {
                task: &t,
                project: None,
            }],
            t.deadline + 1,
            false,
        );
        assert!(out.contains("overdue"));
    }

    #[test]
    fn completion_percentages() {
        assert_eq!(completion_line(0, 0), "0 / 0 tasks complete (0%)");
        assert_eq!(completion_line(3, 8), "3 / 8 tasks complete (38%)");
        assert_eq!(completion_line(2, 2), "2 / 2 tasks complete (100%)");
    }
}
