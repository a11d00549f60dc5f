use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::urgency;
use crate::errors::{AppError, AppResult};
use crate::storage::{self, ALL_TASKS_ID};
use crate::ui::messages::header;
use crate::ui::table::{self, Row};
use crate::utils::time::now_ms;

/// List tasks in the active view (or one selected with flags).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        all,
        project,
        details,
    } = cmd
    {
        let store = storage::open_soft(Path::new(&cfg.store));
        let projects = store.load_projects();

        let view = if *all {
            ALL_TASKS_ID.to_string()
        } else if let Some(pid) = project {
            if !projects.iter().any(|p| p.id == *pid) {
                return Err(AppError::ProjectNotFound(pid.clone()));
            }
            pid.clone()
        } else {
            store.resolve_active(&projects)
        };

        let all_view = view == ALL_TASKS_ID;

        // collect (task, project label) pairs for the view
        let mut rows: Vec<Row<'_>> = Vec::new();
        for p in &projects {
            if !all_view && p.id != view {
                continue;
            }
            for task in &p.tasks {
                rows.push(Row {
                    task,
                    project: all_view.then_some(p.name.as_str()),
                });
            }
        }
        rows.sort_by(|a, b| urgency::display_cmp(a.task, b.task));

        if all_view {
            header("Most Pressing");
        } else if let Some(p) = projects.iter().find(|p| p.id == view) {
            header(&p.name);
        }

        if rows.is_empty() {
            println!("No tasks yet. Add one with `progchek add`.");
            return Ok(());
        }

        let now = now_ms();
        print!("{}", table::render(&rows, now, *details));

        let completed = rows.iter().filter(|r| r.task.completed).count();
        println!("{}", table::completion_line(completed, rows.len()));
    }
    Ok(())
}
