use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks;
use crate::errors::{AppError, AppResult};
use crate::storage;
use crate::ui::messages::success;

/// Delete one task, or clear completed tasks in the active view.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, completed } = cmd {
        let store = storage::open_soft(Path::new(&cfg.store));
        let mut projects = store.load_projects();

        if *completed {
            let active = store.resolve_active(&projects);
            let removed = tasks::clear_completed(&mut projects, &active);
            store.save_projects(&projects);
            success(format!("Cleared {removed} completed task(s)"));
            return Ok(());
        }

        let Some(tid) = id else {
            return Err(AppError::Other(
                "pass a task id or --completed".to_string(),
            ));
        };

        tasks::delete(&mut projects, tid)?;
        store.save_projects(&projects);
        success(format!("Deleted task {tid}"));
    }
    Ok(())
}
