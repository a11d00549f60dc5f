use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::storage::{self, ALL_TASKS_ID};
use crate::ui::messages::success;

/// Handle the `use` subcommand: select the active project (or the
/// aggregate all-tasks view).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Use { id, all } = cmd {
        let store = storage::open_soft(Path::new(&cfg.store));

        if *all {
            store.save_active_project_id(ALL_TASKS_ID);
            success("Switched to the all-tasks view");
            return Ok(());
        }

        let Some(pid) = id else {
            return Err(AppError::Other(
                "pass a project id or --all".to_string(),
            ));
        };

        let projects = store.load_projects();
        let project = projects
            .iter()
            .find(|p| p.id == *pid)
            .ok_or_else(|| AppError::ProjectNotFound(pid.clone()))?;

        store.save_active_project_id(&project.id);
        success(format!("Active project: {} ({})", project.name, project.id));
    }
    Ok(())
}
