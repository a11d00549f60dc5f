use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::success;

/// Duplicate a task within its owning project.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dup { id } = cmd {
        let store = storage::open_soft(Path::new(&cfg.store));
        let mut projects = store.load_projects();

        let new_id = tasks::duplicate(&mut projects, id)?;
        store.save_projects(&projects);
        success(format!("Duplicated task {id} as {new_id}"));
    }
    Ok(())
}
