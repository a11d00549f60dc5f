use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::success;

/// Toggle a task's completion flag.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id } = cmd {
        let store = storage::open_soft(Path::new(&cfg.store));
        let mut projects = store.load_projects();

        let completed = tasks::toggle(&mut projects, id)?;
        store.save_projects(&projects);

        if completed {
            success(format!("Task {id} marked complete"));
        } else {
            success(format!("Task {id} reopened"));
        }
    }
    Ok(())
}
