use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::success;
use crate::utils::time::now_ms;

/// Edit a task's fields in place.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        desc,
        time,
        unit,
    } = cmd
    {
        let store = storage::open_soft(Path::new(&cfg.store));
        let mut projects = store.load_projects();

        tasks::edit(
            &mut projects,
            id,
            title.as_deref(),
            desc.as_deref(),
            *time,
            *unit,
            now_ms(),
        )?;
        store.save_projects(&projects);
        success(format!("Updated task {id}"));
    }
    Ok(())
}
