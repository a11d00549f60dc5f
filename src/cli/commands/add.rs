use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tasks;
use crate::errors::AppResult;
use crate::storage;
use crate::ui::messages::success;
use crate::utils::time::now_ms;

/// Add a task to the active (or explicitly chosen) project.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        desc,
        time,
        unit,
        project,
    } = cmd
    {
        let store = storage::open_soft(Path::new(&cfg.store));
        let mut projects = store.load_projects();
        let active = store.resolve_active(&projects);

        let target = tasks::resolve_target(&projects, project.as_deref(), &active)?;
        let unit = (*unit).unwrap_or(cfg.default_unit);

        let tid = tasks::add(
            &mut projects,
            target,
            title,
            desc.as_deref().unwrap_or(""),
            *time,
            unit,
            now_ms(),
        );
        let project_name = projects[target].name.clone();
        store.save_projects(&projects);

        success(format!(
            "Added task '{title}' ({tid}) to {project_name}, due in {time} {}",
            unit.as_str()
        ));
    }
    Ok(())
}
