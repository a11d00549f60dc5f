use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projects;
use crate::errors::AppResult;
use crate::storage::{self, ALL_TASKS_ID};
use crate::ui::messages::success;

/// Manage projects: add, rename, delete, list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project {
        add,
        rename,
        del,
        list,
    } = cmd
    {
        let store = storage::open_soft(Path::new(&cfg.store));
        let mut collection = store.load_projects();

        if let Some(name) = add {
            let pid = projects::add(&mut collection, name);
            store.save_projects(&collection);
            store.save_active_project_id(&pid);
            success(format!("Created project '{name}' ({pid}), now active"));
        }

        if let Some(args) = rename {
            // clap guarantees exactly two values
            projects::rename(&mut collection, &args[0], &args[1])?;
            store.save_projects(&collection);
            success(format!("Renamed project {} to '{}'", args[0], args[1]));
        }

        if let Some(pid) = del {
            let active = store.resolve_active(&collection);
            let next_active = projects::delete(&mut collection, &active, pid)?;
            store.save_projects(&collection);
            store.save_active_project_id(&next_active);
            success(format!("Deleted project {pid}"));
        }

        if *list {
            let active = store.resolve_active(&collection);
            for project in &collection {
                let marker = if project.id == active { "*" } else { " " };
                println!(
                    "{} {}  {} ({}/{} done)",
                    marker,
                    project.id,
                    project.name,
                    project.completed_count(),
                    project.tasks.len()
                );
            }
            if active == ALL_TASKS_ID {
                println!("* (all tasks view)");
            }
        }
    }
    Ok(())
}
