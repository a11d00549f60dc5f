//! Project-level mutations. Callers persist the collection afterwards.

use crate::errors::{AppError, AppResult};
use crate::models::Project;
use crate::storage::ALL_TASKS_ID;
use crate::utils::id;

/// Append a new empty project and return its id. The caller is expected
/// to make it the active project, matching the app's behavior.
pub fn add(projects: &mut Vec<Project>, name: &str) -> String {
    let project = Project::new(id::project_id(), name.to_string());
    let pid = project.id.clone();
    projects.push(project);
    pid
}

pub fn rename(projects: &mut [Project], project_id: &str, name: &str) -> AppResult<()> {
    let project = projects
        .iter_mut()
        .find(|p| p.id == project_id)
        .ok_or_else(|| AppError::ProjectNotFound(project_id.to_string()))?;
    project.name = name.to_string();
    Ok(())
}

/// Delete a project. Returns the id the active view should move to:
/// unchanged unless the active project was deleted, in which case the
/// first remaining project, or the all-tasks view when none is left.
pub fn delete(projects: &mut Vec<Project>, active_id: &str, project_id: &str) -> AppResult<String> {
    let before = projects.len();
    projects.retain(|p| p.id != project_id);
    if projects.len() == before {
        return Err(AppError::ProjectNotFound(project_id.to_string()));
    }

    if active_id != project_id {
        return Ok(active_id.to_string());
    }
    Ok(projects
        .first()
        .map(|p| p.id.clone())
        .unwrap_or_else(|| ALL_TASKS_ID.to_string()))
}
