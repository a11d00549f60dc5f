//! Task-level mutations. Ownership is by containment, so cross-project
//! operations locate the owning project by scanning for the task id.
//! Callers persist the collection afterwards.

use crate::errors::{AppError, AppResult};
use crate::models::{Project, Task, TimeUnit};
use crate::storage::ALL_TASKS_ID;
use crate::utils::id;

/// Pick the project a new task lands in: an explicit id wins, otherwise
/// the active project, and in the all-tasks view the first project
/// (matching the app's behavior).
pub fn resolve_target(
    projects: &[Project],
    explicit: Option<&str>,
    active_id: &str,
) -> AppResult<usize> {
    if let Some(pid) = explicit {
        return projects
            .iter()
            .position(|p| p.id == pid)
            .ok_or_else(|| AppError::ProjectNotFound(pid.to_string()));
    }

    if active_id != ALL_TASKS_ID {
        if let Some(idx) = projects.iter().position(|p| p.id == active_id) {
            return Ok(idx);
        }
    }

    if projects.is_empty() {
        return Err(AppError::NoProjects);
    }
    Ok(0)
}

pub fn add(
    projects: &mut [Project],
    target: usize,
    title: &str,
    description: &str,
    time_remaining: i64,
    unit: TimeUnit,
    now_ms: i64,
) -> String {
    let task = Task::new(
        id::task_id(),
        title.to_string(),
        description.to_string(),
        time_remaining,
        unit,
        now_ms,
    );
    let tid = task.id.clone();
    projects[target].tasks.push(task);
    tid
}

fn owning_project_mut<'a>(
    projects: &'a mut [Project],
    task_id: &str,
) -> AppResult<&'a mut Project> {
    projects
        .iter_mut()
        .find(|p| p.contains_task(task_id))
        .ok_or_else(|| AppError::TaskNotFound(task_id.to_string()))
}

/// Toggle completion; returns the new state.
pub fn toggle(projects: &mut [Project], task_id: &str) -> AppResult<bool> {
    let project = owning_project_mut(projects, task_id)?;
    let task = project
        .task_mut(task_id)
        .ok_or_else(|| AppError::TaskNotFound(task_id.to_string()))?;
    task.completed = !task.completed;
    Ok(task.completed)
}

/// Edit fields in place. A new remaining time or unit re-derives the
/// deadline from `now_ms`, the same rule as creation.
pub fn edit(
    projects: &mut [Project],
    task_id: &str,
    title: Option<&str>,
    description: Option<&str>,
    time_remaining: Option<i64>,
    unit: Option<TimeUnit>,
    now_ms: i64,
) -> AppResult<()> {
    let project = owning_project_mut(projects, task_id)?;
    let task = project
        .task_mut(task_id)
        .ok_or_else(|| AppError::TaskNotFound(task_id.to_string()))?;

    if let Some(t) = title {
        task.title = t.to_string();
    }
    if let Some(d) = description {
        task.description = d.to_string();
    }
    if time_remaining.is_some() || unit.is_some() {
        task.time_remaining = time_remaining.unwrap_or(task.time_remaining);
        task.unit = unit.unwrap_or(task.unit);
        task.deadline = now_ms + task.unit.to_ms(task.time_remaining);
    }
    Ok(())
}

/// Duplicate a task into its owning project; returns the new id.
pub fn duplicate(projects: &mut [Project], task_id: &str) -> AppResult<String> {
    let project = owning_project_mut(projects, task_id)?;
    let original = project
        .task(task_id)
        .ok_or_else(|| AppError::TaskNotFound(task_id.to_string()))?;
    let copy = original.duplicate(id::task_id());
    let new_id = copy.id.clone();
    project.tasks.push(copy);
    Ok(new_id)
}

pub fn delete(projects: &mut [Project], task_id: &str) -> AppResult<()> {
    let project = owning_project_mut(projects, task_id)?;
    project.tasks.retain(|t| t.id != task_id);
    Ok(())
}

/// Drop completed tasks in the active view; the all-tasks view clears
/// across every project. Returns how many were removed.
pub fn clear_completed(projects: &mut [Project], active_id: &str) -> usize {
    let mut removed = 0;
    for project in projects.iter_mut() {
        if active_id != ALL_TASKS_ID && project.id != active_id {
            continue;
        }
        let before = project.tasks.len();
        project.tasks.retain(|t| !t.completed);
        removed += before - project.tasks.len();
    }
    removed
}
