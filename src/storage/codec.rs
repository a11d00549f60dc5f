//! CSV codec for the persisted project/task collection.
//!
//! One row per task, plus one empty-task row for each project without
//! tasks, so a project survives a round trip even when empty. Decoding
//! groups rows by project id; the first occurrence of an id fixes the
//! project's name and position, later rows with the same id merge into
//! it. Rows that fail to parse are skipped rather than failing the
//! whole collection.

use std::collections::HashMap;

use csv::{ReaderBuilder, WriterBuilder};

use crate::errors::{AppError, AppResult};
use crate::models::{Project, Task, TimeUnit};

pub const HEADER: [&str; 9] = [
    "projectId",
    "projectName",
    "taskId",
    "title",
    "description",
    "timeRemaining",
    "timeUnit",
    "completed",
    "deadline",
];

/// Serialize the collection. Fields containing commas, quotes or
/// newlines get standard CSV quoting (writer default).
pub fn encode(projects: &[Project]) -> AppResult<String> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());

    wtr.write_record(HEADER)?;

    for project in projects {
        if project.tasks.is_empty() {
            wtr.write_record([
                project.id.as_str(),
                project.name.as_str(),
                "",
                "",
                "",
                "",
                "",
                "",
                "",
            ])?;
        } else {
            for task in &project.tasks {
                wtr.write_record([
                    project.id.clone(),
                    project.name.clone(),
                    task.id.clone(),
                    task.title.clone(),
                    task.description.clone(),
                    task.time_remaining.to_string(),
                    task.unit.as_str().to_string(),
                    task.completed.to_string(),
                    task.deadline.to_string(),
                ])?;
            }
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Other(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(e.to_string()))
}

/// Deserialize a collection previously produced by [`encode`], or by an
/// older version of it that predates the `deadline` column.
///
/// Soft-failure rules: non-numeric `timeRemaining`/`deadline` decode to
/// 0; an unknown unit decodes to hours; a missing or non-positive
/// deadline is synthesized as `now_ms + time_remaining in unit`
/// (one-way legacy repair); unparsable rows are dropped.
pub fn decode(csv_text: &str, now_ms: i64) -> Vec<Project> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut projects: Vec<Project> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in rdr.records() {
        let Ok(record) = record else { continue };

        let project_id = record.get(0).unwrap_or("").to_string();
        let project_name = record.get(1).unwrap_or("").to_string();

        let slot = *index.entry(project_id.clone()).or_insert_with(|| {
            projects.push(Project::new(project_id.clone(), project_name));
            projects.len() - 1
        });

        let task_id = record.get(2).unwrap_or("");
        if task_id.is_empty() {
            continue;
        }

        let time_remaining = parse_num(record.get(5));
        let unit = TimeUnit::from_str_lossy(record.get(6).unwrap_or(""));

        let mut deadline = parse_num(record.get(8));
        if deadline <= 0 {
            deadline = now_ms + unit.to_ms(time_remaining);
        }

        projects[slot].tasks.push(Task {
            id: task_id.to_string(),
            title: record.get(3).unwrap_or("").to_string(),
            description: record.get(4).unwrap_or("").to_string(),
            time_remaining,
            unit,
            completed: record.get(7).unwrap_or("") == "true",
            deadline,
        });
    }

    projects
}

fn parse_num(field: Option<&str>) -> i64 {
    field.unwrap_or("").trim().parse().unwrap_or(0)
}
