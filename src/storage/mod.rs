//! Persisted app state: the project collection (CSV-encoded under one
//! key) and the active project id (plain string under another).
//!
//! Storage failures are invisible by design: reads fall back to the
//! built-in sample data, writes are dropped silently. The CLI never
//! surfaces a storage error to the user.

pub mod codec;
pub mod kv;

use std::path::Path;

pub use kv::{KvStore, MemoryKv, SqliteKv};

use crate::models::{Project, Task, TimeUnit};
use crate::utils::time::now_ms;

pub const PROJECTS_KEY: &str = "progchek_projects";
pub const ACTIVE_KEY: &str = "progchek_active_project";

/// Sentinel active-project id for the aggregate "all tasks" view.
pub const ALL_TASKS_ID: &str = "__all__";

pub struct Store<K: KvStore> {
    kv: K,
}

/// Open the store, degrading to an in-memory one when the file cannot
/// be opened: reads then serve the default data and writes vanish,
/// the same soft-failure contract as any other storage error.
pub fn open_soft(path: &Path) -> Store<Box<dyn KvStore>> {
    match SqliteKv::open(path) {
        Ok(kv) => Store::new(Box::new(kv)),
        Err(_) => Store::new(Box::new(MemoryKv::new())),
    }
}

impl<K: KvStore> Store<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Load the collection; missing, empty, or unreadable state falls
    /// back to the default sample projects.
    pub fn load_projects(&self) -> Vec<Project> {
        if let Ok(Some(csv)) = self.kv.get(PROJECTS_KEY) {
            let projects = codec::decode(&csv, now_ms());
            if !projects.is_empty() {
                return projects;
            }
        }
        default_projects(now_ms())
    }

    /// Persist the collection; failures are dropped.
    pub fn save_projects(&self, projects: &[Project]) {
        if let Ok(csv) = codec::encode(projects) {
            let _ = self.kv.set(PROJECTS_KEY, &csv);
        }
    }

    pub fn load_active_project_id(&self) -> Option<String> {
        self.kv.get(ACTIVE_KEY).ok().flatten()
    }

    pub fn save_active_project_id(&self, id: &str) {
        let _ = self.kv.set(ACTIVE_KEY, id);
    }

    /// Resolve the saved active id against the loaded collection: the
    /// sentinel stays, a stale or missing id falls back to the
    /// aggregate view.
    pub fn resolve_active(&self, projects: &[Project]) -> String {
        match self.load_active_project_id() {
            Some(id) if id == ALL_TASKS_ID => id,
            Some(id) if projects.iter().any(|p| p.id == id) => id,
            _ => ALL_TASKS_ID.to_string(),
        }
    }
}

/// First-run dataset, shown until the user saves anything.
pub fn default_projects(now_ms: i64) -> Vec<Project> {
    let t = |id: &str, title: &str, desc: &str, time: i64, unit: TimeUnit| {
        Task::new(
            id.to_string(),
            title.to_string(),
            desc.to_string(),
            time,
            unit,
            now_ms,
        )
    };

    vec![
        Project {
            id: "proj_1".to_string(),
            name: "Website Redesign".to_string(),
            tasks: vec![
                t("1", "Design Element", "New location designed.", 2, TimeUnit::Hours),
                t("2", "Backend API", "Set up REST endpoints.", 6, TimeUnit::Hours),
                t("3", "User Testing", "Conduct usability tests.", 8, TimeUnit::Hours),
                t("4", "Documentation", "Write technical docs.", 12, TimeUnit::Hours),
                t("5", "Deployment", "Deploy to production server.", 2, TimeUnit::Days),
            ],
        },
        Project {
            id: "proj_2".to_string(),
            name: "Mobile App".to_string(),
            tasks: vec![
                t("6", "Wireframes", "Create app wireframes.", 3, TimeUnit::Hours),
                t("7", "Auth Flow", "Implement login & signup.", 1, TimeUnit::Days),
                t("8", "Push Notifs", "Set up push notifications.", 45, TimeUnit::Minutes),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, AppResult};

    /// Store whose reads and writes always fail, for the soft-failure
    /// paths.
    struct BrokenKv;

    impl KvStore for BrokenKv {
        fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::Other("kv unavailable".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Other("kv unavailable".into()))
        }
        fn remove(&self, _key: &str) -> AppResult<()> {
            Err(AppError::Other("kv unavailable".into()))
        }
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = Store::new(MemoryKv::new());
        let mut projects = default_projects(0);
        projects[0].name = "Renamed".to_string();
        store.save_projects(&projects);
        assert_eq!(store.load_projects(), projects);
    }

    #[test]
    fn missing_state_falls_back_to_defaults() {
        let store = Store::new(MemoryKv::new());
        let projects = store.load_projects();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Website Redesign");
        assert_eq!(projects[1].tasks.len(), 3);
    }

    #[test]
    fn broken_store_is_invisible() {
        let store = Store::new(BrokenKv);
        // reads fall back, writes drop, nothing panics or errors out
        assert_eq!(store.load_projects().len(), 2);
        store.save_projects(&default_projects(0));
        assert_eq!(store.load_active_project_id(), None);
        store.save_active_project_id("proj_1");
    }

    #[test]
    fn stale_active_id_resolves_to_all_view() {
        let store = Store::new(MemoryKv::new());
        let projects = default_projects(0);

        store.save_active_project_id("proj_gone");
        assert_eq!(store.resolve_active(&projects), ALL_TASKS_ID);

        store.save_active_project_id("proj_2");
        assert_eq!(store.resolve_active(&projects), "proj_2");

        store.save_active_project_id(ALL_TASKS_ID);
        assert_eq!(store.resolve_active(&projects), ALL_TASKS_ID);
    }

    #[test]
    fn default_deadlines_derive_from_now() {
        let now = 1_000_000;
        let projects = default_projects(now);
        // 2 hours
        assert_eq!(projects[0].tasks[0].deadline, now + 2 * 60 * 60 * 1000);
        // 45 minutes
        assert_eq!(projects[1].tasks[2].deadline, now + 45 * 60 * 1000);
    }
}
