use std::path::Path;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{self, DEFAULT_EXPORT_FILE};
use crate::storage;

/// Export the whole collection as CSV.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file } = cmd {
        let store = storage::open_soft(Path::new(&cfg.store));
        let projects = store.load_projects();

        let path = file.as_deref().unwrap_or(DEFAULT_EXPORT_FILE);
        export::write_csv(Path::new(path), &projects)?;
        export::notify_export_success(Path::new(path));
    }
    Ok(())
}
