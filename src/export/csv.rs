use std::fs;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::Project;
use crate::storage::codec;

/// Write the collection to `path` using the same encoding as the
/// persisted state.
pub fn write_csv(path: &Path, projects: &[Project]) -> AppResult<()> {
    let csv = codec::encode(projects)?;
    fs::write(path, csv)
        .map_err(|e| AppError::Export(format!("{}: {}", path.display(), e)))?;
    Ok(())
}
