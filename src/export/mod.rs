mod csv;

pub use csv::write_csv;

use std::path::Path;

use crate::ui::messages::success;

/// Default export file name.
pub const DEFAULT_EXPORT_FILE: &str = "progchek_data.csv";

pub(crate) fn notify_export_success(path: &Path) {
    success(format!("CSV export completed: {}", path.display()));
}
