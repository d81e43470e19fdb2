// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{MealExport, notify_export_success};
use crate::models::ProgressState;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export the whole progress record, pretty-printed.
pub(crate) fn export_json(state: &ProgressState, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(state)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header included through serde).
pub(crate) fn export_csv(meals: &[MealExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    for item in meals {
        wtr.serialize(item)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
