// src/export/logic.rs

use crate::catalog::PLAN_DAYS;
use crate::config::Config;
use crate::core::progress::ProgressLogic;
use crate::core::summary::DashboardSummary;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::meals_for_export;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::ProgressState;
use crate::utils::formatting::{format_delta, ratio};
use crate::utils::path::expand_tilde;
use std::path::Path;

/// High-level export of the current progress.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the stored progress.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file (`~/` is expanded)
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let state = ProgressLogic::load(pool, cfg);
        Self::write(&state, format, path)?;

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Progress exported as {}", format.as_str()),
        );

        Ok(())
    }

    /// Write `state` to `path` in the given format, no checks.
    pub fn write(state: &ProgressState, format: ExportFormat, path: &Path) -> AppResult<()> {
        let meals = meals_for_export(state);

        match format {
            ExportFormat::Csv => export_csv(&meals, path),
            ExportFormat::Json => export_json(state, path),
            ExportFormat::Xlsx => export_xlsx(&meals, path),
            ExportFormat::Pdf => export_pdf(&meals, path, "Diet plan progress", &pdf_notes(state)),
        }
    }
}

/// Summary lines printed above the PDF table.
fn pdf_notes(state: &ProgressState) -> Vec<String> {
    let summary = DashboardSummary::build(state);

    let weight = match summary.weight_delta {
        Some(d) => format!("Weight loss: {}", format_delta(d)),
        None => "Weight loss: unavailable".to_string(),
    };

    let mut notes = vec![
        format!(
            "Day {} - meals done {}",
            ratio(summary.current_day as usize, PLAN_DAYS as usize),
            ratio(summary.completed_meals, summary.total_meals)
        ),
        weight,
    ];

    if summary.reduced_mode_active {
        notes.push("Reduced mode active (portions 30% smaller)".to_string());
    }

    notes
}
