// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, meals_to_table};
use crate::export::pdf::PdfManager;
use crate::export::{MealExport, notify_export_success};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Export PDF: a summary block followed by the meal table.
pub(crate) fn export_pdf(
    meals: &[MealExport],
    path: &Path,
    title: &str,
    notes: &[String],
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = meals_to_table(meals);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, notes, &headers, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
