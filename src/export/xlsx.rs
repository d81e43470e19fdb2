// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, meal_to_row};
use crate::export::{MealExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const COMPLETED_COL: usize = 5;

/// Export XLSX with a styled header, banded rows and auto-sized columns.
pub(crate) fn export_xlsx(meals: &[MealExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Progress").map_err(to_io_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2E7D32))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xE8F5E9);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, meal) in meals.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in meal_to_row(meal).iter().enumerate() {
            let v = value.as_str();

            if col == COMPLETED_COL {
                write_status_cell(worksheet, row, col as u16, meal.completed, band_color)?;
            } else {
                write_xlsx_cell(worksheet, row, col as u16, v, band_color)?;
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Numbers are written as numbers (right-aligned), everything else as text.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_io_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_io_app_error)?;
    Ok(())
}

fn write_status_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    done: bool,
    bg: Color,
) -> AppResult<()> {
    let font = if done {
        Color::RGB(0x2E7D32)
    } else {
        Color::RGB(0x9E9E9E)
    };

    let fmt = Format::new()
        .set_font_color(font)
        .set_align(FormatAlign::Center)
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(row, col, if done { "yes" } else { "no" }, &fmt)
        .map_err(to_io_app_error)?;
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
