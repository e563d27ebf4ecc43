// src/export/xlsx.rs

use crate::core::{Cell, ReportTable};
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_FORMAT, to_excel_serial};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Excel sheet names are limited to 31 characters.
const SHEET_NAME_MAX: usize = 31;

/// XLSX export with styled header, banded rows and auto column width.
pub(crate) fn export_xlsx(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let sheet_name: String = table.title.chars().take(SHEET_NAME_MAX).collect();
    worksheet.set_name(&sheet_name).map_err(to_app_error)?;

    if table.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_app_error)?;
        workbook.save(path).map_err(to_app_error)?;
        notify_export_success("XLSX (empty report)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = table
        .headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, cells) in table.cells().iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell, band)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(cell.to_string().as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one cell with the type the report gave it. Text stays text even
/// when it looks numeric (`007`).
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Date(d) => match to_excel_serial(*d) {
            Some(serial) => {
                let fmt = base.set_num_format(DATE_FORMAT);
                worksheet.write_with_format(row, col, serial, &fmt)
            }
            None => worksheet.write_with_format(row, col, cell.to_string(), &base),
        },
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n, &fmt)
        }
        Cell::Blank => worksheet.write_blank(row, col, &base),
        Cell::Text(s) => worksheet.write_with_format(row, col, s.as_str(), &base),
    }
    .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
