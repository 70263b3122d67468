// src/annotation/io/writer.rs

use bevy::log::info;
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;

use crate::annotation::definitions::CellValue;
use crate::annotation::errors::AnnotatorError;
use crate::annotation::export::{export_headers, FlatRow};

pub const EXPORT_SHEET_NAME: &str = "Annotations";
pub const EXPORT_FILE_PREFIX: &str = "annotated_conversations_";

/// `annotated_conversations_<ISO-8601 instant>.xlsx`, with `:` and `.`
/// replaced by `-` so the name is valid on every filesystem.
pub fn export_file_name(now: DateTime<Utc>) -> String {
    let stamp = now
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace([':', '.'], "-");
    format!("{}{}.xlsx", EXPORT_FILE_PREFIX, stamp)
}

fn write_text(sheet: &mut Worksheet, row: u32, col: u16, text: &str) -> Result<(), XlsxError> {
    // Blank cells stay unwritten.
    if !text.is_empty() {
        sheet.write_string(row, col, text)?;
    }
    Ok(())
}

/// Writes a source cell back with its original kind.
fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> Result<(), XlsxError> {
    match cell {
        CellValue::Empty => {}
        CellValue::Text(text) => write_text(sheet, row, col, text)?,
        CellValue::Number(n) => {
            sheet.write_number(row, col, *n)?;
        }
        CellValue::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}

fn write_row(sheet: &mut Worksheet, row: u32, flat: &FlatRow) -> Result<(), XlsxError> {
    write_cell(sheet, row, 0, &flat.id_cell)?;
    write_text(sheet, row, 1, &flat.user_text)?;
    write_text(sheet, row, 2, &flat.bot_text)?;
    write_text(sheet, row, 3, &flat.feedback)?;
    for (offset, value) in flat.categories.iter().enumerate() {
        write_text(sheet, row, 4 + offset as u16, value)?;
    }
    Ok(())
}

/// Writes exported rows into a single-sheet workbook at `path`.
pub fn write_export(path: &Path, rows: &[FlatRow]) -> Result<(), AnnotatorError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(EXPORT_SHEET_NAME)?;

    for (col, header) in export_headers().into_iter().enumerate() {
        sheet.write_string(0, col as u16, header)?;
    }
    for (i, flat) in rows.iter().enumerate() {
        let row = u32::try_from(i + 1)
            .map_err(|_| AnnotatorError::Export("too many rows for one sheet".to_string()))?;
        write_row(sheet, row, flat)?;
    }

    workbook.save(path)?;
    info!("Wrote {} row(s) to '{}'.", rows.len(), path.display());
    Ok(())
}
