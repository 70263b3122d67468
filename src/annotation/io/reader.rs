// src/annotation/io/reader.rs

use bevy::log::{debug, info};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::annotation::definitions::{CellValue, Conversation, RawRow, ID_COLUMN};
use crate::annotation::errors::AnnotatorError;
use crate::annotation::grouping::group;
use crate::annotation::ingest::{records_from_rows, MissingIdPolicy};

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Text(other.to_string()),
    }
}

/// Builds header-keyed rows from a grid whose first row is the header.
///
/// Columns with a blank header are ignored. The header must contain `Id`.
pub fn rows_from_grid(grid: Vec<Vec<CellValue>>) -> Result<Vec<RawRow>, AnnotatorError> {
    let mut grid = grid.into_iter();
    let header: Vec<String> = grid
        .next()
        .ok_or_else(|| AnnotatorError::Parse("the first sheet is empty".to_string()))?
        .iter()
        .map(CellValue::to_text)
        .collect();

    if !header.iter().any(|h| h == ID_COLUMN) {
        return Err(AnnotatorError::Parse(format!(
            "the header row has no '{}' column",
            ID_COLUMN
        )));
    }

    let rows = grid
        .map(|cells| {
            header
                .iter()
                .zip(cells)
                .filter(|(name, _)| !name.is_empty())
                .map(|(name, cell)| (name.clone(), cell))
                .collect::<RawRow>()
        })
        .collect();
    Ok(rows)
}

/// Header-keyed rows of a sheet, with where they sat in the spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRows {
    pub rows: Vec<RawRow>,
    /// 1-based spreadsheet row of `rows[0]`.
    pub first_row_number: usize,
}

/// Decodes the first sheet of a workbook into header-keyed rows.
///
/// The header is the first used row, which need not be spreadsheet row 1.
pub fn read_first_sheet(path: &Path) -> Result<SheetRows, AnnotatorError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AnnotatorError::Parse("the workbook has no sheets".to_string()))?;
    debug!("Reading sheet '{}' from '{}'", sheet_name, path.display());

    let range = workbook.worksheet_range(&sheet_name)?;
    let header_row = range.start().map(|(row, _)| row as usize).unwrap_or_default();
    let grid: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    Ok(SheetRows {
        rows: rows_from_grid(grid)?,
        first_row_number: header_row + 2,
    })
}

/// Reads, ingests and groups a workbook in one go.
pub fn load_conversations(
    path: &Path,
    policy: MissingIdPolicy,
) -> Result<Vec<Conversation>, AnnotatorError> {
    let sheet = read_first_sheet(path)?;
    let records = records_from_rows(&sheet.rows, sheet.first_row_number, policy)?;
    let record_count = records.len();
    let conversations = group(records);
    if conversations.is_empty() {
        return Err(AnnotatorError::Parse(
            "no conversations found in the first sheet".to_string(),
        ));
    }
    info!(
        "Loaded {} record(s) into {} conversation(s) from '{}'.",
        record_count,
        conversations.len(),
        path.display()
    );
    Ok(conversations)
}
