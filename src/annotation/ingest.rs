// src/annotation/ingest.rs

use bevy::log::warn;
use serde::{Deserialize, Serialize};

use super::definitions::{
    CellValue, RawRow, Record, BOT_TEXT_COLUMN, FEEDBACK_COLUMN, ID_COLUMN,
    USER_TEXT_COLUMN,
};
use super::errors::AnnotatorError;

/// What to do with a non-blank row whose `Id` cell is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingIdPolicy {
    /// Collect all such rows into one conversation with an empty identifier.
    #[default]
    Group,
    /// Fail the load.
    Reject,
}

fn cell_text(row: &RawRow, column: &str) -> String {
    row.get(column).map(CellValue::to_text).unwrap_or_default()
}

/// Turns decoded rows into records, preserving input order.
///
/// `first_row_number` is the 1-based spreadsheet row of `rows[0]`, used in
/// error messages. Fully blank rows are skipped.
pub fn records_from_rows(
    rows: &[RawRow],
    first_row_number: usize,
    policy: MissingIdPolicy,
) -> Result<Vec<Record>, AnnotatorError> {
    let mut records = Vec::with_capacity(rows.len());
    let mut missing_id_rows = 0usize;

    for (i, row) in rows.iter().enumerate() {
        if row.values().all(CellValue::is_blank) {
            continue;
        }

        let id_cell = row.get(ID_COLUMN).cloned().unwrap_or_default();
        if id_cell.is_blank() {
            match policy {
                MissingIdPolicy::Reject => {
                    return Err(AnnotatorError::Parse(format!(
                        "row {} has no '{}' value",
                        first_row_number + i,
                        ID_COLUMN
                    )));
                }
                MissingIdPolicy::Group => missing_id_rows += 1,
            }
        }

        let feedback = row
            .get(FEEDBACK_COLUMN)
            .filter(|cell| !cell.is_blank())
            .map(CellValue::to_text);

        records.push(Record::new(
            id_cell,
            cell_text(row, USER_TEXT_COLUMN),
            cell_text(row, BOT_TEXT_COLUMN),
            feedback.as_deref(),
        ));
    }

    if missing_id_rows > 0 {
        warn!(
            "Ingest: {} row(s) without '{}' grouped into one unidentified conversation.",
            missing_id_rows, ID_COLUMN
        );
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, CellValue)]) -> RawRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn maps_named_columns_and_defaults_missing_text() {
        let rows = vec![
            row(&[
                (ID_COLUMN, CellValue::Number(7.0)),
                (USER_TEXT_COLUMN, text("hi")),
            ]),
            row(&[
                (ID_COLUMN, CellValue::Number(7.0)),
                (BOT_TEXT_COLUMN, text("hello")),
                (FEEDBACK_COLUMN, text("Positive")),
            ]),
        ];
        let records = records_from_rows(&rows, 2, MissingIdPolicy::Group).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "7");
        assert_eq!(records[0].user_text, "hi");
        assert_eq!(records[0].bot_text, "");
        assert_eq!(records[0].feedback, None);
        assert_eq!(records[1].feedback.as_deref(), Some("Positive"));
    }

    #[test]
    fn skips_blank_rows() {
        let rows = vec![
            row(&[(ID_COLUMN, text("a")), (USER_TEXT_COLUMN, text("x"))]),
            row(&[(ID_COLUMN, CellValue::Empty), (USER_TEXT_COLUMN, text(" "))]),
            RawRow::new(),
        ];
        let records = records_from_rows(&rows, 2, MissingIdPolicy::Reject).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_id_grouped_under_empty_identifier() {
        let rows = vec![
            row(&[(USER_TEXT_COLUMN, text("orphan one"))]),
            row(&[(ID_COLUMN, text("")), (USER_TEXT_COLUMN, text("orphan two"))]),
        ];
        let records = records_from_rows(&rows, 2, MissingIdPolicy::Group).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.id.is_missing()));
    }

    #[test]
    fn missing_id_rejected_with_row_number() {
        let rows = vec![
            row(&[(ID_COLUMN, text("a")), (USER_TEXT_COLUMN, text("x"))]),
            row(&[(USER_TEXT_COLUMN, text("orphan"))]),
        ];
        let err = records_from_rows(&rows, 2, MissingIdPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            AnnotatorError::Parse("row 3 has no 'Id' value".to_string())
        );

        let err = records_from_rows(&rows, 5, MissingIdPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            AnnotatorError::Parse("row 6 has no 'Id' value".to_string())
        );
    }

    #[test]
    fn blank_feedback_is_absent() {
        let rows = vec![row(&[(ID_COLUMN, text("a")), (FEEDBACK_COLUMN, text("  "))])];
        let records = records_from_rows(&rows, 2, MissingIdPolicy::Group).unwrap();
        assert_eq!(records[0].feedback, None);
    }
}
