// src/annotation/definitions.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// --- Column names (exact match, case-sensitive) ---
pub const ID_COLUMN: &str = "Id";
pub const USER_TEXT_COLUMN: &str = "llmGeneratedUserMessage";
pub const BOT_TEXT_COLUMN: &str = "botMessage";
pub const FEEDBACK_COLUMN: &str = "Customer Feedback";

/// Display sentinel for a missing or unrecognized feedback label.
pub const FEEDBACK_NOT_AVAILABLE: &str = "N/A";

/// A single decoded spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text form of the cell. Integral numbers drop the fractional part so
    /// `1.0` and `"1"` read the same.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// One input row: column header to cell.
pub type RawRow = HashMap<String, CellValue>;

pub const MISSING_ID_LABEL: &str = "(no Id)";

/// Identity of a conversation: the canonical text of its `Id` cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The shared bucket for rows that carry no identifier.
    pub fn is_missing(&self) -> bool {
        self.0.is_empty()
    }

    /// Text shown in the UI; the missing bucket gets a placeholder.
    pub fn label(&self) -> &str {
        if self.is_missing() {
            MISSING_ID_LABEL
        } else {
            &self.0
        }
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One ingested turn of a conversation. Immutable after ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: ConversationId,
    /// The `Id` cell as read, written back unchanged on export.
    pub id_cell: CellValue,
    pub user_text: String,
    pub bot_text: String,
    /// Raw feedback text as found in the sheet; only meaningful on the
    /// final record of a conversation.
    pub feedback: Option<String>,
}

impl Record {
    /// Builds a record from its `Id` cell; the identifier is the cell's
    /// trimmed canonical text.
    pub fn new(
        id_cell: impl Into<CellValue>,
        user_text: impl Into<String>,
        bot_text: impl Into<String>,
        feedback: Option<&str>,
    ) -> Self {
        let id_cell = id_cell.into();
        Self {
            id: ConversationId::new(id_cell.to_text().trim()),
            id_cell,
            user_text: user_text.into(),
            bot_text: bot_text.into(),
            feedback: feedback.map(str::to_string),
        }
    }
}

/// Ordered, non-empty run of records sharing one identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    id: ConversationId,
    records: Vec<Record>,
}

impl Conversation {
    /// Starts a conversation from its first record.
    pub fn start(first: Record) -> Self {
        Self {
            id: first.id.clone(),
            records: vec![first],
        }
    }

    /// Appends a record. Callers keep the shared-identifier invariant;
    /// grouping is the only producer.
    pub(crate) fn push(&mut self, record: Record) {
        debug_assert_eq!(record.id, self.id);
        self.records.push(record);
    }

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn last(&self) -> &Record {
        &self.records[self.records.len() - 1]
    }

    /// Feedback of the final record, classified for display.
    pub fn feedback_label(&self) -> FeedbackLabel {
        FeedbackLabel::classify(self.last().feedback.as_deref())
    }
}

/// Customer feedback as shown in the conversation header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackLabel {
    Positive,
    Negative,
    NotAvailable,
}

impl FeedbackLabel {
    pub fn classify(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("positive") => FeedbackLabel::Positive,
            Some("negative") => FeedbackLabel::Negative,
            _ => FeedbackLabel::NotAvailable,
        }
    }

    pub fn display(self) -> &'static str {
        match self {
            FeedbackLabel::Positive => "Positive",
            FeedbackLabel::Negative => "Negative",
            FeedbackLabel::NotAvailable => FEEDBACK_NOT_AVAILABLE,
        }
    }

    pub fn is_negative(self) -> bool {
        self == FeedbackLabel::Negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells_canonicalize_without_fraction() {
        assert_eq!(CellValue::Number(1.0).to_text(), "1");
        assert_eq!(CellValue::Number(-42.0).to_text(), "-42");
        assert_eq!(CellValue::Number(1.5).to_text(), "1.5");
        assert_eq!(CellValue::Text("abc".into()).to_text(), "abc");
        assert_eq!(CellValue::Empty.to_text(), "");
    }

    #[test]
    fn blank_cells() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".into()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn record_keeps_raw_id_cell_and_canonical_identifier() {
        let numeric = Record::new(17.0, "", "", None);
        assert_eq!(numeric.id.as_str(), "17");
        assert_eq!(numeric.id_cell, CellValue::Number(17.0));

        let padded = Record::new(" 17 ", "", "", None);
        assert_eq!(padded.id, numeric.id);
        assert_eq!(padded.id_cell, CellValue::Text(" 17 ".to_string()));

        let blank = Record::new(CellValue::Empty, "", "", None);
        assert!(blank.id.is_missing());
        assert_eq!(blank.id.label(), MISSING_ID_LABEL);
        assert_eq!(numeric.id.label(), "17");
    }

    #[test]
    fn feedback_classification_defaults_to_not_available() {
        assert_eq!(FeedbackLabel::classify(Some("Negative")), FeedbackLabel::Negative);
        assert_eq!(FeedbackLabel::classify(Some(" positive ")), FeedbackLabel::Positive);
        assert_eq!(FeedbackLabel::classify(Some("meh")), FeedbackLabel::NotAvailable);
        assert_eq!(FeedbackLabel::classify(None), FeedbackLabel::NotAvailable);
        assert_eq!(FeedbackLabel::NotAvailable.display(), "N/A");
    }

    #[test]
    fn conversation_feedback_comes_from_last_record() {
        let mut conv = Conversation::start(Record::new("1", "hi", "hello", Some("Negative")));
        conv.push(Record::new("1", "bye", "ok", Some("Positive")));
        assert_eq!(conv.len(), 2);
        assert_eq!(conv.feedback_label(), FeedbackLabel::Positive);
        assert_eq!(conv.records()[0].user_text, "hi");
    }
}
