// src/annotation/errors.rs

use thiserror::Error;

/// Failures surfaced by annotation operations.
///
/// Payloads are owned strings so the error can travel inside Bevy events.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnotatorError {
    #[error("Could not read workbook: {0}")]
    Parse(String),
    #[error("{0}")]
    Validation(String),
    #[error("No annotations to download")]
    NothingToExport,
    #[error("Could not write export: {0}")]
    Export(String),
}

impl From<calamine::Error> for AnnotatorError {
    fn from(err: calamine::Error) -> Self {
        AnnotatorError::Parse(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AnnotatorError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AnnotatorError::Export(err.to_string())
    }
}
