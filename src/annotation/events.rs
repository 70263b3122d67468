// src/annotation/events.rs

use bevy::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use super::category::Category;
use super::definitions::Conversation;
use super::errors::AnnotatorError;

/// Event to open the file picker for a workbook.
#[derive(Event, Debug, Clone)]
pub struct RequestPickInputFile;

/// Event to load (and replace the session with) the workbook at `path`.
#[derive(Event, Debug, Clone)]
pub struct RequestLoadWorkbook {
    pub path: PathBuf,
}

/// Sent from the background load task when parsing finished.
#[derive(Event, Debug, Clone)]
pub struct WorkbookLoaded {
    pub path: PathBuf,
    pub result: Result<Vec<Conversation>, AnnotatorError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateDirection {
    Previous,
    Next,
}

/// Event from the prev/next buttons.
#[derive(Event, Debug, Clone)]
pub struct RequestNavigate(pub NavigateDirection);

/// Event from a click in the conversation list.
#[derive(Event, Debug, Clone)]
pub struct RequestSelectConversation(pub usize);

/// Event carrying the form contents for the active conversation.
#[derive(Event, Debug, Clone, Default)]
pub struct RequestSaveAnnotation {
    pub selections: BTreeSet<Category>,
    pub comments: HashMap<Category, String>,
}

/// Event from the download button.
#[derive(Event, Debug, Clone)]
pub struct RequestExport;

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub conversations: usize,
}

/// Sent from the background export task when the file is written (or not).
#[derive(Event, Debug, Clone)]
pub struct ExportFinished {
    pub result: Result<ExportSummary, AnnotatorError>,
}

/// Sent whenever the active conversation changes, including after a load.
/// The form re-reads the stored annotation on this event.
#[derive(Event, Debug, Clone)]
pub struct ActiveConversationChanged;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// User-facing status message.
#[derive(Event, Debug, Clone)]
pub struct AnnotationFeedback {
    pub message: String,
    pub level: FeedbackLevel,
}

impl AnnotationFeedback {
    pub fn new(level: FeedbackLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == FeedbackLevel::Error
    }
}
