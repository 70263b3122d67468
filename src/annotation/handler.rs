// src/annotation/handler.rs

use bevy::prelude::*;
use rfd::FileDialog;

use super::events::*;
use super::io::INPUT_FILE_EXTENSIONS;
use super::session::{AnnotationSession, PendingOperation};
use crate::settings::AppSettings;

/// Refuses an operation while a background task holds the session.
/// Returns true when the caller may proceed.
fn ensure_idle(
    session: &AnnotationSession,
    action: &str,
    feedback_writer: &mut EventWriter<AnnotationFeedback>,
) -> bool {
    match session.pending() {
        Some(pending) => {
            let msg = format!("Cannot {} while {}.", action, pending.describe());
            warn!("Annotation: {}", msg);
            feedback_writer.write(AnnotationFeedback::new(FeedbackLevel::Warning, msg));
            false
        }
        None => true,
    }
}

/// Handles `RequestPickInputFile` with a blocking file dialog.
pub(crate) fn handle_pick_input_file_request(
    mut events: EventReader<RequestPickInputFile>,
    session: Res<AnnotationSession>,
    settings: Res<AppSettings>,
    mut load_writer: EventWriter<RequestLoadWorkbook>,
    mut feedback_writer: EventWriter<AnnotationFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    if !ensure_idle(&session, "open a file", &mut feedback_writer) {
        return;
    }

    let mut dialog = FileDialog::new().add_filter("Spreadsheets", &INPUT_FILE_EXTENSIONS);
    if let Some(dir) = &settings.last_input_dir {
        dialog = dialog.set_directory(dir);
    }

    match dialog.pick_file() {
        Some(path) => {
            info!("Annotation: File picked: '{}'.", path.display());
            load_writer.write(RequestLoadWorkbook { path });
        }
        None => {
            info!("Annotation: File selection cancelled.");
            feedback_writer.write(AnnotationFeedback::new(
                FeedbackLevel::Info,
                "File selection cancelled.",
            ));
        }
    }
}

/// Applies a finished load: replaces the session on success, leaves it
/// untouched on failure.
pub(crate) fn handle_workbook_loaded(
    mut events: EventReader<WorkbookLoaded>,
    mut session: ResMut<AnnotationSession>,
    mut settings: ResMut<AppSettings>,
    mut changed_writer: EventWriter<ActiveConversationChanged>,
    mut feedback_writer: EventWriter<AnnotationFeedback>,
) {
    for event in events.read() {
        session.finish(PendingOperation::Loading);
        match &event.result {
            Ok(conversations) => {
                let count = conversations.len();
                session.replace_conversations(conversations.clone(), Some(event.path.clone()));

                let input_dir = event.path.parent().map(|p| p.to_path_buf());
                if input_dir.is_some() && settings.last_input_dir != input_dir {
                    settings.last_input_dir = input_dir;
                }

                info!(
                    "Annotation: Session replaced with {} conversation(s) from '{}'.",
                    count,
                    event.path.display()
                );
                changed_writer.write(ActiveConversationChanged);
                feedback_writer.write(AnnotationFeedback::new(
                    FeedbackLevel::Success,
                    "File loaded successfully!",
                ));
            }
            Err(e) => {
                error!("Annotation: Failed to load '{}': {}", event.path.display(), e);
                feedback_writer.write(AnnotationFeedback::new(
                    FeedbackLevel::Error,
                    format!("Error loading file: {}", e),
                ));
            }
        }
    }
}

pub(crate) fn handle_navigate_request(
    mut events: EventReader<RequestNavigate>,
    mut session: ResMut<AnnotationSession>,
    mut changed_writer: EventWriter<ActiveConversationChanged>,
    mut feedback_writer: EventWriter<AnnotationFeedback>,
) {
    for event in events.read() {
        if !ensure_idle(&session, "navigate", &mut feedback_writer) {
            continue;
        }
        let (moved, boundary_msg) = match event.0 {
            NavigateDirection::Previous => (session.retreat(), "This is the first conversation"),
            NavigateDirection::Next => (session.advance(), "This is the last conversation"),
        };
        if moved {
            debug!("Annotation: Moved to conversation index {}.", session.current_index());
            changed_writer.write(ActiveConversationChanged);
        } else if session.is_loaded() {
            feedback_writer.write(AnnotationFeedback::new(FeedbackLevel::Warning, boundary_msg));
        }
    }
}

pub(crate) fn handle_select_conversation_request(
    mut events: EventReader<RequestSelectConversation>,
    mut session: ResMut<AnnotationSession>,
    mut changed_writer: EventWriter<ActiveConversationChanged>,
    mut feedback_writer: EventWriter<AnnotationFeedback>,
) {
    for event in events.read() {
        if !ensure_idle(&session, "switch conversations", &mut feedback_writer) {
            continue;
        }
        if session.current_index() == event.0 {
            continue;
        }
        if session.select(event.0) {
            changed_writer.write(ActiveConversationChanged);
        } else {
            warn!("Annotation: Ignoring selection of out-of-range index {}.", event.0);
        }
    }
}

pub(crate) fn handle_save_annotation_request(
    mut events: EventReader<RequestSaveAnnotation>,
    mut session: ResMut<AnnotationSession>,
    mut feedback_writer: EventWriter<AnnotationFeedback>,
) {
    for event in events.read() {
        if !ensure_idle(&session, "save", &mut feedback_writer) {
            continue;
        }
        match session.save_current(&event.selections, &event.comments) {
            Ok(id) => {
                info!(
                    "Annotation: Saved {} bucket(s) for conversation '{}'.",
                    event.selections.len(),
                    id
                );
                feedback_writer.write(AnnotationFeedback::new(
                    FeedbackLevel::Success,
                    "Annotations saved!",
                ));
            }
            Err(e) => {
                warn!("Annotation: Save refused: {}", e);
                feedback_writer
                    .write(AnnotationFeedback::new(FeedbackLevel::Warning, e.to_string()));
            }
        }
    }
}

pub(crate) fn handle_export_finished(
    mut events: EventReader<ExportFinished>,
    mut session: ResMut<AnnotationSession>,
    mut feedback_writer: EventWriter<AnnotationFeedback>,
) {
    for event in events.read() {
        session.finish(PendingOperation::Exporting);
        match &event.result {
            Ok(summary) => {
                info!(
                    "Annotation: Exported {} conversation(s) to '{}'.",
                    summary.conversations,
                    summary.path.display()
                );
                feedback_writer.write(AnnotationFeedback::new(
                    FeedbackLevel::Success,
                    format!("Downloaded {} conversation(s)!", summary.conversations),
                ));
            }
            Err(e) => {
                error!("Annotation: Export failed: {}", e);
                feedback_writer.write(AnnotationFeedback::new(
                    FeedbackLevel::Error,
                    format!("Error downloading file: {}", e),
                ));
            }
        }
    }
}
