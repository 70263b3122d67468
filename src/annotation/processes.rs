// src/annotation/processes.rs

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;
use chrono::Utc;
use std::any::Any;
use std::panic::{self, UnwindSafe};

use super::errors::AnnotatorError;
use super::events::{
    AnnotationFeedback, ExportFinished, ExportSummary, FeedbackLevel, RequestExport,
    RequestLoadWorkbook, WorkbookLoaded,
};
use super::export::{export, exported_conversation_count};
use super::io::{export_file_name, load_conversations, write_export};
use super::session::{AnnotationSession, PendingOperation};
use crate::settings::AppSettings;

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Runs background file work so that a panic inside a codec becomes an
/// error result instead of a task that never reports back.
pub(crate) fn run_guarded<T>(
    work: impl FnOnce() -> Result<T, AnnotatorError> + UnwindSafe,
    on_panic: fn(String) -> AnnotatorError,
) -> Result<T, AnnotatorError> {
    panic::catch_unwind(work).unwrap_or_else(|payload| {
        let msg = panic_message(payload.as_ref()).to_string();
        error!("Annotation: Background task panicked: {}", msg);
        Err(on_panic(msg))
    })
}

/// Starts a background parse for each `RequestLoadWorkbook`. The session
/// stays locked until `WorkbookLoaded` comes back.
pub(crate) fn process_load_requests_system(
    mut events: EventReader<RequestLoadWorkbook>,
    mut session: ResMut<AnnotationSession>,
    settings: Res<AppSettings>,
    runtime: Res<TokioTasksRuntime>,
    mut feedback_writer: EventWriter<AnnotationFeedback>,
) {
    for event in events.read() {
        if let Err(pending) = session.begin(PendingOperation::Loading) {
            let msg = format!("Cannot load a file while {}.", pending.describe());
            warn!("Annotation: {}", msg);
            feedback_writer.write(AnnotationFeedback::new(FeedbackLevel::Warning, msg));
            continue;
        }

        let path = event.path.clone();
        let policy = settings.missing_id_policy;
        info!("Annotation: Spawning load task for '{}'...", path.display());
        feedback_writer.write(AnnotationFeedback::new(FeedbackLevel::Info, "Loading file..."));

        runtime.spawn_background_task(move |mut ctx| async move {
            let result = run_guarded(|| load_conversations(&path, policy), AnnotatorError::Parse);

            ctx.run_on_main_thread(move |ctx| {
                ctx.world.send_event(WorkbookLoaded { path, result });
            })
            .await;
        });
    }
}

/// Builds the export rows on the main thread, then writes the workbook in
/// the background. The store is only read.
pub(crate) fn process_export_requests_system(
    mut events: EventReader<RequestExport>,
    mut session: ResMut<AnnotationSession>,
    settings: Res<AppSettings>,
    runtime: Res<TokioTasksRuntime>,
    mut feedback_writer: EventWriter<AnnotationFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    if let Some(pending) = session.pending() {
        let msg = format!("Cannot download while {}.", pending.describe());
        warn!("Annotation: {}", msg);
        feedback_writer.write(AnnotationFeedback::new(FeedbackLevel::Warning, msg));
        return;
    }

    let rows = if session.store().is_empty() {
        Vec::new()
    } else {
        export(session.conversations(), session.store())
    };
    if rows.is_empty() {
        let msg = AnnotatorError::NothingToExport.to_string();
        info!("Annotation: {}", msg);
        feedback_writer.write(AnnotationFeedback::new(FeedbackLevel::Warning, msg));
        return;
    }
    if session.begin(PendingOperation::Exporting).is_err() {
        return;
    }

    let conversations = exported_conversation_count(&rows);
    let path = settings
        .resolved_export_dir()
        .join(export_file_name(Utc::now()));
    info!(
        "Annotation: Spawning export task for {} row(s) to '{}'...",
        rows.len(),
        path.display()
    );
    feedback_writer.write(AnnotationFeedback::new(FeedbackLevel::Info, "Preparing download..."));

    runtime.spawn_background_task(move |mut ctx| async move {
        let result = run_guarded(|| write_export(&path, &rows), AnnotatorError::Export)
            .map(|()| ExportSummary {
                path,
                conversations,
            });

        ctx.run_on_main_thread(move |ctx| {
            ctx.world.send_event(ExportFinished { result });
        })
        .await;
    });
}
