// src/annotation/plugin.rs
use bevy::prelude::*;

use super::events::*;
use super::handler::{
    handle_export_finished, handle_navigate_request, handle_pick_input_file_request,
    handle_save_annotation_request, handle_select_conversation_request, handle_workbook_loaded,
};
use super::processes::{process_export_requests_system, process_load_requests_system};
use super::session::AnnotationSession;

// Define system sets for ordering
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationSystemSet {
    UserInput,      // Dialogs and requests coming from the UI
    ApplyChanges,   // Systems mutating the session
    FileOperations, // Background load/export spawning
}

/// Plugin owning the annotation session and its load/annotate/export flow.
pub struct AnnotationPlugin;

impl Plugin for AnnotationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                AnnotationSystemSet::UserInput,
                AnnotationSystemSet::ApplyChanges.after(AnnotationSystemSet::UserInput),
                AnnotationSystemSet::FileOperations.after(AnnotationSystemSet::ApplyChanges),
            ),
        );

        app.init_resource::<AnnotationSession>();

        app.add_event::<RequestPickInputFile>()
            .add_event::<RequestLoadWorkbook>()
            .add_event::<WorkbookLoaded>()
            .add_event::<RequestNavigate>()
            .add_event::<RequestSelectConversation>()
            .add_event::<RequestSaveAnnotation>()
            .add_event::<RequestExport>()
            .add_event::<ExportFinished>()
            .add_event::<ActiveConversationChanged>()
            .add_event::<AnnotationFeedback>();

        app.add_systems(
            Update,
            handle_pick_input_file_request.in_set(AnnotationSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                handle_workbook_loaded,
                handle_export_finished,
                handle_navigate_request,
                handle_select_conversation_request,
                handle_save_annotation_request,
            )
                .chain()
                .in_set(AnnotationSystemSet::ApplyChanges),
        );
        app.add_systems(
            Update,
            (process_load_requests_system, process_export_requests_system)
                .chain()
                .in_set(AnnotationSystemSet::FileOperations),
        );

        info!("AnnotationPlugin initialized.");
    }
}
