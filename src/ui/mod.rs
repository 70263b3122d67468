// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

// Declare UI element modules
pub mod elements;
pub mod state;
pub mod systems;

use crate::annotation::events::FeedbackLevel;
use crate::annotation::plugin::AnnotationSystemSet;
use elements::annotator::annotator_ui;
use state::AnnotationFormState;
use systems::{expire_ui_feedback, handle_ui_feedback, sync_form_with_active_conversation};

/// Current status banner. An empty message means nothing is shown.
#[derive(Resource, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub level: FeedbackLevel,
    /// `Time::elapsed_secs_f64` at which the banner hides itself.
    pub expires_at: f64,
}

impl Default for UiFeedbackState {
    fn default() -> Self {
        Self {
            last_message: String::new(),
            level: FeedbackLevel::Info,
            expires_at: 0.0,
        }
    }
}

/// Plugin for the annotator window.
pub struct AnnotatorUiPlugin;

impl Plugin for AnnotatorUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<AnnotationFormState>()
            .add_systems(
                Update,
                (
                    sync_form_with_active_conversation,
                    (expire_ui_feedback, handle_ui_feedback).chain(),
                )
                    .after(AnnotationSystemSet::FileOperations),
            )
            .add_systems(EguiContextPass, annotator_ui);

        info!("AnnotatorUiPlugin initialized.");
    }
}
