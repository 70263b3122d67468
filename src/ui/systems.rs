// src/ui/systems.rs
use bevy::prelude::*;

use crate::annotation::events::{ActiveConversationChanged, AnnotationFeedback};
use crate::annotation::AnnotationSession;
use crate::settings::AppSettings;
use crate::ui::{state::AnnotationFormState, UiFeedbackState};

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<AnnotationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
    settings: Res<AppSettings>,
    time: Res<Time>,
) {
    // Only the most recent message of the frame is shown.
    let Some(event) = feedback_events.read().last() else {
        return;
    };
    ui_feedback_state.last_message = event.message.clone();
    ui_feedback_state.level = event.level;
    ui_feedback_state.expires_at =
        time.elapsed_secs_f64() + f64::from(settings.status_duration_secs.max(0.0));
    if event.is_error() {
        warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
    } else {
        info!("UI Feedback: {}", ui_feedback_state.last_message);
    }
}

/// Hides the status banner once its display time has passed.
pub fn expire_ui_feedback(mut ui_feedback_state: ResMut<UiFeedbackState>, time: Res<Time>) {
    if !ui_feedback_state.last_message.is_empty()
        && time.elapsed_secs_f64() >= ui_feedback_state.expires_at
    {
        ui_feedback_state.last_message.clear();
        trace!("Status banner dismissed.");
    }
}

/// Refills the bucket form from the store whenever the active conversation
/// changes.
pub fn sync_form_with_active_conversation(
    mut events: EventReader<ActiveConversationChanged>,
    session: Res<AnnotationSession>,
    mut form: ResMut<AnnotationFormState>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();
    form.populate(&session.load_current());
}
