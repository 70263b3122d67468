// src/ui/elements/annotator.rs
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::annotation::events::{
    FeedbackLevel, RequestExport, RequestNavigate, RequestPickInputFile,
    RequestSaveAnnotation, RequestSelectConversation,
};
use crate::annotation::AnnotationSession;
use crate::ui::state::AnnotationFormState;
use crate::ui::UiFeedbackState;

use super::bucket_panel::show_bucket_panel;
use super::conversation_list::show_conversation_list;
use super::conversation_view::show_conversation_view;
use super::top_panel::show_top_panel;

/// Every request the annotator window can emit.
#[derive(SystemParam)]
pub struct AnnotatorEventWriters<'w> {
    pub pick_file: EventWriter<'w, RequestPickInputFile>,
    pub navigate: EventWriter<'w, RequestNavigate>,
    pub select: EventWriter<'w, RequestSelectConversation>,
    pub save: EventWriter<'w, RequestSaveAnnotation>,
    pub export: EventWriter<'w, RequestExport>,
}

pub fn feedback_color(level: FeedbackLevel, ui: &egui::Ui) -> egui::Color32 {
    match level {
        FeedbackLevel::Info => ui.style().visuals.text_color(),
        FeedbackLevel::Success => egui::Color32::from_rgb(40, 160, 70),
        FeedbackLevel::Warning => egui::Color32::from_rgb(220, 150, 20),
        FeedbackLevel::Error => egui::Color32::RED,
    }
}

pub fn annotator_ui(
    mut contexts: EguiContexts,
    session: Res<AnnotationSession>,
    mut form: ResMut<AnnotationFormState>,
    ui_feedback: Res<UiFeedbackState>,
    mut writers: AnnotatorEventWriters,
) {
    let ctx = contexts.ctx_mut();

    if !session.is_loaded() {
        show_upload_screen(ctx, &session, &ui_feedback, &mut writers);
        return;
    }

    show_top_panel(ctx, &session, &form, &ui_feedback, &mut writers);
    show_conversation_list(ctx, &session, &mut writers.select);

    egui::CentralPanel::default().show(ctx, |ui| {
        let busy = session.pending().is_some();
        egui::ScrollArea::vertical()
            .id_salt("annotator_central_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                show_conversation_view(ui, &session);
                ui.separator();
                ui.add_enabled_ui(!busy, |ui| {
                    show_bucket_panel(ui, &mut form);
                });
            });
    });
}

/// Shown until a workbook has been loaded.
fn show_upload_screen(
    ctx: &mut egui::Context,
    session: &AnnotationSession,
    ui_feedback: &UiFeedbackState,
    writers: &mut AnnotatorEventWriters,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.heading("Conversation Annotator");
            ui.label("Open a workbook whose first sheet has an 'Id' column.");
            ui.add_space(12.0);

            match session.pending() {
                Some(pending) => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(format!("Busy: {}...", pending.describe()));
                    });
                }
                None => {
                    if ui.button("📂 Choose workbook").clicked() {
                        writers.pick_file.write(RequestPickInputFile);
                    }
                }
            }

            if !ui_feedback.last_message.is_empty() {
                ui.add_space(8.0);
                let color = feedback_color(ui_feedback.level, ui);
                ui.colored_label(color, &ui_feedback.last_message);
            }
        });
    });
}
