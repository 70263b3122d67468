// src/ui/elements/top_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::annotation::events::{
    NavigateDirection, RequestExport, RequestNavigate, RequestPickInputFile,
};
use crate::annotation::AnnotationSession;
use crate::ui::state::AnnotationFormState;
use crate::ui::UiFeedbackState;

use super::annotator::{feedback_color, AnnotatorEventWriters};

pub(super) fn show_top_panel(
    ctx: &mut egui::Context,
    session: &AnnotationSession,
    form: &AnnotationFormState,
    ui_feedback: &UiFeedbackState,
    writers: &mut AnnotatorEventWriters,
) {
    let Some(view) = session.view() else {
        return;
    };
    let busy = session.pending();

    egui::TopBottomPanel::top("annotator_top_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading(view.title());
            if let Some(source) = session.source().and_then(|p| p.file_name()) {
                ui.label(format!("({})", source.to_string_lossy()));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(busy.is_none(), egui::Button::new("📂 Open another file"))
                    .clicked()
                {
                    writers.pick_file.write(RequestPickInputFile);
                }
                if let Some(pending) = busy {
                    ui.label(format!("{}...", pending.describe()));
                    ui.spinner();
                }
            });
        });

        ui.add(egui::ProgressBar::new(view.progress()).text(view.progress_text()));

        ui.horizontal(|ui| {
            let idle = busy.is_none();
            if ui.add_enabled(idle, egui::Button::new("⬅ Previous")).clicked() {
                writers.navigate.write(RequestNavigate(NavigateDirection::Previous));
            }
            if ui.add_enabled(idle, egui::Button::new("Next ➡")).clicked() {
                writers.navigate.write(RequestNavigate(NavigateDirection::Next));
            }
            ui.separator();
            let save_button = egui::Button::new("💾 Save annotations");
            let save_response = ui
                .add_enabled(idle, save_button)
                .on_hover_text("Saves the checked buckets for this conversation");
            if save_response.clicked() {
                writers.save.write(form.to_save_request());
            }
            ui.separator();
            let annotated = session.store().len();
            let export_response = ui
                .add_enabled(idle, egui::Button::new("⬇ Download annotations"))
                .on_hover_text(format!("{} conversation(s) annotated", annotated));
            if export_response.clicked() {
                debug!("Export requested with {} annotated conversation(s).", annotated);
                writers.export.write(RequestExport);
            }
        });

        if !ui_feedback.last_message.is_empty() {
            let color = feedback_color(ui_feedback.level, ui);
            ui.colored_label(color, &ui_feedback.last_message);
        }
        ui.add_space(4.0);
    });
}
