// src/ui/elements/conversation_view.rs
use bevy_egui::egui;

use crate::annotation::AnnotationSession;

const NEGATIVE_BADGE: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);
const NEUTRAL_BADGE: egui::Color32 = egui::Color32::from_rgb(40, 140, 70);

/// Header and message transcript of the active conversation.
pub(super) fn show_conversation_view(ui: &mut egui::Ui, session: &AnnotationSession) {
    let (Some(view), Some(conversation)) = (session.view(), session.current()) else {
        return;
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("ID: {}", view.id.label())).strong());
        ui.separator();
        ui.label("Customer Feedback:");
        let badge = if view.feedback.is_negative() {
            NEGATIVE_BADGE
        } else {
            NEUTRAL_BADGE
        };
        ui.label(
            egui::RichText::new(format!(" {} ", view.feedback.display()))
                .color(egui::Color32::WHITE)
                .background_color(badge)
                .strong(),
        );
    });
    ui.add_space(6.0);

    for record in conversation.records() {
        if !record.user_text.is_empty() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new("👤 Customer").strong());
                ui.label(&record.user_text);
            });
        }
        if !record.bot_text.is_empty() {
            egui::Frame::group(ui.style())
                .fill(ui.style().visuals.faint_bg_color)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new("🤖 Bot").strong());
                    ui.label(&record.bot_text);
                });
        }
        ui.add_space(4.0);
    }
}
