// src/ui/elements/conversation_list.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::annotation::events::RequestSelectConversation;
use crate::annotation::AnnotationSession;

pub(super) fn show_conversation_list(
    ctx: &mut egui::Context,
    session: &AnnotationSession,
    select_writer: &mut EventWriter<RequestSelectConversation>,
) {
    let idle = session.pending().is_none();

    egui::SidePanel::left("annotator_conversation_list")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Conversations");
            ui.label(format!(
                "{} of {} annotated",
                session.store().len(),
                session.conversations().len()
            ));
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("conversation_list_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for entry in session.list_entries() {
                        let marker = if entry.annotated { "✔ " } else { "" };
                        let text = format!(
                            "{}Conversation {}\nID: {}",
                            marker,
                            entry.index + 1,
                            entry.id.label()
                        );
                        let response = ui.add_enabled(
                            idle,
                            egui::SelectableLabel::new(entry.active, text),
                        );
                        if response.clicked() && !entry.active {
                            select_writer.write(RequestSelectConversation(entry.index));
                        }
                    }
                });
        });
}
