// src/ui/elements/bucket_panel.rs
use bevy_egui::egui;

use crate::annotation::Category;
use crate::ui::state::AnnotationFormState;

pub(super) fn show_bucket_panel(ui: &mut egui::Ui, form: &mut AnnotationFormState) {
    ui.heading("Buckets");
    if !form.any_checked() {
        ui.weak("Select at least one bucket before saving.");
    }
    ui.add_space(4.0);

    for category in Category::ALL {
        let bucket = form.bucket_mut(category);
        ui.push_id(category.index(), |ui| {
            ui.checkbox(&mut bucket.checked, category.label());
            ui.add(
                egui::TextEdit::multiline(&mut bucket.comment)
                    .hint_text(format!("Add comments for {}", category.label()))
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
        });
        ui.add_space(6.0);
    }
}
