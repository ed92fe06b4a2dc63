//! Shared form widgets.

use eframe::egui;

use crate::backend::domain::ChoiceField;

const FIELD_WIDTH: f32 = 260.0;

/// Label above a single-line text input
pub fn render_text_field(ui: &mut egui::Ui, label: &str, value: &mut String) -> egui::Response {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH))
}

/// Label and input on one line, used inside owner groups
pub fn render_text_row(ui: &mut egui::Ui, label: &str, value: &mut String) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH))
        })
        .inner
    })
    .inner
}

/// Combo box over `options`, followed by a free-text input while "Other" is selected
pub fn render_choice_field(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    options: &[&str],
    field: &mut ChoiceField,
    placeholder: &str,
) {
    ui.label(label);
    egui::ComboBox::from_id_source(id)
        .selected_text(field.selected.clone())
        .width(FIELD_WIDTH)
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(&mut field.selected, option.to_string(), *option);
            }
        });

    if field.shows_custom_input() {
        ui.add(
            egui::TextEdit::singleline(&mut field.custom)
                .hint_text(placeholder)
                .desired_width(FIELD_WIDTH),
        );
    }
}
