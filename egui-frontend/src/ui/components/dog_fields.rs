//! Dog section of the form.

use eframe::egui;
use shared::{Gender, BREED_OPTIONS, CLASS_OPTIONS};

use crate::ui::app_state::DogQrApp;
use crate::ui::components::form_fields::{render_choice_field, render_text_field};

impl DogQrApp {
    pub fn render_dog_fields(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.form;

        render_text_field(ui, "Dog Name:", &mut form.name);
        ui.add_space(4.0);

        render_choice_field(ui, "breed", "Breed:", BREED_OPTIONS, &mut form.breed, "Enter breed");
        ui.add_space(4.0);

        render_choice_field(ui, "class", "Class:", CLASS_OPTIONS, &mut form.class, "Enter class");
        ui.add_space(4.0);

        ui.label("Gender:");
        egui::ComboBox::from_id_source("gender")
            .selected_text(form.gender.as_str())
            .show_ui(ui, |ui| {
                for gender in Gender::ALL {
                    ui.selectable_value(&mut form.gender, gender, gender.as_str());
                }
            });
        ui.add_space(4.0);

        egui::Grid::new("dog_numbers")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Chip Number:");
                ui.text_edit_singleline(&mut form.chip_number);
                ui.end_row();

                ui.label("License Number:");
                ui.text_edit_singleline(&mut form.license_number);
                ui.end_row();

                ui.label("Pedigree Number:");
                ui.text_edit_singleline(&mut form.pedigree_number);
                ui.end_row();

                ui.label("Birth Date:");
                ui.add(egui_extras::DatePickerButton::new(&mut form.birth_date).id_source("birth_date"));
                ui.end_row();
            });
    }
}
