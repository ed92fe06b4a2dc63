//! Owner groups of the form.
//!
//! Sections are drawn by index from the owner list every frame. A remove
//! click is only recorded while iterating and applied afterwards.

use eframe::egui;
use log::info;

use crate::backend::domain::OwnerList;
use crate::ui::app_state::DogQrApp;
use crate::ui::components::form_fields::render_text_row;

impl DogQrApp {
    pub fn render_owner_sections(&mut self, ui: &mut egui::Ui) {
        let mut pending_removal = None;

        for (index, owner) in self.form.owners.iter_mut() {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(OwnerList::title(index)).strong());

                render_text_row(ui, "First Name:", &mut owner.first_name);
                render_text_row(ui, "Last Name:", &mut owner.last_name);
                render_text_row(ui, "Street and Number:", &mut owner.street_and_number);
                render_text_row(ui, "Postal Code and City:", &mut owner.postal_code_and_city);
                render_text_row(ui, "Country:", &mut owner.country);

                if OwnerList::is_removable(index) {
                    ui.add_space(6.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("Remove this owner").clicked() {
                            pending_removal = Some(index);
                        }
                    });
                }
            });
            ui.add_space(6.0);
        }

        if let Some(index) = pending_removal {
            info!("👤 UI: Remove clicked for {}", OwnerList::title(index));
            self.clear_messages();
            if let Err(e) = self.form.owners.remove_owner(index) {
                self.warning_message = Some(e.to_string());
            }
        }
    }
}
