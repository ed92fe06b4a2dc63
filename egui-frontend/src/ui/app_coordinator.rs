//! # App Coordinator Module
//!
//! The eframe update loop: one scrollable column with the dog fields, the
//! owner sections, the action buttons, messages and the QR preview.

use eframe::egui;

use crate::ui::app_state::DogQrApp;

impl eframe::App for DogQrApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Dog Information");
                    ui.add_space(8.0);

                    self.render_dog_fields(ui);

                    ui.add_space(10.0);
                    ui.separator();

                    self.render_owner_sections(ui);

                    ui.add_space(10.0);

                    self.render_export_actions(ui);
                    self.render_messages(ui);
                    self.render_qr_preview(ui);
                });
        });
    }
}

impl DogQrApp {
    fn render_messages(&self, ui: &mut egui::Ui) {
        if let Some(warning) = &self.warning_message {
            ui.colored_label(egui::Color32::from_rgb(200, 140, 0), format!("⚠ {}", warning));
        }
        if let Some(error) = &self.error_message {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
        }
        if let Some(success) = &self.success_message {
            ui.colored_label(egui::Color32::DARK_GREEN, format!("✅ {}", success));
        }
    }

    fn render_qr_preview(&self, ui: &mut egui::Ui) {
        if let Some(texture) = &self.qr_texture {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.image(egui::load::SizedTexture::from_handle(texture));
            });
        }
    }
}
