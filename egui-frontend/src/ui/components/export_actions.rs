//! # Export Actions
//!
//! Add-owner, "save as image" and "save as PDF" buttons. Both save buttons
//! first regenerate the QR code from the current form (updating the preview),
//! then ask for a destination. Cancelling the dialog does nothing.

use eframe::egui;
use log::{info, warn};
use shared::{ExportKind, ExportRequest};

use crate::backend::QrArtifact;
use crate::ui::app_state::DogQrApp;

impl DogQrApp {
    pub fn render_export_actions(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered_justified(|ui| {
            if ui.button("Add Second (Next) Owner").clicked() {
                self.clear_messages();
                self.form.owners.add_owner();
            }

            if ui.button("Generate and Save QR Code as Image").clicked() {
                self.generate_and_save(ui.ctx(), ExportKind::Image);
            }

            if ui.button("Save as PDF").clicked() {
                self.generate_and_save(ui.ctx(), ExportKind::Document);
            }
        });
    }

    fn generate_and_save(&mut self, ctx: &egui::Context, kind: ExportKind) {
        self.clear_messages();

        let artifact = match self.backend.generate_qr(&self.form) {
            Ok(artifact) => artifact,
            Err(e) => {
                self.error_message = Some(format!("An error occurred while generating the QR code: {}", e));
                return;
            }
        };
        self.update_preview(ctx, &artifact);

        let dialog = rfd::FileDialog::new()
            .add_filter(kind.filter_name(), &[kind.extension()])
            .set_file_name(kind.suggested_file_name(&self.form.name));

        let destination = match dialog.save_file() {
            Some(path) => path,
            None => {
                info!("📁 UI: Save dialog cancelled");
                return;
            }
        };

        let request = ExportRequest { kind, destination };
        match self.backend.export(&artifact, &request) {
            Ok(response) => self.success_message = Some(response.message),
            Err(e) => {
                let target = match kind {
                    ExportKind::Image => "the image",
                    ExportKind::Document => "PDF",
                };
                self.error_message = Some(format!("An error occurred while saving {}: {}", target, e));
            }
        }
    }

    fn update_preview(&mut self, ctx: &egui::Context, artifact: &QrArtifact) {
        match image::load_from_memory(&artifact.image.png) {
            Ok(decoded) => {
                let rgba = decoded.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                self.qr_texture = Some(ctx.load_texture("qr_preview", color_image, egui::TextureOptions::NEAREST));
            }
            Err(e) => warn!("⚠️ UI: Could not decode QR preview: {}", e),
        }
    }
}
