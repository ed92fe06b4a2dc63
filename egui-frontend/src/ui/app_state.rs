//! # App State Module
//!
//! Central state of the dog form window: the backend, the live form, the
//! preview of the last generated QR code and the messages shown under the
//! buttons.

use log::info;

use crate::backend::{Backend, EncodingConfig};
use crate::backend::domain::DogForm;

/// Main application struct for the egui dog form
pub struct DogQrApp {
    pub backend: Backend,
    pub form: DogForm,

    // Preview of the last generated code
    pub qr_texture: Option<egui::TextureHandle>,

    // User-facing messages
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub warning_message: Option<String>,
}

impl DogQrApp {
    /// Create the app with an empty form dated today
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EncodingConfig) -> Result<Self, anyhow::Error> {
        config.validate()?;
        info!("🚀 Initializing DogQrApp");

        Ok(Self {
            backend: Backend::new(config),
            form: DogForm::default(),
            qr_texture: None,
            error_message: None,
            success_message: None,
            warning_message: None,
        })
    }

    /// Clear success/error/warning messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.warning_message = None;
    }
}
