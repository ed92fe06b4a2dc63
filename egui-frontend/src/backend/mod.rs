//! # Backend Module for egui Frontend
//!
//! Synchronous services behind the dog form. Everything runs on the UI
//! thread in response to a click; nothing here keeps state between exports
//! apart from the configuration.

use log::info;

pub mod config;
pub mod domain;

pub use config::{EncodingConfig, ErrorCorrection};

use domain::{BarcodeService, DogForm, DogQrError, ExportService, PayloadService, QrImage};
use shared::{ExportRequest, ExportResponse};

/// Everything produced for one "generate" click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrArtifact {
    /// JSON text embedded in the QR code
    pub payload: String,
    pub image: QrImage,
}

/// Main backend struct that orchestrates all services
#[derive(Debug, Clone)]
pub struct Backend {
    pub config: EncodingConfig,
    pub payload_service: PayloadService,
    pub barcode_service: BarcodeService,
    pub export_service: ExportService,
}

impl Backend {
    pub fn new(config: EncodingConfig) -> Self {
        info!("🚀 BACKEND: Initializing with {:?}", config);
        Self {
            payload_service: PayloadService::new(config.indent),
            barcode_service: BarcodeService::new(&config),
            export_service: ExportService::new(),
            config,
        }
    }

    /// Snapshot the form, serialize it and render the QR code
    pub fn generate_qr(&self, form: &DogForm) -> Result<QrArtifact, DogQrError> {
        let record = form.assemble_record();
        let payload = self.payload_service.serialize(&record)?;
        let image = self.barcode_service.encode(&payload)?;
        Ok(QrArtifact { payload, image })
    }

    /// Write a previously generated QR code to the requested destination
    pub fn export(
        &self,
        artifact: &QrArtifact,
        request: &ExportRequest,
    ) -> Result<ExportResponse, DogQrError> {
        Ok(self.export_service.export(request, &artifact.image.png)?)
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new(EncodingConfig::default())
    }
}
