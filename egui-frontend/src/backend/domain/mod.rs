//! # Domain Module
//!
//! Business logic of the dog QR form, independent of egui.
//!
//! ## Module Organization
//!
//! - **owner_list**: ordered owner collection, first owner mandatory, 1-based numbering
//! - **dog_form**: live form state and the record snapshot taken at export time
//! - **payload_service**: canonical JSON payload for a dog record
//! - **barcode_service**: payload to QR code PNG
//! - **pdf_page**: single letter page with the QR code centered on it
//! - **export_service**: atomic PNG/PDF writes with scoped temp files
//! - **errors**: typed failures for every step above
//!
//! ## Flow
//!
//! form → `assemble_record()` → `PayloadService::serialize` →
//! `BarcodeService::encode` → `ExportService::export`

pub mod owner_list;
pub mod dog_form;
pub mod payload_service;
pub mod barcode_service;
pub mod pdf_page;
pub mod export_service;
pub mod errors;

pub use owner_list::*;
pub use dog_form::*;
pub use payload_service::*;
pub use barcode_service::*;
pub use export_service::*;
pub use errors::*;
