//! Typed failures of the dog QR pipeline.
//!
//! Each service returns its own error enum; [`DogQrError`] wraps them for the
//! [`Backend`](crate::backend::Backend) so the UI can turn any failure into a
//! message with a single `to_string()`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OwnerListError {
    /// The first owner is mandatory and can never be removed
    #[error("At least one owner is required; Owner {} cannot be removed", .position + 1)]
    InvalidOperation { position: usize },

    #[error("There is no owner at position {} (the form has {len} owners)", .position + 1)]
    OutOfRange { position: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload does not describe a dog: {0}")]
    Invalid(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BarcodeError {
    #[error("The dog information is too large for a QR code ({bytes} bytes); shorten some fields or remove an owner")]
    PayloadTooLarge { bytes: usize },

    #[error("QR code generation failed: {0}")]
    Encoding(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read the QR code image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Could not compose the PDF page: {0}")]
    Document(#[from] lopdf::Error),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum DogQrError {
    #[error(transparent)]
    OwnerList(#[from] OwnerListError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Barcode(#[from] BarcodeError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_list_error_display_is_one_based() {
        let error = OwnerListError::InvalidOperation { position: 0 };
        assert_eq!(
            error.to_string(),
            "At least one owner is required; Owner 1 cannot be removed"
        );

        let error = OwnerListError::OutOfRange { position: 4, len: 2 };
        assert_eq!(
            error.to_string(),
            "There is no owner at position 5 (the form has 2 owners)"
        );
    }

    #[test]
    fn test_umbrella_error_is_transparent() {
        let error: DogQrError = BarcodeError::PayloadTooLarge { bytes: 4000 }.into();
        assert!(error.to_string().starts_with("The dog information is too large"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: DogQrError = ExportError::io("/locked/rex_qr.png", io).into();
        assert_eq!(error.to_string(), "Could not write /locked/rex_qr.png: denied");
    }
}
