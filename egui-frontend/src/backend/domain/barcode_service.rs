//! # Barcode Service
//!
//! Renders a text payload as a QR code PNG: black modules on a white
//! background, `box_size` pixels per module and a quiet zone of `border`
//! modules on every side.
//!
//! Payloads beyond the capacity of the chosen error-correction level (and
//! fixed version, if any) fail with [`BarcodeError::PayloadTooLarge`]; the
//! data is never truncated.

use image::{GrayImage, ImageFormat, Luma};
use log::{error, info};
use qrcode::types::{Color, QrError};
use qrcode::{EcLevel, QrCode, Version};
use std::io::Cursor;

use crate::backend::config::{EncodingConfig, ErrorCorrection};
use crate::backend::domain::errors::BarcodeError;

/// Largest image side `encode` will allocate
const MAX_SIDE_PX: u32 = 8192;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Rendered QR code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    /// PNG-encoded image bytes
    pub png: Vec<u8>,
    /// Width and height of the square image in pixels
    pub size_px: u32,
    /// Modules per side of the QR symbol, without the quiet zone
    pub modules: u32,
}

#[derive(Debug, Clone)]
pub struct BarcodeService {
    error_correction: ErrorCorrection,
    version: Option<i16>,
    box_size: u32,
    border: u32,
}

impl BarcodeService {
    pub fn new(config: &EncodingConfig) -> Self {
        Self {
            error_correction: config.error_correction,
            version: config.version,
            box_size: config.box_size.max(1),
            border: config.border,
        }
    }

    pub fn encode(&self, payload: &str) -> Result<QrImage, BarcodeError> {
        let code = self.create_qr_code(payload)?;
        let modules = code.width() as u32;
        let colors = code.to_colors();

        let size_px = self.image_side(modules)?;
        let image = GrayImage::from_fn(size_px, size_px, |x, y| {
            let column = (x / self.box_size).checked_sub(self.border);
            let row = (y / self.box_size).checked_sub(self.border);
            match (column, row) {
                (Some(column), Some(row)) if column < modules && row < modules => {
                    match colors[(row * modules + column) as usize] {
                        Color::Dark => DARK,
                        Color::Light => LIGHT,
                    }
                }
                _ => LIGHT,
            }
        });

        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| BarcodeError::Encoding(e.to_string()))?;

        info!(
            "🔳 QR: Encoded {} byte payload into {}x{} modules ({} px, {} byte PNG)",
            payload.len(),
            modules,
            modules,
            size_px,
            png.len()
        );

        Ok(QrImage {
            png,
            size_px,
            modules,
        })
    }

    /// `(modules + 2 * border) * box_size`, bounded by [`MAX_SIDE_PX`]
    fn image_side(&self, modules: u32) -> Result<u32, BarcodeError> {
        self.border
            .checked_mul(2)
            .and_then(|quiet| quiet.checked_add(modules))
            .and_then(|span| span.checked_mul(self.box_size))
            .filter(|side| *side <= MAX_SIDE_PX)
            .ok_or_else(|| {
                BarcodeError::Encoding(format!(
                    "{} modules with a {} module border at {} px per module exceed {} px",
                    modules, self.border, self.box_size, MAX_SIDE_PX
                ))
            })
    }

    fn create_qr_code(&self, payload: &str) -> Result<QrCode, BarcodeError> {
        let level: EcLevel = self.error_correction.into();
        let result = match self.version {
            Some(version) if (1..=40).contains(&version) => {
                QrCode::with_version(payload.as_bytes(), Version::Normal(version), level)
            }
            _ => QrCode::with_error_correction_level(payload.as_bytes(), level),
        };

        result.map_err(|e| match e {
            QrError::DataTooLong => {
                error!(
                    "❌ QR: Payload of {} bytes does not fit at {:?} error correction",
                    payload.len(),
                    self.error_correction
                );
                BarcodeError::PayloadTooLarge {
                    bytes: payload.len(),
                }
            }
            other => BarcodeError::Encoding(other.to_string()),
        })
    }
}

impl Default for BarcodeService {
    fn default() -> Self {
        Self::new(&EncodingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::{MAX_BORDER, MAX_BOX_SIZE};

    fn decode(qr: &QrImage) -> GrayImage {
        image::load_from_memory(&qr.png).unwrap().to_luma8()
    }

    #[test]
    fn test_encode_dimensions_follow_box_and_border() {
        let service = BarcodeService::default();
        let qr = service.encode("{\"Dog\":{\"Name\":\"Rex\"}}").unwrap();

        assert!(qr.modules >= 21);
        assert_eq!(qr.size_px, (qr.modules + 2) * 3);

        let image = decode(&qr);
        assert_eq!(image.dimensions(), (qr.size_px, qr.size_px));
    }

    #[test]
    fn test_quiet_zone_is_white_and_finder_is_black() {
        let config = EncodingConfig {
            box_size: 4,
            border: 2,
            ..EncodingConfig::default()
        };
        let qr = BarcodeService::new(&config).encode("hello").unwrap();
        let image = decode(&qr);

        // quiet zone
        assert_eq!(image.get_pixel(0, 0), &LIGHT);
        assert_eq!(image.get_pixel(7, 7), &LIGHT);
        // top-left corner of the finder pattern
        assert_eq!(image.get_pixel(8, 8), &DARK);
        assert_eq!(image.get_pixel(11, 11), &DARK);
        // bottom-right corner of the image is quiet zone again
        assert_eq!(image.get_pixel(qr.size_px - 1, qr.size_px - 1), &LIGHT);
    }

    #[test]
    fn test_only_black_and_white_pixels() {
        let qr = BarcodeService::default().encode("Cirneco dell´Etna").unwrap();
        let image = decode(&qr);
        assert!(image.pixels().all(|p| *p == DARK || *p == LIGHT));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let service = BarcodeService::default();
        assert_eq!(service.encode("same input").unwrap(), service.encode("same input").unwrap());
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let service = BarcodeService::default();
        let payload = "x".repeat(5000);
        assert_eq!(
            service.encode(&payload),
            Err(BarcodeError::PayloadTooLarge { bytes: 5000 })
        );
    }

    #[test]
    fn test_oversized_geometry_is_an_encoding_error() {
        let huge_border = EncodingConfig {
            border: 2_147_483_648,
            ..EncodingConfig::default()
        };
        assert!(matches!(
            BarcodeService::new(&huge_border).encode("hello"),
            Err(BarcodeError::Encoding(_))
        ));

        let huge_box = EncodingConfig {
            box_size: 1_000_000,
            ..EncodingConfig::default()
        };
        assert!(matches!(
            BarcodeService::new(&huge_box).encode("hello"),
            Err(BarcodeError::Encoding(_))
        ));
    }

    #[test]
    fn test_largest_valid_geometry_fits() {
        let config = EncodingConfig {
            box_size: MAX_BOX_SIZE,
            border: MAX_BORDER,
            ..EncodingConfig::default()
        };
        assert!(config.validate().is_ok());

        // version 40 is 177 modules per side
        let service = BarcodeService::new(&config);
        assert_eq!(service.image_side(177), Ok((177 + 2 * 32) * 32));
    }

    #[test]
    fn test_fixed_version_limits_capacity() {
        let config = EncodingConfig {
            version: Some(1),
            error_correction: ErrorCorrection::High,
            ..EncodingConfig::default()
        };
        let service = BarcodeService::new(&config);

        let qr = service.encode("short").unwrap();
        assert_eq!(qr.modules, 21);

        let result = service.encode(&"y".repeat(100));
        assert_eq!(result, Err(BarcodeError::PayloadTooLarge { bytes: 100 }));
    }
}
