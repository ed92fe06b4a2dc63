//! # Encoding Configuration
//!
//! Parameters that decide how a dog record becomes a QR code. They are read
//! once at startup from an optional YAML file:
//!
//! ```yaml
//! error_correction: low   # low | medium | quartile | high
//! version: null           # null = smallest symbol that fits, 1..=40 = fixed
//! box_size: 3             # pixels per module
//! border: 1               # quiet zone in modules
//! indent: 4               # JSON indentation, 0 = compact
//! ```
//!
//! The file lives at `<config_dir>/dogtag/config.yaml`. A missing file means
//! defaults; a broken one is logged and also falls back to defaults.

use log::{info, warn};
use qrcode::EcLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::domain::errors::DogQrError;

/// Largest accepted `box_size`, in pixels per module
pub const MAX_BOX_SIZE: u32 = 32;
/// Largest accepted quiet zone, in modules
pub const MAX_BORDER: u32 = 32;

/// QR error-correction strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCorrection {
    #[default]
    Low,
    Medium,
    Quartile,
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodingConfig {
    pub error_correction: ErrorCorrection,
    /// Fixed QR symbol version; `None` picks the smallest that fits
    pub version: Option<i16>,
    /// Pixels per QR module
    pub box_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
    /// Spaces per JSON indentation level, 0 for compact output
    pub indent: usize,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            error_correction: ErrorCorrection::Low,
            version: None,
            box_size: 3,
            border: 1,
            indent: 4,
        }
    }
}

impl EncodingConfig {
    /// `<config_dir>/dogtag/config.yaml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dogtag").join("config.yaml"))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, DogQrError> {
        let config: EncodingConfig =
            serde_yaml::from_str(yaml).map_err(|e| DogQrError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DogQrError> {
        if !(1..=MAX_BOX_SIZE).contains(&self.box_size) {
            return Err(DogQrError::Config(format!(
                "box_size must be between 1 and {}, got {}",
                MAX_BOX_SIZE, self.box_size
            )));
        }
        if self.border > MAX_BORDER {
            return Err(DogQrError::Config(format!(
                "border must be at most {}, got {}",
                MAX_BORDER, self.border
            )));
        }
        if let Some(version) = self.version {
            if !(1..=40).contains(&version) {
                return Err(DogQrError::Config(format!(
                    "version must be between 1 and 40, got {}",
                    version
                )));
            }
        }
        Ok(())
    }

    /// Load the config file, falling back to defaults when it is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("⚙️ CONFIG: No config file at {:?}, using defaults", path);
            return Self::default();
        }

        let loaded = fs::read_to_string(path)
            .map_err(|e| DogQrError::Config(e.to_string()))
            .and_then(|yaml| Self::from_yaml_str(&yaml));

        match loaded {
            Ok(config) => {
                info!("⚙️ CONFIG: Loaded encoding config from {:?}: {:?}", path, config);
                config
            }
            Err(e) => {
                warn!("⚠️ CONFIG: Ignoring config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = EncodingConfig::from_yaml_str("error_correction: high\nindent: 0\n").unwrap();
        assert_eq!(config.error_correction, ErrorCorrection::High);
        assert_eq!(config.indent, 0);
        assert_eq!(config.box_size, 3);
        assert_eq!(config.border, 1);
        assert_eq!(config.version, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(EncodingConfig::from_yaml_str("box_size: 0").is_err());
        assert!(EncodingConfig::from_yaml_str("version: 41").is_err());
        assert!(EncodingConfig::from_yaml_str("version: 10").is_ok());
    }

    #[test]
    fn test_validate_bounds_image_geometry() {
        assert!(EncodingConfig::from_yaml_str("border: 2147483648").is_err());
        assert!(EncodingConfig::from_yaml_str("border: 33").is_err());
        assert!(EncodingConfig::from_yaml_str("box_size: 1000000").is_err());
        assert!(EncodingConfig::from_yaml_str("box_size: 33").is_err());

        let largest = format!("box_size: {}\nborder: {}\n", MAX_BOX_SIZE, MAX_BORDER);
        assert!(EncodingConfig::from_yaml_str(&largest).is_ok());
        assert!(EncodingConfig::from_yaml_str("border: 0").is_ok());
    }

    #[test]
    fn test_oversized_border_in_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "border: 2147483648\n").unwrap();
        assert_eq!(EncodingConfig::load_or_default(&path), EncodingConfig::default());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("config.yaml");
        assert_eq!(EncodingConfig::load_or_default(&missing), EncodingConfig::default());

        let broken = dir.path().join("broken.yaml");
        fs::write(&broken, "box_size: [not a number").unwrap();
        assert_eq!(EncodingConfig::load_or_default(&broken), EncodingConfig::default());

        let valid = dir.path().join("valid.yaml");
        fs::write(&valid, "border: 4\nerror_correction: quartile\n").unwrap();
        let config = EncodingConfig::load_or_default(&valid);
        assert_eq!(config.border, 4);
        assert_eq!(config.error_correction, ErrorCorrection::Quartile);
    }

    #[test]
    fn test_ec_level_mapping() {
        assert_eq!(EcLevel::from(ErrorCorrection::Low), EcLevel::L);
        assert_eq!(EcLevel::from(ErrorCorrection::High), EcLevel::H);
    }
}
