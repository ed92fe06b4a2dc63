use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Sentinel entry that switches a choose-or-type field to its free-text input
pub const OTHER_OPTION: &str = "Other";

/// Sighthound breeds offered in the breed selector, in display order
pub const BREED_OPTIONS: &[&str] = &[
    "Azawakh",
    "Afghan Hound",
    "Borzoi",
    "Deerhound",
    "Irish Wolfhound",
    "Italian Sighthound",
    "Saluki",
    "Sloughi",
    "Greyhound",
    "Magyar Agar",
    "Chart Polski",
    "Galgo Espagnol",
    "Whippet",
    "Pharaoh Hound",
    "Cirneco dell´Etna",
    "Podenco Ibicenco",
    "Podenco Canario",
    "Kazakh Tazy",
    OTHER_OPTION,
];

/// Show classes offered in the class selector
pub const CLASS_OPTIONS: &[&str] = &["FCI-CACIL class", "FCI-CSS class", OTHER_OPTION];

/// Resolve a choose-or-type field into the value that gets encoded.
///
/// Picking [`OTHER_OPTION`] yields the typed text (possibly empty), any other
/// selection is returned verbatim and the typed text is ignored.
pub fn resolve_choice(selected: &str, custom: &str) -> String {
    if selected == OTHER_OPTION {
        custom.to_string()
    } else {
        selected.to_string()
    }
}

/// Gender of the dog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// All selectable values in display order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One owner of the dog. Owners only exist inside their [`DogRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OwnerRecord {
    pub first_name: String,
    pub last_name: String,
    pub street_and_number: String,
    pub postal_code_and_city: String,
    pub country: String,
}

/// Snapshot of the form taken at export time.
///
/// Field order here is the key order of the encoded payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DogRecord {
    pub name: String,
    /// Resolved breed (list entry or free text)
    pub breed: String,
    /// Resolved show class (list entry or free text)
    pub class: String,
    pub gender: Gender,
    pub chip_number: String,
    pub license_number: String,
    pub pedigree_number: String,
    /// Encoded as `YYYY-MM-DD`, zero-padded four-digit year
    #[serde(with = "birth_date_format")]
    pub birth_date: NaiveDate,
    /// Never empty; position 0 is the mandatory first owner
    pub owners: Vec<OwnerRecord>,
}

/// Canonical `YYYY-MM-DD` encoding for birth dates
pub mod birth_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT)
            .map_err(|e| serde::de::Error::custom(format!("invalid BirthDate '{}': {}", raw, e)))
    }
}

/// Artifact produced by an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportKind {
    /// The QR code PNG, written verbatim
    Image,
    /// Single letter-size PDF page with the QR code centered on it
    Document,
}

impl ExportKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Image => "png",
            ExportKind::Document => "pdf",
        }
    }

    /// Filter label for the save dialog
    pub fn filter_name(&self) -> &'static str {
        match self {
            ExportKind::Image => "PNG Files",
            ExportKind::Document => "PDF Files",
        }
    }

    /// Suggested file name for a dog, e.g. `rex_qr.png`
    pub fn suggested_file_name(&self, dog_name: &str) -> String {
        let trimmed = dog_name.trim();
        let stem = if trimmed.is_empty() {
            "dog".to_string()
        } else {
            trimmed.replace(' ', "_").to_lowercase()
        };
        format!("{}_qr.{}", stem, self.extension())
    }
}

/// Request to write an artifact to a user-chosen path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub kind: ExportKind,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Confirmation shown to the user
    pub message: String,
    pub file_path: String,
    pub bytes_written: usize,
}
