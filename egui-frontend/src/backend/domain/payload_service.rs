//! # Payload Service
//!
//! Turns a [`DogRecord`] into the JSON text embedded in the QR code and back.
//!
//! ## Format
//!
//! A single top-level `Dog` object whose keys follow the field order of
//! [`DogRecord`] and [`OwnerRecord`](shared::OwnerRecord). Output is
//! pretty-printed with a configurable indent (4 spaces by default, 0 for
//! compact), non-ASCII text is written literally and there is no trailing
//! newline. The same record always produces the same bytes.

use log::debug;
use serde::{Deserialize, Serialize};
use shared::DogRecord;

use crate::backend::domain::errors::PayloadError;

#[derive(Serialize)]
struct DogEnvelope<'a> {
    #[serde(rename = "Dog")]
    dog: &'a DogRecord,
}

#[derive(Deserialize)]
struct OwnedDogEnvelope {
    #[serde(rename = "Dog")]
    dog: DogRecord,
}

#[derive(Debug, Clone)]
pub struct PayloadService {
    indent: usize,
}

impl PayloadService {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    pub fn serialize(&self, record: &DogRecord) -> Result<String, PayloadError> {
        let envelope = DogEnvelope { dog: record };
        let mut buffer = Vec::new();

        if self.indent == 0 {
            serde_json::to_writer(&mut buffer, &envelope)?;
        } else {
            let indent = vec![b' '; self.indent];
            let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
            let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
            envelope.serialize(&mut serializer)?;
        }

        let payload =
            String::from_utf8(buffer).map_err(|e| PayloadError::Invalid(e.to_string()))?;
        debug!("🔤 PAYLOAD: Serialized dog '{}' into {} bytes", record.name, payload.len());
        Ok(payload)
    }

    /// Parse a payload back into a record.
    ///
    /// Every key must be present; unknown keys are ignored. A payload without
    /// owners is rejected because a record always has at least one.
    pub fn parse(&self, payload: &str) -> Result<DogRecord, PayloadError> {
        let envelope: OwnedDogEnvelope = serde_json::from_str(payload).map_err(|e| {
            if e.is_data() || e.is_eof() {
                PayloadError::Invalid(e.to_string())
            } else {
                PayloadError::Json(e)
            }
        })?;

        if envelope.dog.owners.is_empty() {
            return Err(PayloadError::Invalid("Owners must list at least one owner".to_string()));
        }

        Ok(envelope.dog)
    }
}

impl Default for PayloadService {
    fn default() -> Self {
        Self::new(4)
    }
}
