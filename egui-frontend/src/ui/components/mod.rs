//! # UI Components Module
//!
//! - `form_fields` - labelled text rows and choose-or-type combo boxes
//! - `dog_fields` - dog name, breed, class, gender, numbers and birth date
//! - `owner_sections` - one group per owner with its remove button
//! - `export_actions` - add-owner, image and PDF buttons, save dialogs, preview texture

pub mod form_fields;
pub mod dog_fields;
pub mod owner_sections;
pub mod export_actions;

pub use form_fields::*;
