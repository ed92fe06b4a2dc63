//! # UI Module
//!
//! egui binding for the dog form. Widgets read and write the
//! [`DogForm`](crate::backend::domain::DogForm) directly; owner sections are
//! bound by index and redrawn from the owner list every frame, so numbering
//! and remove buttons follow any add or remove immediately.

pub mod components;
pub mod app_state;
pub mod app_coordinator;

pub use components::*;
pub use app_state::*;
