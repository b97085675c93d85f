//! Usecase layer: application workflows + events.

pub mod combine;
pub mod event;
pub mod stats;
pub mod validate;
