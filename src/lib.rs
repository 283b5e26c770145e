//! Itinera trip date engine
//!
//! Pure date-interval computation behind the Itinera travel calendar:
//! expands trips into occupied calendar days, validates candidate date
//! ranges against them with structured conflict details, and searches
//! for nearby non-conflicting alternatives. No I/O, no retained state;
//! trips are supplied by the surrounding application on every call.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::ValidatorConfig;
pub use error::{ValidatorError, ValidatorResult};
pub use models::{DateConflict, DateRange, Trip, ValidationResult};
pub use services::DateOverlapValidator;
