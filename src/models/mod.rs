//! Data models for the Itinera date engine

pub mod date_range;
pub mod trip;
pub mod validation;

// Re-export commonly used types
pub use date_range::DateRange;
pub use trip::Trip;
pub use validation::{DateConflict, ValidationResult};
