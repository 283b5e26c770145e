//! Date computation services

pub mod validator;

pub(crate) mod suggestions;

pub use validator::DateOverlapValidator;
