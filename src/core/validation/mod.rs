//! Validation and filtering of request payloads
//!
//! Payloads are filtered (strings trimmed) and then checked with the
//! `validator` rules declared on the payload types before they reach the
//! handlers.

pub mod extractor;
pub mod filters;
pub mod validators;

pub use extractor::Validated;
