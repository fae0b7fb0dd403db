//! View models for the frontend pages

pub mod invoice_management;

pub use invoice_management::{InvoiceManagement, InvoiceRow, Navigation};
