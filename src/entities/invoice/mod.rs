//! Invoice entity module

pub mod descriptor;
pub mod model;

pub use descriptor::InvoiceDescriptor;
pub use model::{Invoice, InvoicePatch, NewInvoice};
