//! Business entities managed by bizdesk
//!
//! Each entity lives in its own module with a `model` (the record and its
//! add/update payloads) and a `descriptor` (its routes).

#[macro_use]
pub mod macros;

pub mod client;
pub mod invoice;
pub mod project;
pub mod testimonial;

pub use client::{Client, ClientDescriptor};
pub use invoice::{Invoice, InvoiceDescriptor};
pub use project::{Project, ProjectDescriptor};
pub use testimonial::{Testimonial, TestimonialDescriptor};
