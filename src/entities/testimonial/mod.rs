//! Testimonial entity module
//!
//! Client feedback about a delivered project, listed per user.

pub mod descriptor;
pub mod model;

pub use descriptor::TestimonialDescriptor;
pub use model::{NewTestimonial, Testimonial, TestimonialPatch};
