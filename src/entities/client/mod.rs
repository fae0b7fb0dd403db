//! Client entity module
//!
//! The people or companies a user bills. Not to be confused with
//! [`crate::client`], the HTTP wrapper used by the views.

pub mod descriptor;
pub mod model;

pub use descriptor::ClientDescriptor;
pub use model::{Client, ClientPatch, NewClient};
