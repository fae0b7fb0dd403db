//! Project entity module

pub mod descriptor;
pub mod model;

pub use descriptor::ProjectDescriptor;
pub use model::{NewProject, Project, ProjectPatch};
