//! Testimonial entity model

use crate::core::entity::{Record, overwrite};
use serde::Deserialize;
use validator::Validate;

impl_record!(
    Testimonial,
    "testimonial",
    "testimonials",
    {
        /// Name of the project the feedback is about
        #[serde(default)]
        project: String,
        /// Name of the client giving the feedback
        #[serde(default)]
        client: String,
        #[serde(default)]
        feedback: String,
    }
);

/// Add payload
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub user_id: Option<String>,
    pub project: Option<String>,
    pub client: Option<String>,
    pub feedback: Option<String>,
}

/// Update payload
#[derive(Debug, Default, Deserialize, Validate)]
pub struct TestimonialPatch {
    pub project: Option<String>,
    pub client: Option<String>,
    pub feedback: Option<String>,
}

impl Record for Testimonial {
    type Draft = NewTestimonial;
    type Patch = TestimonialPatch;

    fn from_draft(draft: NewTestimonial) -> Self {
        Testimonial::new(
            draft.user_id.unwrap_or_default(),
            draft.project.unwrap_or_default(),
            draft.client.unwrap_or_default(),
            draft.feedback.unwrap_or_default(),
        )
    }

    fn apply_patch(&mut self, patch: TestimonialPatch) -> bool {
        let mut changed = overwrite(&mut self.project, patch.project);
        changed |= overwrite(&mut self.client, patch.client);
        changed |= overwrite(&mut self.feedback, patch.feedback);
        changed
    }
}
