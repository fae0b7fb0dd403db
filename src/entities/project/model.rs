//! Project entity model

use crate::core::entity::{Record, overwrite, overwrite_opt};
use crate::core::validation::validators::{date_like, parse_date_like};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

impl_record!(
    Project,
    "project",
    "projects",
    {
        name: String,
        #[serde(default)]
        client_name: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        start_date: Option<DateTime<Utc>>,
        #[serde(default)]
        end_date: Option<DateTime<Utc>>,
        #[serde(default)]
        status: String,
    }
);

/// Add payload
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_new_project_dates"))]
pub struct NewProject {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub user_id: Option<String>,
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

/// Update payload
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_project_patch_dates"))]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

fn validate_new_project_dates(draft: &NewProject) -> Result<(), ValidationError> {
    date_like(&[
        ("startDate", non_empty(&draft.start_date)),
        ("endDate", non_empty(&draft.end_date)),
    ])
}

fn validate_project_patch_dates(patch: &ProjectPatch) -> Result<(), ValidationError> {
    date_like(&[
        ("startDate", non_empty(&patch.start_date)),
        ("endDate", non_empty(&patch.end_date)),
    ])
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.is_empty())
}

fn to_date(value: Option<String>) -> Option<DateTime<Utc>> {
    value.as_deref().and_then(parse_date_like)
}

impl Record for Project {
    type Draft = NewProject;
    type Patch = ProjectPatch;

    fn from_draft(draft: NewProject) -> Self {
        Project::new(
            draft.user_id.unwrap_or_default(),
            draft.name.unwrap_or_default(),
            draft.client_name.unwrap_or_default(),
            draft.description.unwrap_or_default(),
            to_date(draft.start_date),
            to_date(draft.end_date),
            draft.status.unwrap_or_default(),
        )
    }

    fn apply_patch(&mut self, patch: ProjectPatch) -> bool {
        let mut changed = overwrite(&mut self.name, patch.name);
        changed |= overwrite(&mut self.client_name, patch.client_name);
        changed |= overwrite(&mut self.description, patch.description);
        changed |= overwrite_opt(&mut self.start_date, to_date(patch.start_date));
        changed |= overwrite_opt(&mut self.end_date, to_date(patch.end_date));
        changed |= overwrite(&mut self.status, patch.status);
        changed
    }
}
