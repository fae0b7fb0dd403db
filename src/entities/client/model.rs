//! Client entity model

use crate::core::entity::{Record, overwrite};
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

impl_record!(
    Client,
    "client",
    "clients",
    {
        name: String,
        #[serde(default)]
        email: String,
        #[serde(default)]
        phone: String,
        #[serde(default)]
        company: String,
        #[serde(default)]
        address: String,
    }
);

/// Add payload
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_new_client_email"))]
pub struct NewClient {
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
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
}

/// Update payload
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_client_patch_email"))]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
}

fn validate_new_client_email(draft: &NewClient) -> Result<(), ValidationError> {
    email_if_present(draft.email.as_ref())
}

fn validate_client_patch_email(patch: &ClientPatch) -> Result<(), ValidationError> {
    email_if_present(patch.email.as_ref())
}

// blank is treated as absent, like every other optional field
fn email_if_present(email: Option<&String>) -> Result<(), ValidationError> {
    match email {
        Some(value) if !value.is_empty() && !value.validate_email() => {
            let mut err = ValidationError::new("email");
            err.message = Some("must be a valid email address".into());
            err.add_param("field".into(), &"email");
            Err(err)
        }
        _ => Ok(()),
    }
}

impl Record for Client {
    type Draft = NewClient;
    type Patch = ClientPatch;

    fn from_draft(draft: NewClient) -> Self {
        Client::new(
            draft.user_id.unwrap_or_default(),
            draft.name.unwrap_or_default(),
            draft.email.unwrap_or_default(),
            draft.phone.unwrap_or_default(),
            draft.company.unwrap_or_default(),
            draft.address.unwrap_or_default(),
        )
    }

    fn apply_patch(&mut self, patch: ClientPatch) -> bool {
        let mut changed = overwrite(&mut self.name, patch.name);
        changed |= overwrite(&mut self.email, patch.email);
        changed |= overwrite(&mut self.phone, patch.phone);
        changed |= overwrite(&mut self.company, patch.company);
        changed |= overwrite(&mut self.address, patch.address);
        changed
    }
}
