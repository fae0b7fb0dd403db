//! Invoice entity model

use crate::core::entity::{Record, overwrite, overwrite_opt};
use crate::core::validation::validators::{date_like, parse_date_like};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

impl_record!(
    #[serde(from = "InvoiceDocument")]
    Invoice,
    "invoice",
    "invoices",
    {
        #[serde(default)]
        generated_date: Option<DateTime<Utc>>,
        /// Start of the billed period
        #[serde(default)]
        start_date: Option<DateTime<Utc>>,
        /// End of the billed period
        #[serde(default)]
        end_date: Option<DateTime<Utc>>,
        #[serde(default)]
        due_date: Option<DateTime<Utc>>,
        #[serde(default)]
        client_name: String,
        #[serde(default)]
        project_name: String,
        /// Free-form status such as "Pending" or "Paid"
        #[serde(default)]
        payment_status: String,
    }
);

/// Stored form of an invoice
///
/// Older documents carry the period end as `taskendDate`; `endDate` wins
/// when both are present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvoiceDocument {
    #[serde(rename = "_id")]
    id: Uuid,
    user_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    generated_date: Option<DateTime<Utc>>,
    #[serde(default)]
    start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    end_date: Option<DateTime<Utc>>,
    #[serde(default, rename = "taskendDate")]
    taskend_date: Option<DateTime<Utc>>,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    client_name: String,
    #[serde(default)]
    project_name: String,
    #[serde(default)]
    payment_status: String,
}

impl From<InvoiceDocument> for Invoice {
    fn from(doc: InvoiceDocument) -> Self {
        Self {
            id: doc.id,
            user_id: doc.user_id,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
            generated_date: doc.generated_date,
            start_date: doc.start_date,
            end_date: doc.end_date.or(doc.taskend_date),
            due_date: doc.due_date,
            client_name: doc.client_name,
            project_name: doc.project_name,
            payment_status: doc.payment_status,
        }
    }
}

/// Add payload
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_new_invoice_dates"))]
pub struct NewInvoice {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub user_id: Option<String>,
    pub generated_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Legacy key for `endDate`
    #[serde(rename = "taskendDate")]
    pub taskend_date: Option<String>,
    pub due_date: Option<String>,
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub payment_status: Option<String>,
}

/// Update payload
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_invoice_patch_dates"))]
pub struct InvoicePatch {
    pub generated_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Legacy key for `endDate`
    #[serde(rename = "taskendDate")]
    pub taskend_date: Option<String>,
    pub due_date: Option<String>,
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub payment_status: Option<String>,
}

fn validate_new_invoice_dates(draft: &NewInvoice) -> Result<(), ValidationError> {
    date_like(&[
        ("generatedDate", non_empty(&draft.generated_date)),
        ("startDate", non_empty(&draft.start_date)),
        ("endDate", non_empty(&draft.end_date)),
        ("taskendDate", non_empty(&draft.taskend_date)),
        ("dueDate", non_empty(&draft.due_date)),
    ])
}

fn validate_invoice_patch_dates(patch: &InvoicePatch) -> Result<(), ValidationError> {
    date_like(&[
        ("generatedDate", non_empty(&patch.generated_date)),
        ("startDate", non_empty(&patch.start_date)),
        ("endDate", non_empty(&patch.end_date)),
        ("taskendDate", non_empty(&patch.taskend_date)),
        ("dueDate", non_empty(&patch.due_date)),
    ])
}

// blank dates count as absent
fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.is_empty())
}

// `endDate` wins over the legacy key
fn period_end(end_date: Option<String>, taskend_date: Option<String>) -> Option<String> {
    end_date.filter(|v| !v.is_empty()).or(taskend_date)
}

fn to_date(value: Option<String>) -> Option<DateTime<Utc>> {
    value.as_deref().and_then(parse_date_like)
}

impl Record for Invoice {
    type Draft = NewInvoice;
    type Patch = InvoicePatch;

    fn from_draft(draft: NewInvoice) -> Self {
        Invoice::new(
            draft.user_id.unwrap_or_default(),
            to_date(draft.generated_date),
            to_date(draft.start_date),
            to_date(period_end(draft.end_date, draft.taskend_date)),
            to_date(draft.due_date),
            draft.client_name.unwrap_or_default(),
            draft.project_name.unwrap_or_default(),
            draft.payment_status.unwrap_or_default(),
        )
    }

    fn apply_patch(&mut self, patch: InvoicePatch) -> bool {
        let mut changed = overwrite_opt(&mut self.generated_date, to_date(patch.generated_date));
        changed |= overwrite_opt(&mut self.start_date, to_date(patch.start_date));
        changed |= overwrite_opt(
            &mut self.end_date,
            to_date(period_end(patch.end_date, patch.taskend_date)),
        );
        changed |= overwrite_opt(&mut self.due_date, to_date(patch.due_date));
        changed |= overwrite(&mut self.client_name, patch.client_name);
        changed |= overwrite(&mut self.project_name, patch.project_name);
        changed |= overwrite(&mut self.payment_status, patch.payment_status);
        changed
    }
}
