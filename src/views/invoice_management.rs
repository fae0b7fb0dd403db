//! View model behind the "Invoice Management" page
//!
//! Holds what the page renders (columns and rows) plus the transient
//! notice/error, and turns the row buttons into service calls or
//! navigation intents. Rendering itself happens elsewhere.

use crate::client::InvoiceService;
use crate::entities::Invoice;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Page title
pub const TITLE: &str = "Invoice Management";

/// Notice shown after a successful delete
pub const DELETED_NOTICE: &str = "Invoice Deleted";

pub const EDIT_PATH: &str = "/editinvoice";
pub const VIEW_PATH: &str = "/invoice-generation";
pub const GENERATE_PATH: &str = "/invoices/generate";

/// A table column: header text and the row key it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub header: &'static str,
    pub accessor: &'static str,
}

/// Buttons rendered in the `Action` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowAction {
    Edit,
    View,
    Delete,
}

pub const ROW_ACTIONS: [RowAction; 3] = [RowAction::Edit, RowAction::View, RowAction::Delete];

pub const COLUMNS: [Column; 9] = [
    column("Invoice Number", "invoicenumber"),
    column("Generated Date", "generateddate"),
    column("From Date", "fromdate"),
    column("To Date", "todate"),
    column("Due Date", "duedate"),
    column("Client Name", "clientname"),
    column("Project Name", "projectname"),
    column("Payment Status", "paymentstatus"),
    column("Action", "button1"),
];

const fn column(header: &'static str, accessor: &'static str) -> Column {
    Column { header, accessor }
}

/// One display row, keyed by column accessor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceRow {
    pub invoicenumber: String,
    pub generateddate: String,
    pub fromdate: String,
    pub todate: String,
    pub duedate: String,
    pub clientname: String,
    pub projectname: String,
    pub paymentstatus: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            invoicenumber: invoice.id.to_string(),
            generateddate: display_date(invoice.generated_date),
            fromdate: display_date(invoice.start_date),
            todate: display_date(invoice.end_date),
            duedate: display_date(invoice.due_date),
            clientname: invoice.client_name.clone(),
            projectname: invoice.project_name.clone(),
            paymentstatus: invoice.payment_status.clone(),
            start_date: display_date(invoice.start_date),
        }
    }
}

/// `YYYY-MM-DD`, or an empty cell when the date is missing
fn display_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Where the page asks the router to go, with the transient state to carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub pathname: &'static str,
    pub state: Option<String>,
}

/// State and actions of the invoice listing
pub struct InvoiceManagement {
    service: Arc<dyn InvoiceService>,
    user_id: Option<String>,
    rows: Vec<InvoiceRow>,
    notice: Option<String>,
    last_error: Option<String>,
}

impl InvoiceManagement {
    /// `user_id` is the locally stored identifier of the signed-in user
    pub fn new(service: Arc<dyn InvoiceService>, user_id: Option<String>) -> Self {
        Self {
            service,
            user_id,
            rows: Vec::new(),
            notice: None,
            last_error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        TITLE
    }

    pub fn columns(&self) -> &'static [Column] {
        &COLUMNS
    }

    /// Buttons offered on every row, in display order
    pub fn row_actions(&self) -> &'static [RowAction] {
        &ROW_ACTIONS
    }

    pub fn rows(&self) -> &[InvoiceRow] {
        &self.rows
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Initial load when the page is shown
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Re-fetch the invoices of the current user
    ///
    /// Rows are always replaced; a failed fetch leaves an empty table.
    pub async fn refresh(&mut self) {
        let Some(user_id) = self.user_id.clone() else {
            self.fail("no user is signed in".to_string(), "load");
            self.rows.clear();
            return;
        };

        match self.service.get_all_invoices(&user_id).await {
            Ok(invoices) => {
                self.rows = invoices.iter().map(InvoiceRow::from).collect();
                self.last_error = None;
                debug!(user_id = %user_id, count = self.rows.len(), "loaded invoices");
            }
            Err(e) => {
                self.fail(e.to_string(), "load");
                self.rows.clear();
            }
        }
    }

    pub fn edit(&self, row: &InvoiceRow) -> Navigation {
        Navigation {
            pathname: EDIT_PATH,
            state: Some(row.invoicenumber.clone()),
        }
    }

    /// Open the generated invoice read-only
    pub fn view(&self, row: &InvoiceRow) -> Navigation {
        Navigation {
            pathname: VIEW_PATH,
            state: Some(row.invoicenumber.clone()),
        }
    }

    /// Target of the "Generate Invoice" button
    pub fn generate(&self) -> Navigation {
        Navigation {
            pathname: GENERATE_PATH,
            state: None,
        }
    }

    /// Delete the invoice behind `row`, then reload the list
    ///
    /// Returns whether the invoice was deleted. On failure the rows are
    /// left as they were.
    pub async fn delete(&mut self, row: &InvoiceRow) -> bool {
        match self.service.delete_invoice(&row.invoicenumber).await {
            Ok(response) if response.success => {
                self.notice = Some(DELETED_NOTICE.to_string());
                self.refresh().await;
                true
            }
            Ok(response) => {
                self.fail(response.message, "delete");
                false
            }
            Err(e) => {
                self.fail(e.to_string(), "delete");
                false
            }
        }
    }

    /// Dismiss the current notice
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn fail(&mut self, message: String, action: &str) {
        warn!(action, error = %message, "invoice request failed");
        self.last_error = Some(message);
    }
}
