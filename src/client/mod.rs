//! HTTP wrapper around the invoice endpoints
//!
//! Used by [`crate::views::InvoiceManagement`]; the view only sees the
//! [`InvoiceService`] trait so it can be driven by a fake in tests.

use crate::core::ApiResponse;
use crate::entities::Invoice;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::debug;

/// Failures talking to the invoice API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got a response
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("{url} answered {status}: {message}")]
    Status {
        url: String,
        status: StatusCode,
        message: String,
    },

    /// The envelope came back with `success: false`
    #[error("request rejected: {message}")]
    Rejected { message: String },

    /// The body was not the expected envelope
    #[error("unexpected response body: {message}")]
    Decode { message: String },
}

/// Operations the invoice listing needs from the backend
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// All invoices owned by `user_id`
    async fn get_all_invoices(&self, user_id: &str) -> Result<Vec<Invoice>, ClientError>;

    /// Delete one invoice; the returned envelope carries the outcome
    async fn delete_invoice(&self, id: &str) -> Result<ApiResponse<Value>, ClientError>;
}

/// [`InvoiceService`] over the REST API
#[derive(Clone, Debug)]
pub struct HttpInvoiceService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInvoiceService {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        let response = request.send().await.map_err(|source| ClientError::Transport {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ClientError::Transport {
            url: url.clone(),
            source,
        })?;

        debug!(url = %url, status = %status, "invoice API response");

        if !status.is_success() {
            return Err(ClientError::Status {
                url,
                status,
                message: error_message(&body),
            });
        }

        let envelope: ApiResponse<T> =
            serde_json::from_str(&body).map_err(|e| ClientError::Decode {
                message: e.to_string(),
            })?;

        if !envelope.success {
            return Err(ClientError::Rejected {
                message: envelope.message,
            });
        }

        Ok(envelope)
    }
}

/// Best-effort message from a failure body
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl InvoiceService for HttpInvoiceService {
    async fn get_all_invoices(&self, user_id: &str) -> Result<Vec<Invoice>, ClientError> {
        let url = self.endpoint("invoices/list");
        let request = self.client.post(&url).json(&json!({ "userId": user_id }));

        let envelope: ApiResponse<Vec<Invoice>> = self.send(url, request).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn delete_invoice(&self, id: &str) -> Result<ApiResponse<Value>, ClientError> {
        let url = self.endpoint("invoices");
        let request = self.client.delete(&url).json(&json!({ "_id": id }));

        self.send(url, request).await
    }
}
