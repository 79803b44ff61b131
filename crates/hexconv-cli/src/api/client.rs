//! HTTP client for the spreadsheet API
//!
//! [`SpreadsheetService`] is the seam the remote sink depends on;
//! [`SheetsClient`] is the production implementation over `reqwest`.

use crate::api::auth::{AccessLevel, Credential};
use crate::api::service_account::ServiceAccountTokens;
use crate::api::{endpoints, types::*};
use crate::config::Config;
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::debug;

/// Longest error body echoed back when it is not a structured API error.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Remote tabular resource operations (dependency injection)
#[async_trait]
pub trait SpreadsheetService: Send + Sync {
    /// Create a spreadsheet and return its id
    async fn create_spreadsheet(&self, title: &str) -> Result<String, ApiError>;

    /// Append rows after the table found at `range`
    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<(), ApiError>;
}

/// How requests are authenticated
enum Authorization {
    /// `key` query parameter
    ApiKey(String),
    /// Fixed bearer token
    Bearer(String),
    /// Bearer token minted from a service account key
    ServiceAccount(ServiceAccountTokens),
}

/// Spreadsheet API client
pub struct SheetsClient {
    client: Client,
    base_url: String,
    access: AccessLevel,
    authorization: Authorization,
}

impl SheetsClient {
    /// Create a new client with a bounded per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        credential: Credential,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let access = credential.access_level();

        let authorization = match credential {
            Credential::ApiKey(key) => Authorization::ApiKey(key),
            Credential::AccessToken(token) => Authorization::Bearer(token),
            Credential::ServiceAccount(key) => {
                Authorization::ServiceAccount(ServiceAccountTokens::new(key))
            }
        };

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access,
            authorization,
        })
    }

    /// Create from CLI configuration
    pub fn from_config(config: &Config, credential: Credential) -> Result<Self, ApiError> {
        Self::new(
            config.sheets_api_url.clone(),
            credential,
            config.request_timeout,
        )
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_level(&self) -> AccessLevel {
        self.access
    }

    /// Attach credentials to an outgoing request
    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(match &self.authorization {
            Authorization::ApiKey(key) => request.query(&[("key", key)]),
            Authorization::Bearer(token) => request.bearer_auth(token),
            Authorization::ServiceAccount(tokens) => {
                request.bearer_auth(tokens.token(&self.client).await?)
            }
        })
    }
}

#[async_trait]
impl SpreadsheetService for SheetsClient {
    async fn create_spreadsheet(&self, title: &str) -> Result<String, ApiError> {
        let url = endpoints::spreadsheets_url(&self.base_url);

        let request = self
            .authorize(self.client.post(&url))
            .await?
            .json(&CreateSpreadsheetRequest::titled(title));

        let response = check_status(request.send().await?).await?;
        let sheet: Spreadsheet = response.json().await?;

        if sheet.spreadsheet_id.trim().is_empty() {
            return Err(ApiError::invalid_response(
                "spreadsheet created without an id",
            ));
        }

        debug!(spreadsheet_id = %sheet.spreadsheet_id, "Spreadsheet created");
        Ok(sheet.spreadsheet_id)
    }

    async fn append_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<(), ApiError> {
        let url = endpoints::append_values_url(&self.base_url, spreadsheet_id, range);

        let request = self
            .authorize(self.client.post(&url))
            .await?
            .json(&ValueRange::rows(rows));

        let response = check_status(request.send().await?).await?;

        // The body only carries diagnostics; an empty or odd one is not a failure.
        let appended: AppendValuesResponse = response.json().await.unwrap_or_default();
        let updates = appended.updates.unwrap_or_default();
        debug!(
            spreadsheet_id,
            table_range = appended.table_range.as_deref().unwrap_or(""),
            updated_range = updates.updated_range.as_deref().unwrap_or(""),
            updated_rows = updates.updated_rows.unwrap_or(0),
            "Rows appended"
        );

        Ok(())
    }
}

/// Turn a non-success response into [`ApiError::Status`]
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&body, status.canonical_reason()),
    })
}

fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }

    let body = body.trim();
    if body.is_empty() {
        return reason.unwrap_or("no error details").to_string();
    }

    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
