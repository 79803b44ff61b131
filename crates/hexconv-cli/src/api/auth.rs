//! Spreadsheet API credentials
//!
//! An API key can only address spreadsheets that already exist. An OAuth
//! access token can also create new ones, and so can a service account key,
//! which is exchanged for an access token in-process before the first request.

use super::service_account::ServiceAccountKey;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// What a credential is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Existing spreadsheets only
    ReadOnly,
    /// May create spreadsheets
    ReadWrite,
}

/// Authentication attached to every spreadsheet API request
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Sent as the `key` query parameter
    ApiKey(String),
    /// Sent as a bearer `Authorization` header
    AccessToken(String),
    /// Exchanged for a bearer token at the key's `token_uri`
    ServiceAccount(ServiceAccountKey),
}

/// OAuth token response as written by most token helpers
#[derive(Deserialize)]
struct TokenFile {
    access_token: String,
}

impl Credential {
    pub fn api_key(key: impl Into<String>) -> Result<Self> {
        let key = non_empty(key.into(), "API key")?;
        Ok(Self::ApiKey(key))
    }

    pub fn access_token(token: impl Into<String>) -> Result<Self> {
        let token = non_empty(token.into(), "access token")?;
        Ok(Self::AccessToken(token))
    }

    /// Load an access token from a file
    ///
    /// The file holds either the raw token or a JSON object with an
    /// `access_token` field.
    pub fn from_token_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::credential(format!(
                "unable to read token file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let content = content.trim();
        if content.starts_with('{') {
            let parsed: TokenFile = serde_json::from_str(content).map_err(|e| {
                CliError::credential(format!(
                    "unable to parse token file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            Self::access_token(parsed.access_token)
        } else {
            Self::access_token(content)
        }
    }

    /// Load a Google service account key (JSON)
    pub fn from_service_account_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::ServiceAccount(ServiceAccountKey::from_file(path)?))
    }

    pub fn access_level(&self) -> AccessLevel {
        match self {
            Self::ApiKey(_) => AccessLevel::ReadOnly,
            Self::AccessToken(_) | Self::ServiceAccount(_) => AccessLevel::ReadWrite,
        }
    }
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::AccessToken(_) => f.write_str("AccessToken(***)"),
            Self::ServiceAccount(key) => write!(f, "ServiceAccount({})", key.client_email),
        }
    }
}

fn non_empty(value: String, what: &str) -> Result<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(CliError::credential(format!("{} is empty", what)));
    }
    Ok(value)
}
