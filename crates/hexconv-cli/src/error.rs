//! Error types for hexconv CLI
//!
//! Three layers, from widest to narrowest blast radius:
//!
//! - [`CliError`]: fatal. Stops the command before or instead of the batch.
//! - [`EntryError`]: one source file failed. Reported, and the batch moves on.
//! - [`ApiError`]: a failed call to the spreadsheet API, wrapped by the other two.

use hexconv_common::MalformedHexError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that abort a command
#[derive(Error, Debug)]
pub enum CliError {
    /// The source directory could not be listed; no entries were processed
    #[error("Cannot list source folder '{}': {source}. Verify the path exists and you have read permissions.", path.display())]
    SourceListing {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The local destination directory could not be created
    #[error("Cannot create destination folder '{}': {source}. Check permissions and disk space.", path.display())]
    DestinationSetup {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your command-line flags and environment variables.")]
    Config(String),

    /// Credential could not be loaded
    #[error("Credential error: {0}")]
    Credential(String),

    /// Interactive prompt failed or was cancelled
    #[error("Prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),

    /// Spreadsheet API client could not be set up
    #[error("Spreadsheet API error: {0}")]
    Api(#[from] ApiError),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a credential error
    pub fn credential(msg: impl Into<String>) -> Self {
        Self::Credential(msg.into())
    }
}

/// Failure of a single source entry
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("malformed hex: {0}")]
    MalformedHex(#[from] MalformedHexError),

    /// A spreadsheet must be created but the credential is read-only
    #[error("cannot create a new spreadsheet with API key authentication; provide an existing spreadsheet ID or use an access token or service account")]
    InsufficientAuth,

    #[error("spreadsheet export failed: {0}")]
    RemoteSink(#[from] ApiError),

    #[error("cannot read '{}': {source}", path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    WriteDestination {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl EntryError {
    /// Short stable label, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedHex(_) => "malformed_hex",
            Self::InsufficientAuth => "insufficient_auth",
            Self::RemoteSink(_) => "remote_sink",
            Self::ReadSource { .. } => "read_source",
            Self::WriteDestination { .. } => "write_destination",
        }
    }
}

/// Spreadsheet API failure
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection, timeout or body decoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status, with the message from the error body when present
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    InvalidResponse(String),

    /// A service account key could not be turned into an access token
    #[error("service account token exchange failed: {0}")]
    TokenExchange(String),
}

impl ApiError {
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_error_kinds() {
        let malformed = EntryError::from(MalformedHexError::OddLength { digits: 3 });
        assert_eq!(malformed.kind(), "malformed_hex");
        assert_eq!(EntryError::InsufficientAuth.kind(), "insufficient_auth");

        let remote = EntryError::from(ApiError::Status {
            status: 403,
            message: "denied".to_string(),
        });
        assert_eq!(remote.kind(), "remote_sink");
        assert!(remote.to_string().contains("403"));
    }

    #[test]
    fn test_source_listing_message_names_path() {
        let err = CliError::SourceListing {
            path: PathBuf::from("/missing/hex"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/missing/hex"));
    }
}
