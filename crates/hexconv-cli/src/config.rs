//! Configuration management for hexconv CLI
//!
//! Settings that are not worth a command-line flag: where the spreadsheet API
//! lives and how long a remote call may take.

use std::time::Duration;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default spreadsheet API base URL when not specified via environment variable.
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

/// Default timeout for each spreadsheet API request in seconds.
/// Can be overridden via HEXCONV_API_TIMEOUT_SECS environment variable.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

/// Extension given to every file written by the local sink.
pub const OUTPUT_EXTENSION: &str = "txt";

/// Title of spreadsheets created on first use.
pub const DEFAULT_SPREADSHEET_TITLE: &str = "Hex to ASCII Conversion";

/// Sheet region rows are appended to.
pub const DEFAULT_SHEET_RANGE: &str = "Sheet1!A1";

pub const ENV_SHEETS_API_URL: &str = "HEXCONV_SHEETS_API_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "HEXCONV_API_TIMEOUT_SECS";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Spreadsheet API base URL, without trailing slash
    pub sheets_api_url: String,

    /// Upper bound for a single remote request
    pub request_timeout: Duration,

    /// Extension of files written by the local sink
    pub output_extension: String,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self {
            sheets_api_url: DEFAULT_SHEETS_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            output_extension: OUTPUT_EXTENSION.to_string(),
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config from an arbitrary key lookup; unparsable values keep defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(url) = lookup(ENV_SHEETS_API_URL).filter(|u| !u.trim().is_empty()) {
            config.set_sheets_api_url(url);
        }

        if let Some(secs) = lookup(ENV_API_TIMEOUT_SECS)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|s| *s > 0)
        {
            config.request_timeout = Duration::from_secs(secs);
        }

        config
    }

    /// Set the spreadsheet API base URL
    pub fn set_sheets_api_url(&mut self, url: impl Into<String>) {
        self.sheets_api_url = url.into().trim().trim_end_matches('/').to_string();
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
