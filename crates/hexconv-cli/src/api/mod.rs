//! Spreadsheet API client module
//!
//! HTTP client for the remote spreadsheet service the `sheets` export writes to.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod service_account;
pub mod types;

pub use auth::{AccessLevel, Credential};
pub use client::{SheetsClient, SpreadsheetService};
pub use service_account::ServiceAccountKey;
