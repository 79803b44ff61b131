//! API endpoint URL builders
//!
//! Helper functions to construct spreadsheet API URLs. Path segments coming
//! from the user (spreadsheet id, A1 range) are percent-encoded.

use urlencoding::encode;

/// Build spreadsheet creation URL
pub fn spreadsheets_url(base_url: &str) -> String {
    format!("{}/v4/spreadsheets", base_url)
}

/// Build the URL appending rows after the table found at `range`
///
/// Values are stored as given (`valueInputOption=RAW`), never parsed as formulas.
pub fn append_values_url(base_url: &str, spreadsheet_id: &str, range: &str) -> String {
    format!(
        "{}/v4/spreadsheets/{}/values/{}:append?valueInputOption=RAW",
        base_url,
        encode(spreadsheet_id),
        encode(range)
    )
}
