//! Spreadsheet API request and response types

use serde::{Deserialize, Serialize};

/// Body of a spreadsheet creation request
#[derive(Debug, Clone, Serialize)]
pub struct CreateSpreadsheetRequest {
    pub properties: SpreadsheetProperties,
}

impl CreateSpreadsheetRequest {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            properties: SpreadsheetProperties {
                title: title.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadsheetProperties {
    pub title: String,
}

/// Created spreadsheet, only the fields hexconv reads
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spreadsheet {
    pub spreadsheet_id: String,

    #[serde(default)]
    pub spreadsheet_url: Option<String>,
}

/// A block of cell values, row-major
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    pub major_dimension: &'static str,
    pub values: Vec<Vec<String>>,
}

impl ValueRange {
    pub fn rows(values: Vec<Vec<String>>) -> Self {
        Self {
            major_dimension: "ROWS",
            values,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesResponse {
    #[serde(default)]
    pub table_range: Option<String>,

    #[serde(default)]
    pub updates: Option<UpdateValuesResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    #[serde(default)]
    pub updated_range: Option<String>,

    #[serde(default)]
    pub updated_rows: Option<u32>,
}

/// Error envelope returned with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<u16>,

    pub message: String,

    #[serde(default)]
    pub status: Option<String>,
}
