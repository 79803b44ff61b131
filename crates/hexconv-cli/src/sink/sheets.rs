//! Spreadsheet sink
//!
//! Appends one `[file name, base64(payload)]` row per entry. A sink started
//! without a spreadsheet id creates one on the first write and keeps using it
//! for the rest of the batch.
//!
//! Rows are appended unconditionally: re-running a batch against the same
//! spreadsheet duplicates them. There is no skip-if-exists check here, unlike
//! [`LocalSink`](super::LocalSink).

use super::{Sink, SinkTarget};
use crate::api::{AccessLevel, SpreadsheetService};
use crate::batch::DecodedPayload;
use crate::config::{DEFAULT_SHEET_RANGE, DEFAULT_SPREADSHEET_TITLE};
use crate::error::EntryError;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::sync::Arc;
use tracing::{debug, info};

/// Which spreadsheet the sink writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpreadsheetBinding {
    /// Not chosen yet; the first write creates one
    Unbound,
    Bound(String),
}

impl SpreadsheetBinding {
    /// Blank ids mean "create on first use"
    pub fn from_id(id: Option<String>) -> Self {
        match id.map(|s| s.trim().to_string()) {
            Some(id) if !id.is_empty() => Self::Bound(id),
            _ => Self::Unbound,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Unbound => None,
            Self::Bound(id) => Some(id),
        }
    }
}

/// Called with the id of a spreadsheet right after the sink creates it
pub type CreatedHook = Box<dyn Fn(&str) + Send + Sync>;

/// Sink appending rows to a remote spreadsheet
pub struct SheetsSink {
    service: Arc<dyn SpreadsheetService>,
    access: AccessLevel,
    binding: SpreadsheetBinding,
    title: String,
    range: String,
    on_created: Option<CreatedHook>,
}

impl SheetsSink {
    pub fn new(
        service: Arc<dyn SpreadsheetService>,
        access: AccessLevel,
        binding: SpreadsheetBinding,
    ) -> Self {
        Self {
            service,
            access,
            binding,
            title: DEFAULT_SPREADSHEET_TITLE.to_string(),
            range: DEFAULT_SHEET_RANGE.to_string(),
            on_created: None,
        }
    }

    /// Title used if a spreadsheet has to be created
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// A1 range whose table rows are appended to
    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    /// Announce a newly created spreadsheet as soon as it exists
    pub fn with_created_hook(mut self, hook: CreatedHook) -> Self {
        self.on_created = Some(hook);
        self
    }

    pub fn binding(&self) -> &SpreadsheetBinding {
        &self.binding
    }

    /// Resolve the spreadsheet id, creating the spreadsheet at most once
    async fn bind(&mut self) -> Result<String, EntryError> {
        if let SpreadsheetBinding::Bound(id) = &self.binding {
            return Ok(id.clone());
        }

        if self.access == AccessLevel::ReadOnly {
            return Err(EntryError::InsufficientAuth);
        }

        let id = self.service.create_spreadsheet(&self.title).await?;
        info!(spreadsheet_id = %id, title = %self.title, "Created new spreadsheet");
        if let Some(hook) = &self.on_created {
            hook(&id);
        }

        self.binding = SpreadsheetBinding::Bound(id.clone());
        Ok(id)
    }
}

/// Row layout: file name, then the payload in standard padded base64
pub fn encode_row(entry_name: &str, payload: &DecodedPayload) -> Vec<String> {
    vec![entry_name.to_string(), BASE64.encode(payload.as_bytes())]
}

#[async_trait]
impl Sink for SheetsSink {
    fn kind(&self) -> &'static str {
        "sheets"
    }

    async fn write(
        &mut self,
        entry_name: &str,
        payload: DecodedPayload,
    ) -> Result<SinkTarget, EntryError> {
        let spreadsheet_id = self.bind().await?;

        self.service
            .append_rows(&spreadsheet_id, &self.range, vec![encode_row(entry_name, &payload)])
            .await?;

        debug!(entry = entry_name, spreadsheet_id = %spreadsheet_id, range = %self.range, "Appended row");

        Ok(SinkTarget::SheetRow {
            spreadsheet_id,
            row_key: entry_name.to_string(),
        })
    }
}
