//! Output sinks
//!
//! A sink receives decoded payloads and persists or transmits them. The
//! variant is chosen once when a command starts and handed to the batch
//! orchestrator, which never looks at which one it holds.

pub mod local;
pub mod sheets;

pub use local::LocalSink;
pub use sheets::{CreatedHook, SheetsSink, SpreadsheetBinding};

use crate::batch::DecodedPayload;
use crate::error::EntryError;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

/// Where a payload landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    /// Local output file
    File(PathBuf),
    /// Row appended to a spreadsheet, keyed by the source file name
    SheetRow {
        spreadsheet_id: String,
        row_key: String,
    },
}

impl fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::SheetRow {
                spreadsheet_id,
                row_key,
            } => write!(f, "spreadsheet {} (row {})", spreadsheet_id, row_key),
        }
    }
}

/// Destination for decoded payloads
#[async_trait]
pub trait Sink: Send + Sync {
    /// Short label for logs
    fn kind(&self) -> &'static str;

    /// Output left by an earlier run for this entry, if the sink can tell
    ///
    /// Checked before the source is read. A `Some` skips the entry.
    async fn existing_output(&self, _entry_name: &str) -> Option<PathBuf> {
        None
    }

    /// Persist one payload
    async fn write(
        &mut self,
        entry_name: &str,
        payload: DecodedPayload,
    ) -> Result<SinkTarget, EntryError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    /// Sink relying on every default method
    struct DiscardSink;

    #[async_trait]
    impl Sink for DiscardSink {
        fn kind(&self) -> &'static str {
            "discard"
        }

        async fn write(
            &mut self,
            entry_name: &str,
            _payload: DecodedPayload,
        ) -> Result<SinkTarget, EntryError> {
            Ok(SinkTarget::File(PathBuf::from(entry_name)))
        }
    }

    #[tokio::test]
    async fn test_default_existing_output_through_trait_object() {
        let mut discard = DiscardSink;
        let sink: &mut dyn Sink = &mut discard;

        assert!(sink.existing_output("a.hex").await.is_none());
        let target = sink.write("a.hex", DecodedPayload::default()).await.unwrap();
        assert_eq!(target, SinkTarget::File(PathBuf::from("a.hex")));
    }

    #[test]
    fn test_target_display() {
        let file = SinkTarget::File(PathBuf::from("out/a.txt"));
        assert_eq!(file.to_string(), "out/a.txt");

        let row = SinkTarget::SheetRow {
            spreadsheet_id: "abc".to_string(),
            row_key: "a.hex".to_string(),
        };
        assert_eq!(row.to_string(), "spreadsheet abc (row a.hex)");
    }
}
