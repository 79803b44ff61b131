//! Batch data model

use crate::error::EntryError;
use crate::sink::SinkTarget;
use hexconv_common::{hex_text, MalformedHexError};
use std::fmt;
use std::path::PathBuf;

/// A source file as read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub content: Vec<u8>,
}

impl SourceEntry {
    pub fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// Decode the content as hex text
    pub fn decode(&self) -> Result<DecodedPayload, MalformedHexError> {
        hex_text::decode(&self.content).map(DecodedPayload::from)
    }
}

/// Bytes produced by decoding a [`SourceEntry`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedPayload(Vec<u8>);

impl DecodedPayload {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for DecodedPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Why an entry was not converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Output from an earlier run is already at this path
    AlreadyConverted(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyConverted(path) => {
                write!(f, "already converted ({})", path.display())
            }
        }
    }
}

/// Result of processing one entry
#[derive(Debug)]
pub enum ProcessingOutcome {
    Converted { target: SinkTarget, bytes: usize },
    Skipped(SkipReason),
    Failed(EntryError),
}

impl ProcessingOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome of one entry, in listing order
#[derive(Debug)]
pub struct EntryReport {
    pub name: String,
    pub outcome: ProcessingOutcome,
}

/// Everything a batch run produced
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<EntryReport>,

    /// Stopped by cancellation before every entry was visited
    pub cancelled: bool,
}

impl BatchReport {
    pub fn converted(&self) -> usize {
        self.count(ProcessingOutcome::is_converted)
    }

    pub fn skipped(&self) -> usize {
        self.count(ProcessingOutcome::is_skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(ProcessingOutcome::is_failed)
    }

    /// Outcome recorded for `name`, if the entry was visited
    pub fn outcome(&self, name: &str) -> Option<&ProcessingOutcome> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.outcome)
    }

    fn count(&self, pred: impl Fn(&ProcessingOutcome) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.outcome)).count()
    }
}
