//! Batch conversion
//!
//! Walks the top level of a source folder in file-name order and, for each
//! file: checks for cancellation, asks the sink whether the entry is already
//! done, reads and decodes the file, then hands the payload to the sink.
//!
//! Entries are processed strictly one at a time. A failing entry is recorded
//! and the batch moves on; only an unlistable source folder stops it.

pub mod types;

pub use types::{BatchReport, DecodedPayload, EntryReport, ProcessingOutcome, SkipReason, SourceEntry};

use crate::error::{CliError, EntryError, Result};
use crate::sink::{Sink, SinkTarget};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Receives progress while a batch runs
pub trait BatchObserver: Send {
    /// Called once after listing, with the number of files to visit
    fn batch_started(&mut self, _total: usize) {}

    /// Called as soon as an entry's outcome is known
    fn entry_finished(&mut self, _report: &EntryReport) {}

    /// Called when cancellation stops the batch with `remaining` files unvisited
    fn batch_cancelled(&mut self, _remaining: usize) {}
}

/// Observer that ignores everything
pub struct NoopObserver;

impl BatchObserver for NoopObserver {}

/// A file found in the source folder
#[derive(Debug, Clone)]
struct SourceFile {
    name: String,
    path: PathBuf,
}

/// Convert every file in `source_dir` without progress reporting
pub async fn convert_directory(
    source_dir: &Path,
    sink: &mut dyn Sink,
    cancel: &CancellationToken,
) -> Result<BatchReport> {
    run_batch(source_dir, sink, cancel, &mut NoopObserver).await
}

/// Convert every file in `source_dir`, reporting outcomes as they are produced
pub async fn run_batch(
    source_dir: &Path,
    sink: &mut dyn Sink,
    cancel: &CancellationToken,
    observer: &mut dyn BatchObserver,
) -> Result<BatchReport> {
    let start_time = Instant::now();
    let files = list_source_files(source_dir).await?;

    info!(
        source = %source_dir.display(),
        sink = sink.kind(),
        files = files.len(),
        "Starting batch conversion"
    );
    observer.batch_started(files.len());

    let mut report = BatchReport::default();

    for (index, file) in files.iter().enumerate() {
        if cancel.is_cancelled() {
            let remaining = files.len() - index;
            warn!(remaining, "Batch cancelled, remaining files left unprocessed");
            report.cancelled = true;
            observer.batch_cancelled(remaining);
            break;
        }

        let outcome = process_entry(file, sink).await;
        log_outcome(&file.name, &outcome);

        let entry = EntryReport {
            name: file.name.clone(),
            outcome,
        };
        observer.entry_finished(&entry);
        report.entries.push(entry);
    }

    info!(
        converted = report.converted(),
        skipped = report.skipped(),
        failed = report.failed(),
        cancelled = report.cancelled,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Batch conversion finished"
    );

    Ok(report)
}

/// Non-directory entries of `source_dir`, sorted by file name
async fn list_source_files(source_dir: &Path) -> Result<Vec<SourceFile>> {
    let listing_error = |source: std::io::Error| CliError::SourceListing {
        path: source_dir.to_path_buf(),
        source,
    };

    let mut dir = fs::read_dir(source_dir).await.map_err(listing_error)?;
    let mut files = Vec::new();

    while let Some(entry) = dir.next_entry().await.map_err(listing_error)? {
        let file_type = entry.file_type().await.map_err(listing_error)?;
        if file_type.is_dir() {
            continue;
        }

        files.push(SourceFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

async fn process_entry(file: &SourceFile, sink: &mut dyn Sink) -> ProcessingOutcome {
    if let Some(existing) = sink.existing_output(&file.name).await {
        return ProcessingOutcome::Skipped(SkipReason::AlreadyConverted(existing));
    }

    match convert_entry(file, sink).await {
        Ok((target, bytes)) => ProcessingOutcome::Converted { target, bytes },
        Err(err) => ProcessingOutcome::Failed(err),
    }
}

async fn convert_entry(
    file: &SourceFile,
    sink: &mut dyn Sink,
) -> std::result::Result<(SinkTarget, usize), EntryError> {
    let content = fs::read(&file.path)
        .await
        .map_err(|source| EntryError::ReadSource {
            path: file.path.clone(),
            source,
        })?;

    let entry = SourceEntry::new(file.name.clone(), content);
    let payload = entry.decode()?;
    let bytes = payload.len();

    let target = sink.write(&entry.name, payload).await?;
    Ok((target, bytes))
}

fn log_outcome(name: &str, outcome: &ProcessingOutcome) {
    match outcome {
        ProcessingOutcome::Converted { target, bytes } => {
            debug!(entry = name, target = %target, bytes, "Converted");
        }
        ProcessingOutcome::Skipped(reason) => {
            debug!(entry = name, reason = %reason, "Skipped");
        }
        ProcessingOutcome::Failed(err) => {
            warn!(entry = name, kind = err.kind(), error = %err, "Conversion failed");
        }
    }
}
