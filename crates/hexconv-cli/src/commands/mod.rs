//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function. They all resolve
//! their inputs to a source folder and a sink, then share [`convert`].

pub mod interactive;
pub mod local;
pub mod sheets;

use crate::batch::{run_batch, BatchReport};
use crate::cancel::install_signal_handler;
use crate::error::Result;
use crate::progress::ConsoleReporter;
use crate::sink::Sink;
use std::path::Path;
use tokio_util::sync::CancellationToken;

/// Run one batch with interrupt handling, reporting through `reporter`
pub async fn convert(
    source: &Path,
    sink: &mut dyn Sink,
    mut reporter: ConsoleReporter,
) -> Result<BatchReport> {
    let cancel = CancellationToken::new();
    let listener = install_signal_handler(cancel.clone());

    let result = run_batch(source, sink, &cancel, &mut reporter).await;
    listener.abort();

    let report = result?;
    reporter.finish(&report);
    Ok(report)
}
