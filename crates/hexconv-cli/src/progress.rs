//! Console reporting for batch runs
//!
//! One stdout line per entry outcome, a progress bar on stderr while the batch
//! runs, and a summary line at the end.

use crate::batch::{BatchObserver, BatchReport, EntryReport, ProcessingOutcome};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Create a progress bar counting entries
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Format bytes into human-readable string
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Uncolored description of one outcome
pub fn describe_outcome(report: &EntryReport) -> String {
    match &report.outcome {
        ProcessingOutcome::Converted { target, bytes } => format!(
            "{} -> {} ({})",
            report.name,
            target,
            format_bytes(*bytes as u64)
        ),
        ProcessingOutcome::Skipped(reason) => format!("{} skipped: {}", report.name, reason),
        ProcessingOutcome::Failed(err) => format!("{} failed: {}", report.name, err),
    }
}

fn status_symbol(outcome: &ProcessingOutcome) -> ColoredString {
    match outcome {
        ProcessingOutcome::Converted { .. } => "✓".green(),
        ProcessingOutcome::Skipped(_) => "-".yellow(),
        ProcessingOutcome::Failed(_) => "✗".red(),
    }
}

/// Final one-line summary
pub fn format_summary(report: &BatchReport) -> String {
    let mut summary = format!(
        "{} converted, {} skipped, {} failed",
        report.converted(),
        report.skipped(),
        report.failed()
    );
    if report.cancelled {
        summary.push_str(" (interrupted)");
    }
    summary
}

/// Prints outcomes to stdout while driving a progress bar
pub struct ConsoleReporter {
    pb: ProgressBar,
}

impl ConsoleReporter {
    /// The bar stays hidden until the batch size is known
    pub fn new() -> Self {
        let pb = create_progress_bar(0, "Converting files");
        pb.set_draw_target(ProgressDrawTarget::hidden());
        Self { pb }
    }

    /// Handle for printing above the bar from outside the observer callbacks
    pub fn progress_bar(&self) -> ProgressBar {
        self.pb.clone()
    }

    /// Print the summary and drop the progress bar
    pub fn finish(&self, report: &BatchReport) {
        self.pb.finish_and_clear();
        println!();
        println!("{} {}", "Summary:".cyan().bold(), format_summary(report));
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchObserver for ConsoleReporter {
    fn batch_started(&mut self, total: usize) {
        if total == 0 {
            println!("No files found in source folder.");
            return;
        }
        self.pb.set_length(total as u64);
        self.pb.set_draw_target(ProgressDrawTarget::stderr());
    }

    fn entry_finished(&mut self, report: &EntryReport) {
        let line = format!("{} {}", status_symbol(&report.outcome), describe_outcome(report));
        // A hidden bar ignores println, suspend works for both.
        self.pb.suspend(|| println!("{}", line));
        self.pb.inc(1);
    }

    fn batch_cancelled(&mut self, remaining: usize) {
        self.pb.suspend(|| {
            println!(
                "{} Interrupted, {} file(s) left unprocessed",
                "!".yellow().bold(),
                remaining
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::SkipReason;
    use crate::error::EntryError;
    use crate::sink::SinkTarget;
    use hexconv_common::MalformedHexError;
    use std::path::PathBuf;

    fn entry(name: &str, outcome: ProcessingOutcome) -> EntryReport {
        EntryReport {
            name: name.to_string(),
            outcome,
        }
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1048576), "1.00 MB");
    }

    #[test]
    fn test_create_progress_bar() {
        let pb = create_progress_bar(100, "Converting files");
        assert_eq!(pb.length(), Some(100));
    }

    #[test]
    fn test_reporter_bar_handle_follows_batch() {
        let mut reporter = ConsoleReporter::new();
        let handle = reporter.progress_bar();
        assert!(handle.is_hidden());

        reporter.batch_started(3);
        assert_eq!(handle.length(), Some(3));
    }

    #[test]
    fn test_describe_outcomes() {
        let converted = entry(
            "a.hex",
            ProcessingOutcome::Converted {
                target: SinkTarget::File(PathBuf::from("out/a.txt")),
                bytes: 5,
            },
        );
        assert_eq!(describe_outcome(&converted), "a.hex -> out/a.txt (5 B)");

        let skipped = entry(
            "b.hex",
            ProcessingOutcome::Skipped(SkipReason::AlreadyConverted(PathBuf::from("out/b.txt"))),
        );
        assert_eq!(
            describe_outcome(&skipped),
            "b.hex skipped: already converted (out/b.txt)"
        );

        let failed = entry(
            "c.hex",
            ProcessingOutcome::Failed(EntryError::MalformedHex(MalformedHexError::OddLength {
                digits: 9,
            })),
        );
        let line = describe_outcome(&failed);
        assert!(line.starts_with("c.hex failed: malformed hex"));
    }

    #[test]
    fn test_format_summary() {
        let mut report = BatchReport {
            entries: vec![
                entry("a.hex", ProcessingOutcome::Failed(EntryError::InsufficientAuth)),
                entry(
                    "b.hex",
                    ProcessingOutcome::Skipped(SkipReason::AlreadyConverted(PathBuf::from("b.txt"))),
                ),
            ],
            cancelled: false,
        };
        assert_eq!(format_summary(&report), "0 converted, 1 skipped, 1 failed");

        report.cancelled = true;
        assert_eq!(
            format_summary(&report),
            "0 converted, 1 skipped, 1 failed (interrupted)"
        );
    }
}
