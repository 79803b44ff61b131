//! `hexconv local` command implementation

use crate::config::Config;
use crate::error::Result;
use crate::progress::ConsoleReporter;
use crate::sink::LocalSink;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// Convert every file of `source` into `dest`
pub async fn run(source: PathBuf, dest: PathBuf) -> Result<()> {
    let config = Config::from_env();

    // Destination must exist before the first entry is touched.
    let mut sink = LocalSink::create(&dest, config.output_extension).await?;

    info!(source = %source.display(), dest = %dest.display(), "Converting to local folder");
    println!(
        "{} {} -> {}",
        "Converting".cyan().bold(),
        source.display(),
        sink.dest_dir().display()
    );

    super::convert(&source, &mut sink, ConsoleReporter::new()).await?;
    Ok(())
}
