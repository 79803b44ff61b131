//! `hexconv sheets` command implementation

use crate::api::{AccessLevel, Credential, SheetsClient};
use crate::config::Config;
use crate::error::Result;
use crate::progress::ConsoleReporter;
use crate::sink::{SheetsSink, SpreadsheetBinding};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Fully resolved options of a spreadsheet export
#[derive(Debug, Clone)]
pub struct SheetsOptions {
    pub source: PathBuf,
    pub credential: Credential,
    pub spreadsheet_id: Option<String>,
    pub title: String,
    pub range: String,
}

impl SheetsOptions {
    pub fn from_args(args: &crate::SheetsArgs) -> Result<Self> {
        Ok(Self {
            source: args.source.clone(),
            credential: args.credential()?,
            spreadsheet_id: args.spreadsheet_id.clone(),
            title: args.title.clone(),
            range: args.range.clone(),
        })
    }
}

/// Append every file of `options.source` to a spreadsheet
pub async fn run(options: SheetsOptions) -> Result<()> {
    let config = Config::from_env();
    let access = options.credential.access_level();
    let binding = SpreadsheetBinding::from_id(options.spreadsheet_id);

    if binding == SpreadsheetBinding::Unbound && access == AccessLevel::ReadOnly {
        warn!("API key without spreadsheet id, every entry will fail");
        eprintln!(
            "{} An API key cannot create spreadsheets. Pass --spreadsheet-id, an access token or a service account key.",
            "Warning:".yellow().bold()
        );
    }

    let client = SheetsClient::from_config(&config, options.credential)?;
    info!(api = %client.base_url(), source = %options.source.display(), "Exporting to spreadsheet");

    let reporter = ConsoleReporter::new();
    let pb = reporter.progress_bar();
    let mut sink = SheetsSink::new(Arc::new(client), access, binding)
        .with_title(options.title)
        .with_range(options.range)
        .with_created_hook(Box::new(move |id| {
            pb.suspend(|| println!("{} {}", "Created spreadsheet:".green().bold(), id))
        }));

    println!(
        "{} {} -> Google Sheets",
        "Converting".cyan().bold(),
        options.source.display()
    );

    super::convert(&options.source, &mut sink, reporter).await?;
    Ok(())
}
