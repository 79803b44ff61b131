//! hexconv CLI - Main entry point

use clap::Parser;
use colored::Colorize;
use hexconv_cli::commands::sheets::SheetsOptions;
use hexconv_cli::{Cli, Commands};
use hexconv_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Verbose: debug to console. Otherwise warnings only, so stdout stays a clean report.
    let base = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("hexconv")
        .build();

    // Environment variables take precedence over flags
    let log_config = match LogConfig::from_env_or(base.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring invalid logging environment: {}", e);
            base
        }
    };

    // CLI should work without logging
    let guard = init_logging(&log_config).ok().flatten();

    let result = execute_command(&cli).await;

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        drop(guard);
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> hexconv_cli::Result<()> {
    match &cli.command {
        Some(Commands::Local { source, dest }) => {
            hexconv_cli::commands::local::run(source.clone(), dest.clone()).await
        }

        Some(Commands::Sheets(args)) => {
            hexconv_cli::commands::sheets::run(SheetsOptions::from_args(args)?).await
        }

        Some(Commands::Interactive) | None => hexconv_cli::commands::interactive::run().await,
    }
}
