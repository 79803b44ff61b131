//! Build automation tasks for hexconv
//!
//! Currently one task: regenerating the CLI reference from the clap
//! definitions so the docs cannot drift from the binary.

use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for hexconv", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<hexconv_cli::Cli>();

    let content = format!(
        r#"# hexconv CLI Reference

Generated from the CLI source code. Last updated: {}.

## Overview

hexconv decodes every file of a folder from hex text into raw bytes. Spaces
and line breaks in the input are ignored. Results go either to a local folder
or, as base64, to rows of a Google Sheets spreadsheet.

## Quick Start

```bash
# Decode into a local folder; reruns skip files already converted
hexconv local ./dumps ./decoded

# Append to a new spreadsheet (its id is printed at the end)
hexconv sheets ./dumps --access-token "$(gcloud auth print-access-token)"

# Append to an existing spreadsheet with an API key
hexconv sheets ./dumps --api-key "$KEY" --spreadsheet-id 1AbC...

# Answer prompts instead of passing flags
hexconv
```

## Commands

{}

## Environment Variables

- `HEXCONV_SHEETS_API_KEY` - API key for `hexconv sheets`
- `HEXCONV_SHEETS_ACCESS_TOKEN` - OAuth access token for `hexconv sheets`
- `HEXCONV_SHEETS_API_URL` - Spreadsheet API base URL (default: `https://sheets.googleapis.com`)
- `HEXCONV_API_TIMEOUT_SECS` - Timeout of each spreadsheet request (default: `60`)
- `HEXCONV_LOG_LEVEL` - `trace`, `debug`, `info`, `warn` or `error`
- `HEXCONV_LOG_OUTPUT` - `console`, `file` or `both`
- `HEXCONV_LOG_FORMAT` - `text` or `json`
- `HEXCONV_LOG_DIR` - Directory for log files
- `HEXCONV_LOG_FILTER` - Extra `tracing` filter directives

A `.env` file in the working directory is read on startup.

## Exit Codes

- `0` - The batch ran, including when some files failed or it was interrupted
- `1` - Fatal error: unreadable source folder, destination setup, credentials
- `2` - Invalid arguments

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content).with_context(|| format!("writing {}", file_path.display()))?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
