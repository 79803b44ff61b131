//! hexconv CLI Library
//!
//! Batch conversion of hex-text files into raw bytes.
//!
//! # Overview
//!
//! Every top-level file of a source folder is read, stripped of spaces and
//! line breaks, decoded as hex and handed to one of two sinks:
//!
//! - **Local folder**: decoded bytes written to `<dest>/<stem>.txt`; entries
//!   whose output already exists are skipped (`hexconv local`)
//! - **Google Sheets**: one `[file name, base64]` row appended per entry,
//!   creating the spreadsheet on first use when none is given (`hexconv sheets`)
//! - **Interactive**: the same two flows driven by prompts (`hexconv interactive`)
//!
//! A failing file never stops the batch. Ctrl+C stops it between files.

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod api;
pub mod batch;
pub mod cancel;
pub mod commands;
pub mod config;
pub mod error;
pub mod progress;
pub mod sink;

// Re-export commonly used types
pub use error::{ApiError, CliError, EntryError, Result};

use api::Credential;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// hexconv - convert folders of hex-text files
#[derive(Parser, Debug)]
#[command(name = "hexconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (prompts interactively when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print help as Markdown and exit
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert into a local folder
    Local {
        /// Folder holding the hex-text files
        source: PathBuf,

        /// Folder receiving the decoded files (created if missing)
        dest: PathBuf,
    },

    /// Append conversions to a Google Sheets spreadsheet
    Sheets(SheetsArgs),

    /// Prompt for every option
    Interactive,
}

/// Arguments of `hexconv sheets`
#[derive(Args, Debug, Clone)]
#[command(group(
    ArgGroup::new("credential")
        .required(true)
        .multiple(false)
        .args(["api_key", "access_token", "token_file", "credentials_file"])
))]
pub struct SheetsArgs {
    /// Folder holding the hex-text files
    pub source: PathBuf,

    /// Existing spreadsheet to append to (a new one is created when omitted)
    #[arg(short, long)]
    pub spreadsheet_id: Option<String>,

    /// API key; only works with an existing spreadsheet
    #[arg(long, env = "HEXCONV_SHEETS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// OAuth access token
    #[arg(long, env = "HEXCONV_SHEETS_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// File holding an OAuth access token, raw or as token JSON
    #[arg(long)]
    pub token_file: Option<PathBuf>,

    /// Google service account key file (JSON)
    #[arg(long, env = "HEXCONV_SHEETS_CREDENTIALS_FILE")]
    pub credentials_file: Option<PathBuf>,

    /// Title for a newly created spreadsheet
    #[arg(long, default_value = config::DEFAULT_SPREADSHEET_TITLE)]
    pub title: String,

    /// Range rows are appended to
    #[arg(long, default_value = config::DEFAULT_SHEET_RANGE)]
    pub range: String,
}

impl SheetsArgs {
    /// Build the credential from whichever flag was given
    pub fn credential(&self) -> Result<Credential> {
        match (
            &self.api_key,
            &self.access_token,
            &self.token_file,
            &self.credentials_file,
        ) {
            (Some(key), None, None, None) => Credential::api_key(key.as_str()),
            (None, Some(token), None, None) => Credential::access_token(token.as_str()),
            (None, None, Some(path), None) => Credential::from_token_file(path),
            (None, None, None, Some(path)) => Credential::from_service_account_file(path),
            (None, None, None, None) => Err(CliError::config(
                "one of --api-key, --access-token, --token-file or --credentials-file is required",
            )),
            _ => Err(CliError::config(
                "--api-key, --access-token, --token-file and --credentials-file are mutually exclusive",
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["hexconv"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_local_args() {
        let cli = Cli::try_parse_from(["hexconv", "-v", "local", "in", "out"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Local { source, dest }) => {
                assert_eq!(source, PathBuf::from("in"));
                assert_eq!(dest, PathBuf::from("out"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_sheets_defaults_and_credential() {
        let cli = Cli::try_parse_from([
            "hexconv",
            "sheets",
            "in",
            "--access-token",
            "tok",
        ])
        .unwrap();
        let Some(Commands::Sheets(args)) = cli.command else {
            panic!("expected sheets command");
        };
        assert_eq!(args.title, config::DEFAULT_SPREADSHEET_TITLE);
        assert_eq!(args.range, config::DEFAULT_SHEET_RANGE);
        assert!(args.spreadsheet_id.is_none());
        assert_eq!(
            args.credential().unwrap(),
            Credential::AccessToken("tok".to_string())
        );
    }

    #[test]
    fn test_sheets_rejects_two_credentials() {
        let result = Cli::try_parse_from([
            "hexconv",
            "sheets",
            "in",
            "--access-token",
            "tok",
            "--token-file",
            "t.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sheets_credentials_file_flag() {
        let cli = Cli::try_parse_from([
            "hexconv",
            "sheets",
            "in",
            "--credentials-file",
            "service-account.json",
        ])
        .unwrap();
        let Some(Commands::Sheets(args)) = cli.command else {
            panic!("expected sheets command");
        };
        assert_eq!(
            args.credentials_file,
            Some(PathBuf::from("service-account.json"))
        );

        let both = Cli::try_parse_from([
            "hexconv",
            "sheets",
            "in",
            "--credentials-file",
            "service-account.json",
            "--api-key",
            "key",
        ]);
        assert!(both.is_err());
    }

    #[test]
    fn test_api_key_credential_is_read_only() {
        let args = SheetsArgs {
            source: PathBuf::from("in"),
            spreadsheet_id: Some("abc".to_string()),
            api_key: Some("key".to_string()),
            access_token: None,
            token_file: None,
            credentials_file: None,
            title: config::DEFAULT_SPREADSHEET_TITLE.to_string(),
            range: config::DEFAULT_SHEET_RANGE.to_string(),
        };
        assert_eq!(
            args.credential().unwrap().access_level(),
            api::AccessLevel::ReadOnly
        );
    }

    #[test]
    fn test_missing_credential_is_config_error() {
        let args = SheetsArgs {
            source: PathBuf::from("in"),
            spreadsheet_id: None,
            api_key: None,
            access_token: None,
            token_file: None,
            credentials_file: None,
            title: String::new(),
            range: String::new(),
        };
        assert!(matches!(args.credential(), Err(CliError::Config(_))));
    }
}
