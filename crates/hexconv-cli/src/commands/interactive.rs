//! `hexconv interactive` command implementation
//!
//! Asks for the same values the other subcommands take as flags, then runs
//! the matching command.

use super::sheets::SheetsOptions;
use crate::api::Credential;
use crate::config::{DEFAULT_SHEET_RANGE, DEFAULT_SPREADSHEET_TITLE};
use crate::error::Result;
use inquire::{Password, PasswordDisplayMode, Select, Text};
use std::fmt;
use std::path::PathBuf;

/// Where converted files go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    LocalFolder,
    GoogleSheets,
}

impl ExportChoice {
    pub const ALL: [ExportChoice; 2] = [ExportChoice::LocalFolder, ExportChoice::GoogleSheets];
}

impl fmt::Display for ExportChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalFolder => write!(f, "Local folder"),
            Self::GoogleSheets => write!(f, "Google Sheets"),
        }
    }
}

/// How to authenticate against the spreadsheet API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChoice {
    ApiKey,
    ServiceAccount,
    TokenFile,
    AccessToken,
}

impl AuthChoice {
    pub const ALL: [AuthChoice; 4] = [
        AuthChoice::ApiKey,
        AuthChoice::ServiceAccount,
        AuthChoice::TokenFile,
        AuthChoice::AccessToken,
    ];
}

impl fmt::Display for AuthChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey => write!(f, "API key (existing spreadsheet only)"),
            Self::ServiceAccount => write!(f, "Service account credentials file (JSON)"),
            Self::TokenFile => write!(f, "OAuth token file"),
            Self::AccessToken => write!(f, "Access token"),
        }
    }
}

/// Prompt for everything, then convert
pub async fn run() -> Result<()> {
    let source = PathBuf::from(
        Text::new("Source folder:")
            .with_help_message("Folder holding the hex-text files")
            .with_validator(non_blank)
            .prompt()?
            .trim(),
    );

    match Select::new("Export to:", ExportChoice::ALL.to_vec()).prompt()? {
        ExportChoice::LocalFolder => {
            let dest = Text::new("Destination folder:")
                .with_help_message("Created if it does not exist")
                .with_validator(non_blank)
                .prompt()?;
            super::local::run(source, PathBuf::from(dest.trim())).await
        }
        ExportChoice::GoogleSheets => {
            let credential = prompt_credential()?;
            let spreadsheet_id = Text::new("Spreadsheet ID:")
                .with_help_message("Leave empty to create a new spreadsheet")
                .prompt()?;

            super::sheets::run(SheetsOptions {
                source,
                credential,
                spreadsheet_id: Some(spreadsheet_id),
                title: DEFAULT_SPREADSHEET_TITLE.to_string(),
                range: DEFAULT_SHEET_RANGE.to_string(),
            })
            .await
        }
    }
}

fn prompt_credential() -> Result<Credential> {
    match Select::new("Authentication method:", AuthChoice::ALL.to_vec()).prompt()? {
        AuthChoice::ApiKey => {
            let key = secret_prompt("API key:").prompt()?;
            Credential::api_key(key.trim())
        }
        AuthChoice::ServiceAccount => {
            let path = Text::new("Credentials file:")
                .with_help_message("Service account key downloaded from the Google Cloud console")
                .with_validator(non_blank)
                .prompt()?;
            Credential::from_service_account_file(path.trim())
        }
        AuthChoice::TokenFile => {
            let path = Text::new("Token file:")
                .with_validator(non_blank)
                .prompt()?;
            Credential::from_token_file(path.trim())
        }
        AuthChoice::AccessToken => {
            let token = secret_prompt("Access token:").prompt()?;
            Credential::access_token(token.trim())
        }
    }
}

fn secret_prompt(message: &str) -> Password<'_> {
    Password::new(message)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(non_blank)
}

/// Reject empty or whitespace-only input
fn non_blank(
    input: &str,
) -> std::result::Result<inquire::validator::Validation, inquire::CustomUserError> {
    use inquire::validator::Validation;

    if input.trim().is_empty() {
        Ok(Validation::Invalid("A value is required".into()))
    } else {
        Ok(Validation::Valid)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use inquire::validator::Validation;

    #[test]
    fn test_non_blank() {
        assert!(matches!(non_blank("in").unwrap(), Validation::Valid));
        assert!(matches!(non_blank("   ").unwrap(), Validation::Invalid(_)));
        assert!(matches!(non_blank("").unwrap(), Validation::Invalid(_)));
    }

    #[test]
    fn test_choice_labels() {
        let exports: Vec<String> = ExportChoice::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(exports, ["Local folder", "Google Sheets"]);

        let auths: Vec<String> = AuthChoice::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            auths,
            [
                "API key (existing spreadsheet only)",
                "Service account credentials file (JSON)",
                "OAuth token file",
                "Access token"
            ]
        );
    }
}
