//! Core library entry for the `tripweaver` CLI.
//!
//! A trip request becomes a prompt, the prompt goes to a generative model,
//! the response is validated into an [`trip::ItineraryPlan`], and the plan is
//! saved to a local history. The model and the storage sit behind the traits
//! in [`ports`]; [`context::ServiceContext`] picks live, recording, or
//! replaying adapters for them.

pub mod adapters;
pub mod booking;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod generate;
pub mod history;
pub mod ports;
pub mod prompt;
pub mod trip;
pub mod validate;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Config;

/// Run the CLI with the provided arguments and configuration.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub async fn run<I, T>(args: I, config: &Config) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command, config).await
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::config::{Config, StoreLocation};

    fn memory_config() -> Config {
        Config { store: StoreLocation::Memory, ..Config::default() }
    }

    #[tokio::test]
    async fn run_lists_seeded_history() {
        let result = run(["tripweaver", "history"], &memory_config()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn run_errors_on_unknown_subcommand() {
        let result = run(["tripweaver", "unknown"], &memory_config()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn run_errors_on_missing_history_index() {
        let err = run(["tripweaver", "show", "7"], &memory_config()).await.unwrap_err();
        assert!(err.contains("No itinerary at history index 7"));
    }

    #[tokio::test]
    async fn generate_without_api_key_reports_generic_failure() {
        let err = run(
            [
                "tripweaver", "generate", "--destination", "Goa", "--start", "2024-01-01",
                "--end", "2024-01-02",
            ],
            &memory_config(),
        )
        .await
        .unwrap_err();
        assert_eq!(err, crate::error::GENERATION_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn generate_rejects_reversed_dates_before_calling_model() {
        let err = run(
            [
                "tripweaver", "generate", "--destination", "Goa", "--start", "2024-01-05",
                "--end", "2024-01-02",
            ],
            &memory_config(),
        )
        .await
        .unwrap_err();
        assert_ne!(err, crate::error::GENERATION_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn help_is_not_an_error() {
        assert!(run(["tripweaver", "--help"], &memory_config()).await.is_ok());
    }
}
