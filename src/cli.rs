//! Command-line interface parsing for the storefront TUI
//!
//! Handles parsing of CLI arguments using clap, including the --category
//! flag for starting with a filter pre-selected and --api-url for
//! pointing the client at a different catalog server.

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The category name is empty or whitespace
    #[error("Invalid category: '{0}'. Category names must not be blank")]
    InvalidCategory(String),
}

/// shoptui - Browse the Fake Store catalog and manage a cart from the terminal
#[derive(Parser, Debug)]
#[command(name = "shoptui")]
#[command(about = "Terminal storefront with product browsing and a persistent cart")]
#[command(version)]
pub struct Cli {
    /// Start with a category filter pre-selected
    ///
    /// Examples:
    ///   shoptui --category electronics
    ///   shoptui --category "men's clothing"
    #[arg(long, value_name = "NAME")]
    pub category: Option<String>,

    /// Override the catalog API base URL
    #[arg(long, value_name = "URL", default_value = crate::data::catalog::FAKE_STORE_BASE_URL)]
    pub api_url: String,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Category filter to apply after the initial catalog load
    pub initial_category: Option<String>,
    /// Catalog base URL override, if different from the default
    pub api_url: Option<String>,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if a blank category was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let initial_category = match &cli.category {
            None => None,
            Some(name) if name.trim().is_empty() => {
                return Err(CliError::InvalidCategory(name.clone()));
            }
            Some(name) => Some(name.clone()),
        };

        let api_url = if cli.api_url == crate::data::catalog::FAKE_STORE_BASE_URL {
            None
        } else {
            Some(cli.api_url.clone())
        };

        Ok(StartupConfig {
            initial_category,
            api_url,
        })
    }
}
