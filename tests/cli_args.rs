//! Integration tests for CLI argument handling
//!
//! Tests the --category and --api-url flags from the command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_shoptui"))
        .args(args)
        .output()
        .expect("Failed to execute shoptui")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("shoptui"), "Help should mention shoptui");
    assert!(
        stdout.contains("category"),
        "Help should mention --category flag"
    );
    assert!(
        stdout.contains("api-url"),
        "Help should mention --api-url flag"
    );
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_unknown_flag_fails() {
    let output = run_cli(&["--definitely-not-a-flag"]);
    assert!(!output.status.success(), "Unknown flags should fail");
}

#[test]
fn test_blank_category_prints_error_and_exits() {
    let output = run_cli(&["--category", "   "]);
    assert!(
        !output.status.success(),
        "Expected blank category to fail before starting the TUI"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid category"),
        "Should print error message about invalid category: {}",
        stderr
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use shoptui::cli::{Cli, StartupConfig};

    #[test]
    fn test_cli_no_args_has_no_category() {
        let cli = Cli::parse_from(["shoptui"]);
        assert!(cli.category.is_none());
    }

    #[test]
    fn test_cli_category_flag_with_value() {
        let cli = Cli::parse_from(["shoptui", "--category", "electronics"]);
        assert_eq!(cli.category.as_deref(), Some("electronics"));
    }

    #[test]
    fn test_cli_category_with_spaces_in_name() {
        let cli = Cli::parse_from(["shoptui", "--category", "men's clothing"]);
        assert_eq!(cli.category.as_deref(), Some("men's clothing"));
    }

    #[test]
    fn test_startup_config_carries_category() {
        let cli = Cli::parse_from(["shoptui", "--category", "jewelery"]);
        let config = StartupConfig::from_cli(&cli).expect("Valid category should parse");
        assert_eq!(config.initial_category.as_deref(), Some("jewelery"));
    }

    #[test]
    fn test_startup_config_rejects_blank_category() {
        let cli = Cli::parse_from(["shoptui", "--category", ""]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }

    #[test]
    fn test_startup_config_api_url_override() {
        let cli = Cli::parse_from(["shoptui", "--api-url", "http://127.0.0.1:1"]);
        let config = StartupConfig::from_cli(&cli).expect("Config should parse");
        assert_eq!(config.api_url.as_deref(), Some("http://127.0.0.1:1"));
    }
}
