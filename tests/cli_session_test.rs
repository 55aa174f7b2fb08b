//! Tests for the CLI session: rejections are printed, not raised

use std::io::Cursor;
use std::sync::Arc;

use clap::{CommandFactory, Parser};

use evenodd::application::services::ParityService;
use evenodd::application::PROMPT_MESSAGE;
use evenodd::cli::commands::run_session;
use evenodd::cli::{Cli, Commands, ConfigCommands};
use evenodd::config::Settings;
use evenodd::domain::SortStrategy;
use evenodd::exitcode;
use evenodd::infrastructure::di::ServiceContainer;
use evenodd::infrastructure::traits::{BufLineReader, RngSource};
use evenodd::util::testing;

/// Helper to build a service through the container with scripted stdin
fn service(input: &str, settings: Settings) -> ParityService {
    let seed = settings.seed.unwrap_or(1);
    ServiceContainer::with_deps(
        settings,
        Box::new(BufLineReader::new(Cursor::new(input.to_string()))),
        Box::new(RngSource::seeded(seed)),
    )
    .into_parity_service()
}

#[test]
fn given_non_numeric_input_when_session_runs_then_prints_invalid_input_only() {
    testing::init_test_setup();
    let mut service = service("twelve\n", Settings::default());
    let mut out = Vec::new();

    run_session(&mut service, None, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("{}Invalid Input\n", PROMPT_MESSAGE)
    );
}

#[test]
fn given_zero_count_flag_when_session_runs_then_prints_invalid_input_without_prompt() {
    testing::init_test_setup();
    let mut service = service("", Settings::default());
    let mut out = Vec::new();

    run_session(&mut service, Some(0), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Invalid Input\n");
}

#[test]
fn given_count_over_limit_when_session_runs_then_prints_memory_message() {
    testing::init_test_setup();
    let settings = Settings {
        max_count: Some(10),
        ..Settings::default()
    };
    let mut service = service("11\n", settings);
    let mut out = Vec::new();

    run_session(&mut service, None, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!(
            "{}Error: Too many numbers requested, system cannot allocate memory.\n",
            PROMPT_MESSAGE
        )
    );
}

#[test]
fn given_count_flag_when_session_runs_then_skips_prompt() {
    testing::init_test_setup();
    let mut service = service("", Settings::default());
    let mut out = Vec::new();

    run_session(&mut service, Some(6), &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("\nHere are the random numbers:\n"));
    assert!(output.ends_with(" odd\n"));
    assert!(output.contains("Of the above 6 numbers, "));
}

#[test]
fn given_seed_setting_when_sessions_run_then_outputs_match() {
    testing::init_test_setup();
    let settings = Settings {
        seed: Some(99),
        sort: SortStrategy::Builtin,
        max_count: None,
    };
    let mut first = Vec::new();
    let mut second = Vec::new();

    run_session(&mut service("40\n", settings.clone()), None, &mut first).unwrap();
    run_session(&mut service("40\n", settings), None, &mut second).unwrap();

    assert_eq!(first, second);
}

// ============================================================
// argument parsing
// ============================================================

#[test]
fn given_cli_definition_when_asserted_then_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn given_flags_when_parsing_then_fields_are_set() {
    let cli = Cli::parse_from([
        "evenodd", "-dd", "--count", "5", "--seed", "3", "--sort", "builtin",
    ]);
    assert_eq!(cli.debug, 2);
    assert_eq!(cli.count, Some(5));
    assert_eq!(cli.seed, Some(3));
    assert_eq!(cli.sort, Some(SortStrategy::Builtin));
    assert!(cli.command.is_none());
}

#[test]
fn given_unknown_sort_when_parsing_then_fails() {
    let result = Cli::try_parse_from(["evenodd", "--sort", "quick"]);
    assert!(result.is_err());
}

#[test]
fn given_config_show_when_parsing_then_selects_subcommand() {
    let cli = Cli::parse_from(["evenodd", "config", "show"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Show
        })
    ));
}

#[test]
fn given_rejection_error_when_mapping_exit_code_then_is_ok() {
    use evenodd::application::ApplicationError;
    use evenodd::cli::CliError;
    use evenodd::domain::DomainError;

    let rejection = CliError::from(ApplicationError::from(DomainError::InvalidInput {
        input: "x".into(),
    }));
    let config = CliError::from(ApplicationError::Config {
        message: "bad".into(),
    });
    let internal = CliError::from(ApplicationError::from(DomainError::ValueOutOfRange(1000)));

    assert_eq!(rejection.exit_code(), exitcode::OK);
    assert_eq!(config.exit_code(), exitcode::CONFIG);
    assert_eq!(internal.exit_code(), exitcode::SOFTWARE);
}
