use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, info, instrument};

use crate::application::services::ParityService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, RawSettings, Settings};
use crate::domain::Count;
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    debug!(?settings, "effective settings");
    match &cli.command {
        Some(Commands::Config { command }) => execute_config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "evenodd", &mut io::stdout());
            Ok(())
        }
        None => {
            let mut service = ServiceContainer::new(settings).into_parity_service();
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run_session(&mut service, cli.count, &mut out)
        }
    }
}

/// Layered settings with command-line flags applied last.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(apply_cli_overrides(settings, cli))
}

pub fn apply_cli_overrides(settings: Settings, cli: &Cli) -> Settings {
    settings.merge_with(&RawSettings {
        seed: cli.seed,
        sort: cli.sort,
        max_count: None,
    })
}

/// Run one prompt/report cycle, printing rejections instead of failing.
///
/// `InvalidInput` and `AllocationFailure` end the session normally with
/// their fixed message on `out`.
#[instrument(skip(service, out))]
pub fn run_session(
    service: &mut ParityService,
    count: Option<usize>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let result = match count {
        Some(n) => Count::new(n)
            .map_err(ApplicationError::from)
            .and_then(|count| service.run_with_count(count, out)),
        None => service.run(out),
    };

    match result {
        Ok(report) => {
            info!(
                total = report.total(),
                evens = report.even_count(),
                odds = report.odd_count(),
                "session complete"
            );
            Ok(())
        }
        Err(e) => match e.as_rejection() {
            Some(rejection) => {
                info!(?rejection, "request rejected");
                writeln!(out, "{}", rejection).map_err(|e| CliError::io("write message", e))?;
                out.flush().map_err(|e| CliError::io("flush stdout", e))
            }
            None => Err(e.into()),
        },
    }
}

fn execute_config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml()?.trim_end());
            Ok(())
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                if !path.exists() {
                    output::warning(&format!("{} does not exist", path.display()));
                }
                output::info(&path.display());
                Ok(())
            }
            None => Err(CliError::Usage(
                "cannot determine config directory (no home directory)".to_string(),
            )),
        },
    }
}
