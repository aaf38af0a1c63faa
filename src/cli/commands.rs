//! Command dispatch: each subcommand loads a chart, runs, and prints.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{apply_steps, load_chart, Step};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, OutputFormat, Settings};
use crate::domain::{DomainError, Employee, EmployeeId};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    if !settings.color {
        output::disable_colors();
    }
    let format = cli.format.unwrap_or(settings.format);

    match &cli.command {
        Some(Commands::Show { chart }) => {
            _show(&resolve_chart(chart.as_deref(), &settings)?, format)
        }
        Some(Commands::Get { chart, id }) => {
            _get(&resolve_chart(chart.as_deref(), &settings)?, *id, format)
        }
        Some(Commands::Apply { chart, steps }) => {
            _apply(&resolve_chart(chart.as_deref(), &settings)?, steps, format)
        }
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// The chart argument, else the configured default chart.
fn resolve_chart(chart: Option<&Path>, settings: &Settings) -> CliResult<PathBuf> {
    chart
        .map(Path::to_path_buf)
        .or_else(|| settings.default_chart.clone())
        .ok_or_else(|| CliError::Usage("no chart given and no default_chart configured".into()))
}

/// Renders a (sub)chart in the requested format.
pub fn render(employee: &Employee, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Tree => Ok(employee.to_tree_string().to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(employee)
            .map_err(|e| CliError::from(DomainError::Snapshot(e))),
    }
}

#[instrument]
fn _show(chart: &Path, format: OutputFormat) -> CliResult<()> {
    let org = load_chart(chart)?;
    debug!(employees = org.len(), depth = org.depth(), "showing chart");
    output::info(render(&org.ceo(), format)?.trim_end());
    Ok(())
}

#[instrument]
fn _get(chart: &Path, id: EmployeeId, format: OutputFormat) -> CliResult<()> {
    let org = load_chart(chart)?;
    let employee = org
        .get(id)
        .ok_or(DomainError::EmployeeNotFound(id))?;
    if format == OutputFormat::Tree {
        match org.supervisor_of(id) {
            Some(supervisor) => output::header(&format!("reports to {supervisor}")),
            None => output::header("top of the chart"),
        }
    }
    output::info(render(&employee, format)?.trim_end());
    Ok(())
}

#[instrument(skip(steps))]
fn _apply(chart: &Path, steps: &[Step], format: OutputFormat) -> CliResult<()> {
    let mut org = load_chart(chart)?;
    let outcomes = apply_steps(&mut org, steps)?;

    for outcome in &outcomes {
        if outcome.changed {
            output::success(&outcome.step);
        } else {
            output::skipped(&format!("{} (nothing to do)", outcome.step));
        }
    }
    let skipped = outcomes.iter().filter(|o| !o.changed).map(|o| o.step).join(", ");
    if !skipped.is_empty() {
        output::warning(&format!("no effect: {skipped}"));
    }

    output::info(render(&org.ceo(), format)?.trim_end());
    Ok(())
}

#[instrument(skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(settings.to_toml()?.trim_end()),
        ConfigCommands::Template => output::info(Settings::template().trim_end()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => return Err(CliError::Usage("no config directory on this platform".into())),
        },
    }
    Ok(())
}
