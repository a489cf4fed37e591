//! Command-line runner for the SEIHRD model.
//!
//! Collects the run fields from flags and an optional TOML run file, runs the
//! integration, and hands the trajectory to a CSV file and/or a chart window.

pub mod args;
pub mod chart;
pub mod config;
pub mod export;
pub mod input;

use std::path::PathBuf;

use epistep_models::seihrd::{Run, SimulationError};
use log::{LevelFilter, debug, info};
use thiserror::Error;

use crate::{args::Args, config::RunFile, input::InputForm};

pub use input::InputError;

/// Any failure of a command-line run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("simulation failed")]
    Simulation(#[from] SimulationError),

    #[error("cannot write {}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[cfg(feature = "plot")]
    #[error("cannot open chart window")]
    Plot(#[from] epistep_observers::ShowError),
}

/// Installs the global logger at `level`.
///
/// `RUST_LOG` is parsed after the level is applied, so it can refine or
/// override it per module. Calling this more than once keeps the first logger.
pub fn init_logging(level: LevelFilter) {
    if let Err(err) = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
    {
        debug!("logger already installed: {err}");
    }
}

/// Parses the inputs and integrates the model without any output side effects.
///
/// # Errors
///
/// Returns [`CliError::Input`] for missing or malformed fields, and
/// [`CliError::Simulation`] if the integration fails.
pub fn simulate(args: &Args) -> Result<Run, CliError> {
    let mut form = InputForm::from(args);
    if let Some(path) = &args.config {
        debug!("loading run file {}", path.display());
        form = form.or_file(RunFile::load(path)?);
    }

    let scenario = form.parse()?;
    info!(
        "running {} from t = {} to t = {} with dt = {}",
        scenario.method, scenario.t0, scenario.tf, scenario.dt
    );

    let run = scenario.run()?;
    info!(
        "{} points computed; population drift {}",
        run.grid.len(),
        run.trajectory.population_drift(run.params.population)
    );

    Ok(run)
}

/// Runs the full command: simulate, export, and chart.
///
/// # Errors
///
/// Returns a [`CliError`] if any stage fails.
pub fn run(args: &Args) -> Result<(), CliError> {
    let run = simulate(args)?;

    if let Some(path) = &args.output {
        export::write_csv_file(path, &run.grid, &run.trajectory).map_err(|source| {
            CliError::Export {
                path: path.clone(),
                source,
            }
        })?;
        info!("wrote {}", path.display());
    }

    if !args.no_plot {
        show(&run)?;
    }

    Ok(())
}

#[cfg(feature = "plot")]
fn show(run: &Run) -> Result<(), CliError> {
    chart::chart(&run.grid, &run.trajectory).show(chart::show_config())?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
#[allow(clippy::unnecessary_wraps)]
fn show(_run: &Run) -> Result<(), CliError> {
    log::warn!("built without the `plot` feature; skipping chart");
    Ok(())
}
