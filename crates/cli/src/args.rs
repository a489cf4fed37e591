use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Integrate a six-compartment epidemic model and chart the result.
///
/// Every run field is taken as text and may also come from a TOML run file
/// passed with `--config`; flags override the file.
#[derive(Parser, Debug, Default)]
#[command(name = "epistep", version)]
pub struct Args {
    /// Initial time (days)
    #[arg(long, allow_hyphen_values = true)]
    pub t0: Option<String>,

    /// Final time (days)
    #[arg(long, allow_hyphen_values = true)]
    pub tf: Option<String>,

    /// Step size; small steps (< 0.1) keep Euler stable
    #[arg(long, allow_hyphen_values = true)]
    pub dt: Option<String>,

    /// Infection rate, expected in (0, 1]
    #[arg(long, allow_hyphen_values = true)]
    pub beta: Option<String>,

    /// Recovery rate; recorded with the run, not used by the equations
    #[arg(long, allow_hyphen_values = true)]
    pub gamma: Option<String>,

    /// Initial susceptible population
    #[arg(long, allow_hyphen_values = true)]
    pub s0: Option<String>,

    /// Initial infectious population
    #[arg(long, allow_hyphen_values = true)]
    pub i0: Option<String>,

    /// Integration method: "Euler" or "Runge-Kutta" [default: Euler]
    #[arg(short, long)]
    pub method: Option<String>,

    /// TOML run file supplying any of the fields above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the trajectory to this CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not open the chart window
    #[arg(long)]
    pub no_plot: bool,

    /// Log level; `RUST_LOG` refines it per module
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

/// Log verbosity accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn numeric_flags_are_kept_as_text() {
        let args = Args::try_parse_from([
            "epistep", "--t0", "-5", "--tf", "1e2", "--dt", "abc", "--method", "RK4",
        ])
        .unwrap();

        assert_eq!(args.t0.as_deref(), Some("-5"));
        assert_eq!(args.tf.as_deref(), Some("1e2"));
        assert_eq!(args.dt.as_deref(), Some("abc"));
        assert_eq!(args.method.as_deref(), Some("RK4"));
        assert_eq!(args.beta, None);
        assert_eq!(args.log_level, LogLevel::Warn);
    }

    #[test]
    fn log_level_maps_to_filter() {
        let args = Args::try_parse_from(["epistep", "--log-level", "debug"]).unwrap();
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
