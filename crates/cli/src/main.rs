use std::{error::Error, process::ExitCode};

use clap::Parser;
use epistep_cli::{args::Args, init_logging, run};
use log::error;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level.into());

    match run(&args) {
        Ok(()) => {
            println!("Simulation complete.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("run failed: {err}");
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
