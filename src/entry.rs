use std::process::ExitCode;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::error;

use crate::adapters::cli::to_probe_config;
use crate::args::ProbeArgs;
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult};
use crate::http::HttpProbeClient;
use crate::report::write_report;
use crate::runner::run_probe;

/// Parses the command line, runs the probe and prints the report.
#[must_use]
pub fn run() -> ExitCode {
    let matches = ProbeArgs::command().get_matches();
    let args = match ProbeArgs::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(err) => err.exit(),
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    match execute(args, &matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_invalid_input() => {
            error!("Invalid input: {}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("An unexpected error occurred: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(mut args: ProbeArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }
    let config = to_probe_config(&args)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(async {
        let client = HttpProbeClient::new(&config)?;
        Ok::<_, AppError>(run_probe(&client, &config).await)
    })?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&result, args.output_format, &mut out)
}
