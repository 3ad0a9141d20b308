use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PositiveU32, PositiveU64, ProbeArgs};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Fills in every option not given on the command line from `config`.
///
/// # Errors
///
/// Returns an error when a config value is zero or not a valid duration.
pub fn apply_config(
    args: &mut ProbeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "requests_per_second")
        && let Some(rate) = config.requests_per_second
    {
        args.requests_per_second = PositiveU32::try_from(rate).map_err(|err| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "requests_per_second",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "max_requests")
        && let Some(max_requests) = config.max_requests
    {
        args.max_requests = PositiveU64::try_from(max_requests).map_err(|err| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "max_requests",
                source: err,
            })
        })?;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = timeout
            .to_duration()
            .map_err(|err| AppError::config(ConfigError::InvalidTimeout { source: err }))?;
    }

    if !is_cli(matches, "user_agent")
        && let Some(user_agent) = config.user_agent.clone()
    {
        args.user_agent = Some(user_agent);
    }

    if !is_cli(matches, "fail_on_error_status")
        && let Some(fail) = config.fail_on_error_status
    {
        args.fail_on_error_status = fail;
    }

    if !is_cli(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}
