use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_u32, parse_positive_u64};
use super::types::{OutputFormat, PositiveU32, PositiveU64};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Tests if rate limiting is implemented by sending a paced sequence of requests and analyzing the responses."
)]
pub struct ProbeArgs {
    /// Target URL to test (must start with http:// or https://)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Number of requests to send per second
    #[arg(
        long = "requests-per-second",
        short = 'r',
        default_value = "10",
        value_parser = parse_positive_u32
    )]
    pub requests_per_second: PositiveU32,

    /// Total number of requests to send
    #[arg(
        long = "max-requests",
        short = 'm',
        default_value = "50",
        value_parser = parse_positive_u64
    )]
    pub max_requests: PositiveU64,

    /// Timeout for each request (seconds, or with a ms/s/m/h suffix)
    #[arg(
        long = "timeout",
        short = 't',
        default_value = "5",
        value_parser = parse_duration_arg
    )]
    pub timeout: Duration,

    /// Custom User-Agent string (defaults to vuln-Rate-Limiting-Tester/1.0)
    #[arg(long = "user-agent", short = 'u')]
    pub user_agent: Option<String>,

    /// Treat any non-2xx status as a failed request instead of analyzing it
    #[arg(long = "fail-on-error-status")]
    pub fail_on_error_status: bool,

    /// Report format written to stdout
    #[arg(long = "output-format", default_value = "text", ignore_case = true)]
    pub output_format: OutputFormat,

    /// Path to config file (TOML/JSON). Defaults to ./ratelimit-probe.toml or ./ratelimit-probe.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by RATELIMIT_PROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
