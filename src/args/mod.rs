//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use cli::ProbeArgs;
pub use types::{OutputFormat, PositiveU32, PositiveU64};

pub(crate) use defaults::DEFAULT_USER_AGENT;
pub(crate) use parsers::parse_duration_arg;
#[cfg(test)]
pub(crate) use test_support::parse_test_args;
