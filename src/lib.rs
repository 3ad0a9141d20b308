//! Core library for the `ratelimit-probe` CLI.
//!
//! The binary sends a bounded, paced run of GET requests at one URL, captures
//! the status and rate-limit headers of every response, and reports whether
//! the server answered with 429/503 throttling. The modules below follow that
//! flow: CLI arguments and config files become a [`domain::ProbeConfig`], the
//! [`runner`] drives an [`http::ProbeTarget`], the [`analyzer`] turns each
//! response into a [`domain::ResponseRecord`], and [`report`] prints the
//! result.
mod adapters;
pub mod analyzer;
pub mod args;
pub mod config;
pub mod domain;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod report;
pub mod runner;

#[cfg(test)]
mod test_server;
