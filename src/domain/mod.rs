//! Run configuration and per-request records shared by the probe stages.
pub mod probe;
pub mod record;


pub use probe::{ProbeConfig, StatusPolicy};
pub use record::{BLOCKED_STATUS_CODES, ResponseRecord, RunResult};
