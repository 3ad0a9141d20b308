//! HTTP client wrapper used for every probe attempt.
mod client;
mod response;


pub use client::{HttpProbeClient, ProbeTarget};
pub use response::ProbeResponse;
