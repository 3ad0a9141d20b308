//! Final report: per-request listing, totals and the rate-limiting verdict.
mod json;
mod summary;
mod text;


use std::io::Write;

use tracing::warn;

use crate::args::OutputFormat;
use crate::domain::RunResult;
use crate::error::AppResult;

pub use summary::{Summary, Verdict, summarize};

/// Writes the report for `result` in the requested format.
///
/// # Errors
///
/// Returns an error when writing to `out` or JSON encoding fails.
pub fn write_report<W>(result: &RunResult, format: OutputFormat, out: &mut W) -> AppResult<()>
where
    W: Write,
{
    if result.is_empty() {
        warn!("No responses to report.");
        return Ok(());
    }

    let summary = summarize(result);
    match format {
        OutputFormat::Text => text::write_text_report(result, &summary, out)?,
        OutputFormat::Json => json::write_json_report(result, &summary, out)?,
    }
    out.flush()?;
    Ok(())
}
