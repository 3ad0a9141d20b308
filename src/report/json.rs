use std::io::Write;

use serde::Serialize;

use crate::domain::{ResponseRecord, RunResult};
use crate::error::AppResult;

use super::Summary;

#[derive(Debug, Serialize)]
struct JsonEntry<'run> {
    request: usize,
    failed: bool,
    record: Option<&'run ResponseRecord>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'run> {
    results: Vec<JsonEntry<'run>>,
    summary: &'run Summary,
}

pub(super) fn write_json_report<W>(
    result: &RunResult,
    summary: &Summary,
    out: &mut W,
) -> AppResult<()>
where
    W: Write,
{
    let results = result
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| JsonEntry {
            request: index.saturating_add(1),
            failed: entry.is_none(),
            record: entry.as_ref(),
        })
        .collect();
    let report = JsonReport { results, summary };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
