use std::io::{self, Write};

use crate::domain::RunResult;

use super::Summary;

pub(super) fn write_text_report<W>(
    result: &RunResult,
    summary: &Summary,
    out: &mut W,
) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "\n--- Rate Limiting Test Results ---")?;

    for (index, entry) in result.entries().iter().enumerate() {
        writeln!(out, "\nRequest #{}:", index.saturating_add(1))?;
        let Some(record) = entry else {
            writeln!(out, "  Request Failed.")?;
            continue;
        };
        writeln!(out, "  status_code: {}", record.status_code)?;
        for (name, value) in record.header_fields() {
            writeln!(out, "  {}: {}", name, value.unwrap_or("None"))?;
        }
    }

    writeln!(out, "\n--- Summary ---")?;
    writeln!(out, "Total Requests: {}", summary.total_requests)?;
    writeln!(out, "Blocked Requests (429/503): {}", summary.blocked_requests)?;
    writeln!(out, "Failed Requests: {}", summary.failed_requests)?;
    writeln!(
        out,
        "Elapsed: {}.{:03}s",
        summary.elapsed_ms / 1000,
        summary.elapsed_ms % 1000
    )?;
    writeln!(
        out,
        "Achieved Rate: {}.{:02} req/s",
        summary.achieved_rps_x100 / 100,
        summary.achieved_rps_x100 % 100
    )?;
    writeln!(out, "\n{}", summary.verdict.message())
}
