//! Orchestration for `collatz lengths`: interval reports in text or JSON.

use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::debug;

use crate::core::stats::{LengthStats, lengths};

/// Interval report: one row per integer plus the summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthReport {
    pub stats: LengthStats,
    pub rows: Vec<LengthRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthRow {
    pub n: u64,
    pub len: u64,
}

/// Compute the report for `[low, high]`.
pub fn build_report(low: u64, high: u64) -> Result<LengthReport> {
    if low == 0 {
        bail!("low must be >= 1");
    }
    if low > high {
        bail!("low must be <= high (got {low} > {high})");
    }
    debug!(low, high, "building length report");
    let rows: Vec<LengthRow> = lengths(low, high)
        .map(|(n, len)| LengthRow { n, len })
        .collect();
    let stats = LengthStats::from_lengths(low, high, rows.iter().map(|row| row.len));
    Ok(LengthReport { stats, rows })
}

/// Write the report as text: one `<n>: <len>` row per integer, then a
/// single summary line.
pub fn write_text<W: Write>(out: &mut W, report: &LengthReport) -> Result<()> {
    for row in &report.rows {
        writeln!(out, "{}: {}", row.n, row.len).context("write length row")?;
    }
    let stats = &report.stats;
    writeln!(
        out,
        "[{}..{}]: mean {:.3}, stddev {:.3}, min {}, max {}",
        stats.low, stats.high, stats.mean, stats.stddev, stats.min, stats.max
    )
    .context("write summary line")?;
    Ok(())
}

/// Write the report as pretty-printed JSON with trailing newline.
pub fn write_json<W: Write>(out: &mut W, report: &LengthReport) -> Result<()> {
    let mut payload = serde_json::to_string_pretty(report).context("serialize report")?;
    payload.push('\n');
    out.write_all(payload.as_bytes()).context("write report")?;
    Ok(())
}
