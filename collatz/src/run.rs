//! Orchestration for `collatz run`: trace one sequence and summarize it.

use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::core::sequence::Sequence;

/// Result of running one sequence to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub start: u64,
    pub steps: u64,
}

impl RunOutcome {
    /// Summary line printed after every run, traced or not.
    pub fn summary(&self) -> String {
        format!("[{} -> 1]: {} iterations", self.start, self.steps)
    }
}

/// Run the sequence from `start`, writing one decimal value per line to
/// `trace` when given (the start and the final 1 included).
///
/// Returns the number of step-rule applications, which is one less than the
/// number of values visited. Deterministic: identical inputs produce
/// identical outcomes and identical trace output.
pub fn run_sequence<W: Write>(start: u64, mut trace: Option<&mut W>) -> Result<RunOutcome> {
    if start == 0 {
        bail!("start must be >= 1");
    }
    debug!(start, "running sequence");
    let mut visited: u64 = 0;
    for value in Sequence::new(start) {
        if let Some(out) = trace.as_mut() {
            writeln!(out, "{value}").context("write trace line")?;
        }
        visited += 1;
    }
    let steps = visited - 1;
    debug!(start, steps, "sequence finished");
    Ok(RunOutcome { start, steps })
}
