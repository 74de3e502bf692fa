//! Collatz sequence CLI.
//!
//! `run` traces a single trajectory to 1 and prints a summary, `lengths`
//! reports sequence lengths over an interval, and `tree` walks the
//! predecessor tree (optionally as Graphviz dot). Verbosity of `run` is an
//! explicit `--quiet` flag rather than anything inferred from the
//! invocation.

use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use collatz::exit_codes;
use collatz::graph::{self, TreeRequest};
use collatz::lengths;
use collatz::run::run_sequence;

#[derive(Parser)]
#[command(name = "collatz", version, about = "Collatz sequence explorer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Trace the sequence from START to 1 and print a summary line.
    Run {
        /// Starting value (>= 1).
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        start: u64,
        /// Suppress the per-value trace; print only the summary line.
        #[arg(short, long)]
        quiet: bool,
    },
    /// Print sequence lengths for every integer in [LOW, HIGH] plus stats.
    Lengths {
        /// Lower bound of the interval (>= 1).
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        low: u64,
        /// Upper bound of the interval (inclusive).
        high: u64,
        /// Emit the report as pretty JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Walk the tree of Collatz predecessors rooted at ROOT.
    Tree {
        /// Root value (>= 1).
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        root: u64,
        /// Number of tree layers to generate.
        #[arg(long)]
        max_depth: u32,
        /// Omit even values, annotating each odd with the evens skipped.
        #[arg(long)]
        compressed: bool,
        /// Bound on runs of consecutive skipped evens (compressed only).
        #[arg(long, default_value_t = 10, requires = "compressed")]
        max_evens: u32,
        /// Stop after emitting this many nodes.
        #[arg(long)]
        max_nodes: Option<usize>,
        /// Emit a Graphviz dot document instead of a listing.
        #[arg(long)]
        dot: bool,
    },
}

fn main() {
    collatz::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Run { start, quiet } => cmd_run(&mut out, start, quiet),
        Command::Lengths { low, high, json } => cmd_lengths(&mut out, low, high, json),
        Command::Tree {
            root,
            max_depth,
            compressed,
            max_evens,
            max_nodes,
            dot,
        } => {
            let req = TreeRequest {
                root,
                max_depth,
                compressed,
                max_evens,
                max_nodes,
            };
            if dot {
                graph::write_dot(&mut out, &req)
            } else {
                graph::write_listing(&mut out, &req)
            }
        }
    }
}

fn cmd_run<W: Write>(out: &mut W, start: u64, quiet: bool) -> Result<()> {
    let outcome = if quiet {
        run_sequence::<W>(start, None)?
    } else {
        run_sequence(start, Some(&mut *out))?
    };
    writeln!(out, "{}", outcome.summary())?;
    Ok(())
}

fn cmd_lengths<W: Write>(out: &mut W, low: u64, high: u64, json: bool) -> Result<()> {
    let report = lengths::build_report(low, high)?;
    if json {
        lengths::write_json(out, &report)
    } else {
        lengths::write_text(out, &report)
    }
}
