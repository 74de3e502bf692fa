//! Collatz sequence toolkit.
//!
//! Computes Collatz trajectories, sequence-length statistics over integer
//! intervals, and the tree of Collatz predecessors. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (step rule, statistics, tree
//!   generation). No I/O, fully testable in isolation.
//! - Orchestration modules ([`run`], [`lengths`], [`graph`]) render core
//!   results to caller-provided sinks to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod graph;
pub mod lengths;
pub mod logging;
pub mod run;
