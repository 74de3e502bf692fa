//! Pure, deterministic Collatz logic. No I/O in this tree.

pub mod sequence;
pub mod stats;
pub mod tree;
