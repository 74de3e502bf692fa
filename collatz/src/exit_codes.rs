//! Stable exit codes for collatz CLI commands.

/// Command completed normally.
pub const OK: i32 = 0;
/// Invalid arguments or a failed write.
pub const INVALID: i32 = 1;
