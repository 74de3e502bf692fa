//! The Collatz step rule and iteration over a trajectory.
//!
//! All arithmetic is on `u64`. Before every step the current value is
//! checked against [`SAFETY_CEILING`]; at or above it the odd-branch
//! `3n + 1` could overflow, and the check fails fatally rather than
//! producing a wrapped value. Inputs that climb that high are pathological,
//! not a user-facing error case.

/// Largest value for which `3 * value + 1` stays representable in `u64`.
pub const SAFETY_CEILING: u64 = (u64::MAX - 1) / 3;

/// Apply one step of the Collatz rule: `n / 2` if even, `3n + 1` if odd.
///
/// # Panics
///
/// Panics if `value >= SAFETY_CEILING`.
pub fn next_term(value: u64) -> u64 {
    assert!(
        value < SAFETY_CEILING,
        "value {value} at or above safety ceiling {SAFETY_CEILING}"
    );
    if value % 2 == 0 { value / 2 } else { 3 * value + 1 }
}

/// Iterator over every value a trajectory visits, in order, the starting
/// value and the final 1 included. Yields exactly `steps + 1` items.
#[derive(Debug, Clone)]
pub struct Sequence {
    value: u64,
    done: bool,
}

impl Sequence {
    /// # Panics
    ///
    /// Panics if `start` is 0: the trajectory of 0 never reaches 1.
    pub fn new(start: u64) -> Self {
        assert!(start > 0, "undefined for start = 0");
        Self {
            value: start,
            done: false,
        }
    }
}

impl Iterator for Sequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        let current = self.value;
        if current == 1 {
            self.done = true;
        } else {
            self.value = next_term(current);
        }
        Some(current)
    }
}

/// Number of rule applications needed to reach 1 from `start`.
///
/// Agrees with counting [`Sequence`] transitions. The odd branch is fused:
/// `3n + 1` is always even, so the halving that follows is folded in and
/// counted as two applications.
pub fn sequence_len(start: u64) -> u64 {
    assert!(start > 0, "undefined for start = 0");
    let mut value = start;
    let mut steps = 0;
    while value != 1 {
        assert!(
            value < SAFETY_CEILING,
            "value {value} at or above safety ceiling {SAFETY_CEILING}"
        );
        if value % 2 == 0 {
            value /= 2;
            steps += 1;
        } else {
            value = (3 * value + 1) / 2;
            steps += 2;
        }
    }
    steps
}
