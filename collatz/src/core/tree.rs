//! Lazy generation of the Collatz predecessor tree.
//!
//! The predecessor tree rooted at `r` contains every value whose trajectory
//! passes through `r`, built by the inverse rules: doubling (`2n`, always
//! defined) and `(n - 1) / 3` (defined when `n` is even, `n ≡ 1 (mod 3)`,
//! and the quotient is not 1, which would re-enter the trivial 1-2-4 cycle).
//! If the Collatz conjecture holds, the tree rooted at 1 enumerates every
//! positive integer exactly once.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A node of the full predecessor tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode {
    pub value: u64,
    /// `None` only for the root.
    pub parent: Option<u64>,
    pub depth: u32,
}

/// Layer-by-layer iterator over the predecessor tree.
///
/// A min-heap keyed on `(depth, value)` drives the traversal, so nodes come
/// out one layer at a time, ascending within each layer. Unbounded when
/// `max_depth` is `None`; callers then bound it themselves (e.g. `take`).
#[derive(Debug)]
pub struct PredecessorTree {
    heap: BinaryHeap<Reverse<(u32, u64, Option<u64>)>>,
    max_depth: Option<u32>,
}

impl PredecessorTree {
    pub fn new(root: u64, max_depth: Option<u32>) -> Self {
        assert!(root > 0, "undefined for root = 0");
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, root, None)));
        Self { heap, max_depth }
    }
}

impl Iterator for PredecessorTree {
    type Item = TreeNode;

    fn next(&mut self) -> Option<TreeNode> {
        let Reverse((depth, value, parent)) = self.heap.pop()?;
        if self.max_depth.is_some_and(|max| depth > max) {
            // Heap order guarantees everything remaining is at least this deep.
            return None;
        }
        let child_depth = depth + 1;
        if let Some(doubled) = value.checked_mul(2) {
            self.heap.push(Reverse((child_depth, doubled, Some(value))));
        }
        if value % 2 == 0
            && value != 4
            && let Some(lower) = up_inverse(value)
            && lower != 1
        {
            self.heap.push(Reverse((child_depth, lower, Some(value))));
        }
        Some(TreeNode {
            value,
            parent,
            depth,
        })
    }
}

/// A node of the compressed (odd-only) predecessor tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedNode {
    pub value: u64,
    /// Nearest odd ancestor; `None` only for the first yielded value.
    pub parent_odd: Option<u64>,
    /// Even intermediates on the path from `parent_odd` to this value.
    pub evens: u32,
    pub depth: u32,
}

/// Odd-only predecessor tree iterator, ascending by value.
///
/// Even values are walked internally but never yielded; each odd value
/// carries the count of evens skipped since its nearest odd ancestor.
/// `max_depth` bounds inverse-up steps and `max_evens` bounds runs of
/// consecutive evens, so the internal heap always drains.
#[derive(Debug)]
pub struct CompressedTree {
    heap: BinaryHeap<Reverse<(u64, Option<u64>, u32, u32)>>,
    max_depth: u32,
    max_evens: u32,
}

impl CompressedTree {
    pub fn new(root: u64, max_depth: u32, max_evens: u32) -> Self {
        assert!(root > 0, "undefined for root = 0");
        assert!(max_evens > 0, "max_evens must be > 0");
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((root, None, 0, 0)));
        Self {
            heap,
            max_depth,
            max_evens,
        }
    }
}

impl Iterator for CompressedTree {
    type Item = CompressedNode;

    fn next(&mut self) -> Option<CompressedNode> {
        loop {
            // Entry layout: (value, parent_odd, depth, evens).
            let Reverse((value, parent_odd, depth, evens)) = self.heap.pop()?;
            let doubled = value.checked_mul(2);
            if value % 2 == 0 {
                if let Some(lower) = up_inverse(value)
                    && lower != 1
                    && evens < self.max_evens
                    && depth < self.max_depth
                {
                    self.heap
                        .push(Reverse((lower, parent_odd, depth + 1, evens + 1)));
                }
                if evens <= self.max_evens
                    && let Some(doubled) = doubled
                {
                    self.heap
                        .push(Reverse((doubled, parent_odd, depth, evens + 1)));
                }
            } else {
                if let Some(doubled) = doubled {
                    self.heap.push(Reverse((doubled, Some(value), depth, 0)));
                }
                return Some(CompressedNode {
                    value,
                    parent_odd,
                    evens,
                    depth,
                });
            }
        }
    }
}

/// The `y` with `3y + 1 == value`, when one exists.
///
/// For even `value` the quotient is necessarily odd, so no parity check on
/// the result is needed.
fn up_inverse(value: u64) -> Option<u64> {
    if value > 1 && (value - 1) % 3 == 0 {
        Some((value - 1) / 3)
    } else {
        None
    }
}
