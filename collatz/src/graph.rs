//! Orchestration for `collatz tree`: listing and Graphviz rendering of the
//! predecessor tree.

use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::core::tree::{CompressedNode, CompressedTree, PredecessorTree, TreeNode};

/// Traversal parameters shared by the listing and dot renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRequest {
    pub root: u64,
    /// Number of layers to generate (inverse-up steps for the compressed
    /// variant).
    pub max_depth: u32,
    pub compressed: bool,
    /// Bound on runs of consecutive skipped evens; compressed only.
    pub max_evens: u32,
    /// Stop after this many nodes, on top of the depth bound.
    pub max_nodes: Option<usize>,
}

impl TreeRequest {
    fn validate(&self) -> Result<()> {
        if self.root == 0 {
            bail!("root must be >= 1");
        }
        if self.compressed && self.max_evens == 0 {
            bail!("max_evens must be >= 1");
        }
        Ok(())
    }

    fn full_nodes(&self) -> Vec<TreeNode> {
        let iter = PredecessorTree::new(self.root, Some(self.max_depth));
        match self.max_nodes {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }

    fn compressed_nodes(&self) -> Vec<CompressedNode> {
        let iter = CompressedTree::new(self.root, self.max_depth, self.max_evens);
        match self.max_nodes {
            Some(limit) => iter.take(limit).collect(),
            None => iter.collect(),
        }
    }
}

/// Write one line per node in traversal order: `<depth>: <value>` for the
/// root, `<depth>: <value> <- <parent>` otherwise. Compressed nodes append
/// the skipped-evens count.
pub fn write_listing<W: Write>(out: &mut W, req: &TreeRequest) -> Result<()> {
    req.validate()?;
    debug!(root = req.root, compressed = req.compressed, "listing tree");
    if req.compressed {
        for node in req.compressed_nodes() {
            match node.parent_odd {
                Some(parent) => writeln!(
                    out,
                    "{}: {} <- {} (+{} evens)",
                    node.depth, node.value, parent, node.evens
                ),
                None => writeln!(out, "{}: {}", node.depth, node.value),
            }
            .context("write tree line")?;
        }
    } else {
        for node in req.full_nodes() {
            match node.parent {
                Some(parent) => writeln!(out, "{}: {} <- {}", node.depth, node.value, parent),
                None => writeln!(out, "{}: {}", node.depth, node.value),
            }
            .context("write tree line")?;
        }
    }
    Ok(())
}

/// Write a Graphviz `digraph` with one `parent -> child` edge per non-root
/// node. Compressed edges carry the skipped-evens count as a label.
pub fn write_dot<W: Write>(out: &mut W, req: &TreeRequest) -> Result<()> {
    req.validate()?;
    debug!(root = req.root, compressed = req.compressed, "rendering dot");
    writeln!(out, "digraph collatz {{").context("write dot header")?;
    if req.compressed {
        for node in req.compressed_nodes() {
            match node.parent_odd {
                Some(parent) => writeln!(
                    out,
                    "    \"{}\" -> \"{}\" [label=\"{}\"];",
                    parent, node.value, node.evens
                ),
                None => writeln!(out, "    \"{}\";", node.value),
            }
            .context("write dot statement")?;
        }
    } else {
        for node in req.full_nodes() {
            match node.parent {
                Some(parent) => writeln!(out, "    \"{}\" -> \"{}\";", parent, node.value),
                None => writeln!(out, "    \"{}\";", node.value),
            }
            .context("write dot statement")?;
        }
    }
    writeln!(out, "}}").context("write dot footer")?;
    Ok(())
}
