//! Bottom-up tree construction.
//!
//! Each pass pairs the current level left to right. A lone last node is
//! paired with [`HashableNode::EmptyLeaf`], never with a copy of itself.
//! Passes repeat until a single node is left. At least one pass always runs,
//! so even a single block ends up under an [`InternalNode`].

use log::debug;

use crate::{
    Error, Result,
    node::{HashableNode, InternalNode, Leaf},
};

/// Reduces an ordered sequence of leaves to a single root.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl TreeBuilder {
    /// Build a tree over `blocks`, preserving their order left to right.
    ///
    /// Fails with [`Error::ConstructionError`] when `blocks` is empty.
    pub fn build<I>(blocks: I) -> Result<InternalNode>
    where
        I: IntoIterator<Item = Leaf>,
    {
        let mut level: Vec<HashableNode> = blocks.into_iter().map(HashableNode::Leaf).collect();
        let mut pass = 0usize;

        loop {
            let width = level.len();
            let mut parents = Self::reduce_level(level);
            pass += 1;
            debug!(
                "reduction pass {}: {} nodes -> {} nodes",
                pass,
                width,
                parents.len()
            );

            if parents.len() > 1 {
                level = parents.into_iter().map(HashableNode::Internal).collect();
                continue;
            }

            return parents.pop().ok_or_else(|| {
                Error::ConstructionError("cannot build a tree from zero elements".to_string())
            });
        }
    }

    /// One pass: `ceil(len / 2)` parents, each owning two consecutive nodes.
    fn reduce_level(level: Vec<HashableNode>) -> Vec<InternalNode> {
        let mut parents = Vec::with_capacity(level.len().div_ceil(2));
        let mut nodes = level.into_iter();
        while let Some(left) = nodes.next() {
            let right = nodes.next().unwrap_or(HashableNode::EmptyLeaf);
            parents.push(InternalNode::new(left, right));
        }
        parents
    }
}
