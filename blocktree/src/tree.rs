use std::io::{self, Write};

use blocktree_costs::CostContext;

use crate::{
    Result,
    builder::TreeBuilder,
    hash::{Digest, hash},
    node::{InternalNode, Leaf},
    walker,
};

/// A built, immutable tree.
///
/// The root is always an [`InternalNode`]: a single block is stored as the
/// left child of a root whose right child is an empty leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    root: InternalNode,
}

impl MerkleTree {
    /// Build a tree over `leaves`.
    pub fn new<I>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = Leaf>,
    {
        let root = TreeBuilder::build(leaves)?;
        Ok(MerkleTree { root })
    }

    /// Build a tree over raw blocks.
    pub fn from_data<I, T>(blocks: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<u8>>,
    {
        Self::new(blocks.into_iter().map(Leaf::new))
    }

    /// The root node.
    pub fn root(&self) -> &InternalNode {
        &self.root
    }

    /// Root digest along with the cost of hashing the whole tree.
    pub fn root_hash(&self) -> CostContext<Digest> {
        self.root.digest_with_cost()
    }

    /// Number of data blocks in the tree.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Number of reduction passes the builder made.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// See [`walker::scan`].
    pub fn scan(&self, target: &Digest) -> bool {
        walker::scan(&self.root, target)
    }

    /// See [`walker::scan_leaves`].
    pub fn scan_leaves(&self, target: &Digest) -> bool {
        walker::scan_leaves(&self.root, target)
    }

    /// Structural scan for `H(data)`.
    pub fn contains_data(&self, data: &[u8]) -> bool {
        self.scan(&hash(data).unwrap())
    }

    /// See [`walker::collect_leaves`].
    pub fn collect_leaves(&self) -> Vec<&Leaf> {
        walker::collect_leaves(&self.root)
    }

    /// Digests of all leaves, in block order.
    pub fn leaf_digests(&self) -> Vec<Digest> {
        walker::digests_of(self.collect_leaves())
    }

    /// See [`walker::print`].
    pub fn print_to<W: Write>(&self, out: W) -> io::Result<()> {
        walker::print(&self.root, out)
    }
}
