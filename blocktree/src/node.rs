//! Tree node types.
//!
//! Digest scheme:
//! - Leaf:          `H(payload)`
//! - Empty leaf:    the zero-length digest, not `H("")`
//! - Internal node: `H(left.digest() ++ right.digest())`
//!
//! Digests are recomputed on every call; nothing is cached.

use std::fmt;

use blocktree_costs::{CostContext, CostsExt, OperationCost};

use crate::hash::{Digest, hash, hash_pair};

/// A leaf wrapping one original data block.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Leaf {
    data: Vec<u8>,
}

impl Leaf {
    /// Create a leaf owning `data`.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Leaf { data: data.into() }
    }

    /// The block payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// `H(payload)` with its hashing cost.
    pub fn digest_with_cost(&self) -> CostContext<Digest> {
        hash(&self.data)
    }

    /// `H(payload)`.
    pub fn digest(&self) -> Digest {
        self.digest_with_cost().unwrap()
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Leaf({:?})", String::from_utf8_lossy(&self.data))
    }
}

/// A node with exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode {
    left: Box<HashableNode>,
    right: Box<HashableNode>,
}

impl InternalNode {
    /// Join two nodes, `left` first.
    pub fn new(left: HashableNode, right: HashableNode) -> Self {
        InternalNode {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Left child.
    pub fn left(&self) -> &HashableNode {
        &self.left
    }

    /// Right child.
    pub fn right(&self) -> &HashableNode {
        &self.right
    }

    /// Both children, left first.
    pub fn children(&self) -> [&HashableNode; 2] {
        [self.left(), self.right()]
    }

    /// `H(left ++ right)` with the cost of hashing the whole subtree.
    pub fn digest_with_cost(&self) -> CostContext<Digest> {
        let mut cost = OperationCost::default();
        let left = self.left.digest_with_cost().unwrap_add_cost(&mut cost);
        let right = self.right.digest_with_cost().unwrap_add_cost(&mut cost);
        hash_pair(&left, &right).add_cost(cost)
    }

    /// `H(left ++ right)`.
    pub fn digest(&self) -> Digest {
        self.digest_with_cost().unwrap()
    }

    /// Number of [`Leaf`] nodes below this node. Empty leaves are not
    /// counted.
    pub fn leaf_count(&self) -> usize {
        self.left.leaf_count() + self.right.leaf_count()
    }

    /// Edges on the longest path down to a leaf.
    pub fn height(&self) -> usize {
        1 + self.left.height().max(self.right.height())
    }
}

/// Anything that can produce a [`Digest`]: a closed set of three node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashableNode {
    /// Original data block.
    Leaf(Leaf),
    /// Padding for the unpaired last node of a level.
    EmptyLeaf,
    /// Two children.
    Internal(InternalNode),
}

impl HashableNode {
    /// Digest of this node with its hashing cost. The empty leaf costs
    /// nothing.
    pub fn digest_with_cost(&self) -> CostContext<Digest> {
        match self {
            HashableNode::Leaf(leaf) => leaf.digest_with_cost(),
            HashableNode::EmptyLeaf => Digest::empty().wrap_with_cost(OperationCost::default()),
            HashableNode::Internal(node) => node.digest_with_cost(),
        }
    }

    /// Digest of this node.
    pub fn digest(&self) -> Digest {
        self.digest_with_cost().unwrap()
    }

    /// The wrapped leaf, if this is a [`HashableNode::Leaf`].
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            HashableNode::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// The wrapped internal node, if this is a [`HashableNode::Internal`].
    pub fn as_internal(&self) -> Option<&InternalNode> {
        match self {
            HashableNode::Internal(node) => Some(node),
            _ => None,
        }
    }

    /// `true` for the padding node.
    pub fn is_empty_leaf(&self) -> bool {
        matches!(self, HashableNode::EmptyLeaf)
    }

    fn leaf_count(&self) -> usize {
        match self {
            HashableNode::Leaf(_) => 1,
            HashableNode::EmptyLeaf => 0,
            HashableNode::Internal(node) => node.leaf_count(),
        }
    }

    fn height(&self) -> usize {
        match self {
            HashableNode::Leaf(_) | HashableNode::EmptyLeaf => 0,
            HashableNode::Internal(node) => node.height(),
        }
    }
}

impl From<Leaf> for HashableNode {
    fn from(leaf: Leaf) -> Self {
        HashableNode::Leaf(leaf)
    }
}

impl From<InternalNode> for HashableNode {
    fn from(node: InternalNode) -> Self {
        HashableNode::Internal(node)
    }
}
