//! Binary Merkle tree over an ordered sequence of data blocks.
//!
//! Leaves are paired left to right, level by level, until one root remains.
//! The unpaired last node of a level is joined with an empty leaf whose
//! digest is the zero-length byte string:
//!
//! ```text
//! blocks a, b, c
//!
//!            root = H(n1 ++ n2)
//!           /                  \
//!   n1 = H(H(a) ++ H(b))   n2 = H(H(c) ++ "")
//!     /        \             /        \
//!    a          b           c       (empty)
//! ```
//!
//! Membership is checked by scanning every node of the tree; there are no
//! inclusion proofs.
//!
//! # Example
//!
//! ```
//! use blocktree::{MerkleTree, hash};
//!
//! let tree = MerkleTree::from_data(["a", "b", "c"]).expect("non-empty input");
//! assert!(tree.scan(&hash(b"b").unwrap()));
//! assert!(!tree.scan(&hash(b"z").unwrap()));
//! let leaves: Vec<_> = tree.collect_leaves().iter().map(|l| l.to_string()).collect();
//! assert_eq!(leaves, ["a", "b", "c"]);
//! ```

#![warn(missing_docs)]

mod builder;
mod error;
mod hash;
mod node;
mod tree;
pub mod walker;


pub use blocktree_costs::{CostContext, OperationCost};
pub use builder::TreeBuilder;
pub use error::{Error, Result};
pub use hash::{Digest, HASH_LENGTH, hash, hash_pair};
pub use node::{HashableNode, InternalNode, Leaf};
pub use tree::MerkleTree;
