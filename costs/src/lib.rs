#![deny(missing_docs)]
//! Interface crate to unify how hashing costs of tree operations are passed
//! and retrieved.

mod context;

use std::ops::{Add, AddAssign};

pub use context::{CostContext, CostsExt};

/// Amount of hashing work an operation performed.
///
/// Counters saturate at `u32::MAX`; a full-tree scan rehashes every subtree
/// and can get there on large trees.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// How many 64-byte input blocks were fed into the hash primitive.
    pub hash_byte_calls: u32,
    /// How many times the hash primitive was invoked for a node.
    pub hash_node_calls: u32,
}

impl OperationCost {
    /// Cost of a single hash invocation over `input_len` bytes.
    ///
    /// An empty input still costs one block.
    pub fn for_hash_input(input_len: usize) -> Self {
        let blocks = input_len.div_ceil(64).max(1);
        OperationCost {
            hash_byte_calls: u32::try_from(blocks).unwrap_or(u32::MAX),
            hash_node_calls: 1,
        }
    }

    /// `true` when no hashing was done at all.
    pub fn is_nothing(&self) -> bool {
        self == &Self::default()
    }
}

impl Add for OperationCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        OperationCost {
            hash_byte_calls: self.hash_byte_calls.saturating_add(rhs.hash_byte_calls),
            hash_node_calls: self.hash_node_calls.saturating_add(rhs.hash_node_calls),
        }
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_calls(hash_node_calls: u32) -> OperationCost {
        OperationCost {
            hash_node_calls,
            ..Default::default()
        }
    }

    #[test]
    fn test_hash_input_blocks() {
        assert_eq!(
            OperationCost::for_hash_input(0),
            OperationCost {
                hash_byte_calls: 1,
                hash_node_calls: 1,
            }
        );
        assert_eq!(OperationCost::for_hash_input(64).hash_byte_calls, 1);
        assert_eq!(OperationCost::for_hash_input(65).hash_byte_calls, 2);
    }

    #[test]
    fn test_add() {
        let mut cost = OperationCost::for_hash_input(10);
        cost += node_calls(2);
        assert_eq!(cost.hash_node_calls, 3);
        assert_eq!(cost.hash_byte_calls, 1);
        assert_eq!(
            cost + OperationCost::for_hash_input(128),
            OperationCost {
                hash_byte_calls: 3,
                hash_node_calls: 4,
            }
        );
        assert!(!cost.is_nothing());
        assert!(OperationCost::default().is_nothing());
    }

    #[test]
    fn test_add_saturates() {
        let mut cost = OperationCost {
            hash_byte_calls: u32::MAX - 1,
            hash_node_calls: u32::MAX,
        };
        cost += OperationCost::for_hash_input(200);
        assert_eq!(
            cost,
            OperationCost {
                hash_byte_calls: u32::MAX,
                hash_node_calls: u32::MAX,
            }
        );
        assert_eq!((cost + cost).hash_node_calls, u32::MAX);
    }

    #[test]
    fn test_unwrap_add_cost() {
        let mut acc = node_calls(1);
        let value = "leaf"
            .wrap_with_cost(OperationCost::for_hash_input(4))
            .unwrap_add_cost(&mut acc);
        assert_eq!(value, "leaf");
        assert_eq!(acc.hash_node_calls, 2);
        assert_eq!(acc.hash_byte_calls, 1);
    }

    #[test]
    fn test_add_cost() {
        let ctx = true
            .wrap_with_cost(OperationCost::default())
            .add_cost(node_calls(5));
        assert_eq!(ctx.cost().hash_node_calls, 5);
        assert!(*ctx.value());
    }
}
