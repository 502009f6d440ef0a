//! Read-only traversals over a built tree.
//!
//! Every traversal is depth-first, parent before children, left subtree
//! fully before the right one.

use std::io::{self, Write};

use blocktree_costs::{CostContext, CostsExt, OperationCost};
use blocktree_visualize::{Drawer, Visualize, visualize_stdout};
use log::trace;

use crate::{
    hash::Digest,
    node::{HashableNode, InternalNode, Leaf},
};

/// Write the indented, depth-tagged view of `root` into `out`.
///
/// Internal nodes print their digest, leaves print their digest followed by
/// `(data: <payload>)`. Empty leaves print nothing. A newline inside a payload
/// starts a new line carrying the same depth prefix.
pub fn print<W: Write>(root: &InternalNode, out: W) -> io::Result<()> {
    let mut drawer = root.visualize(Drawer::new(out))?;
    drawer.flush()
}

/// [`print`] to stdout.
pub fn print_stdout(root: &InternalNode) -> io::Result<()> {
    visualize_stdout(root)
}

impl Visualize for InternalNode {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> io::Result<Drawer<W>> {
        drawer.line(self.digest().to_hex().as_bytes())?;
        drawer.down();
        for child in self.children() {
            match child {
                HashableNode::Internal(node) => drawer = node.visualize(drawer)?,
                HashableNode::Leaf(leaf) => drawer = leaf.visualize(drawer)?,
                HashableNode::EmptyLeaf => {}
            }
        }
        drawer.up();
        Ok(drawer)
    }
}

impl Visualize for Leaf {
    fn visualize<W: Write>(&self, mut drawer: Drawer<W>) -> io::Result<Drawer<W>> {
        drawer.line(format!("{} (data: {})", self.digest(), self).as_bytes())?;
        Ok(drawer)
    }
}

/// `true` if `target` equals the digest of the root or of any internal node or
/// leaf below it.
///
/// Digests of internal nodes match too, so this answers "is this a digest
/// somewhere in the tree" rather than "is this block in the tree". Empty
/// leaves are never compared. See [`scan_leaves`] for the leaf-only check.
pub fn scan(root: &InternalNode, target: &Digest) -> bool {
    scan_node(root, target, &mut |_| {})
}

/// [`scan`] along with the cost of every digest recomputed on the way.
///
/// The count grows with `n log n`; it saturates rather than overflowing.
pub fn scan_with_cost(root: &InternalNode, target: &Digest) -> CostContext<bool> {
    let mut cost = OperationCost::default();
    let found = scan_node(root, target, &mut |spent| cost += spent);
    found.wrap_with_cost(cost)
}

/// Pre-order digest comparison. Every digest computed is reported to
/// `charge`.
fn scan_node<F>(node: &InternalNode, target: &Digest, charge: &mut F) -> bool
where
    F: FnMut(OperationCost),
{
    if digest_charged(node.digest_with_cost(), charge) == *target {
        trace!("scan matched internal node {}", target);
        return true;
    }

    for child in node.children() {
        let found = match child {
            HashableNode::Internal(inner) => scan_node(inner, target, charge),
            HashableNode::Leaf(leaf) => {
                let matched = digest_charged(leaf.digest_with_cost(), charge) == *target;
                if matched {
                    trace!("scan matched leaf {}", target);
                }
                matched
            }
            HashableNode::EmptyLeaf => false,
        };
        if found {
            return true;
        }
    }

    false
}

fn digest_charged<F>(ctx: CostContext<Digest>, charge: &mut F) -> Digest
where
    F: FnMut(OperationCost),
{
    charge(ctx.cost);
    ctx.value
}

/// `true` if `target` equals the digest of some [`Leaf`], i.e. the hash of
/// one of the original blocks.
pub fn scan_leaves(root: &InternalNode, target: &Digest) -> bool {
    collect_leaves(root)
        .into_iter()
        .any(|leaf| leaf.digest() == *target)
}

/// All leaves in original block order. Empty leaves are skipped.
pub fn collect_leaves(root: &InternalNode) -> Vec<&Leaf> {
    let mut leaves = Vec::with_capacity(root.leaf_count());
    collect_into(root, &mut leaves);
    leaves
}

fn collect_into<'a>(node: &'a InternalNode, leaves: &mut Vec<&'a Leaf>) {
    for child in node.children() {
        match child {
            HashableNode::Internal(inner) => collect_into(inner, leaves),
            HashableNode::Leaf(leaf) => leaves.push(leaf),
            HashableNode::EmptyLeaf => {}
        }
    }
}

/// Digest of each leaf, in order.
pub fn digests_of<'a, I>(leaves: I) -> Vec<Digest>
where
    I: IntoIterator<Item = &'a Leaf>,
{
    leaves.into_iter().map(Leaf::digest).collect()
}
