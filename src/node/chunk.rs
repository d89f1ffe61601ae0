//! Converts a flat, oversized leaf into a balanced tree of block-sized
//! leaves, splitting only at block-aligned boundaries.

use std::sync::Arc;

use crate::node::{Composite, Leaf, Node};
use crate::{BLOCK_MASK, BLOCK_SIZE};

/// Builds a balanced tree of block-sized leaves covering
/// `source[offset, offset + length)`.
pub(crate) fn node_of(source: &Arc<Leaf>, offset: usize, length: usize) -> Node {
    if length <= BLOCK_SIZE {
        if offset == 0 && length == source.length() {
            return Node::Leaf(source.clone());
        }
        return Node::Leaf(Arc::new(source.copy_range(offset, offset + length)));
    }

    let half = ((length + BLOCK_SIZE) >> 1) & BLOCK_MASK;

    let left = node_of(source, offset, half);
    let right = node_of(source, offset + half, length - half);

    Composite::new(left, right).into()
}

/// If `node`'s root is a single leaf longer than `BLOCK_SIZE`, returns a
/// rebuilt, chunked equivalent. Otherwise returns `None` and the caller
/// keeps the original node unchanged.
pub(crate) fn ensure_chunked(node: &Node) -> Option<Node> {
    let leaf = node.as_oversized_leaf()?;
    Some(node_of(leaf, 0, leaf.length()))
}
