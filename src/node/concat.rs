//! The core algorithm: combine two non-empty nodes into one balanced node.
//!
//! Two cases: fuse into a flat leaf when the combined length is small
//! (Case A), or compose with at most one rotation and one recursive concat
//! into the smaller side (Case B). Concat is the only place a composite is
//! ever built directly from caller-supplied (possibly unbalanced) inputs;
//! everywhere else in the crate, reaching for `concat` instead of
//! `Composite::new` is what keeps the weak-balance invariant alive.

use crate::node::{Composite, Leaf, Node};
use crate::{CodeUnit, BLOCK_SIZE};

/// Combines `n1` and `n2`, in order, into a single balanced node. Both
/// arguments must be non-empty; callers (namely `Text::concat`) handle the
/// empty-side identity shortcuts before reaching here.
pub(crate) fn concat(n1: Node, n2: Node) -> Node {
    debug_assert!(!n1.is_empty());
    debug_assert!(!n2.is_empty());

    let total = n1.length() + n2.length();

    // Case A: fuse small results into one flat leaf. This is what keeps
    // leaves dense and avoids a forest of tiny composites.
    if total <= BLOCK_SIZE {
        return fuse(&n1, &n2, total);
    }

    // Case B: compose, rotating at most once so any rebalancing recursion
    // happens on the smaller of the two sides. Equalities fall through to
    // plain composition without rotating.
    let (head, tail) = if n1.length() * 2 < n2.length() {
        rebalance_left_heavy(n1, n2)
    } else if n2.length() * 2 < n1.length() {
        rebalance_right_heavy(n1, n2)
    } else {
        (n1, n2)
    };

    Composite::new(head, tail).into()
}

fn fuse(n1: &Node, n2: &Node, total: usize) -> Node {
    let mut buf: Box<[CodeUnit]> = vec![0; total].into_boxed_slice();
    n1.copy_to(0, &mut buf, 0, n1.length());
    n2.copy_to(0, &mut buf, n1.length(), n2.length());
    Leaf::new(buf).into()
}

/// `head` is too small relative to `tail`, and `tail` is a composite: merge
/// `head` into `tail`'s smaller half instead of growing the tree by a level.
fn rebalance_left_heavy(head: Node, tail: Node) -> (Node, Node) {
    let Node::Composite(tail_c) = &tail else {
        return (head, tail);
    };

    // Tail is internally left-heavy (B bigger than C): rotate right so
    // tail's head becomes the smaller side before merging into it.
    let tail_c = if tail_c.head.length() > tail_c.tail.length() {
        Composite::rotate_right(tail_c)
    } else {
        tail_c.clone()
    };

    let new_head = concat(head, tail_c.head.clone());
    (new_head, tail_c.tail.clone())
}

/// `tail` is too small relative to `head`, and `head` is a composite: merge
/// `tail` into `head`'s smaller half instead of growing the tree by a level.
fn rebalance_right_heavy(head: Node, tail: Node) -> (Node, Node) {
    let Node::Composite(head_c) = &head else {
        return (head, tail);
    };

    // Head is internally right-heavy (B bigger than A): rotate left so
    // head's tail becomes the smaller side before merging into it.
    let head_c = if head_c.tail.length() > head_c.head.length() {
        Composite::rotate_left(head_c)
    } else {
        head_c.clone()
    };

    let new_tail = concat(head_c.tail.clone(), tail);
    (head_c.head.clone(), new_tail)
}
