use std::sync::Arc;

use crate::node::Node;
use crate::CodeUnit;

/// An inner node: a cached total length plus two non-empty children.
///
/// `count == head.length() + tail.length()` always holds. Neither `head` nor
/// `tail` is ever an empty leaf; callers never construct one (see
/// `Composite::new`).
pub(crate) struct Composite {
    count: usize,
    pub(crate) head: Node,
    pub(crate) tail: Node,
}

impl Composite {
    /// Builds a new composite from two non-empty nodes.
    pub(crate) fn new(head: Node, tail: Node) -> Composite {
        debug_assert!(!head.is_empty(), "composite head must not be empty");
        debug_assert!(!tail.is_empty(), "composite tail must not be empty");

        let count = head.length() + tail.length();
        Composite { count, head, tail }
    }

    #[inline]
    pub(crate) fn length(&self) -> usize {
        self.count
    }

    pub(crate) fn char_at(&self, i: usize) -> CodeUnit {
        let h = self.head.length();
        if i < h {
            self.head.char_at(i)
        } else {
            self.tail.char_at(i - h)
        }
    }

    /// `sub_node` either delegates entirely to one child, returns `self` by
    /// identity for the full range, or splits at the head/tail boundary and
    /// recombines through `concat` so the result stays balanced.
    pub(crate) fn sub_node(self_rc: &Arc<Composite>, s: usize, e: usize) -> Node {
        let h = self_rc.head.length();
        let count = self_rc.count;

        debug_assert!(s <= e && e <= count);

        if e <= h {
            return self_rc.head.sub_node(s, e);
        }

        if s >= h {
            return self_rc.tail.sub_node(s - h, e - h);
        }

        if s == 0 && e == count {
            return Node::Composite(self_rc.clone());
        }

        let left = self_rc.head.sub_node(s, h);
        let right = self_rc.tail.sub_node(0, e - h);
        crate::node::concat::concat(left, right)
    }

    pub(crate) fn copy_to(&self, src_off: usize, dst: &mut [CodeUnit], dst_off: usize, count: usize) {
        let h = self.head.length();

        if src_off >= h {
            self.tail.copy_to(src_off - h, dst, dst_off, count);
            return;
        }

        let from_head = (h - src_off).min(count);
        self.head.copy_to(src_off, dst, dst_off, from_head);

        let remaining = count - from_head;
        if remaining > 0 {
            self.tail.copy_to(0, dst, dst_off + from_head, remaining);
        }
    }

    /// Right rotation: `head = (A, B)` becomes `(A, (B, tail))`. No-op
    /// (returns `self` unchanged) when `head` is a leaf.
    pub(crate) fn rotate_right(self_rc: &Arc<Composite>) -> Arc<Composite> {
        let Node::Composite(ref p) = self_rc.head else {
            return self_rc.clone();
        };

        let a = p.head.clone();
        let b = p.tail.clone();
        let new_tail = Composite::new(b, self_rc.tail.clone());
        Arc::new(Composite::new(a, new_tail.into()))
    }

    /// Left rotation: `tail = (B, C)` becomes `((head, B), C)`. No-op when
    /// `tail` is a leaf.
    pub(crate) fn rotate_left(self_rc: &Arc<Composite>) -> Arc<Composite> {
        let Node::Composite(ref q) = self_rc.tail else {
            return self_rc.clone();
        };

        let b = q.head.clone();
        let c = q.tail.clone();
        let new_head = Composite::new(self_rc.head.clone(), b);
        Arc::new(Composite::new(new_head.into(), c))
    }
}

impl From<Composite> for Node {
    fn from(c: Composite) -> Node {
        Node::Composite(Arc::new(c))
    }
}
