use crate::CodeUnit;

/// A terminal node holding a contiguous, immutable run of code units.
///
/// Once constructed a `Leaf`'s buffer is never observed to change; every
/// operation that would "modify" a leaf instead returns a fresh one.
pub(crate) struct Leaf {
    data: Box<[CodeUnit]>,
}

impl Leaf {
    pub(crate) fn new(data: Box<[CodeUnit]>) -> Leaf {
        Leaf { data }
    }

    pub(crate) fn empty() -> Leaf {
        Leaf { data: Box::new([]) }
    }

    #[inline]
    pub(crate) fn length(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn char_at(&self, i: usize) -> CodeUnit {
        self.data[i]
    }

    /// Returns a fresh leaf covering `[s, e)`. Callers decide whether the
    /// range is large enough to share instead of copying; see
    /// `Node::sub_node`.
    pub(crate) fn copy_range(&self, s: usize, e: usize) -> Leaf {
        debug_assert!(s <= e && e <= self.length());
        Leaf::new(self.data[s..e].to_vec().into_boxed_slice())
    }

    pub(crate) fn copy_to(&self, src_off: usize, dst: &mut [CodeUnit], dst_off: usize, count: usize) {
        debug_assert!(src_off + count <= self.length());
        debug_assert!(dst_off + count <= dst.len());

        dst[dst_off..dst_off + count].copy_from_slice(&self.data[src_off..src_off + count]);
    }

    pub(crate) fn as_slice(&self) -> &[CodeUnit] {
        &self.data
    }
}

impl From<Leaf> for super::Node {
    fn from(leaf: Leaf) -> super::Node {
        super::Node::Leaf(std::sync::Arc::new(leaf))
    }
}
