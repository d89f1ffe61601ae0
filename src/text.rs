use std::hash::{Hash, Hasher};
use std::sync::{OnceLock, RwLock};

use crate::error::{OutOfRange, Result};
use crate::node::{self, Leaf, Node};
use crate::CodeUnit;

/// A snapshot of the leaf most recently located by `char_at`, used to
/// accelerate sequential access.
///
/// Guarded by a `RwLock` rather than updated through raw atomics: a torn
/// write is the only failure mode worth ruling out here, and a lock rules
/// it out outright.
struct CacheEntry {
    leaf: Node,
    base: usize,
    end: usize,
}

/// An immutable, persistent sequence of UTF-16 code units.
///
/// `Text` is the public face of the rope: every operation takes `&self` (or
/// consumes `self` by value where that's cheaper) and returns a *new*
/// `Text`, never mutating one that already exists. Because every node in
/// the tree is reached through an `Arc`, cloning a `Text` — including the
/// implicit clone that happens when one is captured by a background
/// thread — is O(1) and shares structure with the original.
///
/// ```
/// use rope::Text;
///
/// let hello = Text::from("hello");
/// let world = hello.concat(&Text::from(" world"));
///
/// assert_eq!(world.to_string(), "hello world");
/// assert_eq!(hello.length(), 5); // unaffected by the concat
/// ```
#[derive(Clone)]
pub struct Text {
    root: Node,
    cache: std::sync::Arc<RwLock<Option<CacheEntry>>>,
    hash: std::sync::Arc<OnceLock<u64>>,
}

impl Text {
    fn from_root(root: Node) -> Text {
        Text {
            root,
            cache: std::sync::Arc::new(RwLock::new(None)),
            hash: std::sync::Arc::new(OnceLock::new()),
        }
    }

    /// An empty text. Does not allocate.
    pub fn empty() -> Text {
        Text::from_root(Node::empty())
    }

    /// Builds a `Text` from a finite sequence of code units. The returned
    /// value's length equals the input's length and its content equals the
    /// input, in order. Initial root is a single (possibly oversized) leaf;
    /// it is chunked lazily, the first time an edit needs to.
    pub fn from_sequence<I: IntoIterator<Item = CodeUnit>>(units: I) -> Text {
        let data: Box<[CodeUnit]> = units.into_iter().collect();
        if data.is_empty() {
            return Text::empty();
        }
        Text::from_root(Leaf::new(data).into())
    }

    /// Total code-unit count. O(1).
    pub fn length(&self) -> usize {
        self.root.length()
    }

    /// True when `length() == 0`.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The code unit at `index`. `Err(OutOfRange)` when `index >= length()`.
    pub fn char_at(&self, index: usize) -> Result<CodeUnit> {
        let len = self.length();
        if index >= len {
            return Err(OutOfRange { index, len });
        }

        if let Some((leaf, base)) = self.cached_hit(index) {
            return Ok(leaf.char_at(index - base));
        }

        let (leaf, base) = node::locate::find_leaf(&self.root, index);
        let end = base + leaf.length();
        let unit = leaf.char_at(index - base);
        self.update_cache(leaf, base, end);
        Ok(unit)
    }

    fn cached_hit(&self, index: usize) -> Option<(std::sync::Arc<Leaf>, usize)> {
        let guard = self.cache.read().ok()?;
        let entry = guard.as_ref()?;
        if index >= entry.base && index < entry.end {
            if let Node::Leaf(ref leaf) = entry.leaf {
                return Some((leaf.clone(), entry.base));
            }
        }
        None
    }

    fn update_cache(&self, leaf: std::sync::Arc<Leaf>, base: usize, end: usize) {
        if let Ok(mut guard) = self.cache.write() {
            *guard = Some(CacheEntry {
                leaf: Node::Leaf(leaf),
                base,
                end,
            });
        }
    }

    /// `self ∥ other`. If either side is empty, returns the other side
    /// unchanged, by identity. Otherwise chunks any oversized flat leaf on
    /// either side first, then concatenates the (now-chunked) roots.
    pub fn concat(&self, other: &Text) -> Text {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let left = ensure_chunked(self.root.clone());
        let right = ensure_chunked(other.root.clone());

        Text::from_root(node::concat::concat(left, right))
    }

    /// The sub-text covering `[s, e)`. Returns `self` by identity when it
    /// covers the whole text, and an empty `Text` when `s == e`.
    pub fn sub_text(&self, s: usize, e: usize) -> Result<Text> {
        let len = self.length();
        if s > e || e > len {
            return Err(OutOfRange {
                index: e,
                len,
            });
        }

        if s == 0 && e == len {
            return Ok(self.clone());
        }
        if s == e {
            return Ok(Text::empty());
        }

        Ok(Text::from_root(self.root.sub_node(s, e)))
    }

    /// `sub_text(0, index) ∥ other ∥ sub_text(index, length)`.
    pub fn insert(&self, index: usize, other: &Text) -> Result<Text> {
        let len = self.length();
        if index > len {
            return Err(OutOfRange { index, len });
        }

        let prefix = self.sub_text(0, index)?;
        let suffix = self.sub_text(index, len)?;
        Ok(prefix.concat(other).concat(&suffix))
    }

    /// `sub_text(0, s) ∥ sub_text(e, length)`. Returns `self` by identity
    /// when `s == e`. Chunks `self` first so the split walks a balanced
    /// tree rather than a single monolithic leaf.
    pub fn delete(&self, s: usize, e: usize) -> Result<Text> {
        let len = self.length();
        if s > e || e > len {
            return Err(OutOfRange { index: e, len });
        }
        if s == e {
            return Ok(self.clone());
        }

        let chunked = Text::from_root(ensure_chunked(self.root.clone()));
        let prefix = chunked.sub_text(0, s)?;
        let suffix = chunked.sub_text(e, len)?;
        Ok(prefix.concat(&suffix))
    }

    /// Materializes the full content as an owned `String`.
    pub fn to_string(&self) -> String {
        String::from_utf16_lossy(&self.to_vec())
    }

    /// Materializes the full content as an owned vector of code units.
    pub fn to_vec(&self) -> Vec<CodeUnit> {
        let len = self.length();
        let mut out = vec![0 as CodeUnit; len];
        if len > 0 {
            self.root.copy_to(0, &mut out, 0, len);
        }
        out
    }
}

/// Runs `ensure_chunked` and returns the chunked node, or the original
/// unchanged when it wasn't a lone oversized leaf.
fn ensure_chunked(root: Node) -> Node {
    node::chunk::ensure_chunked(&root).unwrap_or(root)
}

impl From<&str> for Text {
    fn from(s: &str) -> Text {
        Text::from_sequence(s.encode_utf16())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Text {
        Text::from(s.as_str())
    }
}

impl FromIterator<CodeUnit> for Text {
    fn from_iter<I: IntoIterator<Item = CodeUnit>>(iter: I) -> Text {
        Text::from_sequence(iter)
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string())
    }
}

impl std::fmt::Debug for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const PREVIEW: usize = 32;
        let len = self.length();
        let preview: String = self
            .to_string()
            .chars()
            .take(PREVIEW)
            .collect();
        if len > PREVIEW {
            write!(f, "Text(len={}, {:?}...)", len, preview)
        } else {
            write!(f, "Text(len={}, {:?})", len, preview)
        }
    }
}

impl PartialEq for Text {
    fn eq(&self, other: &Text) -> bool {
        if self.length() != other.length() {
            return false;
        }
        match (&self.root, &other.root) {
            (Node::Leaf(a), Node::Leaf(b)) if std::sync::Arc::ptr_eq(a, b) => return true,
            (Node::Composite(a), Node::Composite(b)) if std::sync::Arc::ptr_eq(a, b) => return true,
            _ => {}
        }
        self.to_vec() == other.to_vec()
    }
}

impl Eq for Text {}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let h = *self.hash.get_or_init(|| {
            let mut h: u64 = 0;
            for unit in self.to_vec() {
                h = h.wrapping_mul(31).wrapping_add(unit as u64);
            }
            h
        });
        state.write_u64(h);
    }
}
