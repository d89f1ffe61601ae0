//! An immutable, persistent text rope.
//!
//! `rope` represents a character sequence as a balanced binary tree: flat
//! leaf nodes holding runs of UTF-16 code units, joined by composite inner
//! nodes that cache their total length. Every node is immutable once built
//! and reached only through an `Arc`, so
//! any [`Text`] value is a valid O(1) snapshot — cloning one, including
//! handing it to another thread, never copies the underlying character
//! data, and no operation on one `Text` is ever visible through another.
//!
//! Concatenation ([`Text::concat`]), insertion ([`Text::insert`]), deletion
//! ([`Text::delete`]), and substring extraction ([`Text::sub_text`]) all run
//! in time proportional to the tree's depth, which the internal concat
//! routine keeps logarithmic in the text's length by maintaining a *weak
//! balance* invariant on every composite it produces: the smaller child is
//! always strictly more than half the length of the larger one. This is
//! weaker than an AVL or red-black guarantee, but it is what every
//! composite in a `Text` built solely through the public API satisfies,
//! and it is enough to bound recursion depth during concat.
//!
//! # Example
//!
//! ```
//! use rope::Text;
//!
//! let mut doc = Text::from("The quick brown fox");
//! doc = doc.insert(10, &Text::from("red ")).unwrap();
//! assert_eq!(doc.to_string(), "The quick red brown fox");
//!
//! // `doc` is untouched by further edits to its descendants.
//! let snapshot = doc.clone();
//! doc = doc.delete(4, 10).unwrap();
//! assert_eq!(doc.to_string(), "The red brown fox");
//! assert_eq!(snapshot.to_string(), "The quick red brown fox");
//! ```
//!
//! # Thread-safety
//!
//! [`Text`] is `Send + Sync`. Every field it reaches is either an `Arc`
//! (immutable after construction) or a lock-guarded cache that only ever
//! stores a *hint*, re-validated before use, never something whose
//! correctness other code depends on.
//!
//! # Scope
//!
//! This crate provides the rope data structure and nothing else: no text
//! editor integration, no disk persistence, no Unicode normalization or
//! grapheme-cluster segmentation. It operates purely on UTF-16 code units,
//! matching the indices and lengths a host UI layer built on top of it
//! would expect.

mod error;
mod node;
mod text;

pub use error::{OutOfRange, Result};
pub use text::Text;

/// The fixed-width unit every index, length, and stored character in this
/// crate is counted in: one UTF-16 code unit.
pub type CodeUnit = u16;

/// Maximum leaf size below which `concat` fuses two nodes into one flat
/// leaf; also the target chunk size used by the chunker.
pub(crate) const BLOCK_SIZE: usize = 1 << 6;

/// Bit-mask that rounds a length down to a multiple of [`BLOCK_SIZE`].
pub(crate) const BLOCK_MASK: usize = !(BLOCK_SIZE - 1);
