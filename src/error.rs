use core::fmt;

/// The error returned when an index or half-open range does not lie within
/// `[0, length]` for the `Text` that received it.
///
/// This is the only error kind the crate raises; see the crate-level docs
/// for the full contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The index (or the end of the range) that violated the bound.
    pub index: usize,
    /// The length of the `Text` the operation was called on.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for text of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

/// A `Result` whose error is always [`OutOfRange`].
pub type Result<T> = core::result::Result<T, OutOfRange>;
