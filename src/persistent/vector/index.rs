//! Index arithmetic for the 32-way trie.
//!
//! All functions here work on *raw* indices, that is logical indices already
//! shifted by the vector's origin.

/// Bits consumed per trie level.
pub(super) const BITS_PER_LEVEL: usize = 5;

/// Branching factor (2^5 = 32)
pub(super) const BRANCHING_FACTOR: usize = 1 << BITS_PER_LEVEL;

/// Bit mask for extracting the slot within a node
pub(super) const MASK: usize = BRANCHING_FACTOR - 1;

/// Translates a logical index into raw index space.
#[inline]
pub(super) const fn raw_index(index: usize, origin: usize) -> usize {
    index + origin
}

/// Returns the raw index at which the tail buffer begins for a vector whose
/// raw upper bound is `size`.
///
/// The tail always starts on a chunk boundary and holds between 1 and 32
/// meaningful slots (except for the empty vector).
#[inline]
pub(super) const fn tail_offset(size: usize) -> usize {
    if size < BRANCHING_FACTOR {
        0
    } else {
        ((size - 1) >> BITS_PER_LEVEL) << BITS_PER_LEVEL
    }
}

/// Selects the child slot for `raw` in a branch sitting at `level`.
#[inline]
pub(super) const fn child_slot(raw: usize, level: usize) -> usize {
    (raw >> level) & MASK
}

/// Selects the value slot for `raw` inside its leaf chunk.
#[inline]
pub(super) const fn leaf_slot(raw: usize) -> usize {
    raw & MASK
}

/// Number of raw indices covered by one child of a branch at `level`.
#[inline]
pub(super) const fn child_span(level: usize) -> usize {
    1 << level
}

/// Number of raw indices addressable by a trie whose root sits at `depth`.
///
/// Saturates at `usize::MAX` once the shift no longer fits the word size.
pub(super) fn capacity(depth: usize) -> usize {
    u32::try_from(depth + BITS_PER_LEVEL)
        .ok()
        .and_then(|shift| 1_usize.checked_shl(shift))
        .unwrap_or(usize::MAX)
}
