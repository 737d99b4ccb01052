//! Borrowing iterator over the positions of a [`PersistentVector`].

use std::iter::FusedIterator;

use super::PersistentVector;
use super::index::{BITS_PER_LEVEL, leaf_slot, raw_index};
use super::node::Chunk;

/// An iterator over every logical position of a [`PersistentVector`].
///
/// Yields `Some(&value)` for present elements and `None` for holes, so the
/// number of items is always `len()`. The chunk holding the current position
/// is cached, which makes a full traversal O(N) rather than O(N log32 N).
pub struct PersistentVectorIterator<'a, T> {
    /// The vector being traversed
    vector: &'a PersistentVector<T>,
    /// Next logical index to yield
    index: usize,
    /// Chunk number (`raw >> 5`) and contents of the cached chunk
    current_chunk: Option<(usize, Option<&'a Chunk<T>>)>,
}

impl<'a, T> PersistentVectorIterator<'a, T> {
    pub(super) const fn new(vector: &'a PersistentVector<T>) -> Self {
        Self {
            vector,
            index: 0,
            current_chunk: None,
        }
    }

    /// Returns the chunk owning `raw`, reusing the cached one when possible.
    fn chunk_for(&mut self, raw: usize) -> Option<&'a Chunk<T>> {
        let chunk_number = raw >> BITS_PER_LEVEL;
        match self.current_chunk {
            Some((cached, chunk)) if cached == chunk_number => chunk,
            _ => {
                let vector: &'a PersistentVector<T> = self.vector;
                let chunk = vector.leaf_for(raw).map(|chunk| &**chunk);
                self.current_chunk = Some((chunk_number, chunk));
                chunk
            }
        }
    }
}

impl<'a, T> Iterator for PersistentVectorIterator<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.vector.len() {
            return None;
        }
        let raw = raw_index(self.index, self.vector.origin);
        self.index += 1;
        let slot = self
            .chunk_for(raw)
            .and_then(|chunk| chunk[leaf_slot(raw)].as_ref());
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for PersistentVectorIterator<'_, T> {
    fn len(&self) -> usize {
        self.vector.len().saturating_sub(self.index)
    }
}

impl<T> FusedIterator for PersistentVectorIterator<'_, T> {}
