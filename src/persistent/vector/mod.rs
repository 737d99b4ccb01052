//! Persistent (immutable) vector based on a 32-way trie with a tail buffer.
//!
//! This module provides [`PersistentVector`], an immutable indexed sequence
//! that shares structure between versions.
//!
//! # Overview
//!
//! - O(log32 N) `get`, `set` and `remove`
//! - amortized O(1) `push` and `pop` thanks to the tail buffer
//! - O(1) `slice` and `shift` from either end
//! - `unshift` grows the trie to the left instead of rebuilding it
//!
//! # Internal Structure
//!
//! A vector is a window `[origin, size)` over a raw index space:
//!
//! - a root node (32-way trie) holding raw indices below the tail offset
//! - a tail chunk (up to 32 slots) holding the most recent raw indices
//!
//! Every operation either edits only the tail, or copies the nodes on the
//! path from the root to one leaf. Everything else is shared with the
//! vector the operation was called on.
//!
//! # Holes
//!
//! [`PersistentVector::remove`] clears a slot without shifting the elements
//! after it. Cleared slots read as `None` and are skipped by
//! [`PersistentVector::for_each`].
//!
//! # Examples
//!
//! ```rust
//! use pvector::persistent::PersistentVector;
//!
//! let vector = PersistentVector::new().push(1).push(2).push(3);
//! assert_eq!(vector.get(1), Some(&2));
//!
//! // Structural sharing: the original vector is preserved
//! let updated = vector.set(1, 20);
//! assert_eq!(vector.get(1), Some(&2));
//! assert_eq!(updated.get(1), Some(&20));
//! ```

mod index;
mod iterator;
mod node;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use smallvec::SmallVec;

use self::index::{
    BITS_PER_LEVEL, BRANCHING_FACTOR, capacity, child_slot, leaf_slot, raw_index, tail_offset,
};
use self::node::{Chunk, Node, empty_chunk};
use super::ReferenceCounter;
use super::error::VectorError;

pub use self::iterator::PersistentVectorIterator;

/// Values collected by `unshift` before they are written; most calls
/// prepend a handful of elements.
const UNSHIFT_INLINE: usize = 8;

/// A persistent (immutable) vector based on a 32-way trie.
///
/// # Time Complexity
///
/// | Operation   | Complexity                  |
/// |-------------|-----------------------------|
/// | `new`       | O(1)                        |
/// | `get`       | O(log32 N)                  |
/// | `set`       | O(log32 N)                  |
/// | `push`      | O(log32 N) amortized O(1)   |
/// | `pop`       | O(log32 N) amortized O(1)   |
/// | `remove`    | O(log32 N)                  |
/// | `unshift`   | O(k log32 N)                |
/// | `slice`     | O(log32 N)                  |
/// | `len`       | O(1)                        |
/// | `for_each`  | O(N)                        |
///
/// # Examples
///
/// ```rust
/// use pvector::persistent::PersistentVector;
///
/// let vector: PersistentVector<i32> = (0..100).collect();
/// assert_eq!(vector.len(), 100);
/// assert_eq!(vector.get(50), Some(&50));
/// assert_eq!(vector.get(150), None);
/// ```
pub struct PersistentVector<T> {
    /// Raw index of logical index 0
    origin: usize,
    /// Raw upper bound (exclusive)
    size: usize,
    /// Level of the root node; always a multiple of `BITS_PER_LEVEL`
    depth: usize,
    /// Root of the trie, `None` while the trie is empty
    root: Option<Node<T>>,
    /// Tail chunk; only slots below `size - tail_offset(size)` are meaningful
    tail: Option<ReferenceCounter<Chunk<T>>>,
}

impl<T> PersistentVector<T> {
    /// Creates a new empty vector.
    ///
    /// This does not allocate. Every operation that empties a vector returns
    /// a value identical to this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = PersistentVector::new();
    /// assert!(vector.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: 0,
            size: 0,
            depth: BITS_PER_LEVEL,
            root: None,
            tail: None,
        }
    }

    /// Returns the canonical empty vector. Same as [`PersistentVector::new`].
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Returns the number of logical positions, holes included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]);
    /// assert_eq!(vector.len(), 3);
    /// assert_eq!(vector.remove(1).len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size - self.origin
    }

    /// Returns `true` if the vector has no positions.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == self.origin
    }

    /// Returns the chunk that owns `raw`, from the tail or the trie.
    fn leaf_for(&self, raw: usize) -> Option<&ReferenceCounter<Chunk<T>>> {
        if raw >= tail_offset(self.size) {
            return self.tail.as_ref();
        }
        if raw >= capacity(self.depth) {
            return None;
        }
        self.root.as_ref()?.leaf_for(self.depth, raw)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Returns `None` if `index` is past the end or points at a hole.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]);
    /// assert_eq!(vector.get(0), Some(&1));
    /// assert_eq!(vector.get(3), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        let raw = raw_index(index, self.origin);
        self.leaf_for(raw)?[leaf_slot(raw)].as_ref()
    }

    /// Returns `true` if a value is present at `index`.
    ///
    /// Unlike `index < len()`, this is `false` for holes left by
    /// [`PersistentVector::remove`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]).remove(1);
    /// assert!(vector.exists(0));
    /// assert!(!vector.exists(1));
    /// assert!(!vector.exists(3));
    /// ```
    #[must_use]
    pub fn exists(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Returns the element at index 0.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the element at index `len() - 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]);
    /// assert_eq!(vector.last(), Some(&3));
    /// assert_eq!(PersistentVector::<i32>::new().last(), None);
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Visits every present element in ascending index order.
    ///
    /// The visitor receives the logical index and the element. Holes are
    /// skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![10, 20, 30]).remove(1);
    /// let mut visited = Vec::new();
    /// vector.for_each(|index, value| visited.push((index, *value)));
    /// assert_eq!(visited, vec![(0, 10), (2, 30)]);
    /// ```
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(usize, &T),
    {
        let tail_offset = tail_offset(self.size);
        if let Some(root) = &self.root {
            let window = self.origin..tail_offset.max(self.origin);
            root.for_each(self.depth, 0, &window, &mut visitor);
        }
        if let Some(tail) = &self.tail {
            for (slot, value) in tail.iter().enumerate() {
                let raw = tail_offset + slot;
                if raw >= self.size {
                    break;
                }
                if raw >= self.origin
                    && let Some(value) = value
                {
                    visitor(raw - self.origin, value);
                }
            }
        }
    }

    /// Returns the index of the first present element equal to `search`.
    ///
    /// Holes never match. The scan stops at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec!["a", "b", "a"]);
    /// assert_eq!(vector.index_of(&"a"), Some(0));
    /// assert_eq!(vector.remove(0).index_of(&"a"), Some(2));
    /// assert_eq!(vector.index_of(&"z"), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, search: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|slot| slot == Some(search))
    }

    /// Returns an iterator over every position, yielding `None` for holes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]).remove(0);
    /// let collected: Vec<Option<&i32>> = vector.iter().collect();
    /// assert_eq!(collected, vec![None, Some(&2), Some(&3)]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> PersistentVectorIterator<'_, T> {
        PersistentVectorIterator::new(self)
    }

    /// Refuses to build a mapped vector.
    ///
    /// Lazy, restartable transformation views are not provided; adapt the
    /// iterator instead (`vector.iter().map(..)`).
    ///
    /// # Errors
    ///
    /// Always returns [`VectorError::Unimplemented`].
    #[allow(clippy::unused_self, clippy::needless_pass_by_value)]
    pub fn map<U, F>(&self, _function: F) -> Result<PersistentVector<U>, VectorError>
    where
        F: FnMut(&T) -> U,
    {
        Err(VectorError::unimplemented("map"))
    }

    /// Refuses to build a reversed vector.
    ///
    /// # Errors
    ///
    /// Always returns [`VectorError::Unimplemented`].
    #[allow(clippy::unused_self)]
    pub fn reverse(&self) -> Result<Self, VectorError> {
        Err(VectorError::unimplemented("reverse"))
    }

    /// Returns a vector sharing this vector's root over the window
    /// `[begin, end)`.
    ///
    /// Negative bounds count back from the current length. Both bounds are
    /// clamped to the current window, and `None` for `end` means the
    /// current end. The trie is not pruned: nodes outside the window stay
    /// reachable for as long as the slice lives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector: PersistentVector<i32> = (0..10).collect();
    /// assert_eq!(vector.slice(2, Some(5)).to_array(), vec![Some(2), Some(3), Some(4)]);
    /// assert_eq!(vector.slice(-2, None).to_array(), vec![Some(8), Some(9)]);
    /// assert_eq!(vector.slice(1, Some(-7)).to_array(), vec![Some(1), Some(2)]);
    /// assert!(vector.slice(5, Some(2)).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, begin: isize, end: Option<isize>) -> Self {
        let new_origin = self.resolve_bound(begin);
        let new_size = end.map_or(self.size, |end| self.resolve_bound(end));
        if new_origin >= new_size {
            return Self::new();
        }

        let tail = if new_size == self.size {
            self.tail.clone()
        } else {
            log::trace!(
                "slice [{new_origin}, {new_size}) adopts the chunk holding raw index {} as tail",
                new_size - 1
            );
            self.leaf_for(new_size - 1).cloned()
        };

        Self {
            origin: new_origin,
            size: new_size,
            depth: self.depth,
            root: self.root.clone(),
            tail,
        }
    }

    /// Resolves a signed slice bound into raw index space.
    fn resolve_bound(&self, bound: isize) -> usize {
        if bound < 0 {
            self.size
                .saturating_sub(bound.unsigned_abs())
                .max(self.origin)
        } else {
            self.origin
                .saturating_add(bound.unsigned_abs())
                .min(self.size)
        }
    }

    /// Drops the first element. Same as `slice(1, None)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]);
    /// assert_eq!(vector.shift().first(), Some(&2));
    /// ```
    #[must_use]
    pub fn shift(&self) -> Self {
        self.slice(1, None)
    }

    /// Concatenates `other` after this vector.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Unimplemented`] when both vectors are
    /// non-empty. If either side is empty, the other side is returned
    /// sharing all of its structure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2]);
    /// let empty = PersistentVector::new();
    /// assert_eq!(empty.concat(&vector), Ok(vector.clone()));
    /// assert!(vector.concat(&vector).is_err());
    /// ```
    pub fn concat(&self, other: &Self) -> Result<Self, VectorError> {
        if other.is_empty() {
            Ok(self.clone())
        } else if self.is_empty() {
            Ok(other.clone())
        } else {
            Err(VectorError::unimplemented("concat"))
        }
    }
}

impl<T: Clone> PersistentVector<T> {
    /// Creates a vector holding `values` in order.
    ///
    /// Fewer than 32 values are stored directly in the tail. Longer inputs
    /// are appended one by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]);
    /// assert_eq!(vector.to_array(), vec![Some(1), Some(2), Some(3)]);
    /// ```
    #[must_use]
    pub fn from_array(values: Vec<T>) -> Self {
        if values.is_empty() {
            return Self::new();
        }
        if values.len() < BRANCHING_FACTOR {
            let size = values.len();
            let mut tail = empty_chunk();
            for (slot, value) in tail.iter_mut().zip(values) {
                *slot = Some(value);
            }
            return Self {
                size,
                tail: Some(ReferenceCounter::new(tail)),
                ..Self::new()
            };
        }
        Self::new().push_many(values)
    }

    /// Creates a vector holding clones of `values`.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_array(values.to_vec())
    }

    /// Returns a vector with `value` stored at `index`.
    ///
    /// Writing at `len()` appends. Writing past `len()` also appends: the
    /// value lands at `len()`, no gap is created.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]);
    /// assert_eq!(vector.set(1, 99).to_array(), vec![Some(1), Some(99), Some(3)]);
    /// assert_eq!(vector.set(3, 4).len(), 4);
    /// assert_eq!(vector.set(10, 4).get(3), Some(&4));
    /// assert_eq!(vector.get(1), Some(&2));
    /// ```
    #[must_use]
    pub fn set(&self, index: usize, value: T) -> Self {
        let raw = raw_index(index.min(self.len()), self.origin);
        self.assoc(raw, Some(value))
    }

    /// Appends `value` at the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::new().push(1).push(2);
    /// assert_eq!(vector.len(), 2);
    /// assert_eq!(vector.last(), Some(&2));
    /// ```
    #[must_use]
    pub fn push(&self, value: T) -> Self {
        self.set(self.len(), value)
    }

    /// Appends every value in order.
    #[must_use]
    pub fn push_many<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(self.clone(), |vector, value| vector.push(value))
    }

    /// Writes `slot` at `raw`, where `raw` is at most `size`.
    fn assoc(&self, raw: usize, slot: Option<T>) -> Self {
        debug_assert!(raw <= self.size);
        let tail_offset = tail_offset(self.size);

        if raw >= tail_offset + BRANCHING_FACTOR {
            return self.push_tail_into_root(raw, slot);
        }

        if raw >= tail_offset {
            let mut tail = self
                .tail
                .clone()
                .unwrap_or_else(|| ReferenceCounter::new(empty_chunk()));
            ReferenceCounter::make_mut(&mut tail)[leaf_slot(raw)] = slot;
            return Self {
                origin: self.origin,
                size: self.size.max(raw + 1),
                depth: self.depth,
                root: self.root.clone(),
                tail: Some(tail),
            };
        }

        let mut root = self
            .root
            .clone()
            .unwrap_or_else(|| Node::empty(self.depth));
        root.descend_mut(self.depth, raw, 0)
            .set_value(leaf_slot(raw), slot);
        Self {
            origin: self.origin,
            size: self.size,
            depth: self.depth,
            root: Some(root),
            tail: self.tail.clone(),
        }
    }

    /// Freezes the full tail into the trie and starts a new tail holding
    /// `slot` at `raw`.
    fn push_tail_into_root(&self, raw: usize, slot: Option<T>) -> Self {
        let tail_offset = tail_offset(self.size);
        let mut depth = self.depth;
        let mut root = self.root.clone().unwrap_or_else(|| Node::empty(depth));

        while tail_offset >= capacity(depth) {
            root = Node::parent_of(0, root);
            depth += BITS_PER_LEVEL;
            log::trace!("trie grown to depth {depth} to hold raw index {tail_offset}");
        }

        if let Some(tail) = &self.tail {
            log::trace!("merging tail at raw index {tail_offset} into trie");
            root.descend_mut(depth, tail_offset, BITS_PER_LEVEL).set_child(
                child_slot(tail_offset, BITS_PER_LEVEL),
                Some(Node::leaf(ReferenceCounter::clone(tail))),
            );
        }

        let mut new_tail = empty_chunk();
        new_tail[leaf_slot(raw)] = slot;
        Self {
            origin: self.origin,
            size: raw + 1,
            depth,
            root: Some(root),
            tail: Some(ReferenceCounter::new(new_tail)),
        }
    }

    /// Drops the last position.
    ///
    /// Popping the only element, or popping an empty vector, yields the
    /// empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]);
    /// assert_eq!(vector.pop().to_array(), vec![Some(1), Some(2)]);
    /// assert!(PersistentVector::<i32>::new().pop().is_empty());
    /// ```
    #[must_use]
    pub fn pop(&self) -> Self {
        if self.size <= self.origin + 1 {
            return Self::new();
        }
        let new_size = self.size - 1;
        let tail_offset = tail_offset(self.size);

        if new_size > tail_offset {
            let tail = self.tail.clone().map(|mut tail| {
                ReferenceCounter::make_mut(&mut tail)[leaf_slot(new_size)] = None;
                tail
            });
            return Self {
                origin: self.origin,
                size: new_size,
                depth: self.depth,
                root: self.root.clone(),
                tail,
            };
        }

        let tail = self.leaf_for(new_size - 1).cloned();
        let root = self
            .root
            .as_ref()
            .and_then(|root| root.pop(new_size, self.depth));
        if root.is_none() {
            log::trace!("trie collapsed while popping down to raw size {new_size}");
        }
        Self {
            origin: self.origin,
            size: new_size,
            depth: self.depth,
            root,
            tail,
        }
    }

    /// Clears the value at `index`, leaving a hole.
    ///
    /// Later elements keep their indices and `len()` is unchanged. Does
    /// nothing if no value is present at `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]).remove(1);
    /// assert_eq!(vector.len(), 3);
    /// assert_eq!(vector.get(1), None);
    /// assert_eq!(vector.get(2), Some(&3));
    /// ```
    #[must_use]
    pub fn remove(&self, index: usize) -> Self {
        if !self.exists(index) {
            return self.clone();
        }
        self.assoc(raw_index(index, self.origin), None)
    }

    /// Prepends `values`, keeping their order.
    ///
    /// When the origin cannot move far enough left, the root is wrapped in
    /// new parents (the old root becomes child 1) until there is room.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![3, 4]).unshift([1, 2]);
    /// assert_eq!(vector.to_array(), vec![Some(1), Some(2), Some(3), Some(4)]);
    /// ```
    #[must_use]
    pub fn unshift<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: SmallVec<[T; UNSHIFT_INLINE]> = values.into_iter().collect();
        if values.is_empty() {
            return self.clone();
        }

        let mut origin = self.origin;
        let mut size = self.size;
        let mut depth = self.depth;
        let mut root = self.root.clone();
        while origin < values.len() {
            let span = capacity(depth);
            root = root.map(|root| Node::parent_of(1, root));
            origin += span;
            size += span;
            depth += BITS_PER_LEVEL;
            log::trace!("trie grown to depth {depth} to make room on the left");
        }

        let new_origin = origin - values.len();
        let grown = Self {
            origin: new_origin,
            size,
            depth,
            root,
            tail: self.tail.clone(),
        };
        values
            .into_iter()
            .enumerate()
            .fold(grown, |vector, (offset, value)| {
                vector.assoc(new_origin + offset, Some(value))
            })
    }

    /// Replaces `remove_count` positions starting at `index` with `values`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Unimplemented`] whenever the result would
    /// require concatenating two non-empty vectors, that is unless at most
    /// one of the kept prefix, `values`, and the kept suffix is non-empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]);
    /// assert_eq!(vector.splice(0, 2, vec![]).map(|v| v.to_array()), Ok(vec![Some(3)]));
    /// assert!(vector.splice(1, 1, vec![9]).is_err());
    /// ```
    pub fn splice(&self, index: usize, remove_count: usize, values: Vec<T>) -> Result<Self, VectorError> {
        let resume = index.saturating_add(remove_count);
        let head = self.slice(0, Some(as_offset(index)));
        let rest = self.slice(as_offset(resume), None);
        head.concat(&Self::from_array(values))?.concat(&rest)
    }

    /// Returns a dense copy of every position, `None` for holes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pvector::persistent::PersistentVector;
    ///
    /// let vector = PersistentVector::from_array(vec![1, 2, 3]).remove(2);
    /// assert_eq!(vector.to_array(), vec![Some(1), Some(2), None]);
    /// ```
    #[must_use]
    pub fn to_array(&self) -> Vec<Option<T>> {
        let mut array = vec![None; self.len()];
        self.for_each(|index, value| array[index] = Some(value.clone()));
        array
    }

    /// Builds a vector from slots, holes included.
    #[cfg(feature = "serde")]
    fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        slots
            .into_iter()
            .fold(Self::new(), |vector, slot| vector.assoc(vector.size, slot))
    }
}

/// Converts a logical index into a non-negative slice bound.
fn as_offset(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for PersistentVector<T> {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin,
            size: self.size,
            depth: self.depth,
            root: self.root.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<T> Default for PersistentVector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> FromIterator<T> for PersistentVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_array(iter.into_iter().collect())
    }
}

impl<T: Clone> From<Vec<T>> for PersistentVector<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_array(values)
    }
}

impl<T: Clone> From<&[T]> for PersistentVector<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<'a, T> IntoIterator for &'a PersistentVector<T> {
    type Item = Option<&'a T>;
    type IntoIter = PersistentVectorIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for PersistentVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {index}",
                self.len()
            ),
        }
    }
}

/// Two vectors are equal when they hold equal values (and holes) at the
/// same logical positions, regardless of how their tries are laid out.
impl<T: PartialEq> PartialEq for PersistentVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentVector<T> {}

impl<T: Hash> Hash for PersistentVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for slot in self {
            slot.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentVector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for PersistentVector<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for slot in self {
            seq.serialize_element(&slot)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct PersistentVectorVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for PersistentVectorVisitor<T>
where
    T: serde::Deserialize<'de> + Clone,
{
    type Value = PersistentVector<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut slots: Vec<Option<T>> = Vec::with_capacity(capacity);
        while let Some(slot) = seq.next_element()? {
            slots.push(slot);
        }
        Ok(PersistentVector::from_slots(slots))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for PersistentVector<T>
where
    T: serde::Deserialize<'de> + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(PersistentVectorVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentVector<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentVector<i32>: Send, Sync);


// =============================================================================
// Thread Safety Tests (arc feature only)
// =============================================================================
