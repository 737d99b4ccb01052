//! Trie nodes.
//!
//! A node never knows its own height: callers thread the `level` through
//! every traversal, exactly like the raw-index arithmetic does. Level 0 holds
//! [`Node::Leaf`] chunks of values, every level above holds [`Node::Branch`]
//! arrays of children. A tag that disagrees with the level is a bug in the
//! caller.
//!
//! Nodes are cheap handles: cloning a `Node` shares its slot array. Writing
//! goes through [`ReferenceCounter::make_mut`], which copies the array first
//! whenever anybody else can still observe it.

use std::ops::Range;

use super::index::{BITS_PER_LEVEL, BRANCHING_FACTOR, child_slot, child_span};
use crate::persistent::ReferenceCounter;

/// A fixed array of value slots. `None` is either a hole left by `remove`
/// or a slot that was never written.
pub(super) type Chunk<T> = [Option<T>; BRANCHING_FACTOR];

type Children<T> = [Option<Node<T>>; BRANCHING_FACTOR];

pub(super) enum Node<T> {
    /// Interior node, at level > 0
    Branch(ReferenceCounter<Children<T>>),
    /// Value chunk, at level 0
    Leaf(ReferenceCounter<Chunk<T>>),
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Branch(children) => Self::Branch(ReferenceCounter::clone(children)),
            Self::Leaf(values) => Self::Leaf(ReferenceCounter::clone(values)),
        }
    }
}

/// Creates a chunk with every slot empty.
pub(super) fn empty_chunk<T>() -> Chunk<T> {
    std::array::from_fn(|_| None)
}

impl<T> Node<T> {
    /// Creates an empty node suitable for `level`.
    pub(super) fn empty(level: usize) -> Self {
        if level == 0 {
            Self::Leaf(ReferenceCounter::new(empty_chunk()))
        } else {
            Self::Branch(ReferenceCounter::new(std::array::from_fn(|_| None)))
        }
    }

    /// Creates a branch holding `child` at `slot` and nothing else.
    pub(super) fn parent_of(slot: usize, child: Self) -> Self {
        let mut children: Children<T> = std::array::from_fn(|_| None);
        children[slot] = Some(child);
        Self::Branch(ReferenceCounter::new(children))
    }

    /// Wraps an existing chunk as a leaf without copying it.
    pub(super) const fn leaf(values: ReferenceCounter<Chunk<T>>) -> Self {
        Self::Leaf(values)
    }

    /// Returns `true` if both handles point at the same slot array.
    #[cfg(test)]
    pub(super) fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Branch(left), Self::Branch(right)) => ReferenceCounter::ptr_eq(left, right),
            (Self::Leaf(left), Self::Leaf(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Child handle at `slot`; `None` for leaves and empty slots.
    pub(super) fn child(&self, slot: usize) -> Option<&Self> {
        match self {
            Self::Branch(children) => children[slot].as_ref(),
            Self::Leaf(_) => None,
        }
    }

    /// Walks from this node (sitting at `level`) down to the leaf chunk that
    /// owns `raw`.
    pub(super) fn leaf_for(&self, level: usize, raw: usize) -> Option<&ReferenceCounter<Chunk<T>>> {
        let mut node = self;
        let mut level = level;
        loop {
            match node {
                Self::Branch(children) => {
                    debug_assert!(level > 0, "branch found at leaf level");
                    node = children[child_slot(raw, level)].as_ref()?;
                    level -= BITS_PER_LEVEL;
                }
                Self::Leaf(values) => {
                    debug_assert_eq!(level, 0, "leaf found above leaf level");
                    return Some(values);
                }
            }
        }
    }

    /// Visits every present value whose raw index falls inside `window`, in
    /// ascending order. The visitor receives the index relative to
    /// `window.start`.
    ///
    /// Children whose span ends at or before `window.start` are skipped
    /// without descending, which makes the part of the trie left of the
    /// origin free to traverse.
    pub(super) fn for_each<F>(&self, level: usize, offset: usize, window: &Range<usize>, visitor: &mut F)
    where
        F: FnMut(usize, &T),
    {
        match self {
            Self::Leaf(values) => {
                debug_assert_eq!(level, 0, "leaf found above leaf level");
                for (slot, value) in values.iter().enumerate() {
                    let raw = offset + slot;
                    if raw >= window.end {
                        break;
                    }
                    if raw >= window.start
                        && let Some(value) = value
                    {
                        visitor(raw - window.start, value);
                    }
                }
            }
            Self::Branch(children) => {
                debug_assert!(level > 0, "branch found at leaf level");
                let span = child_span(level);
                for (slot, child) in children.iter().enumerate() {
                    let child_offset = offset + slot * span;
                    if child_offset >= window.end {
                        break;
                    }
                    if child_offset + span <= window.start {
                        continue;
                    }
                    if let Some(child) = child {
                        child.for_each(level - BITS_PER_LEVEL, child_offset, window, visitor);
                    }
                }
            }
        }
    }
}

impl<T: Clone> Node<T> {
    /// Returns a new node whose slot array is a shallow copy of this one.
    /// Children and values are shared with the original, never deep-copied.
    pub(super) fn shallow_copy(&self) -> Self {
        match self {
            Self::Branch(children) => Self::Branch(ReferenceCounter::new(children.as_ref().clone())),
            Self::Leaf(values) => Self::Leaf(ReferenceCounter::new(values.as_ref().clone())),
        }
    }

    /// Descends from this node (sitting at `level`) towards `raw`, copying
    /// every shared node on the way and creating missing ones, and returns
    /// the node sitting at `target`.
    pub(super) fn descend_mut(&mut self, level: usize, raw: usize, target: usize) -> &mut Self {
        if level == target {
            return self;
        }
        match self {
            Self::Branch(children) => {
                let children = ReferenceCounter::make_mut(children);
                let child_level = level - BITS_PER_LEVEL;
                children[child_slot(raw, level)]
                    .get_or_insert_with(|| Self::empty(child_level))
                    .descend_mut(child_level, raw, target)
            }
            Self::Leaf(_) => unreachable!("leaf found above target level {target}"),
        }
    }

    /// Writes a child slot of a branch, copying the array if it is shared.
    pub(super) fn set_child(&mut self, slot: usize, child: Option<Self>) {
        match self {
            Self::Branch(children) => ReferenceCounter::make_mut(children)[slot] = child,
            Self::Leaf(_) => unreachable!("child written into a leaf"),
        }
    }

    /// Writes a value slot of a leaf, copying the chunk if it is shared.
    pub(super) fn set_value(&mut self, slot: usize, value: Option<T>) {
        match self {
            Self::Leaf(values) => ReferenceCounter::make_mut(values)[slot] = value,
            Self::Branch(_) => unreachable!("value written into a branch"),
        }
    }

    /// Drops the rightmost chunk of a trie whose meaningful part spans raw
    /// indices `[0, length)`.
    ///
    /// Returns `None` when the whole subtree collapses, so that the parent
    /// can clear its own slot. Must be called on a branch; `level` is at
    /// least [`BITS_PER_LEVEL`].
    pub(super) fn pop(&self, length: usize, level: usize) -> Option<Self> {
        debug_assert!(length > 0);
        debug_assert!(level >= BITS_PER_LEVEL);
        let slot = child_slot(length - 1, level);
        if level > BITS_PER_LEVEL {
            let child = self
                .child(slot)
                .and_then(|child| child.pop(length, level - BITS_PER_LEVEL));
            if child.is_none() && slot == 0 {
                return None;
            }
            let mut node = self.shallow_copy();
            node.set_child(slot, child);
            Some(node)
        } else if slot == 0 {
            None
        } else {
            let mut node = self.shallow_copy();
            node.set_child(slot, None);
            Some(node)
        }
    }
}
