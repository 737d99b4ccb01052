//! Persistent (immutable) vector with structural sharing.
//!
//! - [`PersistentVector`]: 32-way trie with a tail buffer and a movable
//!   origin, supporting cheap appends, prepends and windowing
//! - [`VectorError`]: failures reported by operations the vector refuses to
//!   approximate
//!
//! # Structural Sharing
//!
//! Every update returns a new vector. Only the nodes on the path to the
//! modified slot are copied; all other nodes are shared with the previous
//! version, which stays valid and unchanged.
//!
//! # Examples
//!
//! ```rust
//! use pvector::persistent::PersistentVector;
//!
//! let vector: PersistentVector<i32> = (0..100).collect();
//! assert_eq!(vector.get(50), Some(&50));
//!
//! // Structural sharing: the original vector is preserved
//! let updated = vector.set(50, 999);
//! assert_eq!(vector.get(50), Some(&50));     // Original unchanged
//! assert_eq!(updated.get(50), Some(&999));   // New version
//!
//! // Windows share the whole trie
//! let window = updated.slice(40, Some(60));
//! assert_eq!(window.get(10), Some(&999));
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod vector;
mod vector_macro;

pub use error::UnimplementedError;
pub use error::VectorError;
pub use vector::PersistentVector;
pub use vector::PersistentVectorIterator;

// =============================================================================
// Tests
// =============================================================================
