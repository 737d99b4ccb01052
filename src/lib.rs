//! # pvector
//!
//! A persistent (immutable) vector for Rust, built on a 32-way trie with a
//! tail buffer.
//!
//! ## Overview
//!
//! Every update returns a new vector and leaves the old one intact. Versions
//! share all nodes that an update did not touch, so keeping old versions
//! around is cheap.
//!
//! - **Indexed access**: `get`, `set`, `exists` in O(log32 N)
//! - **Both ends**: `push`/`pop` at the back, `unshift`/`shift` at the front
//! - **Windows**: `slice` shares the whole trie with the source vector
//! - **Holes**: `remove` clears a slot without shifting later elements
//!
//! ## Feature Flags
//!
//! - `arc`: Use `Arc` instead of `Rc`, making vectors `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` as a sequence of optional elements
//!
//! ## Example
//!
//! ```rust
//! use pvector::prelude::*;
//!
//! let vector = pvector![1, 2, 3];
//! let pushed = vector.push(4);
//! assert_eq!(vector.len(), 3);
//! assert_eq!(pushed.last(), Some(&4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the vector, its iterator, its errors and the `pvector!` macro.
///
/// # Usage
///
/// ```rust
/// use pvector::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
    pub use crate::pvector;
}

pub mod persistent;
