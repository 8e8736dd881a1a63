//! # chainset
//!
//! A hash set built on separate chaining, with explicit control over its
//! bucket array and growth policy.
//!
//! ## Overview
//!
//! [`ChainedHashSet`](chained::ChainedHashSet) stores unique elements in an
//! array of buckets. It offers amortized O(1) insertion, removal and
//! membership tests, and exposes its internals for inspection:
//!
//! - **Buckets**: `bucket_count`, `bucket_size`, `bucket`
//! - **Load**: `load_factor`, configurable through [`LoadPolicy`](chained::LoadPolicy)
//! - **Capacity**: `rehash`, `try_rehash`, `reserve`, `clear`
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for sets and load policies
//! - `fxhash`: `FxChainedHashSet` using `rustc-hash`
//! - `ahash`: `AChainedHashSet` using `ahash`
//! - `tracing`: emit `tracing` events when the bucket array is rebuilt
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use chainset::prelude::*;
//!
//! let mut set = ChainedHashSet::new();
//! set.insert("apple");
//! set.insert("banana");
//! set.insert("apple");
//!
//! assert_eq!(set.len(), 2);
//! assert!(set.contains("banana"));
//! assert!(set.load_factor() <= LoadPolicy::DEFAULT_MAX_LOAD_FACTOR);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use chainset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chained::*;
}

pub mod chained;
