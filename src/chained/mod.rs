//! Separate-chaining hash containers.
//!
//! This module provides:
//!
//! - [`ChainedHashSet`]: a mutable hash set backed by an array of buckets,
//!   each holding an unordered chain of colliding elements
//! - [`LoadPolicy`]: the load-factor and growth configuration of a set
//! - [`PolicyError`] and [`RehashError`]: the few errors the set reports
//!
//! # Load Factor and Growth
//!
//! A set keeps `len / bucket_count` at or below the policy's maximum load
//! factor after every mutation. When an insert would break that bound, the
//! bucket array is rebuilt with `growth_factor` times as many buckets first,
//! which keeps a sequence of inserts amortized O(1).
//!
//! Removals never shrink the bucket array. [`ChainedHashSet::clear`] drops
//! it entirely and [`ChainedHashSet::rehash`] resizes it on request.
//!
//! # Examples
//!
//! ```rust
//! use chainset::chained::ChainedHashSet;
//!
//! let set: ChainedHashSet<i32> = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3].into_iter().collect();
//! assert_eq!(set.len(), 7);
//!
//! let total: usize = (0..set.bucket_count()).map(|index| set.bucket_size(index)).sum();
//! assert_eq!(total, set.len());
//! ```
//!
//! # Hashers
//!
//! The hash function is injected through a [`std::hash::BuildHasher`].
//! With the `fxhash` or `ahash` features enabled, [`FxChainedHashSet`] and
//! [`AChainedHashSet`] use the faster non-cryptographic hashers from
//! `rustc-hash` and `ahash`.

mod bucket;
mod error;
mod hashset;
mod policy;

pub use error::PolicyError;
pub use error::RehashError;
pub use hashset::ChainedHashSet;
pub use hashset::ChainedHashSetIntoIterator;
pub use hashset::ChainedHashSetIterator;
pub use policy::LoadPolicy;

/// A [`ChainedHashSet`] hashing with `rustc-hash`'s `FxHasher`.
///
/// Deterministic and fast for integer-like keys, but not resistant to
/// collision attacks.
#[cfg(feature = "fxhash")]
pub type FxChainedHashSet<T> = ChainedHashSet<T, rustc_hash::FxBuildHasher>;

/// A [`ChainedHashSet`] hashing with `ahash`.
#[cfg(feature = "ahash")]
pub type AChainedHashSet<T> = ChainedHashSet<T, ahash::RandomState>;

// =============================================================================
// Tests
// =============================================================================
