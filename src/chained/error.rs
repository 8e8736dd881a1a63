//! Error types for chained hash sets.
//!
//! Most misuse of [`ChainedHashSet`](super::ChainedHashSet) is defined away
//! as a no-op. The errors here are only surfaced by the fallible variants
//! of those operations and by [`LoadPolicy`](super::LoadPolicy) validation.

use super::LoadPolicy;
use std::error::Error;
use std::fmt;

// =============================================================================
// PolicyError
// =============================================================================

/// Errors produced when validating a [`LoadPolicy`](super::LoadPolicy).
///
/// # Examples
///
/// ```rust
/// use chainset::chained::{LoadPolicy, PolicyError};
///
/// let error = LoadPolicy::new(0.0, 2).unwrap_err();
/// assert_eq!(error, PolicyError::InvalidMaxLoadFactor(0.0));
/// assert_eq!(
///     error.to_string(),
///     "max load factor must be finite and at least 0.015625, got 0"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolicyError {
    /// The maximum load factor was NaN, infinite or below
    /// [`LoadPolicy::MIN_MAX_LOAD_FACTOR`].
    InvalidMaxLoadFactor(f64),

    /// The growth factor was outside `2..=64`.
    ///
    /// A factor of 0 or 1 would never add buckets on growth.
    InvalidGrowthFactor(usize),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxLoadFactor(value) => write!(
                formatter,
                "max load factor must be finite and at least {}, got {value}",
                LoadPolicy::MIN_MAX_LOAD_FACTOR
            ),
            Self::InvalidGrowthFactor(value) => write!(
                formatter,
                "growth factor must be between {} and {}, got {value}",
                LoadPolicy::MIN_GROWTH_FACTOR,
                LoadPolicy::MAX_GROWTH_FACTOR
            ),
        }
    }
}

impl Error for PolicyError {}

// =============================================================================
// RehashError
// =============================================================================

/// Reasons a rehash request was not carried out.
///
/// [`ChainedHashSet::rehash`](super::ChainedHashSet::rehash) ignores these
/// silently; [`ChainedHashSet::try_rehash`](super::ChainedHashSet::try_rehash)
/// reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RehashError {
    /// The requested bucket count equals the current one.
    Unchanged {
        /// The current (and requested) bucket count.
        bucket_count: usize,
    },

    /// The requested bucket count would push the load factor past the
    /// configured maximum.
    InsufficientBuckets {
        /// Number of stored elements.
        len: usize,
        /// The requested bucket count.
        requested: usize,
        /// The smallest bucket count that would be accepted.
        minimum: usize,
    },
}

impl fmt::Display for RehashError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged { bucket_count } => {
                write!(formatter, "set already has {bucket_count} buckets")
            }
            Self::InsufficientBuckets {
                len,
                requested,
                minimum,
            } => write!(
                formatter,
                "{requested} buckets cannot hold {len} elements, at least {minimum} are required"
            ),
        }
    }
}

impl Error for RehashError {}
