//! Load-factor and growth configuration.
//!
//! A [`LoadPolicy`] decides when a [`ChainedHashSet`](super::ChainedHashSet)
//! grows and by how much. The policy only affects performance
//! characteristics; membership results never depend on it.
//!
//! # Examples
//!
//! ```rust
//! use chainset::chained::{ChainedHashSet, LoadPolicy};
//!
//! let policy = LoadPolicy::new(0.75, 4).unwrap();
//! let mut set: ChainedHashSet<i32> = ChainedHashSet::new().with_policy(policy);
//!
//! set.insert(1);
//! assert_eq!(set.bucket_count(), 2);
//! assert!(set.load_factor() <= 0.75);
//! ```

use super::PolicyError;

// =============================================================================
// LoadPolicy Definition
// =============================================================================

/// Thresholds controlling when and how far a set grows.
///
/// - `max_load_factor`: the largest allowed `len / bucket_count` ratio.
///   Inserting an element that would exceed it grows the bucket array first.
/// - `growth_factor`: the multiplier applied to the bucket count on growth.
///
/// The defaults are a maximum load factor of `1.0` and a growth factor of
/// `2`, which makes a sequence of inserts amortized O(1).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "LoadPolicyConfig")
)]
pub struct LoadPolicy {
    max_load_factor: f64,
    growth_factor: usize,
}

impl LoadPolicy {
    /// Maximum load factor used by [`LoadPolicy::default`].
    pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 1.0;

    /// Growth factor used by [`LoadPolicy::default`].
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Smallest maximum load factor accepted by [`LoadPolicy::new`].
    ///
    /// Sparser tables would need more buckets than can be allocated long
    /// before the element count gets large.
    pub const MIN_MAX_LOAD_FACTOR: f64 = 1.0 / 64.0;

    /// Smallest growth factor accepted by [`LoadPolicy::new`].
    pub const MIN_GROWTH_FACTOR: usize = 2;

    /// Largest growth factor accepted by [`LoadPolicy::new`].
    pub const MAX_GROWTH_FACTOR: usize = 64;

    /// The default policy as a constant.
    pub const DEFAULT: Self = Self {
        max_load_factor: Self::DEFAULT_MAX_LOAD_FACTOR,
        growth_factor: Self::DEFAULT_GROWTH_FACTOR,
    };

    /// Creates a validated policy.
    ///
    /// # Errors
    ///
    /// - [`PolicyError::InvalidMaxLoadFactor`] if `max_load_factor` is not
    ///   finite or below [`LoadPolicy::MIN_MAX_LOAD_FACTOR`].
    /// - [`PolicyError::InvalidGrowthFactor`] if `growth_factor` lies outside
    ///   `MIN_GROWTH_FACTOR..=MAX_GROWTH_FACTOR`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::{LoadPolicy, PolicyError};
    ///
    /// assert!(LoadPolicy::new(0.5, 3).is_ok());
    /// assert_eq!(
    ///     LoadPolicy::new(1.0, 1),
    ///     Err(PolicyError::InvalidGrowthFactor(1))
    /// );
    /// assert!(LoadPolicy::new(1e-300, 2).is_err());
    /// ```
    pub fn new(max_load_factor: f64, growth_factor: usize) -> Result<Self, PolicyError> {
        if !max_load_factor.is_finite() || max_load_factor < Self::MIN_MAX_LOAD_FACTOR {
            return Err(PolicyError::InvalidMaxLoadFactor(max_load_factor));
        }
        if !(Self::MIN_GROWTH_FACTOR..=Self::MAX_GROWTH_FACTOR).contains(&growth_factor) {
            return Err(PolicyError::InvalidGrowthFactor(growth_factor));
        }
        Ok(Self {
            max_load_factor,
            growth_factor,
        })
    }

    /// Returns the maximum load factor.
    #[inline]
    #[must_use]
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Returns the growth factor.
    #[inline]
    #[must_use]
    pub const fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Returns `true` if `len` elements in `bucket_count` buckets would
    /// exceed the maximum load factor.
    ///
    /// Zero elements never exceed it, even with zero buckets.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn is_exceeded(&self, len: usize, bucket_count: usize) -> bool {
        len as f64 > bucket_count as f64 * self.max_load_factor
    }

    /// Returns the smallest bucket count able to hold `len` elements
    /// without exceeding the maximum load factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::LoadPolicy;
    ///
    /// let policy = LoadPolicy::default();
    /// assert_eq!(policy.minimum_bucket_count(0), 0);
    /// assert_eq!(policy.minimum_bucket_count(5), 5);
    ///
    /// let sparse = LoadPolicy::new(0.5, 2).unwrap();
    /// assert_eq!(sparse.minimum_bucket_count(5), 10);
    /// ```
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn minimum_bucket_count(&self, len: usize) -> usize {
        let mut bucket_count = (len as f64 / self.max_load_factor).ceil() as usize;
        // Float rounding may land one short of the exact bound.
        while bucket_count < usize::MAX && self.is_exceeded(len, bucket_count) {
            bucket_count += 1;
        }
        bucket_count
    }

    /// Returns the bucket count to grow to when `len + 1` elements no
    /// longer fit in `bucket_count` buckets.
    ///
    /// This is `max(1, bucket_count * growth_factor)`, raised further if a
    /// small maximum load factor needs more buckets than that.
    #[must_use]
    pub(crate) fn grown_bucket_count(&self, len: usize, bucket_count: usize) -> usize {
        bucket_count
            .saturating_mul(self.growth_factor)
            .max(1)
            .max(self.minimum_bucket_count(len.saturating_add(1)))
    }
}

impl Default for LoadPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Serde Support
// =============================================================================

/// Unvalidated form of [`LoadPolicy`] read from configuration.
///
/// Missing fields fall back to the defaults.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct LoadPolicyConfig {
    #[serde(default = "default_max_load_factor")]
    max_load_factor: f64,
    #[serde(default = "default_growth_factor")]
    growth_factor: usize,
}

#[cfg(feature = "serde")]
const fn default_max_load_factor() -> f64 {
    LoadPolicy::DEFAULT_MAX_LOAD_FACTOR
}

#[cfg(feature = "serde")]
const fn default_growth_factor() -> usize {
    LoadPolicy::DEFAULT_GROWTH_FACTOR
}

#[cfg(feature = "serde")]
impl TryFrom<LoadPolicyConfig> for LoadPolicy {
    type Error = PolicyError;

    fn try_from(config: LoadPolicyConfig) -> Result<Self, Self::Error> {
        Self::new(config.max_load_factor, config.growth_factor)
    }
}

// =============================================================================
// Tests
// =============================================================================
