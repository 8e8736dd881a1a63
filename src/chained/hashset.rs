//! Mutable hash set with separate chaining.
//!
//! This module provides [`ChainedHashSet`], a hash set that stores its
//! elements in an array of buckets. Every bucket is an unordered chain of
//! the elements whose hash reduces to that bucket's index.
//!
//! # Overview
//!
//! - O(1) average `contains`, `insert` and `remove`
//! - O(chain length) worst case for the same operations
//! - O(1) `len`, `is_empty`, `bucket_count` and `load_factor`
//!
//! The bucket array grows by [`LoadPolicy::growth_factor`] whenever an
//! insert would push the load factor past [`LoadPolicy::max_load_factor`].
//! Removing elements never shrinks it; only [`ChainedHashSet::clear`]
//! releases the buckets.
//!
//! # Examples
//!
//! ```rust
//! use chainset::chained::ChainedHashSet;
//!
//! let mut set = ChainedHashSet::with_bucket_count(4);
//! for element in 1..=4 {
//!     set.insert(element);
//! }
//! assert_eq!(set.bucket_count(), 4);
//! assert_eq!(set.load_factor(), 1.0);
//!
//! // The fifth element would exceed the load factor, so the set doubles.
//! set.insert(5);
//! assert_eq!(set.bucket_count(), 8);
//! assert_eq!(set.load_factor(), 0.625);
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FromIterator;

use super::bucket::Bucket;
use super::{LoadPolicy, RehashError};

// =============================================================================
// ChainedHashSet Definition
// =============================================================================

/// A hash set using separate chaining for collision resolution.
///
/// Elements must implement [`Hash`] and [`Eq`]; equal elements must hash
/// equally. The hash function is supplied by the [`BuildHasher`] `S`.
///
/// # Time Complexity
///
/// | Operation      | Average | Worst case     |
/// |----------------|---------|----------------|
/// | `contains`     | O(1)    | O(chain)       |
/// | `insert`       | O(1)*   | O(n)           |
/// | `remove`       | O(1)    | O(chain)       |
/// | `rehash`       | O(n)    | O(n)           |
/// | `len`          | O(1)    | O(1)           |
///
/// \* amortized over a sequence of inserts.
///
/// # Cloning and Moving
///
/// [`Clone`] produces an independent deep copy of every bucket. Moving a
/// set is an ordinary Rust move; [`ChainedHashSet::take_ownership`] moves
/// the contents out from behind a `&mut` and leaves an empty set behind.
#[derive(Clone)]
pub struct ChainedHashSet<T, S = RandomState> {
    buckets: Vec<Bucket<T>>,
    len: usize,
    hash_builder: S,
    policy: LoadPolicy,
}

impl<T> ChainedHashSet<T, RandomState> {
    /// Creates an empty set with no buckets.
    ///
    /// No memory is allocated until the first insert.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<i32> = ChainedHashSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.bucket_count(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty set with `bucket_count` buckets.
    ///
    /// Use this when the expected number of elements is known up front to
    /// avoid intermediate rehashes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<i32> = ChainedHashSet::with_bucket_count(16);
    /// assert!(set.is_empty());
    /// assert_eq!(set.bucket_count(), 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self::with_bucket_count_and_hasher(bucket_count, RandomState::new())
    }
}

impl<T, S> ChainedHashSet<T, S> {
    /// Creates an empty set with no buckets that hashes with `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::with_hasher(RandomState::new());
    /// set.insert("key");
    /// assert!(set.contains("key"));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            buckets: Vec::new(),
            len: 0,
            hash_builder,
            policy: LoadPolicy::DEFAULT,
        }
    }

    /// Creates an empty set with `bucket_count` buckets that hashes with
    /// `hash_builder`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::hash_map::RandomState;
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::with_bucket_count_and_hasher(8, RandomState::new());
    /// set.insert("key");
    /// assert_eq!(set.bucket_count(), 8);
    /// assert!(set.contains("key"));
    /// ```
    #[must_use]
    pub fn with_bucket_count_and_hasher(bucket_count: usize, hash_builder: S) -> Self {
        Self {
            buckets: empty_buckets(bucket_count),
            len: 0,
            hash_builder,
            policy: LoadPolicy::DEFAULT,
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of elements stored in bucket `index`.
    ///
    /// An out-of-range index yields `0` instead of panicking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::with_bucket_count(2);
    /// set.insert(7);
    ///
    /// let total: usize = (0..set.bucket_count()).map(|index| set.bucket_size(index)).sum();
    /// assert_eq!(total, 1);
    /// assert_eq!(set.bucket_size(100), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn bucket_size(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, Bucket::len)
    }

    /// Returns the average number of elements per bucket.
    ///
    /// An empty set reports `0.0`, whatever its bucket count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.len as f64 / self.buckets.len() as f64
    }

    /// Returns the load policy of the set.
    #[inline]
    #[must_use]
    pub const fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Returns a reference to the set's [`BuildHasher`].
    #[inline]
    #[must_use]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns an iterator over the elements in no particular order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let set: ChainedHashSet<i32> = [1, 2, 3].into_iter().collect();
    /// let mut elements: Vec<i32> = set.iter().copied().collect();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> ChainedHashSetIterator<'_, T> {
        ChainedHashSetIterator {
            buckets: self.buckets.iter(),
            current: Default::default(),
            remaining: self.len,
        }
    }

    /// Removes every element and releases the bucket array.
    ///
    /// The set returns to the state of a freshly created one with zero
    /// buckets. The hasher and the load policy are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = (0..10).collect();
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.bucket_count(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.buckets = Vec::new();
        self.len = 0;
    }

    /// Removes every element, keeping the bucket array, and returns them.
    ///
    /// The elements are removed eagerly, so the set is empty even if the
    /// returned iterator is dropped before it is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = (0..4).collect();
    /// let buckets = set.bucket_count();
    ///
    /// assert_eq!(set.drain().count(), 4);
    /// assert!(set.is_empty());
    /// assert_eq!(set.bucket_count(), buckets);
    /// ```
    pub fn drain(&mut self) -> ChainedHashSetIntoIterator<T> {
        let chains: Vec<Vec<T>> = self.buckets.iter_mut().map(Bucket::take_all).collect();
        let remaining = std::mem::replace(&mut self.len, 0);
        ChainedHashSetIntoIterator::new(chains, remaining)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = (0..10).collect();
    /// set.retain(|element| element % 2 == 0);
    /// assert_eq!(set.len(), 5);
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        for bucket in &mut self.buckets {
            self.len -= bucket.retain(&mut predicate);
        }
    }

    /// Moves the contents out into a new set, leaving `self` empty.
    ///
    /// Bucket ownership is transferred in O(1). Afterwards `self` has no
    /// elements and no buckets but keeps its hasher and load policy, so it
    /// can be reused right away.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut source: ChainedHashSet<i32> = [1, 2, 3].into_iter().collect();
    /// let target = source.take_ownership();
    ///
    /// assert_eq!(target.len(), 3);
    /// assert!(source.is_empty());
    /// assert_eq!(source.bucket_count(), 0);
    /// ```
    #[must_use]
    pub fn take_ownership(&mut self) -> Self
    where
        S: Clone,
    {
        Self {
            buckets: std::mem::take(&mut self.buckets),
            len: std::mem::replace(&mut self.len, 0),
            hash_builder: self.hash_builder.clone(),
            policy: self.policy,
        }
    }
}

impl<T, S> ChainedHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Replaces the load policy.
    ///
    /// If the current contents exceed the new maximum load factor, the set
    /// is rehashed to the smallest bucket count that satisfies it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::{ChainedHashSet, LoadPolicy};
    ///
    /// let set: ChainedHashSet<i32> = (0..8).collect();
    /// assert_eq!(set.bucket_count(), 8);
    ///
    /// let set = set.with_policy(LoadPolicy::new(0.5, 2).unwrap());
    /// assert_eq!(set.bucket_count(), 16);
    /// ```
    #[must_use]
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        if policy.is_exceeded(self.len, self.buckets.len()) {
            self.rebuild(policy.minimum_bucket_count(self.len));
        }
        self
    }

    fn hash_of<Q>(&self, key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        self.hash_builder.hash_one(key)
    }

    /// Returns the bucket index `key` maps to.
    ///
    /// Returns `None` when the set has no buckets, since no index exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let empty: ChainedHashSet<i32> = ChainedHashSet::new();
    /// assert_eq!(empty.bucket(&1), None);
    ///
    /// let mut set = ChainedHashSet::with_bucket_count(8);
    /// set.insert(1);
    /// let index = set.bucket(&1).unwrap();
    /// assert!(index < 8);
    /// assert_eq!(set.bucket_size(index), 1);
    /// ```
    #[must_use]
    pub fn bucket<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.buckets.is_empty() {
            return None;
        }
        Some(bucket_index(self.hash_of(key), self.buckets.len()))
    }

    /// Returns `true` if the set contains an element equal to `key`.
    ///
    /// The key may be any borrowed form of the element type. An empty set
    /// answers without hashing the key.
    ///
    /// # Complexity
    ///
    /// O(1) average, O(chain length) worst case
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// set.insert("hello".to_string());
    ///
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns a reference to the stored element equal to `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        let index = bucket_index(self.hash_of(key), self.buckets.len());
        self.buckets[index].find(key)
    }

    /// Adds an element to the set.
    ///
    /// Returns `false` and drops `element` if an equal element is already
    /// present. Otherwise the bucket array is grown first when needed, and
    /// `true` is returned.
    ///
    /// The element is hashed exactly once.
    ///
    /// # Complexity
    ///
    /// Amortized O(1); a single insert that triggers growth is O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// assert!(set.insert(42));
    /// assert!(!set.insert(42));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        let hash = self.hash_of(&element);
        if !self.is_empty() {
            let index = bucket_index(hash, self.buckets.len());
            if self.buckets[index].find(&element).is_some() {
                return false;
            }
        }
        self.insert_unique(hash, element);
        true
    }

    /// Adds an element, replacing and returning an equal stored element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set = ChainedHashSet::new();
    /// assert_eq!(set.replace(1), None);
    /// assert_eq!(set.replace(1), Some(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn replace(&mut self, element: T) -> Option<T> {
        let hash = self.hash_of(&element);
        let element = if self.is_empty() {
            element
        } else {
            let index = bucket_index(hash, self.buckets.len());
            match self.buckets[index].replace(element) {
                Ok(previous) => return Some(previous),
                Err(element) => element,
            }
        };
        self.insert_unique(hash, element);
        None
    }

    fn insert_unique(&mut self, hash: u64, element: T) {
        if self.policy.is_exceeded(self.len + 1, self.buckets.len()) {
            let bucket_count = self
                .policy
                .grown_bucket_count(self.len, self.buckets.len());
            self.rebuild(bucket_count);
        }
        let index = bucket_index(hash, self.buckets.len());
        self.buckets[index].push(element);
        self.len += 1;
    }

    /// Removes the element equal to `key`, returning whether one was
    /// present.
    ///
    /// Removing from an empty set is a no-op. The length only drops when
    /// an element was actually removed, so removing an absent key leaves
    /// `len` untouched. The bucket array is never shrunk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = [1, 2].into_iter().collect();
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes and returns the element equal to `key`.
    pub fn take<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.is_empty() {
            return None;
        }
        let index = bucket_index(self.hash_of(key), self.buckets.len());
        let removed = self.buckets[index].remove(key)?;
        self.len -= 1;
        Some(removed)
    }

    /// Rebuilds the set with `bucket_count` buckets.
    ///
    /// The request is silently ignored if `bucket_count` equals the current
    /// bucket count, or if it is too small to hold the current elements
    /// within the maximum load factor. Use [`ChainedHashSet::try_rehash`]
    /// to learn why a request was ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = (0..4).collect();
    ///
    /// set.rehash(32);
    /// assert_eq!(set.bucket_count(), 32);
    ///
    /// set.rehash(2); // too small for 4 elements
    /// assert_eq!(set.bucket_count(), 32);
    /// ```
    pub fn rehash(&mut self, bucket_count: usize) {
        // Rejections are reported through `try_rehash` only.
        let _ = self.try_rehash(bucket_count);
    }

    /// Rebuilds the set with `bucket_count` buckets, reporting rejections.
    ///
    /// Every element is redistributed into a freshly built bucket array
    /// that replaces the current one only once it is complete. While it
    /// runs, both arrays are alive.
    ///
    /// # Errors
    ///
    /// - [`RehashError::Unchanged`] if `bucket_count` equals the current
    ///   bucket count.
    /// - [`RehashError::InsufficientBuckets`] if `len` elements would
    ///   exceed the maximum load factor in `bucket_count` buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::{ChainedHashSet, RehashError};
    ///
    /// let mut set: ChainedHashSet<i32> = (0..3).collect();
    ///
    /// assert_eq!(
    ///     set.try_rehash(2),
    ///     Err(RehashError::InsufficientBuckets { len: 3, requested: 2, minimum: 3 })
    /// );
    /// assert_eq!(set.try_rehash(10), Ok(()));
    /// assert_eq!(set.try_rehash(10), Err(RehashError::Unchanged { bucket_count: 10 }));
    /// ```
    pub fn try_rehash(&mut self, bucket_count: usize) -> Result<(), RehashError> {
        let error = if bucket_count == self.buckets.len() {
            RehashError::Unchanged { bucket_count }
        } else if self.policy.is_exceeded(self.len, bucket_count) {
            RehashError::InsufficientBuckets {
                len: self.len,
                requested: bucket_count,
                minimum: self.policy.minimum_bucket_count(self.len),
            }
        } else {
            self.rebuild(bucket_count);
            return Ok(());
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(%error, "rehash request ignored");

        Err(error)
    }

    /// Grows the bucket array to at least `bucket_count` buckets.
    ///
    /// Does nothing if the set already has that many buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainset::chained::ChainedHashSet;
    ///
    /// let mut set: ChainedHashSet<i32> = ChainedHashSet::with_bucket_count(16);
    /// set.reserve(8);
    /// assert_eq!(set.bucket_count(), 16);
    /// set.reserve(64);
    /// assert_eq!(set.bucket_count(), 64);
    /// ```
    pub fn reserve(&mut self, bucket_count: usize) {
        if bucket_count > self.buckets.len() {
            self.rehash(bucket_count);
        }
    }

    /// Redistributes every element into `bucket_count` fresh buckets.
    ///
    /// All hashes are computed before any element moves, so a panicking
    /// `Hash` implementation leaves the set as it was.
    fn rebuild(&mut self, bucket_count: usize) {
        let hashes: Vec<u64> = self.iter().map(|element| self.hash_of(element)).collect();

        let mut buckets = empty_buckets(bucket_count);
        let elements = self.buckets.iter_mut().flat_map(Bucket::take_all);
        for (element, hash) in elements.zip(hashes) {
            buckets[bucket_index(hash, bucket_count)].push(element);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.buckets.len(),
            to = bucket_count,
            len = self.len,
            "rehashed chained hash set"
        );

        self.buckets = buckets;
    }
}

/// Reduces `hash` to a bucket index. `bucket_count` must be non-zero.
#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    (hash % bucket_count as u64) as usize
}

fn empty_buckets<T>(bucket_count: usize) -> Vec<Bucket<T>> {
    std::iter::repeat_with(Bucket::new)
        .take(bucket_count)
        .collect()
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`ChainedHashSet`].
pub struct ChainedHashSetIterator<'a, T> {
    buckets: std::slice::Iter<'a, Bucket<T>>,
    current: std::slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iterator for ChainedHashSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.current.next() {
                self.remaining -= 1;
                return Some(element);
            }
            self.current = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ChainedHashSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> std::iter::FusedIterator for ChainedHashSetIterator<'_, T> {}

impl<T> Clone for ChainedHashSetIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            current: self.current.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over the elements of a [`ChainedHashSet`].
///
/// Also returned by [`ChainedHashSet::drain`].
pub struct ChainedHashSetIntoIterator<T> {
    chains: std::vec::IntoIter<Vec<T>>,
    current: std::vec::IntoIter<T>,
    remaining: usize,
}

impl<T> ChainedHashSetIntoIterator<T> {
    fn new(chains: Vec<Vec<T>>, remaining: usize) -> Self {
        Self {
            chains: chains.into_iter(),
            current: Default::default(),
            remaining,
        }
    }
}

impl<T> Iterator for ChainedHashSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.current.next() {
                self.remaining -= 1;
                return Some(element);
            }
            self.current = self.chains.next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ChainedHashSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> std::iter::FusedIterator for ChainedHashSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for ChainedHashSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> FromIterator<T> for ChainedHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Inserts every element in turn; duplicates collapse to one copy.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, S> Extend<T> for ChainedHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for ChainedHashSet<T, S>
where
    T: Hash + Eq + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, S> IntoIterator for ChainedHashSet<T, S> {
    type Item = T;
    type IntoIter = ChainedHashSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let chains = self.buckets.into_iter().map(Bucket::into_elements).collect();
        ChainedHashSetIntoIterator::new(chains, self.len)
    }
}

impl<'a, T, S> IntoIterator for &'a ChainedHashSet<T, S> {
    type Item = &'a T;
    type IntoIter = ChainedHashSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> PartialEq for ChainedHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Two sets are equal when they hold equal elements, regardless of
    /// their bucket layout or load policy.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T, S> Eq for ChainedHashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for ChainedHashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for ChainedHashSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for ChainedHashSet<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct ChainedHashSetVisitor<T, S> {
    marker: std::marker::PhantomData<fn() -> ChainedHashSet<T, S>>,
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for ChainedHashSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = ChainedHashSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Sequential insert: the size hint is untrusted input.
        let mut set = ChainedHashSet::default();
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for ChainedHashSet<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ChainedHashSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
