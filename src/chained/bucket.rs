//! Per-bucket collision chain.
//!
//! A [`Bucket`] holds every element whose hash reduces to the same slot of
//! the bucket array. Chains are unordered: removal swaps the last element
//! into the freed position, so pushing and removing are both O(1) once the
//! element has been located.

use std::borrow::Borrow;

// =============================================================================
// Bucket Definition
// =============================================================================

/// An unordered chain of elements sharing one bucket index.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<T> {
    elements: Vec<T>,
}

impl<T> Bucket<T> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Appends an element without checking for duplicates.
    ///
    /// Callers must have verified that no equal element is already present.
    #[inline]
    pub(crate) fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    #[inline]
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Returns the number of removed elements.
    pub(crate) fn retain<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.elements.len();
        self.elements.retain(predicate);
        before - self.elements.len()
    }

    /// Moves every element out of the chain, leaving it empty.
    #[inline]
    pub(crate) fn take_all(&mut self) -> Vec<T> {
        std::mem::take(&mut self.elements)
    }

    #[inline]
    pub(crate) fn into_elements(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Bucket<T> {
    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.elements
            .iter()
            .position(|element| element.borrow() == key)
    }

    /// Returns the element equal to `key`, if the chain holds one.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.elements.iter().find(|&element| element.borrow() == key)
    }

    /// Removes and returns the element equal to `key`.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key)
            .map(|index| self.elements.swap_remove(index))
    }

    /// Swaps `element` with the stored equal element, if there is one.
    ///
    /// Returns `Err(element)` untouched when no equal element is stored.
    pub(crate) fn replace(&mut self, element: T) -> Result<T, T>
    where
        T: Eq,
    {
        match self.position(&element) {
            Some(index) => Ok(std::mem::replace(&mut self.elements[index], element)),
            None => Err(element),
        }
    }
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
