use std::{fmt, iter::FusedIterator, mem, slice};

use log::debug;

use crate::HeapError;

#[inline]
fn parent(child: usize) -> usize {
    (child - 1) / 2
}

#[inline]
fn left(node: usize) -> usize {
    2 * node + 1
}

#[inline]
fn right(node: usize) -> usize {
    2 * node + 2
}

/// Moves `data[node]` towards the root while its parent is strictly smaller.
///
/// O(log n)
pub(crate) fn sift_up<T: Ord>(data: &mut [T], mut node: usize) {
    while node > 0 {
        let parent = parent(node);
        if data[parent] >= data[node] {
            break;
        }
        data.swap(parent, node);
        node = parent;
    }
}

/// Sinks `data[start]` until it is the greatest of itself and its children.
/// Only indices below `end` are treated as part of the heap.
///
/// O(log n)
pub(crate) fn sift_down<T: Ord>(data: &mut [T], start: usize, end: usize) {
    let mut i = start;
    loop {
        let mut largest = i;
        let (l, r) = (left(i), right(i));
        if l < end && data[largest] < data[l] {
            largest = l;
        }
        if r < end && data[largest] < data[r] {
            largest = r;
        }
        if largest == i {
            return;
        }
        data.swap(largest, i);
        i = largest;
    }
}

/// Bottom-up heapify. O(n)
fn build_max_heap<T: Ord>(data: &mut [T]) {
    let end = data.len();
    for i in (0..end / 2).rev() {
        sift_down(data, i, end);
    }
}

#[cfg(test)]
pub(crate) fn is_heap<T: Ord>(data: &[T]) -> bool {
    (1..data.len()).all(|i| data[parent(i)] >= data[i])
}

/// An unbounded max-heap backed by a single `Vec`.
///
/// The greatest element always sits at index 0. Equal elements come out in
/// no particular order.
#[derive(Clone)]
pub struct MaxHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Preallocates room for `capacity` elements. This does not bound the heap.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// O(log n)
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        sift_up(&mut self.data, last);
    }

    /// Returns the greatest element without removing it. O(1)
    pub fn get_max(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the greatest element. O(log n)
    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        let mut max = self.data.pop().ok_or(HeapError::Empty)?;
        if let Some(root) = self.data.first_mut() {
            mem::swap(root, &mut max);
            let end = self.data.len();
            sift_down(&mut self.data, 0, end);
        }
        Ok(max)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Live elements in backing-store order. Only the first one is guaranteed
    /// to be the maximum.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates in backing-store order, not in sorted order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Consumes the heap, returning the backing store as is.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order.
    ///
    /// O(n log n), in place.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let l = self.data.len();
        for end in (1..l).rev() {
            self.data.swap(0, end);
            sift_down(&mut self.data, 0, end);
        }
        self.data
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(mut data: Vec<T>) -> Self {
        build_max_heap(&mut data);
        debug!("heapified {} elements", data.len());
        Self { data }
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a MaxHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a heap in backing-store order.
///
/// Holding one borrows the heap, so it cannot be mutated mid-iteration.
pub struct Iter<'a, T: 'a> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner.as_slice()).finish()
    }
}
