use log::{debug, trace};

use crate::{HeapError, Iter, MaxHeap};

/// Largest number of slots `BoundedMaxHeap::new` reserves eagerly.
pub const MAX_PREALLOC: usize = 1024;

/// A max-heap that refuses inserts once it holds `capacity` elements.
///
/// At most [`MAX_PREALLOC`] slots are reserved up front. Past that the backing
/// store grows like any `Vec`, up to `capacity`.
#[derive(Clone, Debug)]
pub struct BoundedMaxHeap<T: Ord> {
    heap: MaxHeap<T>,
    capacity: usize,
}

impl<T: Ord> BoundedMaxHeap<T> {
    /// Fails with [`HeapError::InvalidCapacity`] if `capacity < 2`.
    pub fn new(capacity: usize) -> Result<Self, HeapError> {
        if capacity < 2 {
            return Err(HeapError::InvalidCapacity { capacity });
        }
        debug!("bounded heap created with capacity {}", capacity);
        Ok(Self {
            heap: MaxHeap::with_capacity(capacity.min(MAX_PREALLOC)),
            capacity,
        })
    }

    /// Builds a heap from `iter`, failing as soon as it yields more than
    /// `capacity` values.
    pub fn try_from_iter<I>(capacity: usize, iter: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Self::new(capacity)?;
        for value in iter {
            heap.insert(value)?;
        }
        Ok(heap)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.capacity
    }

    /// O(log n). On [`HeapError::CapacityExceeded`] the heap is untouched and
    /// `value` is dropped.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.is_full() {
            trace!("insert rejected, heap is at capacity {}", self.capacity);
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.heap.insert(value);
        Ok(())
    }

    pub fn get_max(&self) -> Result<&T, HeapError> {
        self.heap.get_max()
    }

    pub fn extract_max(&mut self) -> Result<T, HeapError> {
        self.heap.extract_max()
    }

    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// Iterates in backing-store order, root first. Only the first element is
    /// guaranteed to be the maximum.
    pub fn iter(&self) -> Iter<'_, T> {
        self.heap.iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a BoundedMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
