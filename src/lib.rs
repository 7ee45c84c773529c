//! Array-backed max-heaps.
//!
//! [`MaxHeap`] grows without limit, [`BoundedMaxHeap`] rejects inserts once it
//! reaches the capacity it was built with. Both keep their elements in a
//! single `Vec` laid out as a complete binary tree, where the parent of index
//! `i` is `(i - 1) / 2` and every parent is `>=` its children.
//!
//! ```
//! use max_heap::{BoundedMaxHeap, HeapError, MaxHeap};
//!
//! let mut heap = MaxHeap::new();
//! heap.insert(14);
//! heap.insert(15);
//! heap.insert(13);
//! assert_eq!(Ok(15), heap.extract_max());
//! assert_eq!(Ok(&14), heap.get_max());
//!
//! let mut bounded = BoundedMaxHeap::new(2)?;
//! bounded.insert(1)?;
//! bounded.insert(2)?;
//! assert_eq!(Err(HeapError::CapacityExceeded { capacity: 2 }), bounded.insert(3));
//! # Ok::<(), HeapError>(())
//! ```

mod bounded;
mod error;
mod heap;

pub use bounded::{BoundedMaxHeap, MAX_PREALLOC};
pub use error::HeapError;
pub use heap::{Iter, MaxHeap};
