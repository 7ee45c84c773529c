use thiserror::Error;

/// Errors returned by heap operations.
///
/// Every failing call leaves the heap exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A bounded heap must hold at least two elements.
    #[error("invalid capacity {capacity}: a bounded heap needs a capacity of at least 2")]
    InvalidCapacity { capacity: usize },

    /// `get_max`/`extract_max` on a heap with no elements.
    #[error("heap is empty")]
    Empty,

    /// `insert` into a bounded heap already holding `capacity` elements.
    #[error("heap is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
}
