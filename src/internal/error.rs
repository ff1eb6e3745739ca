use thiserror::Error;

/// A shape precondition that was violated. The operation that reports it leaves the target
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A checked assignment found a leaf shorter than the target.
    #[error("expression covers {found} elements but the target holds {expected}")]
    LengthMismatch {
        /// Length of the assignment target.
        expected: usize,
        /// Shortest leaf length reachable from the expression.
        found: usize,
    },
    /// A reshape asked for a different number of elements.
    #[error("cannot reshape {from} elements into a shape of {to} elements")]
    SizeMismatch {
        /// Current element count.
        from: usize,
        /// Element count of the requested shape.
        to: usize,
    },
}

/// Failures of the allocating constructors of [`Tensor`](crate::Tensor).
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TensorError {
    /// The buffer could not be reserved.
    #[error("failed to allocate a buffer of {len} elements")]
    Alloc {
        /// Requested element count.
        len: usize,
    },
    /// The requested shape does not fit the data.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The expression reaches no leaf, so there is no length to materialize.
    #[error("expression has no leaf to take a length from")]
    UnknownExtent,
}
