pub mod array;
pub mod error;
pub mod eval;
pub mod expr;
pub mod op;
mod overload;
pub mod views;

#[cfg(feature = "alloc")]
pub mod dynamic;

use error::ShapeError;

#[cfg(feature = "parallel")]
use eval::ParallelConfig;

/// Element count of `shape`, or `None` when the product overflows `usize`.
pub(crate) fn shape_len(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// Checks that `shape` holds exactly `from` elements.
pub(crate) fn check_reshape(from: usize, shape: &[usize]) -> Result<(), ShapeError> {
    match shape_len(shape) {
        Some(to) if to == from => Ok(()),
        to => {
            let to = to.unwrap_or(usize::MAX);
            log::warn!("rejected reshape of {from} elements into {to}");
            Err(ShapeError::SizeMismatch { from, to })
        }
    }
}

/// Anything that can produce a value at a linear index: leaves and composed nodes alike.
///
/// Evaluation is pure: calling `eval` twice with the same index yields the same value and
/// never mutates an operand. No bounds checking is part of the contract, the caller keeps
/// `i` below the length of every leaf reachable from the expression.
pub trait Expr {
    /// The scalar type produced per index.
    type Elem: Copy;

    /// Computes the value at linear index `i`.
    fn eval(&self, i: usize) -> Self::Elem;

    /// The shortest leaf length reachable from this expression, if any leaf is reachable.
    ///
    /// Only the checked assignment consults this, the unchecked fast path never does.
    fn extent(&self) -> Option<usize> {
        None
    }
}

impl<E: Expr + ?Sized> Expr for &E {
    type Elem = E::Elem;

    #[inline]
    fn eval(&self, i: usize) -> Self::Elem {
        (**self).eval(i)
    }

    fn extent(&self) -> Option<usize> {
        (**self).extent()
    }
}

/// Operations every leaf needs: shape, raw data, and being the target of an assignment.
///
/// Assigning an expression is the only place a lazy tree gets evaluated. The loop bound is
/// always the length of the target.
pub trait TensorOps<T> {
    /// Provides the shape of the current tensor as a slice.
    fn shape(&self) -> &[usize];

    /// Provides the data of the current tensor in a slice of a generic `T`.
    fn data(&self) -> &[T];

    /// Provides the data of the current tensor in a mutable slice of a generic `T`.
    fn data_mut(&mut self) -> &mut [T];

    /// Number of elements, the product of the shape.
    fn len(&self) -> usize {
        self.data().len()
    }

    /// Whether the tensor holds no elements at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Evaluates `expr` at every index of `self` and stores the results.
    ///
    /// Unchecked: a leaf inside `expr` shorter than `self` makes the evaluation index past its
    /// end, which panics on the slice access.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tensor_expr::{maximum, ArrTensor, TensorOps};
    ///
    /// let b = ArrTensor::with_data([3], [1, 5, 3]);
    /// let c = ArrTensor::with_data([3], [4, 2, 3]);
    /// let mut a = ArrTensor::<i32, 3, 1>::new([3]);
    ///
    /// a.assign(maximum(&b, &c));
    /// assert_eq!(a.data(), [4, 5, 3]);
    /// ```
    fn assign<E>(&mut self, expr: E)
    where
        E: Expr<Elem = T>,
    {
        eval::materialize(self.data_mut(), &expr);
    }

    /// Checked variant of [`TensorOps::assign`].
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::LengthMismatch`] without writing anything when a leaf reachable
    /// from `expr` is shorter than `self`.
    fn try_assign<E>(&mut self, expr: E) -> Result<(), ShapeError>
    where
        E: Expr<Elem = T>,
    {
        eval::materialize_checked(self.data_mut(), &expr)
    }

    /// Same result as [`TensorOps::assign`], spread over the rayon pool once the target is at
    /// least `config.parallel_threshold` long.
    #[cfg(feature = "parallel")]
    fn par_assign<E>(&mut self, expr: E, config: &ParallelConfig)
    where
        E: Expr<Elem = T> + Sync,
        T: Send,
    {
        eval::materialize_parallel(self.data_mut(), &expr, config);
    }
}
