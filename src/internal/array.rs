use crate::internal::error::ShapeError;
use crate::internal::{check_reshape, shape_len, Expr, TensorOps};
use core::ops::{Index, IndexMut};

/// A tensor made up of statically sized arrays.
///
/// Often the best choice for embedded work because it doesn't use any OS-dependent features like heap allocators.
/// Both the data and the shape live inline, so assigning an expression to an `ArrTensor` never touches the heap.
///
/// When the length is only known at runtime, use `Tensor` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArrTensor<T, const N: usize, const D: usize> {
    shape: [usize; D],
    data: [T; N],
}

impl<T, const N: usize, const D: usize> ArrTensor<T, N, D> {
    /// Instantiates a new Tensor which owns its data without allocating it.
    ///
    /// # Panics
    ///
    /// This constructor panics when the product of each dimension is not equal to the length of all the data.
    #[must_use]
    pub fn new(shape: [usize; D]) -> Self
    where
        T: Default + Copy,
    {
        Self::with_data(shape, [T::default(); N])
    }

    /// Instantiates a new Tensor with data.
    ///
    /// # Panics
    ///
    /// This constructor panics when the product of each dimension is not equal to the length of all the data.
    ///
    /// Example:
    ///
    /// ```rust
    /// use tensor_expr::{ArrTensor, TensorOps};
    ///
    /// let b = ArrTensor::with_data([2, 2], [1.0, 2.0, 3.0, 4.0]);
    /// let mut a = ArrTensor::<f64, 4, 2>::new([2, 2]);
    ///
    /// a.assign(&b * &b);
    /// assert_eq!(a[3], 16.0);
    /// ```
    #[must_use]
    pub fn with_data(shape: [usize; D], data: [T; N]) -> Self {
        assert_eq!(shape_len(&shape), Some(N), "shape and data length mismatch");
        Self { shape, data }
    }

    /// Replaces the shape, keeping the data in place.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::SizeMismatch`] and keeps the old shape when `shape` does not hold exactly `N` elements.
    pub fn reshape(&mut self, shape: [usize; D]) -> Result<(), ShapeError> {
        check_reshape(N, &shape)?;
        self.shape = shape;
        Ok(())
    }

    /// Consumes the tensor and returns its array.
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T, const N: usize, const D: usize> TensorOps<T> for ArrTensor<T, N, D> {
    fn data(&self) -> &[T] {
        &self.data
    }

    fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T: Copy, const N: usize, const D: usize> Expr for ArrTensor<T, N, D> {
    type Elem = T;

    #[inline]
    fn eval(&self, i: usize) -> T {
        self.data[i]
    }

    fn extent(&self) -> Option<usize> {
        Some(N)
    }
}

impl<T, const N: usize, const D: usize> Index<usize> for ArrTensor<T, N, D> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize, const D: usize> IndexMut<usize> for ArrTensor<T, N, D> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}
