use alloc::{boxed::Box, vec, vec::Vec};
use core::ops::{Index, IndexMut};

use log::debug;

use crate::internal::error::{ShapeError, TensorError};
use crate::internal::{check_reshape, shape_len, Expr, TensorOps};

/// A heap allocated tensor whose length is chosen at runtime.
///
/// In most use cases, this is the best assignment target: the buffer is exclusively owned, cloning
/// copies it, and assigning an expression or a same-length slice writes into the existing buffer
/// without reallocating.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tensor<T> {
    shape: Box<[usize]>,
    data: Vec<T>,
}

impl<T> Tensor<T> {
    /// Allocates a default `Tensor` with the given shape.
    ///
    /// # Panics
    ///
    /// Panics when the product of the dimensions overflows `usize`.
    #[must_use]
    pub fn new(shape: &[usize]) -> Self
    where
        T: Default + Clone,
    {
        let len = shape_len(shape).expect("shape element count overflows usize");
        Self::from_vec(shape, vec![T::default(); len])
    }

    /// Like [`Tensor::new`], but reports a failed allocation instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::Alloc`] when the buffer cannot be reserved, including when the
    /// element count overflows `usize`.
    pub fn try_new(shape: &[usize]) -> Result<Self, TensorError>
    where
        T: Default + Clone,
    {
        let len = shape_len(shape).ok_or(TensorError::Alloc { len: usize::MAX })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| TensorError::Alloc { len })?;
        data.resize(len, T::default());
        Ok(Self {
            shape: shape.into(),
            data,
        })
    }

    /// Allocates a new `Tensor` with the given shape and data.
    ///
    /// # Panics
    ///
    /// This constructor panics when the product of each dimension is not equal to the length of all the data.
    #[must_use]
    pub fn with_data(shape: &[usize], data: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(shape, data.to_vec())
    }

    /// Allocates a new `Tensor` from the given `Vec`.
    ///
    /// # Panics
    ///
    /// If the length of the `Vec` is not equal to the product of each dimension in the shape, this constructor panics.
    #[must_use]
    pub fn from_vec(shape: &[usize], vec: Vec<T>) -> Self {
        assert_eq!(
            shape_len(shape),
            Some(vec.len()),
            "shape and data length mismatch"
        );
        Self {
            shape: shape.into(),
            data: vec,
        }
    }

    /// Checked variant of [`Tensor::from_vec`].
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::Shape`] when the shape does not hold exactly `vec.len()` elements.
    pub fn try_from_vec(shape: &[usize], vec: Vec<T>) -> Result<Self, TensorError> {
        check_reshape(vec.len(), shape)?;
        Ok(Self {
            shape: shape.into(),
            data: vec,
        })
    }

    /// Allocates a one-dimensional `Tensor` holding a copy of `values`.
    ///
    /// ```rust
    /// use tensor_expr::{Tensor, TensorOps};
    ///
    /// let t = Tensor::from_slice(&[1, 2, 3]);
    /// assert_eq!(t.shape(), [3]);
    /// assert_eq!(t[1], 2);
    /// ```
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(&[values.len()], values.to_vec())
    }

    /// Materializes `expr` into a new one-dimensional `Tensor` as long as its shortest leaf.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::UnknownExtent`] when `expr` reaches no leaf and
    /// [`TensorError::Alloc`] when the buffer cannot be reserved.
    pub fn from_expr<E>(expr: E) -> Result<Self, TensorError>
    where
        E: Expr<Elem = T>,
    {
        let len = expr.extent().ok_or(TensorError::UnknownExtent)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| TensorError::Alloc { len })?;
        data.extend((0..len).map(|i| expr.eval(i)));
        Ok(Self {
            shape: Box::new([len]),
            data,
        })
    }

    /// Copies `src` into `self`.
    ///
    /// When the lengths match the existing buffer is reused and only the shape is adopted;
    /// otherwise `self` is reallocated to a copy of `src`.
    pub fn assign_tensor(&mut self, src: &Self)
    where
        T: Clone,
    {
        if self.data.len() == src.data.len() {
            self.data.clone_from_slice(&src.data);
            if self.shape != src.shape {
                self.shape.clone_from(&src.shape);
            }
        } else {
            debug!(
                "reallocating tensor from {} to {} elements",
                self.data.len(),
                src.data.len()
            );
            self.shape.clone_from(&src.shape);
            self.data = src.data.clone();
        }
    }

    /// Replaces the contents with `values`, leaving a one-dimensional tensor.
    ///
    /// The buffer is reused when the length is unchanged and reallocated otherwise.
    ///
    /// ```rust
    /// use tensor_expr::{Tensor, TensorOps};
    ///
    /// let mut t = Tensor::from_slice(&[0, 0, 0]);
    /// let before = t.data().as_ptr();
    /// t.assign_slice(&[4, 5, 6]);
    /// assert_eq!(t.data().as_ptr(), before);
    /// assert_eq!(t.data(), [4, 5, 6]);
    /// ```
    pub fn assign_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        if self.data.len() == values.len() {
            self.data.clone_from_slice(values);
        } else {
            debug!(
                "reallocating tensor from {} to {} elements",
                self.data.len(),
                values.len()
            );
            self.data = values.to_vec();
        }
        if *self.shape != [values.len()] {
            self.shape = Box::new([values.len()]);
        }
    }

    /// Replaces the shape, keeping the data in place.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::SizeMismatch`] and keeps the old shape when `shape` holds a different number of elements.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<(), ShapeError> {
        check_reshape(self.data.len(), shape)?;
        self.shape = shape.into();
        Ok(())
    }

    /// Adopts the shape of `other`, which may hold a different element type.
    ///
    /// # Errors
    ///
    /// Same as [`Tensor::reshape`].
    pub fn reshape_like<U>(&mut self, other: &Tensor<U>) -> Result<(), ShapeError> {
        self.reshape(&other.shape)
    }

    /// Number of dimensions.
    #[must_use]
    pub fn dims(&self) -> usize {
        self.shape.len()
    }

    /// Extent of dimension `axis`, if the tensor has that many dimensions.
    #[must_use]
    pub fn dim(&self, axis: usize) -> Option<usize> {
        self.shape.get(axis).copied()
    }

    /// Product of the dimensions in `start..end`, saturating at `usize::MAX`.
    ///
    /// A shape with a zero dimension holds no elements, so the dimensions around it may multiply
    /// past `usize::MAX`.
    ///
    /// # Panics
    ///
    /// Panics when the range exceeds the number of dimensions.
    #[must_use]
    pub fn size_between(&self, start: usize, end: usize) -> usize {
        shape_len(&self.shape[start..end]).unwrap_or(usize::MAX)
    }

    /// Moves the contents out, leaving an empty, zero-length tensor behind.
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Consumes the tensor and returns its buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for Tensor<T> {
    fn default() -> Self {
        Self {
            shape: Box::new([0]),
            data: Vec::new(),
        }
    }
}

impl<T> From<Vec<T>> for Tensor<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(&[vec.len()], vec)
    }
}

impl<T> TensorOps<T> for Tensor<T> {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn data(&self) -> &[T] {
        &self.data
    }

    fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Copy> Expr for Tensor<T> {
    type Elem = T;

    #[inline]
    fn eval(&self, i: usize) -> T {
        self.data[i]
    }

    fn extent(&self) -> Option<usize> {
        Some(self.data.len())
    }
}

impl<T> Index<usize> for Tensor<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Tensor<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}
