use crate::internal::error::ShapeError;
use crate::internal::{check_reshape, shape_len, Expr, TensorOps};
use core::cmp::Ordering;
use core::ops::{Index, IndexMut};

/// A tensor-like structure that owns no data and holds only slices.
///
/// The data is `&'a mut [T]`: the view can be read as a leaf and written as an assignment target,
/// while the buffer stays with the caller. A view built with [`TensorView::new`] is one-dimensional;
/// [`TensorView::with_data`] borrows an explicit shape as well.
///
/// Views compare by `shape()` and then `data()`, however the shape was supplied.
#[derive(Debug)]
pub struct TensorView<'a, T> {
    dims: Option<&'a [usize]>,
    flat: [usize; 1],
    data: &'a mut [T],
}

impl<'a, T> TensorView<'a, T> {
    /// Wraps a mutable buffer as a flat tensor of `data.len()` elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tensor_expr::{div, maximum, TensorOps, TensorView};
    ///
    /// let mut sa = [1.0f32, 2.0, 3.0];
    /// let mut sb = [2.0f32, 3.0, 4.0];
    /// let mut sc = [3.0f32, 4.0, 5.0];
    /// let mut a = TensorView::new(&mut sa);
    /// let b = TensorView::new(&mut sb);
    /// let c = TensorView::new(&mut sc);
    ///
    /// a.assign(div(&b, maximum(&c, &b)));
    /// assert_eq!(a[2], 4.0 / 5.0);
    /// ```
    #[must_use]
    pub fn new(data: &'a mut [T]) -> Self {
        Self {
            dims: None,
            flat: [data.len()],
            data,
        }
    }

    /// Constructs a new `TensorView` borrowing mutable data slice with given static shape.
    ///
    /// # Panics
    ///
    /// This constructor panics when the product of each dimension is not equal to the length of all the data.
    #[must_use]
    pub fn with_data(shape: &'a [usize], data: &'a mut [T]) -> Self {
        assert_eq!(
            shape_len(shape),
            Some(data.len()),
            "shape and data length mismatch"
        );
        Self {
            dims: Some(shape),
            flat: [data.len()],
            data,
        }
    }

    /// Replaces the borrowed shape, keeping the data in place.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::SizeMismatch`] and keeps the old shape when the element counts differ.
    pub fn reshape(&mut self, shape: &'a [usize]) -> Result<(), ShapeError> {
        check_reshape(self.data.len(), shape)?;
        self.dims = Some(shape);
        Ok(())
    }
}

impl<T> TensorOps<T> for TensorView<'_, T> {
    fn data(&self) -> &[T] {
        self.data
    }

    fn data_mut(&mut self) -> &mut [T] {
        self.data
    }

    fn shape(&self) -> &[usize] {
        self.dims.unwrap_or(self.flat.as_slice())
    }
}

impl<T: PartialEq> PartialEq for TensorView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data() == other.data()
    }
}

impl<T: Eq> Eq for TensorView<'_, T> {}

impl<T: PartialOrd> PartialOrd for TensorView<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.shape().cmp(other.shape()) {
            Ordering::Equal => self.data().partial_cmp(other.data()),
            ord => Some(ord),
        }
    }
}

impl<T: Ord> Ord for TensorView<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.shape()
            .cmp(other.shape())
            .then_with(|| self.data().cmp(other.data()))
    }
}

impl<T: Copy> Expr for TensorView<'_, T> {
    type Elem = T;

    #[inline]
    fn eval(&self, i: usize) -> T {
        self.data[i]
    }

    fn extent(&self) -> Option<usize> {
        Some(self.data.len())
    }
}

impl<T> Index<usize> for TensorView<'_, T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for TensorView<'_, T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}
