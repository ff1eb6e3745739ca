//! Stateless pairwise functions used as the combining rule of a [`BinaryExpr`](crate::BinaryExpr).
//!
//! A functor is a unit type; it is never instantiated, only named as a type parameter.
//! New operations need no registration, implementing [`BinaryOp`] is enough:
//!
//! ```rust
//! use tensor_expr::op::BinaryOp;
//! use tensor_expr::{compose, Tensor, TensorOps};
//!
//! struct Midpoint;
//!
//! impl BinaryOp<f64> for Midpoint {
//!     fn map(a: f64, b: f64) -> f64 {
//!         (a + b) / 2.0
//!     }
//! }
//!
//! let x = Tensor::from_slice(&[3.0, 5.0]);
//! let y = Tensor::from_slice(&[4.0, 12.0]);
//! let mut out = Tensor::new(&[2]);
//! out.assign(compose::<Midpoint, _, _>(&x, &y));
//! assert_eq!(out.data(), [3.5, 8.5]);
//! ```

use core::ops;

/// Maps two scalar operands to one scalar result, purely.
pub trait BinaryOp<T> {
    /// Combines `a` and `b`.
    fn map(a: T, b: T) -> T;
}

/// `a + b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Plus;

/// `a - b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Minus;

/// `a * b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Mul;

/// `a / b`, with whatever the element type does for a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Div;

/// The larger operand; ties yield `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Maximum;

/// The smaller operand; ties yield `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Minimum;

impl<T: ops::Add<Output = T>> BinaryOp<T> for Plus {
    #[inline]
    fn map(a: T, b: T) -> T {
        a + b
    }
}

impl<T: ops::Sub<Output = T>> BinaryOp<T> for Minus {
    #[inline]
    fn map(a: T, b: T) -> T {
        a - b
    }
}

impl<T: ops::Mul<Output = T>> BinaryOp<T> for Mul {
    #[inline]
    fn map(a: T, b: T) -> T {
        a * b
    }
}

impl<T: ops::Div<Output = T>> BinaryOp<T> for Div {
    #[inline]
    fn map(a: T, b: T) -> T {
        a / b
    }
}

impl<T: PartialOrd> BinaryOp<T> for Maximum {
    #[inline]
    fn map(a: T, b: T) -> T {
        if a > b {
            a
        } else {
            b
        }
    }
}

impl<T: PartialOrd> BinaryOp<T> for Minimum {
    #[inline]
    fn map(a: T, b: T) -> T {
        if a > b {
            b
        } else {
            a
        }
    }
}
