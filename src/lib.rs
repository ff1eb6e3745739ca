//! This library offers lazily evaluated elementwise expressions over flat tensors.
//!
//! An expression is built from leaves and binary nodes and is only evaluated when it is
//! assigned to a leaf. Assignment walks the whole tree once per output index, so a chain
//! like `a = b / max(c, b)` never materializes `max(c, b)` into a temporary buffer.
//!
//! Leaves:
//!
//! - `Tensor`: A heap allocated, reshapeable tensor.
//!     - Ownership: The buffer is owned by the `struct`, cloning copies it, `take` moves it out.
//!     - Allocation: Only at construction or when an assignment changes its length.
//! - `TensorView`: A tensor over a caller-owned mutable slice.
//!     - Ownership: The tensor does not own its data, it borrows it for the lifetime `'a`.
//!     - Allocation: None, it just holds the slice.
//! - `ArrTensor`: Statically sized arrays build the foundation for shape and data memory.
//!     - Ownership: The entire tensor is owned by the `struct`.
//!     - Allocation: None, it lives on the stack.
//!
//! Nodes are built with [`compose`] (or the named shortcuts and the arithmetic operators)
//! and are plain stack values: building and evaluating them allocates nothing.
//!
//! ```rust
//! use tensor_expr::op::{Div, Maximum};
//! use tensor_expr::{compose, Tensor, TensorOps};
//!
//! let b = Tensor::from_slice(&[2.0f32, 3.0, 4.0]);
//! let c = Tensor::from_slice(&[3.0f32, 4.0, 5.0]);
//! let mut a = Tensor::new(&[3]);
//!
//! a.assign(compose::<Div, _, _>(&b, compose::<Maximum, _, _>(&c, &b)));
//! assert_eq!(a.data(), [2.0f32 / 3.0, 3.0 / 4.0, 4.0 / 5.0]);
//! ```
//!
//! Note: evaluation is unchecked by default. Every leaf in an expression must be at least
//! as long as the target; use `TensorOps::try_assign` for a checked assignment.

#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![forbid(clippy::nursery)]
#![forbid(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::many_single_char_names)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

mod internal;

pub use internal::array::ArrTensor;
pub use internal::error::ShapeError;
pub use internal::expr::{compose, div, maximum, minimum, minus, mul, plus, BinaryExpr};
pub use internal::op;
pub use internal::views::TensorView;
pub use internal::Expr;
pub use internal::TensorOps;

#[cfg(feature = "alloc")]
pub use internal::dynamic::Tensor;
#[cfg(feature = "alloc")]
pub use internal::error::TensorError;

#[cfg(feature = "parallel")]
pub use internal::eval::ParallelConfig;
