use core::fmt;
use core::marker::PhantomData;

use crate::internal::op::{self, BinaryOp};
use crate::internal::Expr;

/// A lazy node combining two child expressions with the functor `Op`.
///
/// The node stores nothing but its children: leaves are usually captured by reference and
/// nested nodes by value, so a whole tree lives on the stack of the statement that builds it.
/// Build one with [`compose`].
pub struct BinaryExpr<Op, L, R> {
    lhs: L,
    rhs: R,
    op: PhantomData<fn() -> Op>,
}

impl<Op, L, R> BinaryExpr<Op, L, R> {
    /// The left child.
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// The right child.
    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

impl<Op, L, R> Expr for BinaryExpr<Op, L, R>
where
    L: Expr,
    R: Expr<Elem = L::Elem>,
    Op: BinaryOp<L::Elem>,
{
    type Elem = L::Elem;

    #[inline]
    fn eval(&self, i: usize) -> Self::Elem {
        Op::map(self.lhs.eval(i), self.rhs.eval(i))
    }

    fn extent(&self) -> Option<usize> {
        match (self.lhs.extent(), self.rhs.extent()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

impl<Op, L: Clone, R: Clone> Clone for BinaryExpr<Op, L, R> {
    fn clone(&self) -> Self {
        Self {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
            op: PhantomData,
        }
    }
}

impl<Op, L: Copy, R: Copy> Copy for BinaryExpr<Op, L, R> {}

impl<Op, L: fmt::Debug, R: fmt::Debug> fmt::Debug for BinaryExpr<Op, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryExpr")
            .field("op", &core::any::type_name::<Op>())
            .field("lhs", &self.lhs)
            .field("rhs", &self.rhs)
            .finish()
    }
}

/// Builds a node applying `Op` to `lhs` and `rhs`, evaluating nothing.
///
/// Either side may itself be a node returned by an earlier `compose`, so chains of any
/// depth fit in a single statement.
///
/// # Example
///
/// ```rust
/// use tensor_expr::op::{Div, Minimum};
/// use tensor_expr::{compose, Tensor, TensorOps};
///
/// let b = Tensor::from_slice(&[2.0, 3.0, 4.0]);
/// let c = Tensor::from_slice(&[3.0, 4.0, 5.0]);
/// let mut a = Tensor::new(&[3]);
///
/// a.assign(compose::<Div, _, _>(&b, compose::<Minimum, _, _>(&c, &b)));
/// assert_eq!(a.data(), [1.0, 1.0, 1.0]);
/// ```
#[inline]
#[must_use]
pub fn compose<Op, L, R>(lhs: L, rhs: R) -> BinaryExpr<Op, L, R>
where
    L: Expr,
    R: Expr<Elem = L::Elem>,
    Op: BinaryOp<L::Elem>,
{
    BinaryExpr {
        lhs,
        rhs,
        op: PhantomData,
    }
}

macro_rules! shortcut {
    ($(#[$doc:meta])* $name:ident => $op:ty) => {
        $(#[$doc])*
        #[inline]
        #[must_use]
        pub fn $name<L, R>(lhs: L, rhs: R) -> BinaryExpr<$op, L, R>
        where
            L: Expr,
            R: Expr<Elem = L::Elem>,
            $op: BinaryOp<L::Elem>,
        {
            compose::<$op, L, R>(lhs, rhs)
        }
    };
}

shortcut!(
    /// Shorthand for `compose::<op::Plus, _, _>`.
    plus => op::Plus
);
shortcut!(
    /// Shorthand for `compose::<op::Minus, _, _>`.
    minus => op::Minus
);
shortcut!(
    /// Shorthand for `compose::<op::Mul, _, _>`.
    mul => op::Mul
);
shortcut!(
    /// Shorthand for `compose::<op::Div, _, _>`.
    div => op::Div
);
shortcut!(
    /// Shorthand for `compose::<op::Maximum, _, _>`.
    maximum => op::Maximum
);
shortcut!(
    /// Shorthand for `compose::<op::Minimum, _, _>`.
    minimum => op::Minimum
);
