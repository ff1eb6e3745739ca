//! Arithmetic operators on leaf references and nodes.
//!
//! `&a + &b` builds the same node as `compose::<op::Plus, _, _>(&a, &b)`; nothing is evaluated until
//! the result is assigned. `a += expr` folds an expression into `a` in place.

use core::ops;

use crate::internal::eval;
use crate::internal::expr::{compose, BinaryExpr};
use crate::internal::op::{self, BinaryOp};
use crate::internal::{Expr, TensorOps};
use crate::{ArrTensor, TensorView};

#[cfg(feature = "alloc")]
use crate::Tensor;

macro_rules! lazy_operator {
    ($trait:ident, $method:ident, $op:ty, [$($gen:tt)*] $lhs:ty) => {
        impl<$($gen)*, Rhs> ops::$trait<Rhs> for $lhs
        where
            Self: Expr,
            Rhs: Expr<Elem = <Self as Expr>::Elem>,
            $op: BinaryOp<<Self as Expr>::Elem>,
        {
            type Output = BinaryExpr<$op, Self, Rhs>;

            #[inline]
            fn $method(self, rhs: Rhs) -> Self::Output {
                compose::<$op, Self, Rhs>(self, rhs)
            }
        }
    };
}

macro_rules! lazy_operators {
    ([$($gen:tt)*] $lhs:ty) => {
        lazy_operator!(Add, add, op::Plus, [$($gen)*] $lhs);
        lazy_operator!(Sub, sub, op::Minus, [$($gen)*] $lhs);
        lazy_operator!(Mul, mul, op::Mul, [$($gen)*] $lhs);
        lazy_operator!(Div, div, op::Div, [$($gen)*] $lhs);
    };
}

lazy_operators!([Op, L, R] BinaryExpr<Op, L, R>);
lazy_operators!(['a, 'v, T] &'a TensorView<'v, T>);
lazy_operators!(['a, T, const N: usize, const D: usize] &'a ArrTensor<T, N, D>);
#[cfg(feature = "alloc")]
lazy_operators!(['a, T] &'a Tensor<T>);

macro_rules! update_operator {
    ($trait:ident, $method:ident, $op:ty, [$($gen:tt)*] $target:ty) => {
        impl<$($gen)*, E> ops::$trait<E> for $target
        where
            T: Copy,
            E: Expr<Elem = T>,
            $op: BinaryOp<T>,
        {
            fn $method(&mut self, rhs: E) {
                eval::update::<$op, T, E>(self.data_mut(), &rhs);
            }
        }
    };
}

macro_rules! update_operators {
    ([$($gen:tt)*] $target:ty) => {
        update_operator!(AddAssign, add_assign, op::Plus, [$($gen)*] $target);
        update_operator!(SubAssign, sub_assign, op::Minus, [$($gen)*] $target);
        update_operator!(MulAssign, mul_assign, op::Mul, [$($gen)*] $target);
        update_operator!(DivAssign, div_assign, op::Div, [$($gen)*] $target);
    };
}

update_operators!(['v, T] TensorView<'v, T>);
update_operators!([T, const N: usize, const D: usize] ArrTensor<T, N, D>);
#[cfg(feature = "alloc")]
update_operators!([T] Tensor<T>);

#[cfg(test)]
mod tests {
    use crate::{maximum, ArrTensor, Expr, TensorOps, TensorView};

    fn tensor<T, const N: usize>(buf: [T; N]) -> ArrTensor<T, N, 1> {
        ArrTensor::with_data([N], buf)
    }

    #[test]
    fn operators_build_nodes() {
        let a = tensor([1, 2, 3]);
        let b = tensor([4, 5, 6]);
        let e = &a + &b;
        assert_eq!(e.eval(2), 9);

        let mut out = tensor([0; 3]);
        out.assign((&a + &b) * &a - &b / &a);
        assert_eq!(out.data(), [1, 12, 25]);
    }

    #[test]
    fn operators_mix_with_compose() {
        let a = tensor([1.0, 8.0]);
        let b = tensor([4.0, 2.0]);
        let mut out = tensor([0.0; 2]);
        out.assign(&a / maximum(&a, &b));
        assert_eq!(out.data(), [0.25, 1.0]);
    }

    #[test]
    fn compound_assignment_folds_expression() {
        let b = tensor([1, 2, 3]);
        let mut a = tensor([10, 20, 30]);
        a += &b * &b;
        assert_eq!(a.data(), [11, 24, 39]);
        a -= &b;
        assert_eq!(a.data(), [10, 22, 36]);
        a *= &b + &b;
        assert_eq!(a.data(), [20, 88, 216]);
        a /= &b;
        assert_eq!(a.data(), [20, 44, 72]);
    }

    #[test]
    fn operators_on_views() {
        let mut a_buf = [0.0; 3];
        let mut b_buf = [1.0, 2.0, 3.0];
        let mut a = TensorView::new(&mut a_buf);
        let b = TensorView::new(&mut b_buf);
        a.assign(&b + &b);
        a += &b;
        assert_eq!(a.data(), [3.0, 6.0, 9.0]);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn operators_on_tensors() {
        use crate::Tensor;

        let b = Tensor::from_slice(&[2.0, 3.0, 4.0]);
        let c = Tensor::from_slice(&[3.0, 4.0, 5.0]);
        let mut a = Tensor::new(&[3]);
        a.assign(&b * &c - &b);
        assert_eq!(a.data(), [4.0, 9.0, 16.0]);
        a /= &b;
        assert_eq!(a.data(), [2.0, 3.0, 4.0]);
    }
}
