#![cfg(feature = "alloc")]

use proptest::prelude::*;
use tensor_expr::op::{BinaryOp, Div, Maximum, Minimum, Minus, Mul, Plus};
use tensor_expr::{compose, div, maximum, minimum, Expr, Tensor, TensorOps};

// Pairs of equally long vectors of finite floats
fn operands() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..64).prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0e6f64..1.0e6, n),
            prop::collection::vec(-1.0e6f64..1.0e6, n),
        )
    })
}

fn check_elementwise<Op: BinaryOp<f64>>(b: &[f64], c: &[f64]) -> Result<(), TestCaseError> {
    let tb = Tensor::from_slice(b);
    let tc = Tensor::from_slice(c);
    let mut a = Tensor::<f64>::new(&[b.len()]);
    a.assign(compose::<Op, _, _>(&tb, &tc));
    for i in 0..b.len() {
        prop_assert_eq!(a[i].to_bits(), Op::map(b[i], c[i]).to_bits());
    }
    Ok(())
}

proptest! {
    #[test]
    fn evaluation_is_pure((b, c) in operands()) {
        let tb = Tensor::from_slice(&b);
        let tc = Tensor::from_slice(&c);
        let e = div(&tb, maximum(&tc, &tb));
        for i in 0..b.len() {
            prop_assert_eq!(e.eval(i).to_bits(), e.eval(i).to_bits());
        }
        prop_assert_eq!(tb.data(), &b[..]);
        prop_assert_eq!(tc.data(), &c[..]);
    }

    #[test]
    fn elementwise_matches_functor((b, c) in operands()) {
        check_elementwise::<Plus>(&b, &c)?;
        check_elementwise::<Minus>(&b, &c)?;
        check_elementwise::<Mul>(&b, &c)?;
        check_elementwise::<Div>(&b, &c)?;
        check_elementwise::<Maximum>(&b, &c)?;
        check_elementwise::<Minimum>(&b, &c)?;
    }

    #[test]
    fn nested_matches_scalar_formula((b, c) in operands()) {
        let tb = Tensor::from_slice(&b);
        let tc = Tensor::from_slice(&c);
        let mut a = Tensor::<f64>::new(&[b.len()]);

        a.assign(div(&tb, maximum(&tc, &tb)));
        for i in 0..b.len() {
            let m = if c[i] > b[i] { c[i] } else { b[i] };
            prop_assert_eq!(a[i].to_bits(), (b[i] / m).to_bits());
        }

        a.assign(div(&tb, minimum(&tc, &tb)));
        for i in 0..b.len() {
            let m = if c[i] > b[i] { b[i] } else { c[i] };
            prop_assert_eq!(a[i].to_bits(), (b[i] / m).to_bits());
        }
    }

    #[test]
    fn ties_pick_by_position(x in any::<i64>()) {
        prop_assert_eq!(Maximum::map(x, x), x);
        prop_assert_eq!(Minimum::map(x, x), x);
    }
}

#[test]
fn maximum_tie_returns_second_operand() {
    // Equal under PartialOrd, distinguishable by identity.
    let max = <Maximum as BinaryOp<f32>>::map(-0.0, 0.0);
    assert!(max.is_sign_positive());
    let min = <Minimum as BinaryOp<f32>>::map(-0.0, 0.0);
    assert!(min.is_sign_negative());
}
