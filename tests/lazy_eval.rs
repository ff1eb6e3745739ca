#![cfg(feature = "alloc")]

use tensor_expr::op::{Div, Maximum, Minimum};
use tensor_expr::{compose, ArrTensor, Tensor, TensorOps};

fn operands() -> (Tensor<f32>, Tensor<f32>, Tensor<f32>) {
    let a = Tensor::from_slice(&[1.0, 2.0, 3.0]);
    let b = Tensor::from_slice(&[2.0, 3.0, 4.0]);
    let c = Tensor::from_slice(&[3.0, 4.0, 5.0]);
    (a, b, c)
}

#[test]
fn divide_by_maximum() {
    let (mut a, b, c) = operands();

    a.assign(compose::<Div, _, _>(&b, compose::<Maximum, _, _>(&c, &b)));

    for i in 0..3 {
        assert_eq!(a[i], b[i] / c[i].max(b[i]), "mismatch at index {i}");
    }
    assert_eq!(a.data(), [2.0f32 / 3.0, 3.0 / 4.0, 4.0 / 5.0]);
}

#[test]
fn divide_by_minimum() {
    let (mut a, b, c) = operands();

    a.assign(compose::<Div, _, _>(&b, compose::<Minimum, _, _>(&c, &b)));

    assert_eq!(a.data(), [1.0f32, 1.0, 1.0]);
}

#[test]
fn operands_are_left_untouched() {
    let (mut a, b, c) = operands();
    let (b0, c0) = (b.clone(), c.clone());

    a.assign(compose::<Div, _, _>(&b, compose::<Maximum, _, _>(&c, &b)));

    assert_eq!(b, b0);
    assert_eq!(c, c0);
}

#[test]
fn copy_and_move_semantics() {
    let (_, mut b, _) = operands();

    let mut b2 = b.clone();
    b2[0] = 100.0;
    assert_eq!(b[0], 2.0);

    let b3 = b.take();
    assert_eq!(b3.data(), [2.0f32, 3.0, 4.0]);
    assert!(b.is_empty());
    drop(b);
}

#[test]
fn buffer_reuse_follows_length() {
    let (mut a, b, c) = operands();
    let before = a.data().as_ptr();

    a.assign(&b + &c);
    assert_eq!(a.data().as_ptr(), before);
    a.assign_slice(&[7.0, 8.0, 9.0]);
    assert_eq!(a.data().as_ptr(), before);
    a.assign_tensor(&c);
    assert_eq!(a.data().as_ptr(), before);

    a.assign_slice(&[1.0; 64]);
    assert_eq!(a.len(), 64);
    assert_ne!(a.data().as_ptr(), before);
}

#[test]
fn deep_chain_in_one_statement() {
    let (mut a, b, c) = operands();

    a.assign(&b + &c * (&b - &c) / compose::<Maximum, _, _>(&b, &c));

    for i in 0..3 {
        let expected = b[i] + c[i] * (b[i] - c[i]) / b[i].max(c[i]);
        assert_eq!(a[i], expected);
    }
}

#[test]
fn checked_assignment_reports_short_leaf() {
    let mut a = Tensor::<f32>::new(&[4]);
    let (_, b, c) = operands();

    let err = a.try_assign(&b + &c).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expression covers 3 elements but the target holds 4"
    );
    assert_eq!(a.data(), [0.0f32; 4]);
}

#[test]
fn arr_and_dyn_leaves_agree() {
    let shape = [2, 2];
    let data = [1.0, 2.0, 3.0, 4.0];

    let arr_tensor = ArrTensor::with_data(shape, data);
    let dyn_tensor: Tensor<f64> = Tensor::with_data(&shape, &data);

    let mut arr_out = ArrTensor::<f64, 4, 2>::new(shape);
    let mut dyn_out = Tensor::<f64>::new(&shape);

    arr_out.assign(&arr_tensor * &arr_tensor);
    dyn_out.assign(&dyn_tensor * &dyn_tensor);

    assert_eq!(arr_out.shape(), dyn_out.shape());
    assert_eq!(arr_out.data(), dyn_out.data());

    // mixing leaf kinds inside one expression
    dyn_out.assign(&dyn_tensor + &arr_tensor);
    assert_eq!(dyn_out.data(), [2.0, 4.0, 6.0, 8.0]);
}
