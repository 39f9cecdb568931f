
use rand::{rngs::StdRng, Rng};
use rustc_hash::FxHashMap;

use crate::prelude::*;

// Evaluation and differentiation tests

#[test]
fn test_square_by_multiplication() {
    let x = ExpressionTreeNode::variable("x");
    let tree = x.clone() * x;
    let vars = bindings(&[("x", 3.0)]);

    assert_close(tree.evaluate(&vars).unwrap(), 9.0);
    assert_close(tree.differentiate("x").evaluate(&vars).unwrap(), 6.0);
}

#[test]
fn test_sin_at_zero() {
    let tree = ExpressionTreeNode::variable("x").sin();
    let vars = bindings(&[("x", 0.0)]);

    assert_close(tree.evaluate(&vars).unwrap(), 0.0);
    assert_close(tree.differentiate("x").evaluate(&vars).unwrap(), 1.0);
}

#[test]
fn test_divide_by_zero_is_infinite() {
    let tree = ExpressionTreeNode::constant(1.0) / ExpressionTreeNode::variable("x");
    let value = tree.evaluate(&bindings(&[("x", 0.0)])).unwrap();
    assert!(value.is_infinite() && value > 0.0, "{value} is not +inf");
}

#[test]
fn test_domain_errors_propagate_as_nan() {
    let x = ExpressionTreeNode::variable("x");
    let vars = bindings(&[("x", -1.0)]);
    assert!(x.clone().log().evaluate(&vars).unwrap().is_nan());
    assert!(x.clone().sqrt().evaluate(&vars).unwrap().is_nan());
    assert!((x * 2.0).asin().evaluate(&vars).unwrap().is_nan());
}

#[test]
fn test_undefined_variable() {
    let tree = ExpressionTreeNode::variable("x") + ExpressionTreeNode::variable("y");
    assert_eq!(
        tree.evaluate(&bindings(&[("x", 1.0)])),
        Err(ExpressionError::UndefinedVariable("y".to_string()))
    );
}

/// Build an owned set of bindings
pub fn bindings(values: &[(&str, f64)]) -> FxHashMap<String, f64> {
    values.iter().map(|(n, v)| (n.to_string(), *v)).collect()
}

/// Ensure two numbers are nearly equal
pub fn assert_close(a: f64, b: f64) {
    assert_close_precision(a, b, 9);
}

/// Ensure two numbers are nearly equal to a decimal place, relative to their magnitude
pub fn assert_close_precision(a: f64, b: f64, precision: u8) {
    let tolerance = f64::powf(10., -(precision as f64)) * b.abs().max(1.0);
    if (a - b).abs() > tolerance {
        panic!("{a} is not close to {b}, distance: {}", (a - b).abs());
    }
}

/// Central finite difference estimate of d(tree)/d(variable)
pub fn finite_difference(
    tree: &ExpressionTreeNode,
    vars: &FxHashMap<String, f64>,
    variable: &str,
) -> f64 {
    let h = 1e-5;
    let mut shifted = vars.clone();
    let at = vars[variable];
    shifted.insert(variable.to_string(), at + h);
    let upper = tree.evaluate(&shifted).unwrap();
    shifted.insert(variable.to_string(), at - h);
    let lower = tree.evaluate(&shifted).unwrap();
    (upper - lower) / (2.0 * h)
}

/// Random tree over `x` and `y` using add, multiply, divide, sin, exp and power, with every
/// intermediate value kept finite for inputs in [0.5, 1.5].
pub fn random_tree(rng: &mut StdRng, depth: usize) -> ExpressionTreeNode {
    if depth == 0 {
        return match rng.gen_range(0..3) {
            0 => ExpressionTreeNode::variable("x"),
            1 => ExpressionTreeNode::variable("y"),
            _ => ExpressionTreeNode::constant(rng.gen_range(0.5..2.0)),
        };
    }
    let choice = rng.gen_range(0..6);
    let mut sub = || random_tree(rng, depth - 1);
    // exp(sin(t)) lies in [1/e, e], a safe denominator and power base
    let bounded = |t: ExpressionTreeNode| t.sin().exp();
    match choice {
        0 => sub() + sub(),
        1 => sub() * sub(),
        2 => sub() / bounded(sub()),
        3 => sub().sin(),
        4 => bounded(sub()),
        _ => bounded(sub()).pow(sub().sin()),
    }
}
