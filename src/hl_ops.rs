use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{custom::Custom, node::ExpressionTreeNode, operation::Operation};

impl ExpressionTreeNode {
    /// Raise to a power
    pub fn pow<E: Into<ExpressionTreeNode>>(self, exponent: E) -> ExpressionTreeNode {
        ExpressionTreeNode::binary(Operation::Power, self, exponent.into())
    }

    pub fn sqrt(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Sqrt, self)
    }

    /// Natural exp
    pub fn exp(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Exp, self)
    }

    /// Natural log
    pub fn log(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Log, self)
    }

    pub fn sin(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Sin, self)
    }

    pub fn cos(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Cos, self)
    }

    pub fn sec(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Sec, self)
    }

    pub fn csc(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Csc, self)
    }

    pub fn tan(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Tan, self)
    }

    pub fn cot(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Cot, self)
    }

    pub fn asin(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Asin, self)
    }

    pub fn acos(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Acos, self)
    }

    pub fn atan(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Atan, self)
    }

    pub fn square(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Square, self)
    }

    pub fn cube(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Cube, self)
    }

    /// 1 / x
    pub fn recip(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Reciprocal, self)
    }

    /// x + 1
    pub fn increment(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Increment, self)
    }

    /// x - 1
    pub fn decrement(self) -> ExpressionTreeNode {
        ExpressionTreeNode::unary(Operation::Decrement, self)
    }

    /// Apply a custom function to a list of arguments
    pub fn custom(function: Custom, args: Vec<ExpressionTreeNode>) -> ExpressionTreeNode {
        ExpressionTreeNode::new(Operation::Custom(function), args)
    }
}

impl Add for ExpressionTreeNode {
    type Output = ExpressionTreeNode;

    fn add(self, rhs: ExpressionTreeNode) -> Self::Output {
        ExpressionTreeNode::binary(Operation::Add, self, rhs)
    }
}

impl Sub for ExpressionTreeNode {
    type Output = ExpressionTreeNode;

    fn sub(self, rhs: ExpressionTreeNode) -> Self::Output {
        ExpressionTreeNode::binary(Operation::Subtract, self, rhs)
    }
}

impl Mul for ExpressionTreeNode {
    type Output = ExpressionTreeNode;

    fn mul(self, rhs: ExpressionTreeNode) -> Self::Output {
        ExpressionTreeNode::binary(Operation::Multiply, self, rhs)
    }
}

impl Div for ExpressionTreeNode {
    type Output = ExpressionTreeNode;

    fn div(self, rhs: ExpressionTreeNode) -> Self::Output {
        ExpressionTreeNode::binary(Operation::Divide, self, rhs)
    }
}

impl Neg for ExpressionTreeNode {
    type Output = ExpressionTreeNode;

    fn neg(self) -> Self::Output {
        ExpressionTreeNode::unary(Operation::Negate, self)
    }
}

// Mixing in plain numbers, which become constant leaves
macro_rules! impl_scalar_op {
    ($trait:ident, $fn:ident) => {
        impl $trait<f64> for ExpressionTreeNode {
            type Output = ExpressionTreeNode;

            fn $fn(self, rhs: f64) -> Self::Output {
                $trait::$fn(self, ExpressionTreeNode::constant(rhs))
            }
        }

        impl $trait<ExpressionTreeNode> for f64 {
            type Output = ExpressionTreeNode;

            fn $fn(self, rhs: ExpressionTreeNode) -> Self::Output {
                $trait::$fn(ExpressionTreeNode::constant(self), rhs)
            }
        }
    };
}

impl_scalar_op!(Add, add);
impl_scalar_op!(Sub, sub);
impl_scalar_op!(Mul, mul);
impl_scalar_op!(Div, div);
