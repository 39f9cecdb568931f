use std::borrow::Cow;

use strum::{EnumCount, EnumDiscriminants, EnumIter, IntoEnumIterator};

use crate::{bindings::Bindings, custom::Custom, error::ExpressionError, node::ExpressionTreeNode};

/// A single step in evaluating an expression: a constant, a variable, an operator or a function.
///
/// Every case takes a fixed number of arguments (see [`Operation::num_arguments`]) and produces one value.
/// `Custom` is the only open case, wrapping a user supplied [`crate::CustomFunction`].
#[derive(Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(OperationId), derive(Hash, PartialOrd, Ord, EnumIter, EnumCount))]
pub enum Operation {
    Constant(f64),
    Variable(String),
    Custom(Custom),
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Negate,
    Sqrt,
    Exp,
    Log,
    Sin,
    Cos,
    Sec,
    Csc,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Square,
    Cube,
    Reciprocal,
    Increment,
    Decrement,
}

impl Operation {
    pub fn variable(name: impl Into<String>) -> Self {
        Operation::Variable(name.into())
    }

    /// Display name, e.g. `+`, `sqrt`, a variable's name or a custom function's name
    pub fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            Operation::Constant(v) => return Cow::Owned(v.to_string()),
            Operation::Variable(name) => name.as_str(),
            Operation::Custom(c) => c.name(),
            Operation::Add => "+",
            Operation::Subtract | Operation::Negate => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
            Operation::Sqrt => "sqrt",
            Operation::Exp => "exp",
            Operation::Log => "log",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Sec => "sec",
            Operation::Csc => "csc",
            Operation::Tan => "tan",
            Operation::Cot => "cot",
            Operation::Asin => "asin",
            Operation::Acos => "acos",
            Operation::Atan => "atan",
            Operation::Square => "square",
            Operation::Cube => "cube",
            Operation::Reciprocal => "recip",
            Operation::Increment => "increment",
            Operation::Decrement => "decrement",
        })
    }

    /// Discriminant identifying the kind of operation, for switching over trees
    pub fn id(&self) -> OperationId {
        self.into()
    }

    /// Number of children a node holding this operation must have
    pub fn num_arguments(&self) -> usize {
        match self {
            Operation::Constant(_) | Operation::Variable(_) => 0,
            Operation::Custom(c) => c.num_arguments(),
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => 2,
            _ => 1,
        }
    }

    /// Whether the arguments can be swapped without changing the result
    pub fn is_symmetric(&self) -> bool {
        matches!(self, Operation::Add | Operation::Multiply)
    }

    /// The value of a `Constant`
    pub fn value(&self) -> Option<f64> {
        match self {
            Operation::Constant(v) => Some(*v),
            _ => None,
        }
    }

    /// The name of a `Variable`
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Operation::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Perform the computation. `args` must hold exactly [`Operation::num_arguments`] values.
    ///
    /// Domain problems (division by zero, log of a negative) produce inf / NaN rather than errors.
    /// The only failure is a `Variable` missing from `bindings`.
    pub fn evaluate<B: Bindings + ?Sized>(
        &self,
        args: &[f64],
        bindings: &B,
    ) -> Result<f64, ExpressionError> {
        debug_assert_eq!(args.len(), self.num_arguments());
        Ok(match self {
            Operation::Constant(v) => *v,
            Operation::Variable(name) => bindings
                .get(name)
                .ok_or_else(|| ExpressionError::UndefinedVariable(name.clone()))?,
            Operation::Custom(c) => c.evaluate(args),
            Operation::Add => args[0] + args[1],
            Operation::Subtract => args[0] - args[1],
            Operation::Multiply => args[0] * args[1],
            Operation::Divide => args[0] / args[1],
            Operation::Power => args[0].powf(args[1]),
            Operation::Negate => -args[0],
            Operation::Sqrt => args[0].sqrt(),
            Operation::Exp => args[0].exp(),
            Operation::Log => args[0].ln(),
            Operation::Sin => args[0].sin(),
            Operation::Cos => args[0].cos(),
            Operation::Sec => 1.0 / args[0].cos(),
            Operation::Csc => 1.0 / args[0].sin(),
            Operation::Tan => args[0].tan(),
            Operation::Cot => 1.0 / args[0].tan(),
            Operation::Asin => args[0].asin(),
            Operation::Acos => args[0].acos(),
            Operation::Atan => args[0].atan(),
            Operation::Square => args[0] * args[0],
            Operation::Cube => args[0] * args[0] * args[0],
            Operation::Reciprocal => 1.0 / args[0],
            Operation::Increment => args[0] + 1.0,
            Operation::Decrement => args[0] - 1.0,
        })
    }

    /// Build the derivative of this operation applied to `children`, given the children's own
    /// derivatives `child_derivs` with respect to `variable`.
    ///
    /// Nothing is evaluated and the result is not simplified, so it may contain terms like `0 * x`.
    pub fn differentiate(
        &self,
        children: &[ExpressionTreeNode],
        child_derivs: &[ExpressionTreeNode],
        variable: &str,
    ) -> ExpressionTreeNode {
        debug_assert_eq!(children.len(), self.num_arguments());
        debug_assert_eq!(child_derivs.len(), children.len());
        let a = || children[0].clone();
        let b = || children[1].clone();
        let d0 = || child_derivs[0].clone();
        let d1 = || child_derivs[1].clone();
        match self {
            Operation::Constant(_) => ExpressionTreeNode::constant(0.0),
            Operation::Variable(name) => {
                ExpressionTreeNode::constant(if name == variable { 1.0 } else { 0.0 })
            }
            Operation::Custom(c) => {
                // Multivariate chain rule: sum_i df/da_i * da_i/dx
                let partial = |i: usize| {
                    ExpressionTreeNode::new(
                        Operation::Custom(c.derivative(i)),
                        children.to_vec(),
                    ) * child_derivs[i].clone()
                };
                (0..children.len())
                    .map(partial)
                    .reduce(|acc, term| acc + term)
                    .unwrap_or_else(|| ExpressionTreeNode::constant(0.0))
            }
            Operation::Add => d0() + d1(),
            Operation::Subtract => d0() - d1(),
            Operation::Multiply => d0() * b() + a() * d1(),
            Operation::Divide => (d0() * b() - a() * d1()) / b().square(),
            Operation::Power => {
                // b * a^(b-1) * da, plus ln(a) * a^b * db when the exponent depends on the variable
                let power_rule = b() * a().pow(b() - 1.0) * d0();
                if !children[1].contains_variable(variable) {
                    power_rule
                } else {
                    power_rule + a().log() * a().pow(b()) * d1()
                }
            }
            Operation::Negate => -d0(),
            Operation::Sqrt => d0() / (2.0 * a().sqrt()),
            Operation::Exp => a().exp() * d0(),
            Operation::Log => d0() / a(),
            Operation::Sin => a().cos() * d0(),
            Operation::Cos => -a().sin() * d0(),
            Operation::Sec => a().sec() * a().tan() * d0(),
            Operation::Csc => -a().csc() * a().cot() * d0(),
            Operation::Tan => a().sec().square() * d0(),
            Operation::Cot => -a().csc().square() * d0(),
            Operation::Asin => d0() / (1.0 - a().square()).sqrt(),
            Operation::Acos => -(d0() / (1.0 - a().square()).sqrt()),
            Operation::Atan => d0() / (1.0 + a().square()),
            Operation::Square => 2.0 * a() * d0(),
            Operation::Cube => 3.0 * a().square() * d0(),
            Operation::Reciprocal => -(d0() / a().square()),
            Operation::Increment | Operation::Decrement => d0(),
        }
    }
}

impl OperationId {
    /// Every builtin and the custom discriminant, in catalogue order
    pub fn all() -> impl Iterator<Item = OperationId> {
        <OperationId as IntoEnumIterator>::iter()
    }
}
