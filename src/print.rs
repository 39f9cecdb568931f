use std::fmt::{Debug, Display, Formatter, Result};

use itertools::Itertools;

use crate::{node::ExpressionTreeNode, operation::Operation};

impl Debug for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Operation::Custom(c) if c.is_derivative() => write!(
                f,
                "{}'[{}]",
                c.name(),
                c.derivative_order().iter().join(",")
            ),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{self:?}")
    }
}

impl Debug for ExpressionTreeNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let children = self.children();
        match self.operation() {
            Operation::Constant(_) | Operation::Variable(_) => write!(f, "{}", self.operation()),
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power => write!(
                f,
                "({:?}{}{:?})",
                children[0],
                self.operation(),
                children[1]
            ),
            op => write!(f, "{op}({:?})", children.iter().format(", ")),
        }
    }
}

impl Display for ExpressionTreeNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{self:?}")
    }
}
