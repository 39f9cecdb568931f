//! Mathematical expressions for user supplied energy functions.
//!
//! An expression is a tree of [`ExpressionTreeNode`]s, each holding one [`Operation`]. Trees are
//! evaluated against a set of variable [`Bindings`] and can be differentiated symbolically to get
//! a new tree for the partial derivative with respect to any variable.

mod bindings;
mod custom;
mod error;
mod hl_ops;
mod node;
mod operation;
mod print;

pub use bindings::Bindings;
pub use custom::{Custom, CustomFunction};
pub use error::ExpressionError;
pub use node::{ExpressionTreeNode, DEFAULT_MAX_DEPTH};
pub use operation::{Operation, OperationId};

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::bindings::*;
    pub use crate::custom::*;
    pub use crate::error::*;
    pub use crate::node::*;
    pub use crate::operation::*;
}
