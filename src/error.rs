use thiserror::Error;

use crate::operation::OperationId;

/// Errors produced while building or evaluating expression trees
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// A variable was referenced that the bindings don't contain.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),
    /// An operation was given the wrong number of children.
    #[error("{operation:?} takes {expected} arguments, got {found}")]
    ArityMismatch {
        operation: OperationId,
        expected: usize,
        found: usize,
    },
    /// A tree is nested deeper than the caller allows.
    #[error("expression depth {depth} exceeds limit of {limit}")]
    TooDeep { depth: usize, limit: usize },
}
