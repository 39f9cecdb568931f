use itertools::Itertools;
use tinyvec::TinyVec;

use crate::{bindings::Bindings, error::ExpressionError, operation::Operation};

/// Suggested nesting limit for trees accepted from outside, see [`ExpressionTreeNode::check_depth`]
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A node of a parsed expression: an operation and the child nodes it takes as arguments.
///
/// The number of children always matches [`Operation::num_arguments`]. Trees are never
/// modified by evaluation or differentiation, and cloning one copies every node (including
/// any custom functions) so clones share nothing.
#[derive(Clone, PartialEq)]
pub struct ExpressionTreeNode {
    operation: Operation,
    children: Vec<ExpressionTreeNode>,
}

impl ExpressionTreeNode {
    /// Create a node. Panics if the number of children doesn't match the operation.
    pub fn new(operation: Operation, children: Vec<ExpressionTreeNode>) -> Self {
        match Self::try_new(operation, children) {
            Ok(node) => node,
            Err(e) => panic!("Invalid expression tree: {e}"),
        }
    }

    /// Create a node, returning an error if the number of children doesn't match the operation.
    pub fn try_new(
        operation: Operation,
        children: Vec<ExpressionTreeNode>,
    ) -> Result<Self, ExpressionError> {
        if children.len() != operation.num_arguments() {
            tracing::debug!(
                operation = %operation,
                expected = operation.num_arguments(),
                found = children.len(),
                "rejected expression node"
            );
            return Err(ExpressionError::ArityMismatch {
                operation: operation.id(),
                expected: operation.num_arguments(),
                found: children.len(),
            });
        }
        Ok(Self {
            operation,
            children,
        })
    }

    /// A node with no children
    pub fn leaf(operation: Operation) -> Self {
        Self::new(operation, vec![])
    }

    pub fn constant(value: f64) -> Self {
        Self::leaf(Operation::Constant(value))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::leaf(Operation::variable(name))
    }

    pub fn unary(operation: Operation, child: ExpressionTreeNode) -> Self {
        Self::new(operation, vec![child])
    }

    pub fn binary(operation: Operation, lhs: ExpressionTreeNode, rhs: ExpressionTreeNode) -> Self {
        Self::new(operation, vec![lhs, rhs])
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn children(&self) -> &[ExpressionTreeNode] {
        &self.children
    }

    /// Split the node into its operation and children
    pub fn into_parts(self) -> (Operation, Vec<ExpressionTreeNode>) {
        (self.operation, self.children)
    }

    /// True if this node is the constant zero
    pub fn is_zero(&self) -> bool {
        self.operation.value() == Some(0.0)
    }

    /// Evaluate the tree given values for its variables.
    ///
    /// Fails only if a variable is missing from `bindings`. Everything else follows floating
    /// point semantics, so `1 / 0` is infinity and `log(-1)` is NaN.
    pub fn evaluate<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<f64, ExpressionError> {
        let mut args: TinyVec<[f64; 2]> = TinyVec::with_capacity(self.children.len());
        for child in &self.children {
            args.push(child.evaluate(bindings)?);
        }
        self.operation.evaluate(&args, bindings)
    }

    /// Build a new tree holding the partial derivative of this one with respect to `variable`.
    ///
    /// The result is unsimplified and can be evaluated or differentiated again like any other tree.
    pub fn differentiate(&self, variable: &str) -> ExpressionTreeNode {
        tracing::trace!(variable, depth = self.depth(), "differentiating expression");
        self.differentiate_node(variable)
    }

    fn differentiate_node(&self, variable: &str) -> ExpressionTreeNode {
        let child_derivs = self
            .children
            .iter()
            .map(|c| c.differentiate_node(variable))
            .collect::<Vec<_>>();
        self.operation
            .differentiate(&self.children, &child_derivs, variable)
    }

    /// Names of all variables referenced in the tree, sorted and deduplicated
    pub fn variables(&self) -> Vec<String> {
        let mut names = vec![];
        self.collect_variables(&mut names);
        names.into_iter().sorted().dedup().map(str::to_string).collect()
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Some(name) = self.operation.variable_name() {
            names.push(name);
        }
        for child in &self.children {
            child.collect_variables(names);
        }
    }

    /// True if `variable` appears anywhere in the tree
    pub fn contains_variable(&self, variable: &str) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.operation.variable_name() == Some(variable) {
                return true;
            }
            stack.extend(&node.children);
        }
        false
    }

    /// Replace every occurrence of `variable` with a copy of `replacement`
    pub fn substitute(&self, variable: &str, replacement: &ExpressionTreeNode) -> Self {
        if self.operation.variable_name() == Some(variable) {
            return replacement.clone();
        }
        Self {
            operation: self.operation.clone(),
            children: self
                .children
                .iter()
                .map(|c| c.substitute(variable, replacement))
                .collect(),
        }
    }

    /// Rename a variable throughout the tree
    pub fn rename_variable(&self, from: &str, to: &str) -> Self {
        self.substitute(from, &ExpressionTreeNode::variable(to))
    }

    /// Number of nodes on the longest path from this node to a leaf, counting both ends
    pub fn depth(&self) -> usize {
        let mut stack = vec![(self, 1)];
        let mut depth = 0;
        while let Some((node, d)) = stack.pop() {
            depth = depth.max(d);
            stack.extend(node.children.iter().map(|c| (c, d + 1)));
        }
        depth
    }

    /// Total number of nodes in the tree
    pub fn num_nodes(&self) -> usize {
        1 + self.children.iter().map(|c| c.num_nodes()).sum::<usize>()
    }

    /// Ensure the tree is no deeper than `limit`, since evaluation recurses once per level.
    pub fn check_depth(&self, limit: usize) -> Result<(), ExpressionError> {
        let depth = self.depth();
        if depth > limit {
            tracing::debug!(depth, limit, "expression too deep");
            return Err(ExpressionError::TooDeep { depth, limit });
        }
        Ok(())
    }
}

impl From<f64> for ExpressionTreeNode {
    fn from(value: f64) -> Self {
        ExpressionTreeNode::constant(value)
    }
}

impl From<&str> for ExpressionTreeNode {
    fn from(name: &str) -> Self {
        ExpressionTreeNode::variable(name)
    }
}
