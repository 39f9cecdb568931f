use std::fmt::Debug;

use dyn_clone::{clone_trait_object, DynClone};

/// A user supplied function of a fixed number of arguments, such as a tabulated spline.
///
/// Expressions never implement these themselves, they only store, clone and dispatch to them.
/// Every `Custom` node owns its own boxed instance, so implementations holding scratch state
/// behind interior mutability are never shared between two trees.
pub trait CustomFunction: Debug + DynClone + Send + Sync {
    /// Number of arguments the function takes
    fn num_arguments(&self) -> usize;
    /// Evaluate the function
    fn evaluate(&self, args: &[f64]) -> f64;
    /// Evaluate a mixed partial derivative. `derivative_order[i]` is how many times the function
    /// is differentiated with respect to argument `i`.
    fn evaluate_derivative(&self, args: &[f64], derivative_order: &[u32]) -> f64;
}

clone_trait_object!(CustomFunction);

/// Payload of the `Custom` operation: a named function plus how many times each argument has been differentiated.
#[derive(Debug, Clone)]
pub struct Custom {
    name: String,
    function: Box<dyn CustomFunction>,
    derivative_order: Vec<u32>,
}

impl Custom {
    pub fn new<F: CustomFunction + 'static>(name: impl Into<String>, function: F) -> Self {
        Self::from_boxed(name, Box::new(function))
    }

    pub fn from_boxed(name: impl Into<String>, function: Box<dyn CustomFunction>) -> Self {
        let derivative_order = vec![0; function.num_arguments()];
        Self {
            name: name.into(),
            function,
            derivative_order,
        }
    }

    /// The partial derivative of this function with respect to argument `index`.
    ///
    /// The function is cloned, the original is left untouched.
    pub fn derivative(&self, index: usize) -> Self {
        assert!(
            index < self.derivative_order.len(),
            "{} has no argument {index}",
            self.name
        );
        let mut derivative = self.clone();
        derivative.derivative_order[index] += 1;
        derivative
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn function(&self) -> &dyn CustomFunction {
        self.function.as_ref()
    }

    pub fn derivative_order(&self) -> &[u32] {
        &self.derivative_order
    }

    /// True if this node stands for a partial derivative rather than the plain function
    pub fn is_derivative(&self) -> bool {
        self.derivative_order.iter().any(|o| *o != 0)
    }

    pub fn num_arguments(&self) -> usize {
        self.function.num_arguments()
    }

    pub fn evaluate(&self, args: &[f64]) -> f64 {
        if self.is_derivative() {
            self.function.evaluate_derivative(args, &self.derivative_order)
        } else {
            self.function.evaluate(args)
        }
    }
}

/// Custom functions are identified by name, arity and derivative order. The wrapped functions
/// themselves are never compared, so two implementations registered under the same name are equal.
impl PartialEq for Custom {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.derivative_order == other.derivative_order
            && self.function.num_arguments() == other.function.num_arguments()
    }
}
