use std::{fmt, sync::Arc};

use crate::{
    error::eval_error::EvalResult,
    interpreter::{
        bindings::same_name, coercion::core::CoercionPolicy, evaluator::function::core::builtins,
        value::core::Variant,
    },
};

/// A callable that expressions can invoke by name.
///
/// Arguments arrive evaluated and in source order. The policy is the one the
/// expression is being evaluated with, so functions can combine values the
/// same way operators do.
pub trait Function: Send + Sync {
    /// The name the function is called by.
    fn name(&self) -> &str;

    /// Computes the result for `args`.
    fn calculate(&self, args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant>;
}

type Calculator = dyn Fn(&[Variant], &dyn CoercionPolicy) -> EvalResult<Variant> + Send + Sync;

/// A function backed by a closure.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     bindings::functions::{DelegatedFunction, Function},
///     coercion::PermissivePolicy,
///     value::core::Variant,
/// };
///
/// let twice = DelegatedFunction::new("Twice", |args, policy| policy.add(&args[0], &args[0]));
/// assert_eq!(twice.calculate(&[Variant::Integer(4)], &PermissivePolicy).unwrap(),
///            Variant::Integer(8));
/// ```
#[derive(Clone)]
pub struct DelegatedFunction {
    name:       String,
    calculator: Arc<Calculator>,
}

impl DelegatedFunction {
    /// Wraps `calculator` under `name`.
    pub fn new<F>(name: impl Into<String>, calculator: F) -> Self
        where F: Fn(&[Variant], &dyn CoercionPolicy) -> EvalResult<Variant> + Send + Sync + 'static
    {
        Self { name:       name.into(),
               calculator: Arc::new(calculator), }
    }
}

impl Function for DelegatedFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate(&self, args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
        (self.calculator)(args, policy)
    }
}

impl fmt::Debug for DelegatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedFunction")
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}

/// Resolves function names during evaluation.
pub trait FunctionLookup {
    /// Finds a function by name, ignoring case.
    fn find_by_name(&self, name: &str) -> Option<&dyn Function>;
}

/// An ordered set of functions with case-insensitive names.
///
/// Functions are shared, so cloning a collection is cheap.
///
/// # Example
/// ```
/// use reckon::interpreter::bindings::functions::{FunctionCollection, FunctionLookup};
///
/// let functions = FunctionCollection::with_defaults();
/// assert!(functions.find_by_name("max").is_some());
/// assert!(functions.find_by_name("SQRT").is_some());
/// assert!(functions.find_by_name("nope").is_none());
/// ```
#[derive(Clone, Default)]
pub struct FunctionCollection {
    functions: Vec<Arc<dyn Function>>,
}

impl FunctionCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { functions: Vec::new() }
    }

    /// Creates a collection holding the standard library.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut collection = Self::new();
        for function in builtins() {
            collection.functions.push(Arc::new(function));
        }
        collection
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.functions
            .iter()
            .position(|function| same_name(function.name(), name))
    }

    /// Adds `function`, replacing any function with the same name.
    pub fn add(&mut self, function: impl Function + 'static) {
        self.add_shared(Arc::new(function));
    }

    /// Adds an already shared function, replacing any function with the same
    /// name.
    pub fn add_shared(&mut self, function: Arc<dyn Function>) {
        match self.index_of(function.name()) {
            Some(index) => self.functions[index] = function,
            None => self.functions.push(function),
        }
    }

    /// Removes the function called `name`. Returns whether one was removed.
    pub fn remove_by_name(&mut self, name: &str) -> bool {
        self.index_of(name)
            .map(|index| self.functions.remove(index))
            .is_some()
    }

    /// Removes every function.
    pub fn clear(&mut self) {
        self.functions.clear();
    }

    /// The function names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|function| function.name())
    }

    /// Number of functions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl FunctionLookup for FunctionCollection {
    fn find_by_name(&self, name: &str) -> Option<&dyn Function> {
        self.index_of(name).map(|index| &*self.functions[index])
    }
}

impl fmt::Debug for FunctionCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
