use tracing::debug;

use crate::{
    error::{EvalResult, SyntaxError},
    interpreter::{
        bindings::{
            functions::{FunctionCollection, FunctionLookup},
            variables::{Variable, VariableCollection, VariableLookup},
        },
        coercion::{CoercionPolicy, PermissivePolicy, StrictPolicy},
        evaluator::core::evaluate,
        parser::core::{Program, parse},
        value::core::Variant,
    },
};

/// Which coercion policy a calculator evaluates with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Only widening numeric conversions; see [`StrictPolicy`].
    Strict,
    /// Converts between most types; see [`PermissivePolicy`].
    #[default]
    Permissive,
}

impl Policy {
    /// The policy implementation.
    #[must_use]
    pub const fn coercion(self) -> &'static dyn CoercionPolicy {
        match self {
            Self::Strict => &StrictPolicy,
            Self::Permissive => &PermissivePolicy,
        }
    }
}

/// Settings for an [`ExpressionCalculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// The coercion policy. Defaults to [`Policy::Permissive`].
    pub policy:         Policy,
    /// Whether compiling an expression adds a null variable to the default
    /// variables for every name it references that is not bound yet.
    /// Defaults to `true`.
    pub auto_variables: bool,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self { policy:         Policy::default(),
               auto_variables: true, }
    }
}

/// Compiles an expression once and evaluates it as often as needed.
///
/// The calculator keeps a set of default variables and functions that
/// [`evaluate`](Self::evaluate) runs against. The default functions are the
/// standard library.
///
/// # Example
/// ```
/// use reckon::interpreter::{calculator::ExpressionCalculator, value::core::Variant};
///
/// let mut calc = ExpressionCalculator::new();
/// calc.set_expression("A + b / (3 - Max(-123, 1)*2)").unwrap();
/// assert_eq!(calc.program().variable_names(), ["A", "b"]);
///
/// calc.variables_mut().insert("A", "xyz");
/// calc.variables_mut().insert("b", 123);
/// assert_eq!(calc.evaluate().unwrap(), Variant::from("xyz123"));
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionCalculator {
    options:    CalculatorOptions,
    expression: String,
    program:    Program,
    variables:  VariableCollection,
    functions:  FunctionCollection,
}

impl ExpressionCalculator {
    /// Creates a calculator with default options and no expression.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(CalculatorOptions::default())
    }

    /// Creates a calculator with the given options and no expression.
    #[must_use]
    pub fn with_options(options: CalculatorOptions) -> Self {
        Self { options,
               expression: String::new(),
               program: Program::default(),
               variables: VariableCollection::new(),
               functions: FunctionCollection::with_defaults() }
    }

    /// Creates a calculator and compiles `source`.
    ///
    /// # Errors
    /// Returns the [`SyntaxError`] raised while compiling.
    pub fn from_expression(source: &str) -> Result<Self, SyntaxError> {
        let mut calculator = Self::new();
        calculator.set_expression(source)?;
        Ok(calculator)
    }

    #[must_use]
    pub const fn options(&self) -> CalculatorOptions {
        self.options
    }

    pub const fn set_policy(&mut self, policy: Policy) {
        self.options.policy = policy;
    }

    /// The source of the current expression.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The compiled form of the current expression.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Compiles `source` and makes it the current expression.
    ///
    /// Blank source clears the expression, so the calculator evaluates to
    /// null again. On failure the previous expression stays in place.
    ///
    /// # Errors
    /// Returns the [`SyntaxError`] raised while compiling.
    pub fn set_expression(&mut self, source: &str) -> Result<(), SyntaxError> {
        let program = if source.trim().is_empty() { Program::default() } else { parse(source)? };
        debug!(expression = source, "compiled new expression");

        if self.options.auto_variables {
            self.create_variables(program.variable_names());
        }

        self.expression = source.to_string();
        self.program = program;
        Ok(())
    }

    /// Adds a null variable for every name not bound in the default
    /// variables.
    fn create_variables(&mut self, names: &[String]) {
        let created: Vec<&str> =
            names.iter()
                 .filter(|name| self.variables.find_by_name(name).is_none())
                 .map(String::as_str)
                 .collect();

        if created.is_empty() {
            return;
        }
        debug!(variables = ?created, "created variables");

        for name in created {
            self.variables.add(Variable::empty(name));
        }
    }

    /// The default variables.
    #[must_use]
    pub const fn variables(&self) -> &VariableCollection {
        &self.variables
    }

    pub const fn variables_mut(&mut self) -> &mut VariableCollection {
        &mut self.variables
    }

    /// The default functions.
    #[must_use]
    pub const fn functions(&self) -> &FunctionCollection {
        &self.functions
    }

    pub const fn functions_mut(&mut self) -> &mut FunctionCollection {
        &mut self.functions
    }

    /// Evaluates the current expression against the default variables and
    /// functions.
    ///
    /// A calculator without an expression evaluates to null.
    ///
    /// # Errors
    /// Returns the [`EvalError`](crate::error::EvalError) raised while
    /// evaluating.
    pub fn evaluate(&self) -> EvalResult<Variant> {
        self.evaluate_with(&self.variables, &self.functions)
    }

    /// Evaluates the current expression against the given bindings.
    ///
    /// # Errors
    /// Returns the [`EvalError`](crate::error::EvalError) raised while
    /// evaluating.
    pub fn evaluate_with(&self,
                         variables: &dyn VariableLookup,
                         functions: &dyn FunctionLookup)
                         -> EvalResult<Variant> {
        if self.program.is_empty() {
            return Ok(Variant::Null);
        }
        evaluate(self.program.instructions(),
                 variables,
                 functions,
                 self.options.policy.coercion())
    }
}

impl Default for ExpressionCalculator {
    fn default() -> Self {
        Self::new()
    }
}
