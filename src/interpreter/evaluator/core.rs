use tracing::trace;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{
        bindings::{functions::FunctionLookup, variables::VariableLookup},
        coercion::CoercionPolicy,
        evaluator::stack::CalculationStack,
        instruction::{Instruction, InstructionKind},
        value::core::Variant,
    },
};

/// Everything one evaluation needs.
///
/// The bindings and the policy are borrowed from the caller; the stack is
/// created for the evaluation and dropped with it.
pub struct Context<'a> {
    /// Resolves variable references.
    pub variables: &'a dyn VariableLookup,
    /// Resolves function calls.
    pub functions: &'a dyn FunctionLookup,
    /// Converts and combines operand values.
    pub policy:    &'a dyn CoercionPolicy,
    pub stack:     CalculationStack,
}

impl<'a> Context<'a> {
    /// Creates a context with an empty stack.
    #[must_use]
    pub fn new(variables: &'a dyn VariableLookup,
               functions: &'a dyn FunctionLookup,
               policy: &'a dyn CoercionPolicy)
               -> Self {
        Self { variables,
               functions,
               policy,
               stack: CalculationStack::new() }
    }

    /// Runs `instructions` and returns the single value left on the stack.
    ///
    /// Errors raised while executing an instruction are tagged with that
    /// instruction's position.
    pub fn run(mut self, instructions: &[Instruction]) -> EvalResult<Variant> {
        for instruction in instructions {
            trace!(%instruction, depth = self.stack.len(), "executing");
            self.execute(instruction)
                .map_err(|err| err.at(instruction.position()))?;
        }

        let result = self.stack.pop()?;
        if !self.stack.is_empty() {
            return Err(EvalError::Internal { message:  format!("{} values left on the stack",
                                                               self.stack.len() + 1),
                                             position: None, });
        }
        Ok(result)
    }

    /// Executes one instruction against the stack.
    fn execute(&mut self, instruction: &Instruction) -> EvalResult<()> {
        let result = match instruction.kind() {
            InstructionKind::Constant => instruction.value().clone(),
            InstructionKind::Variable => self.load_variable(instruction)?,
            InstructionKind::Function => self.call_function(instruction)?,
            InstructionKind::Unary
            | InstructionKind::Not
            | InstructionKind::IsNull
            | InstructionKind::IsNotNull => {
                let operand = self.stack.pop()?;
                self.eval_unary(instruction.kind(), &operand)?
            },
            kind => {
                let rhs = self.stack.pop()?;
                let lhs = self.stack.pop()?;
                self.eval_binary(kind, &lhs, &rhs)?
            },
        };
        self.stack.push(result);
        Ok(())
    }

    fn load_variable(&self, instruction: &Instruction) -> EvalResult<Variant> {
        let name = instruction.name().unwrap_or_default();
        self.variables
            .find_by_name(name)
            .map(|variable| variable.value().clone())
            .ok_or_else(|| EvalError::VariableNotFound { name:     name.to_string(),
                                                         position: None, })
    }
}

/// Evaluates a compiled instruction stream.
///
/// Variables and functions are resolved through the given lookups; operand
/// conversion follows `policy`. The stream must leave exactly one value on
/// the stack.
///
/// # Errors
/// Returns the first [`EvalError`] raised, positioned at the instruction
/// that failed.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     bindings::{functions::FunctionCollection, variables::VariableCollection},
///     coercion::StrictPolicy,
///     evaluator::core::evaluate,
///     parser::core::parse,
///     value::core::Variant,
/// };
///
/// let program = parse("Max(a, 10) * 2").unwrap();
/// let mut variables = VariableCollection::new();
/// variables.insert("a", 16);
///
/// let result = evaluate(program.instructions(),
///                       &variables,
///                       &FunctionCollection::with_defaults(),
///                       &StrictPolicy).unwrap();
/// assert_eq!(result, Variant::Integer(32));
/// ```
pub fn evaluate(instructions: &[Instruction],
                variables: &dyn VariableLookup,
                functions: &dyn FunctionLookup,
                policy: &dyn CoercionPolicy)
                -> EvalResult<Variant> {
    Context::new(variables, functions, policy).run(instructions)
}
