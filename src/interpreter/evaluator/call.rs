use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use tracing::warn;

use crate::{
    error::{EvalError, EvalResult},
    interpreter::{evaluator::core::Context, instruction::Instruction, value::core::Variant},
};

impl Context<'_> {
    /// Executes a function call instruction.
    ///
    /// The argument count sits on top of the stack, with the arguments below
    /// it in call order. A function that panics does not take the evaluation
    /// down: the panic is reported as [`EvalError::CalculationFailed`].
    ///
    /// # Errors
    /// - [`EvalError::FunctionNotFound`] if no function has the name.
    /// - [`EvalError::Internal`] if the count is missing or malformed.
    /// - Any error the function returns.
    pub fn call_function(&mut self, instruction: &Instruction) -> EvalResult<Variant> {
        let name = instruction.name().unwrap_or_default();

        let count = match self.stack.pop()? {
            Variant::Integer(count) => usize::try_from(count).ok(),
            _ => None,
        };
        let Some(count) = count else {
            return Err(EvalError::Internal { message:  format!("'{name}' was called without a valid argument count"),
                                             position: None, });
        };
        let args = self.stack.pop_many(count)?;

        let function =
            self.functions
                .find_by_name(name)
                .ok_or_else(|| EvalError::FunctionNotFound { name:     name.to_string(),
                                                             position: None, })?;

        let policy = self.policy;
        panic::catch_unwind(AssertUnwindSafe(|| function.calculate(&args, policy))).unwrap_or_else(|payload| {
            let message = panic_message(payload.as_ref());
            warn!(function = name, %message, "recovered from a panic in a function");
            Err(EvalError::calculation(message))
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload.downcast_ref::<&str>()
           .map(ToString::to_string)
           .or_else(|| payload.downcast_ref::<String>().cloned())
           .unwrap_or_else(|| "the function panicked".to_string())
}
