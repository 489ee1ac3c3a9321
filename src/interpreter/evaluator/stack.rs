use crate::{
    error::{EvalError, EvalResult},
    interpreter::value::core::Variant,
};

/// The value stack a program runs on.
///
/// Popping from an empty stack means the instruction stream is malformed
/// and is reported as [`EvalError::Internal`].
#[derive(Debug, Default)]
pub struct CalculationStack {
    values: Vec<Variant>,
}

impl CalculationStack {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: Variant) {
        self.values.push(value);
    }

    /// Removes the top value.
    pub fn pop(&mut self) -> EvalResult<Variant> {
        self.values.pop().ok_or_else(underflow)
    }

    /// Removes the top `count` values and returns them bottom first, which is
    /// the order they were pushed in.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{evaluator::stack::CalculationStack, value::core::Variant};
    ///
    /// let mut stack = CalculationStack::new();
    /// for n in 1..=3 {
    ///     stack.push(Variant::Integer(n));
    /// }
    /// assert_eq!(stack.pop_many(2).unwrap(), [Variant::Integer(2), Variant::Integer(3)]);
    /// assert_eq!(stack.len(), 1);
    /// assert!(stack.pop_many(2).is_err());
    /// ```
    pub fn pop_many(&mut self, count: usize) -> EvalResult<Vec<Variant>> {
        let start = self.values.len().checked_sub(count).ok_or_else(underflow)?;
        Ok(self.values.split_off(start))
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn underflow() -> EvalError {
    EvalError::Internal { message:  "the value stack is empty".to_string(),
                          position: None, }
}
