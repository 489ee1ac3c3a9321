use crate::{
    error::{EvalError, EvalResult},
    interpreter::{evaluator::core::Context, instruction::InstructionKind, value::core::Variant},
};

impl Context<'_> {
    /// Evaluates a unary operator on a value.
    ///
    /// Supported operators:
    /// - `Unary`: arithmetic negation, delegated to the policy.
    /// - `Not`: logical negation, delegated to the policy.
    /// - `IsNull` / `IsNotNull`: null tests. These never fail.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::{
    ///     bindings::{functions::FunctionCollection, variables::VariableCollection},
    ///     coercion::PermissivePolicy,
    ///     evaluator::core::Context,
    ///     instruction::InstructionKind,
    ///     value::core::Variant,
    /// };
    ///
    /// let (variables, functions) = (VariableCollection::new(), FunctionCollection::new());
    /// let context = Context::new(&variables, &functions, &PermissivePolicy);
    ///
    /// let v = context.eval_unary(InstructionKind::Unary, &Variant::Integer(5)).unwrap();
    /// assert_eq!(v, Variant::Integer(-5));
    ///
    /// let v = context.eval_unary(InstructionKind::IsNull, &Variant::Null).unwrap();
    /// assert_eq!(v, Variant::Boolean(true));
    /// ```
    pub fn eval_unary(&self, kind: InstructionKind, operand: &Variant) -> EvalResult<Variant> {
        match kind {
            InstructionKind::Unary => self.policy.negate(operand),
            InstructionKind::Not => self.policy.not(operand),
            InstructionKind::IsNull => Ok(Variant::Boolean(operand.is_null())),
            InstructionKind::IsNotNull => Ok(Variant::Boolean(!operand.is_null())),
            kind => Err(EvalError::Internal { message:  format!("'{}' is not a unary operator",
                                                                kind.symbol()),
                                              position: None, }),
        }
    }
}
