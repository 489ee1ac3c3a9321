use crate::{
    error::{EvalError, EvalResult},
    interpreter::{evaluator::core::Context, instruction::InstructionKind, value::core::Variant},
};

impl Context<'_> {
    /// Evaluates a binary operator on two operands popped from the stack.
    ///
    /// `lhs` is the operand that was pushed first. Every operator except the
    /// membership tests delegates straight to the coercion policy:
    /// - `IN` tests whether `lhs` occurs in `rhs`.
    /// - `NOT IN` and `NOT LIKE` negate `IN` and `LIKE`; a null result stays
    ///   null.
    ///
    /// # Errors
    /// Propagates conversion and operation errors from the policy, and
    /// returns [`EvalError::Internal`] for instruction kinds that are not
    /// binary operators.
    pub fn eval_binary(&self,
                       kind: InstructionKind,
                       lhs: &Variant,
                       rhs: &Variant)
                       -> EvalResult<Variant> {
        let policy = self.policy;
        match kind {
            InstructionKind::Add => policy.add(lhs, rhs),
            InstructionKind::Sub => policy.sub(lhs, rhs),
            InstructionKind::Mul => policy.mul(lhs, rhs),
            InstructionKind::Div => policy.div(lhs, rhs),
            InstructionKind::Mod => policy.rem(lhs, rhs),
            InstructionKind::Pow => policy.pow(lhs, rhs),
            InstructionKind::ShiftLeft => policy.shl(lhs, rhs),
            InstructionKind::ShiftRight => policy.shr(lhs, rhs),
            InstructionKind::And => policy.and(lhs, rhs),
            InstructionKind::Or => policy.or(lhs, rhs),
            InstructionKind::Xor => policy.xor(lhs, rhs),
            InstructionKind::Equal => policy.equal(lhs, rhs),
            InstructionKind::NotEqual => policy.not_equal(lhs, rhs),
            InstructionKind::More => policy.greater(lhs, rhs),
            InstructionKind::Less => policy.less(lhs, rhs),
            InstructionKind::EqualMore => policy.greater_equal(lhs, rhs),
            InstructionKind::EqualLess => policy.less_equal(lhs, rhs),
            InstructionKind::In => policy.is_in(rhs, lhs),
            InstructionKind::NotIn => policy.is_in(rhs, lhs).map(negate_boolean),
            InstructionKind::Like => policy.like(lhs, rhs),
            InstructionKind::NotLike => policy.like(lhs, rhs).map(negate_boolean),
            InstructionKind::Element => policy.element(lhs, rhs),
            kind => Err(EvalError::Internal { message:  format!("'{}' is not a binary operator",
                                                                kind.symbol()),
                                              position: None, }),
        }
    }
}

/// Flips a boolean test result. Anything else, in practice null, passes
/// through.
fn negate_boolean(value: Variant) -> Variant {
    match value {
        Variant::Boolean(flag) => Variant::Boolean(!flag),
        other => other,
    }
}
