use crate::{
    error::eval_error::EvalResult,
    interpreter::{coercion::core::CoercionPolicy, evaluator::utils::is_true, value::core::Variant},
};

/// The smallest argument under the policy's ordering.
///
/// Each candidate is compared against the current minimum with `>`; a
/// comparison involving null never replaces it.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::PermissivePolicy, evaluator::function::min_max::min, value::core::Variant,
/// };
///
/// let args = [Variant::Integer(3), Variant::Double(1.5), Variant::Integer(2)];
/// assert_eq!(min(&args, &PermissivePolicy).unwrap(), Variant::Double(1.5));
/// ```
pub fn min(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    let mut result = &args[0];
    for value in &args[1..] {
        if is_true(&policy.greater(result, value)?) {
            result = value;
        }
    }
    Ok(result.clone())
}

/// The largest argument under the policy's ordering.
pub fn max(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    let mut result = &args[0];
    for value in &args[1..] {
        if is_true(&policy.less(result, value)?) {
            result = value;
        }
    }
    Ok(result.clone())
}

/// Adds every argument to the first, left to right.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::PermissivePolicy, evaluator::function::min_max::sum, value::core::Variant,
/// };
///
/// let args = [Variant::Integer(1), Variant::Integer(2), "3".into()];
/// assert_eq!(sum(&args, &PermissivePolicy).unwrap(), Variant::Integer(6));
/// ```
pub fn sum(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    let mut result = args[0].clone();
    for value in &args[1..] {
        result = policy.add(&result, value)?;
    }
    Ok(result)
}
