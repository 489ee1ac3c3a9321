use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{
        coercion::core::CoercionPolicy,
        evaluator::utils::{to_boolean, to_integer},
        value::core::Variant,
    },
};

/// Returns the second argument when the first converts to `true`, the third
/// otherwise.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::PermissivePolicy, evaluator::function::choose::if_then_else,
///     value::core::Variant,
/// };
///
/// let args = [Variant::Integer(0), "yes".into(), "no".into()];
/// assert_eq!(if_then_else(&args, &PermissivePolicy).unwrap(), Variant::from("no"));
/// ```
pub fn if_then_else(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    let branch = if to_boolean(policy, &args[0])? { 1 } else { 2 };
    Ok(args[branch].clone())
}

/// Returns the argument selected by the 1-based index in the first argument.
///
/// `Choose(2, a, b, c)` returns `b`.
///
/// # Errors
/// Returns `WrongParameterCount` when the index does not select one of the
/// remaining arguments.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::PermissivePolicy, evaluator::function::choose::choose, value::core::Variant,
/// };
///
/// let args = [Variant::Integer(2), "a".into(), "b".into(), "c".into()];
/// assert_eq!(choose(&args, &PermissivePolicy).unwrap(), Variant::from("b"));
///
/// let args = [Variant::Integer(4), "a".into(), "b".into()];
/// assert!(choose(&args, &PermissivePolicy).is_err());
/// ```
pub fn choose(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    let index = to_integer(policy, &args[0])?;

    usize::try_from(index).ok()
                          .filter(|&index| index >= 1)
                          .and_then(|index| args.get(index))
                          .cloned()
                          .ok_or_else(|| {
                              EvalError::parameter_count(format!("at least {}", i64::from(index) + 1),
                                                         args.len())
                          })
}
