use crate::{
    error::eval_error::EvalResult,
    interpreter::{coercion::core::CoercionPolicy, evaluator::utils::to_text, value::core::Variant},
};

/// Whether the argument is null, an empty string or an empty array.
pub fn empty(args: &[Variant], _policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    Ok(Variant::Boolean(args[0].is_empty()))
}

/// Whether the first argument contains the second, both taken as strings.
///
/// A null or empty haystack contains nothing.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::PermissivePolicy, evaluator::function::values::contains, value::core::Variant,
/// };
///
/// let args = ["haystack".into(), "st".into()];
/// assert_eq!(contains(&args, &PermissivePolicy).unwrap(), Variant::Boolean(true));
///
/// let args = [Variant::Integer(1234), Variant::Integer(23)];
/// assert_eq!(contains(&args, &PermissivePolicy).unwrap(), Variant::Boolean(true));
///
/// let args = ["".into(), "".into()];
/// assert_eq!(contains(&args, &PermissivePolicy).unwrap(), Variant::Boolean(false));
/// ```
pub fn contains(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    if args[0].is_empty() {
        return Ok(Variant::Boolean(false));
    }

    let haystack = to_text(policy, &args[0])?;
    let needle = to_text(policy, &args[1])?;

    Ok(Variant::Boolean(!haystack.is_empty() && haystack.contains(&needle)))
}
