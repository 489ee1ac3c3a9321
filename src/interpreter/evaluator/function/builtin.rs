use crate::{
    error::eval_error::EvalResult,
    interpreter::{coercion::core::CoercionPolicy, evaluator::utils::to_double, value::core::Variant},
    util::num::f64_to_i64,
};

/// Applies an `f64 -> f64` function to the single argument.
///
/// The generated functions convert their argument to `Double` with the
/// active policy and return a `Double`.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::StrictPolicy, evaluator::function::builtin::sqrt, value::core::Variant,
/// };
///
/// assert_eq!(sqrt(&[Variant::Integer(9)], &StrictPolicy).unwrap(), Variant::Double(3.0));
/// ```
macro_rules! double_builtin {
    ($($fname:ident => $real_fn:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($real_fn), "` of the argument, as a `Double`.")]
            pub fn $fname(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
                Ok(Variant::Double(to_double(policy, &args[0])?.$real_fn()))
            }
        )*
    };
}

double_builtin! {
    acos => acos,
    asin => asin,
    atan => atan,
    exp => exp,
    ln => ln,
    log10 => log10,
    ceil => ceil,
    floor => floor,
    round => round,
    cos => cos,
    sin => sin,
    tan => tan,
    sqrt => sqrt,
}

/// A random `Float` in `[0, 1)`.
pub fn random(_args: &[Variant], _policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    Ok(Variant::Float(rand::random::<f32>()))
}

/// The absolute value.
///
/// Numbers keep their type, with integer overflow wrapping. Anything else
/// is converted to `Double` first.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     coercion::PermissivePolicy, evaluator::function::builtin::abs, value::core::Variant,
/// };
///
/// assert_eq!(abs(&[Variant::Integer(-2)], &PermissivePolicy).unwrap(), Variant::Integer(2));
/// assert_eq!(abs(&["-1.5".into()], &PermissivePolicy).unwrap(), Variant::Double(1.5));
/// ```
pub fn abs(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    match &args[0] {
        Variant::Integer(value) => Ok(Variant::Integer(value.wrapping_abs())),
        Variant::Long(value) => Ok(Variant::Long(value.wrapping_abs())),
        Variant::Float(value) => Ok(Variant::Float(value.abs())),
        other => Ok(Variant::Double(to_double(policy, other)?.abs())),
    }
}

/// The argument truncated toward zero, as a `Long`.
pub fn trunc(args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
    Ok(Variant::Long(f64_to_i64(to_double(policy, &args[0])?)))
}
