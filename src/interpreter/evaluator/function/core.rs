use crate::{
    error::eval_error::{EvalError, EvalResult},
    interpreter::{
        bindings::functions::Function,
        coercion::core::CoercionPolicy,
        evaluator::function::{builtin, choose, min_max, temporal, values},
        value::core::Variant,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments and the active coercion
/// policy. The argument count has already been checked against its
/// [`Arity`].
type BuiltinFn = fn(&[Variant], &dyn CoercionPolicy) -> EvalResult<Variant>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means `n` or more arguments.
/// - `Range(lo, hi)` means between `lo` and `hi` arguments, inclusive.
/// - `OneOf(slice)` means any count listed in `slice`.
/// - `Any` accepts every count, including zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
    Range(usize, usize),
    OneOf(&'static [usize]),
    Any,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity constraint,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table of [`BuiltinFunction`]s),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinFunction] = &[
            $(
                BuiltinFunction { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the standard library functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "Ticks"     => { arity: Arity::Exact(0), func: temporal::ticks },
    "TimeSpan"  => { arity: Arity::OneOf(&[1, 3, 4, 5]), func: temporal::time_span },
    "Now"       => { arity: Arity::Exact(0), func: temporal::now },
    "Date"      => { arity: Arity::Range(1, 7), func: temporal::date },
    "DayOfWeek" => { arity: Arity::Exact(1), func: temporal::day_of_week },
    "Min"       => { arity: Arity::AtLeast(2), func: min_max::min },
    "Max"       => { arity: Arity::AtLeast(2), func: min_max::max },
    "Sum"       => { arity: Arity::AtLeast(2), func: min_max::sum },
    "If"        => { arity: Arity::Exact(3), func: choose::if_then_else },
    "Choose"    => { arity: Arity::AtLeast(3), func: choose::choose },
    "E"         => { arity: Arity::Exact(0), func: |_, _| Ok(Variant::Double(std::f64::consts::E)) },
    "Pi"        => { arity: Arity::Exact(0), func: |_, _| Ok(Variant::Double(std::f64::consts::PI)) },
    "Rnd"       => { arity: Arity::Exact(0), func: builtin::random },
    "Random"    => { arity: Arity::Exact(0), func: builtin::random },
    "Abs"       => { arity: Arity::Exact(1), func: builtin::abs },
    "Acos"      => { arity: Arity::Exact(1), func: builtin::acos },
    "Asin"      => { arity: Arity::Exact(1), func: builtin::asin },
    "Atan"      => { arity: Arity::Exact(1), func: builtin::atan },
    "Exp"       => { arity: Arity::Exact(1), func: builtin::exp },
    "Log"       => { arity: Arity::Exact(1), func: builtin::ln },
    "Ln"        => { arity: Arity::Exact(1), func: builtin::ln },
    "Log10"     => { arity: Arity::Exact(1), func: builtin::log10 },
    "Ceil"      => { arity: Arity::Exact(1), func: builtin::ceil },
    "Ceiling"   => { arity: Arity::Exact(1), func: builtin::ceil },
    "Floor"     => { arity: Arity::Exact(1), func: builtin::floor },
    "Round"     => { arity: Arity::Exact(1), func: builtin::round },
    "Trunc"     => { arity: Arity::Exact(1), func: builtin::trunc },
    "Truncate"  => { arity: Arity::Exact(1), func: builtin::trunc },
    "Cos"       => { arity: Arity::Exact(1), func: builtin::cos },
    "Sin"       => { arity: Arity::Exact(1), func: builtin::sin },
    "Tan"       => { arity: Arity::Exact(1), func: builtin::tan },
    "Sqr"       => { arity: Arity::Exact(1), func: builtin::sqrt },
    "Sqrt"      => { arity: Arity::Exact(1), func: builtin::sqrt },
    "Empty"     => { arity: Arity::Exact(1), func: values::empty },
    "Null"      => { arity: Arity::Exact(0), func: |_, _| Ok(Variant::Null) },
    "Contains"  => { arity: Arity::Exact(2), func: values::contains },
    "Array"     => { arity: Arity::Any, func: |args, _| Ok(Variant::Array(args.to_vec())) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    #[must_use]
    pub fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
            Self::Range(lo, hi) => (lo..=hi).contains(&n),
            Self::OneOf(arr) => arr.contains(&n),
            Self::Any => true,
        }
    }

    /// Describes the accepted counts for error messages.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::AtLeast(m) => format!("{m} or more"),
            Self::Range(lo, hi) => format!("{lo} to {hi}"),
            Self::OneOf(arr) => {
                let counts = arr.iter().map(ToString::to_string).collect::<Vec<_>>();
                match counts.split_last() {
                    Some((last, [])) => last.clone(),
                    Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
                    None => String::new(),
                }
            },
            Self::Any => "any number".to_string(),
        }
    }
}

/// A standard library function.
///
/// Checks the argument count, then runs the handler.
///
/// # Example
/// ```
/// use reckon::{
///     error::EvalError,
///     interpreter::{
///         bindings::functions::Function, coercion::PermissivePolicy,
///         evaluator::function::core::builtins, value::core::Variant,
///     },
/// };
///
/// let max = builtins().find(|f| f.name() == "Max").unwrap();
/// let args = [Variant::Integer(3), Variant::Integer(9), Variant::Integer(4)];
/// assert_eq!(max.calculate(&args, &PermissivePolicy).unwrap(), Variant::Integer(9));
///
/// let err = max.calculate(&args[..1], &PermissivePolicy).unwrap_err();
/// assert!(matches!(err, EvalError::WrongParameterCount { found: 1, .. }));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFunction {
    name:  &'static str,
    arity: Arity,
    func:  BuiltinFn,
}

impl BuiltinFunction {
    /// The accepted argument counts.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }
}

impl Function for BuiltinFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn calculate(&self, args: &[Variant], policy: &dyn CoercionPolicy) -> EvalResult<Variant> {
        if !self.arity.check(args.len()) {
            return Err(EvalError::parameter_count(self.arity.describe(), args.len()));
        }
        (self.func)(args, policy)
    }
}

/// Iterates the standard library.
pub fn builtins() -> impl Iterator<Item = BuiltinFunction> {
    BUILTIN_TABLE.iter().copied()
}
