use reckon::{
    calculate,
    error::{Error, EvalError},
    interpreter::{
        bindings::functions::{Function, FunctionCollection, FunctionLookup},
        calculator::{CalculatorOptions, ExpressionCalculator, Policy},
        evaluator::function::core::{Arity, BUILTIN_FUNCTIONS, builtins},
        value::core::{Variant, VariantType},
    },
};
use time::{Duration, macros::datetime};

fn assert_value(source: &str, expected: Variant) {
    match calculate(source) {
        Ok(value) => assert_eq!(value, expected, "value of {source:?}"),
        Err(e) => panic!("{source:?} failed: {e}"),
    }
}

fn assert_true(source: &str) {
    assert_value(source, Variant::Boolean(true));
}

fn eval_error(source: &str) -> EvalError {
    match calculate(source) {
        Ok(value) => panic!("{source:?} gave {value:?} but was expected to fail"),
        Err(Error::Eval(e)) => e,
        Err(e) => panic!("{source:?} failed to compile: {e}"),
    }
}

#[test]
fn every_builtin_is_registered() {
    let functions = FunctionCollection::with_defaults();
    assert_eq!(functions.len(), BUILTIN_FUNCTIONS.len());

    for name in BUILTIN_FUNCTIONS {
        assert!(functions.find_by_name(name).is_some(), "{name} is missing");
        assert!(functions.find_by_name(&name.to_uppercase()).is_some(), "{name} ignores case");
    }
}

#[test]
fn arities_match_the_table() {
    let arity = |name: &str| builtins().find(|f| f.name() == name).map(|f| f.arity());

    assert_eq!(arity("Pi"), Some(Arity::Exact(0)));
    assert_eq!(arity("Max"), Some(Arity::AtLeast(2)));
    assert_eq!(arity("Date"), Some(Arity::Range(1, 7)));
    assert_eq!(arity("Array"), Some(Arity::Any));
    assert!(Arity::OneOf(&[1, 3]).check(3));
    assert!(!Arity::OneOf(&[1, 3]).check(2));
    assert_eq!(Arity::OneOf(&[1, 3, 4, 5]).describe(), "1, 3, 4 or 5");
}

#[test]
fn wrong_argument_counts_fail() {
    let e = eval_error("Abs()");
    assert_eq!(e.to_string(), "Wrong number of parameters: expected 1, found 0 at line 1 and column 1");

    let e = eval_error("2 * TimeSpan(1, 2)");
    assert!(matches!(e, EvalError::WrongParameterCount { ref expected, found: 2, .. }
                        if expected == "1, 3, 4 or 5"));

    assert!(matches!(eval_error("If(TRUE, 1)"), EvalError::WrongParameterCount { .. }));
    assert!(matches!(eval_error("Sum(1)"), EvalError::WrongParameterCount { .. }));
}

#[test]
fn numeric_functions() {
    assert_value("Abs(-2)", Variant::Integer(2));
    assert_value("Abs(-2.5)", Variant::Double(2.5));
    assert_value("Abs('-3')", Variant::Double(3.0));
    assert_value("Trunc(-2.7)", Variant::Long(-2));
    assert_value("Truncate('9.9')", Variant::Long(9));
    assert_value("Sqrt(16)", Variant::Double(4.0));
    assert_value("Sqr(9)", Variant::Double(3.0));
    assert_value("Round(2.5)", Variant::Double(3.0));
    assert_value("Floor(-1.5)", Variant::Double(-2.0));
    assert_value("Ceiling(1.2)", Variant::Double(2.0));
    assert_value("Exp(0) + Log(1) + Log10(1)", Variant::Double(1.0));
    assert_value("Pi()", Variant::Double(std::f64::consts::PI));
    assert_value("E()", Variant::Double(std::f64::consts::E));
    assert_true("Cos(0) = 1 AND Sin(0) = 0");
}

#[test]
fn random_is_a_float_in_unit_range() {
    for _ in 0..20 {
        match calculate("Rnd()").unwrap() {
            Variant::Float(value) => assert!((0.0..1.0).contains(&value), "{value}"),
            other => panic!("Rnd() gave {other:?}"),
        }
    }
    assert_eq!(calculate("Random()").unwrap().variant_type(), VariantType::Float);
}

#[test]
fn min_max_and_sum() {
    assert_value("Min(3, 1.5, 2)", Variant::Double(1.5));
    assert_value("Max(-123, 1)", Variant::Integer(1));
    assert_value("Max('apple', 'pear', 'fig')", Variant::from("pear"));
    assert_value("Sum(1, 2, '3')", Variant::Integer(6));
    assert_value("Sum('a', 1, 2)", Variant::from("a12"));
    assert_value("Max(NULL, 5)", Variant::Null);
}

#[test]
fn selection() {
    assert_value("If(1 > 2, 'yes', 'no')", Variant::from("no"));
    assert_value("If('y', 1, 2)", Variant::Integer(1));
    assert_value("Choose(2, 'a', 'b', 'c')", Variant::from("b"));
    assert_value("Choose('1', 'a', 'b')", Variant::from("a"));

    assert!(matches!(eval_error("Choose(0, 'a', 'b')"), EvalError::WrongParameterCount { .. }));
    assert!(matches!(eval_error("Choose(3, 'a', 'b')"), EvalError::WrongParameterCount { .. }));
}

#[test]
fn dates() {
    assert_value("Date(2024, 2, 29)", Variant::from(datetime!(2024-02-29 00:00 UTC)));
    assert_value("Date(86400)", Variant::from(datetime!(1970-01-02 00:00 UTC)));
    assert_value("Date(2024, 1, 1, 12, 30, 15, 250)",
                 Variant::from(datetime!(2024-01-01 12:30:15.25 UTC)));
    assert_value("DayOfWeek(Date(2024, 3, 1))", Variant::Integer(5));
    assert_value("DayOfWeek(Date(2024, 3, 3))", Variant::Integer(0));
    assert_true("Date(2024, 1, 1) + TimeSpan(1, 0, 0) = Date(2024, 1, 2)");
    assert_true("Date(2024, 1, 2) - Date(2024, 1, 1) = TimeSpan(86400000)");
    assert_true("Date(2024, 12) < Date(2025, 1)");

    assert!(matches!(eval_error("Date(2023, 2, 29)"), EvalError::CalculationFailed { .. }));
    assert!(matches!(eval_error("Date(2023, 13, 1)"), EvalError::CalculationFailed { .. }));
}

#[test]
fn dates_at_the_edges_of_the_calendar() {
    assert_value("'' + Date(-1, 1, 1)", Variant::from("-0001-01-01T00:00:00Z"));
    assert_value("'at ' + Date(-9999, 1, 1, 12)", Variant::from("at -9999-01-01T12:00:00Z"));
    assert_value("'' + Date(9999, 12, 31)", Variant::from("9999-12-31T00:00:00Z"));
    assert_true("Date(-62198755200) = Date(-1, 1, 1)");
    assert_true("Date(-1, 1, 1) < Date(1, 1, 1)");

    let value = calculate("Date(-1, 6, 15)").unwrap();
    assert_eq!(value.to_string(), "-0001-06-15T00:00:00Z");

    assert!(matches!(eval_error("Date(10000, 1, 1)"), EvalError::CalculationFailed { .. }));
    assert!(matches!(eval_error("Date(-400000000000)"), EvalError::CalculationFailed { .. }));
}

#[test]
fn time_spans() {
    assert_value("TimeSpan(1500)", Variant::from(Duration::milliseconds(1500)));
    assert_value("TimeSpan(0, 1, 30)", Variant::from(Duration::minutes(90)));
    assert_value("TimeSpan(0, 0, 0, 2, 5)", Variant::from(Duration::milliseconds(2005)));
    assert_value("-TimeSpan(10)", Variant::from(Duration::milliseconds(-10)));
}

#[test]
fn clock_functions() {
    assert_eq!(calculate("Now()").unwrap().variant_type(), VariantType::DateTime);
    assert_true("Ticks() > 1700000000");
    assert_true("Now() > Date(2024, 1, 1)");
}

#[test]
fn value_functions() {
    assert_true("Empty('') AND Empty(NULL) AND Empty(Array())");
    assert_value("Empty(0)", Variant::Boolean(false));
    assert_true("Contains('haystack', 'st')");
    assert_true("Contains(1234, 23)");
    assert_value("Contains(NULL, 'a')", Variant::Boolean(false));
    assert_value("Array(1, 'a')", Variant::from(vec![Variant::Integer(1), Variant::from("a")]));
    assert_value("Array()", Variant::Array(vec![]));
}

#[test]
fn strict_policy_applies_inside_functions() {
    let options = CalculatorOptions { policy: Policy::Strict,
                                      ..CalculatorOptions::default() };
    let mut calculator = ExpressionCalculator::with_options(options);

    calculator.set_expression("Sqrt(16)").unwrap();
    assert_eq!(calculator.evaluate().unwrap(), Variant::Double(4.0));

    calculator.set_expression("Sqrt('16')").unwrap();
    assert!(matches!(calculator.evaluate(), Err(EvalError::ConversionNotSupported { .. })));
}
