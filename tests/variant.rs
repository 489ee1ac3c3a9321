use reckon::{
    error::EvalError,
    interpreter::{
        coercion::{CoercionPolicy, PermissivePolicy, StrictPolicy},
        value::{
            core::{Variant, VariantType},
            object::Object,
        },
    },
};
use time::{Date, Duration, Month, OffsetDateTime, macros::datetime};

fn assert_converts(policy: &dyn CoercionPolicy, value: &Variant, target: VariantType, expected: &Variant) {
    match policy.convert(value, target) {
        Ok(converted) => assert_eq!(&converted, expected, "{value:?} -> {target}"),
        Err(e) => panic!("{value:?} -> {target} failed: {e}"),
    }
}

fn assert_refuses(policy: &dyn CoercionPolicy, value: &Variant, target: VariantType) {
    match policy.convert(value, target) {
        Ok(converted) => panic!("{value:?} -> {target} gave {converted:?} but was expected to fail"),
        Err(e) => assert!(matches!(e, EvalError::ConversionNotSupported { .. }), "{e}"),
    }
}

#[test]
fn type_tags_and_accessors() {
    assert_eq!(Variant::from(3).variant_type(), VariantType::Integer);
    assert_eq!(Variant::from(3_i64).variant_type(), VariantType::Long);
    assert_eq!(Variant::from(1.5_f32).variant_type(), VariantType::Float);
    assert_eq!(Variant::from(Duration::seconds(1)).variant_type(), VariantType::TimeSpan);
    assert_eq!(Variant::from(None::<i32>), Variant::Null);
    assert_eq!(Variant::from(Some("x")), Variant::from("x"));

    assert_eq!(Variant::Long(9).as_long(), Some(9));
    assert_eq!(Variant::Long(9).as_integer(), None);
    assert_eq!(Variant::from("abc").as_str(), Some("abc"));
    assert!(VariantType::Float.is_numeric());
    assert!(!VariantType::String.is_numeric());
}

#[test]
fn emptiness() {
    assert!(Variant::Null.is_empty());
    assert!(Variant::from("").is_empty());
    assert!(Variant::Array(vec![]).is_empty());
    assert!(!Variant::Integer(0).is_empty());
    assert!(!Variant::from(" ").is_empty());
}

#[test]
fn display_forms() {
    assert_eq!(Variant::Null.to_string(), "");
    assert_eq!(Variant::Double(2.5).to_string(), "2.5");
    assert_eq!(Variant::Boolean(true).to_string(), "true");
    assert_eq!(Variant::from(Duration::milliseconds(1500)).to_string(), "1500");
    assert_eq!(Variant::from(datetime!(2024-03-01 12:30:00 UTC)).to_string(),
               "2024-03-01T12:30:00Z");
    assert_eq!(Variant::from(vec![Variant::Integer(1), Variant::from("a")]).to_string(), "[1, a]");
}

#[test]
fn strict_policy_only_widens() {
    let policy = StrictPolicy;
    assert_converts(&policy, &Variant::Integer(7), VariantType::Long, &Variant::Long(7));
    assert_converts(&policy, &Variant::Integer(7), VariantType::Float, &Variant::Float(7.0));
    assert_converts(&policy, &Variant::Long(7), VariantType::Double, &Variant::Double(7.0));
    assert_converts(&policy, &Variant::Float(0.5), VariantType::Double, &Variant::Double(0.5));
    assert_converts(&policy, &Variant::from("x"), VariantType::String, &Variant::from("x"));
    assert_converts(&policy, &Variant::Integer(1), VariantType::Null, &Variant::Null);

    assert_refuses(&policy, &Variant::Long(7), VariantType::Integer);
    assert_refuses(&policy, &Variant::Double(7.0), VariantType::Float);
    assert_refuses(&policy, &Variant::from("12"), VariantType::Integer);
    assert_refuses(&policy, &Variant::Integer(12), VariantType::String);
    assert_refuses(&policy, &Variant::Integer(1), VariantType::Boolean);
    assert_refuses(&policy, &Variant::Null, VariantType::Integer);
}

#[test]
fn permissive_policy_parses_strings() {
    let policy = PermissivePolicy;
    assert_converts(&policy, &Variant::from(" 12 "), VariantType::Integer, &Variant::Integer(12));
    assert_converts(&policy, &Variant::from("12.9"), VariantType::Integer, &Variant::Integer(12));
    assert_converts(&policy, &Variant::from("1e3"), VariantType::Double, &Variant::Double(1000.0));
    assert_converts(&policy, &Variant::from("no"), VariantType::Boolean, &Variant::Boolean(false));
    assert_converts(&policy, &Variant::from("T"), VariantType::Boolean, &Variant::Boolean(true));
    assert_converts(&policy, &Variant::from("250"), VariantType::TimeSpan,
                    &Variant::from(Duration::milliseconds(250)));
    assert_converts(&policy,
                    &Variant::from("2024-03-01T12:30:00Z"),
                    VariantType::DateTime,
                    &Variant::from(datetime!(2024-03-01 12:30:00 UTC)));

    assert_refuses(&policy, &Variant::from("twelve"), VariantType::Integer);
    assert_refuses(&policy, &Variant::from("maybe"), VariantType::Boolean);
}

#[test]
fn permissive_policy_narrows_and_stringifies() {
    let policy = PermissivePolicy;
    assert_converts(&policy, &Variant::Double(-2.9), VariantType::Integer, &Variant::Integer(-2));
    assert_converts(&policy, &Variant::Long(1 << 32), VariantType::Integer, &Variant::Integer(0));
    assert_converts(&policy, &Variant::Double(2.5), VariantType::Long, &Variant::Long(2));
    assert_converts(&policy, &Variant::Integer(42), VariantType::String, &Variant::from("42"));
    assert_converts(&policy, &Variant::Null, VariantType::String, &Variant::from(""));
    assert_converts(&policy, &Variant::Boolean(true), VariantType::Integer, &Variant::Integer(1));
    assert_converts(&policy, &Variant::Integer(0), VariantType::Boolean, &Variant::Boolean(false));
    assert_converts(&policy, &Variant::Double(0.1), VariantType::Boolean, &Variant::Boolean(true));
}

#[test]
fn permissive_policy_maps_numbers_to_time() {
    let policy = PermissivePolicy;
    let moment = datetime!(2001-09-09 01:46:40 UTC);

    assert_converts(&policy, &Variant::Long(1_000_000_000), VariantType::DateTime, &Variant::from(moment));
    assert_converts(&policy, &Variant::from(moment), VariantType::Long, &Variant::Long(1_000_000_000));
    assert_converts(&policy, &Variant::Integer(90), VariantType::TimeSpan,
                    &Variant::from(Duration::milliseconds(90)));
    assert_converts(&policy, &Variant::from(Duration::seconds(2)), VariantType::Integer, &Variant::Integer(2000));

    assert_refuses(&policy, &Variant::from(moment), VariantType::TimeSpan);
    assert_refuses(&policy, &Variant::from(Duration::seconds(2)), VariantType::Boolean);
}

#[test]
fn timestamps_outside_four_digit_years_render() {
    let before_year_zero = Date::from_calendar_date(-1, Month::January, 1).unwrap()
                                                                         .midnight()
                                                                         .assume_utc();
    assert_eq!(Variant::from(before_year_zero).to_string(), "-0001-01-01T00:00:00Z");

    let earliest = Date::from_calendar_date(-9999, Month::January, 1).unwrap()
                                                                     .with_hms_milli(6, 5, 4, 30)
                                                                     .unwrap()
                                                                     .assume_utc();
    assert_eq!(Variant::from(earliest).to_string(), "-9999-01-01T06:05:04.030Z");
    assert_eq!(Variant::from(datetime!(9999-12-31 23:59:59 UTC)).to_string(), "9999-12-31T23:59:59Z");
}

#[test]
fn permissive_policy_stringifies_distant_timestamps() {
    let policy = PermissivePolicy;

    let converted = policy.convert(&Variant::Long(-62_198_755_200), VariantType::DateTime).unwrap();
    assert_eq!(converted.as_datetime().map(OffsetDateTime::year), Some(-1));
    assert_converts(&policy, &converted, VariantType::String, &Variant::from("-0001-01-01T00:00:00Z"));

    let earliest = policy.convert(&Variant::Long(-377_705_116_800), VariantType::DateTime).unwrap();
    assert_converts(&policy, &earliest, VariantType::String, &Variant::from("-9999-01-01T00:00:00Z"));

    assert_refuses(&policy, &Variant::Long(-377_705_116_801), VariantType::DateTime);
    assert_refuses(&policy, &Variant::Long(i64::MIN), VariantType::DateTime);
}

#[test]
fn permissive_policy_zero_values() {
    let policy = PermissivePolicy;
    assert_converts(&policy, &Variant::Null, VariantType::Integer, &Variant::Integer(0));
    assert_converts(&policy, &Variant::Null, VariantType::Boolean, &Variant::Boolean(false));
    assert_converts(&policy, &Variant::Null, VariantType::DateTime,
                    &Variant::from(OffsetDateTime::UNIX_EPOCH));
    assert_converts(&policy, &Variant::Null, VariantType::Array, &Variant::Array(vec![]));
}

#[test]
fn collections_do_not_convert() {
    for policy in [&StrictPolicy as &dyn CoercionPolicy, &PermissivePolicy] {
        assert_refuses(policy, &Variant::Array(vec![Variant::Integer(1)]), VariantType::Integer);
        assert_refuses(policy, &Variant::Integer(1), VariantType::Array);
    }
}

#[test]
fn binary_operators_convert_the_right_operand() {
    let permissive = PermissivePolicy;
    assert_eq!(permissive.add(&Variant::Double(2.5), &Variant::Integer(1)).unwrap(), Variant::Double(3.5));
    assert_eq!(permissive.add(&Variant::Integer(1), &Variant::Double(2.5)).unwrap(), Variant::Integer(3));
    assert_eq!(permissive.mul(&Variant::Integer(3), &Variant::from("4")).unwrap(), Variant::Integer(12));

    let strict = StrictPolicy;
    assert_eq!(strict.add(&Variant::Double(2.5), &Variant::Integer(1)).unwrap(), Variant::Double(3.5));
    assert!(matches!(strict.add(&Variant::Integer(1), &Variant::Double(2.5)),
                     Err(EvalError::ConversionNotSupported { from: VariantType::Double,
                                                             to: VariantType::Integer,
                                                             .. })));
}

#[test]
fn null_operands_yield_null() {
    let policy = PermissivePolicy;
    let one = Variant::Integer(1);
    assert_eq!(policy.sub(&Variant::Null, &one).unwrap(), Variant::Null);
    assert_eq!(policy.pow(&one, &Variant::Null).unwrap(), Variant::Null);
    assert_eq!(policy.greater(&Variant::Null, &one).unwrap(), Variant::Null);
    assert_eq!(policy.negate(&Variant::Null).unwrap(), Variant::Null);
    assert_eq!(policy.like(&Variant::Null, &"%".into()).unwrap(), Variant::Null);
}

#[test]
fn integer_arithmetic() {
    let policy = StrictPolicy;
    assert_eq!(policy.div(&Variant::Integer(7), &Variant::Integer(2)).unwrap(), Variant::Integer(3));
    assert_eq!(policy.rem(&Variant::Integer(-7), &Variant::Integer(2)).unwrap(), Variant::Integer(-1));
    assert_eq!(policy.rem(&Variant::Double(7.5), &Variant::Double(2.0)).unwrap(), Variant::Double(1.5));
    assert_eq!(policy.mul(&Variant::Integer(i32::MAX), &Variant::Integer(2)).unwrap(), Variant::Integer(-2));
    assert_eq!(policy.negate(&Variant::Integer(i32::MIN)).unwrap(), Variant::Integer(i32::MIN));

    assert!(matches!(policy.div(&Variant::Integer(1), &Variant::Integer(0)),
                     Err(EvalError::DivisionByZero { .. })));
    assert!(matches!(policy.rem(&Variant::Long(1), &Variant::Long(0)),
                     Err(EvalError::DivisionByZero { .. })));
    assert_eq!(policy.div(&Variant::Double(1.0), &Variant::Double(0.0)).unwrap(),
               Variant::Double(f64::INFINITY));
}

#[test]
fn power_is_exponentiation_in_double() {
    let policy = StrictPolicy;
    assert_eq!(policy.pow(&Variant::Integer(3), &Variant::Integer(3)).unwrap(), Variant::Double(27.0));
    assert_eq!(policy.pow(&Variant::Double(2.0), &Variant::Double(-1.0)).unwrap(), Variant::Double(0.5));
    assert!(matches!(policy.pow(&"2".into(), &Variant::Integer(2)),
                     Err(EvalError::OperationNotSupported { .. })));
}

#[test]
fn shifts() {
    let policy = PermissivePolicy;
    assert_eq!(policy.shl(&Variant::Integer(1), &Variant::Integer(4)).unwrap(), Variant::Integer(16));
    assert_eq!(policy.shr(&Variant::Integer(-16), &Variant::Integer(2)).unwrap(), Variant::Integer(-4));
    assert_eq!(policy.shl(&Variant::Long(1), &Variant::Double(40.0)).unwrap(), Variant::Long(1 << 40));
    assert!(policy.shl(&Variant::Double(1.0), &Variant::Integer(1)).is_err());
}

#[test]
fn temporal_arithmetic() {
    let policy = StrictPolicy;
    let start = Variant::from(datetime!(2024-01-01 00:00:00 UTC));
    let day = Variant::from(Duration::days(1));

    assert_eq!(policy.add(&start, &day).unwrap(), Variant::from(datetime!(2024-01-02 00:00:00 UTC)));
    assert_eq!(policy.sub(&start, &day).unwrap(), Variant::from(datetime!(2023-12-31 00:00:00 UTC)));
    assert_eq!(policy.sub(&policy.add(&start, &day).unwrap(), &start).unwrap(), day);
    assert_eq!(policy.negate(&day).unwrap(), Variant::from(Duration::days(-1)));
}

#[test]
fn logic_operators() {
    let policy = PermissivePolicy;
    let (t, f) = (Variant::Boolean(true), Variant::Boolean(false));
    assert_eq!(policy.and(&t, &f).unwrap(), f);
    assert_eq!(policy.or(&t, &f).unwrap(), t);
    assert_eq!(policy.xor(&t, &t).unwrap(), f);
    assert_eq!(policy.not(&f).unwrap(), t);
    assert_eq!(policy.and(&Variant::Integer(12), &Variant::Integer(10)).unwrap(), Variant::Integer(8));
    assert_eq!(policy.or(&Variant::Integer(12), &Variant::Integer(3)).unwrap(), Variant::Integer(15));
    assert_eq!(policy.not(&Variant::Null).unwrap(), t);
}

#[test]
fn equality() {
    let policy = PermissivePolicy;
    assert_eq!(policy.equal(&Variant::Null, &Variant::Null).unwrap(), Variant::Boolean(true));
    assert_eq!(policy.equal(&Variant::Null, &Variant::Integer(0)).unwrap(), Variant::Boolean(false));
    assert_eq!(policy.equal(&Variant::Integer(5), &"5".into()).unwrap(), Variant::Boolean(true));
    assert_eq!(policy.not_equal(&"5".into(), &Variant::Integer(5)).unwrap(), Variant::Boolean(false));
    assert_eq!(policy.equal(&Variant::Double(1.5), &Variant::Integer(1)).unwrap(), Variant::Boolean(false));

    let list = Variant::from(vec![Variant::Integer(1), Variant::from("a")]);
    assert_eq!(policy.equal(&list, &list.clone()).unwrap(), Variant::Boolean(true));

    assert!(StrictPolicy.equal(&Variant::Integer(5), &"5".into()).is_err());
}

#[test]
fn objects_compare_by_identity() {
    let policy = StrictPolicy;
    let shared = Object::new(41_u8);
    let a = Variant::from(shared.clone());
    let b = Variant::from(shared);
    let other = Variant::from(Object::new(41_u8));

    assert_eq!(policy.equal(&a, &b).unwrap(), Variant::Boolean(true));
    assert_eq!(policy.equal(&a, &other).unwrap(), Variant::Boolean(false));
}

#[test]
fn ordering() {
    let policy = PermissivePolicy;
    assert_eq!(policy.less(&Variant::Integer(2), &Variant::Integer(10)).unwrap(), Variant::Boolean(true));
    assert_eq!(policy.less(&"2".into(), &"10".into()).unwrap(), Variant::Boolean(false));
    assert_eq!(policy.greater_equal(&Variant::Double(2.0), &Variant::Integer(2)).unwrap(),
               Variant::Boolean(true));
    assert_eq!(policy.greater(&Variant::Double(f64::NAN), &Variant::Double(1.0)).unwrap(),
               Variant::Boolean(true));
    assert_eq!(policy.less_equal(&Variant::Boolean(false), &Variant::Boolean(true)).unwrap(),
               Variant::Boolean(true));
    assert!(policy.less(&Variant::Array(vec![]), &Variant::Array(vec![])).is_err());
}

#[test]
fn membership() {
    let policy = PermissivePolicy;
    let list = Variant::from(vec![Variant::Integer(1), Variant::Integer(2), Variant::Integer(3)]);
    assert_eq!(policy.is_in(&list, &Variant::Integer(2)).unwrap(), Variant::Boolean(true));
    assert_eq!(policy.is_in(&list, &Variant::Integer(5)).unwrap(), Variant::Boolean(false));
    assert_eq!(policy.is_in(&Variant::Integer(5), &Variant::Integer(5)).unwrap(), Variant::Boolean(true));
    assert_eq!(policy.is_in(&Variant::Null, &Variant::Null).unwrap(), Variant::Boolean(true));
}

#[test]
fn element_access() {
    let policy = PermissivePolicy;
    let list = Variant::from(vec![Variant::Integer(10), Variant::Integer(20)]);
    assert_eq!(policy.element(&list, &Variant::Integer(1)).unwrap(), Variant::Integer(20));
    assert_eq!(policy.element(&"abc".into(), &Variant::Integer(1)).unwrap(), Variant::from("b"));
    assert_eq!(policy.element(&"ae\u{301}o".into(), &Variant::Integer(1)).unwrap(),
               Variant::from("e\u{301}"));
    assert_eq!(policy.element(&list, &"0".into()).unwrap(), Variant::Integer(10));

    assert!(matches!(policy.element(&list, &Variant::Integer(2)),
                     Err(EvalError::IndexOutOfBounds { index: 2, length: 2, .. })));
    assert!(matches!(policy.element(&list, &Variant::Integer(-1)),
                     Err(EvalError::IndexOutOfBounds { .. })));
    assert!(matches!(policy.element(&Variant::Integer(5), &Variant::Integer(0)),
                     Err(EvalError::ConversionNotSupported { .. })));
}

#[test]
fn like_patterns() {
    let policy = PermissivePolicy;
    let matches = |value: &str, pattern: &str| policy.like(&value.into(), &pattern.into()).unwrap();

    assert_eq!(matches("Apple", "a%"), Variant::Boolean(true));
    assert_eq!(matches("Apple", "_pple"), Variant::Boolean(true));
    assert_eq!(matches("Apple", "%x%"), Variant::Boolean(false));
    assert_eq!(matches("a.b", "a.b"), Variant::Boolean(true));
    assert_eq!(matches("axb", "a.b"), Variant::Boolean(false));
    assert_eq!(policy.like(&Variant::Integer(123), &"1%".into()).unwrap(), Variant::Boolean(true));
}
