// Number conversion through the public parser, including IEEE-754 boundary values

use scratchjson::{parse_str, ParseError, Value, ValueType};
use test_log::test;

fn parse_number(json: &str) -> f64 {
    let v = parse_str(json).unwrap_or_else(|e| panic!("{json:?} failed: {e:?}"));
    assert_eq!(v.get_type(), ValueType::Number, "{json:?}");
    v.get_number()
}

macro_rules! number_tests {
    ($($name:ident: $expected:expr, $json:expr;)*) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_number_ $name>]() {
                    let expected: f64 = $expected;
                    let parsed = parse_number($json);
                    assert_eq!(parsed, expected, "input: {}", $json);
                    // Boundary values must match bit for bit, including the sign of zero
                    assert_eq!(parsed.to_bits(), expected.to_bits(), "input: {}", $json);
                }
            }
        )*
    };
}

number_tests! {
    zero: 0.0, "0";
    negative_zero: -0.0, "-0";
    negative_zero_fraction: -0.0, "-0.0";
    one: 1.0, "1";
    negative_one: -1.0, "-1";
    one_and_half: 1.5, "1.5";
    negative_one_and_half: -1.5, "-1.5";
    pi_ish: 3.1416, "3.1416";
    exp_upper: 1E10, "1E10";
    exp_lower: 1e10, "1e10";
    exp_plus: 1E+10, "1E+10";
    exp_minus: 1E-10, "1E-10";
    negative_exp_upper: -1E10, "-1E10";
    negative_exp_lower: -1e10, "-1e10";
    negative_exp_plus: -1E+10, "-1E+10";
    negative_exp_minus: -1E-10, "-1E-10";
    mantissa_exp_plus: 1.234E+10, "1.234E+10";
    mantissa_exp_minus: 1.234E-10, "1.234E-10";
    underflow: 0.0, "1e-10000";
    smallest_above_one: 1.0000000000000002, "1.0000000000000002";
    min_denormal: 4.9406564584124654e-324, "4.9406564584124654e-324";
    negative_min_denormal: -4.9406564584124654e-324, "-4.9406564584124654e-324";
    max_subnormal: 2.2250738585072009e-308, "2.2250738585072009e-308";
    negative_max_subnormal: -2.2250738585072009e-308, "-2.2250738585072009e-308";
    min_normal: 2.2250738585072014e-308, "2.2250738585072014e-308";
    negative_min_normal: -2.2250738585072014e-308, "-2.2250738585072014e-308";
    max_double: 1.7976931348623157e+308, "1.7976931348623157e+308";
    negative_max_double: -1.7976931348623157e+308, "-1.7976931348623157e+308";
}

#[test]
fn test_boundary_constants_match_std() {
    assert_eq!(parse_number("1.0000000000000002"), 1.0 + f64::EPSILON);
    assert_eq!(parse_number("4.9406564584124654e-324"), f64::from_bits(1));
    assert_eq!(
        parse_number("2.2250738585072009e-308"),
        f64::from_bits(0x000f_ffff_ffff_ffff)
    );
    assert_eq!(parse_number("2.2250738585072014e-308"), f64::MIN_POSITIVE);
    assert_eq!(parse_number("1.7976931348623157e+308"), f64::MAX);
}

#[test]
fn test_formatted_doubles_round_trip() {
    let samples = [
        0.1,
        -123.456,
        1.0 / 3.0,
        6.02214076e23,
        f64::EPSILON,
        f64::MIN_POSITIVE,
        f64::MAX,
        f64::MIN,
        f64::from_bits(1),
        f64::from_bits(0x000f_ffff_ffff_ffff),
    ];
    for d in samples {
        for json in [format!("{d}"), format!("{d:e}"), format!("{d:?}")] {
            assert_eq!(parse_number(&json).to_bits(), d.to_bits(), "{json}");
        }
    }
}

#[test]
fn test_overflow_is_infinite() {
    let n = parse_number("1e400");
    assert!(n.is_infinite() && n.is_sign_positive());
    let n = parse_number("-1e400");
    assert!(n.is_infinite() && n.is_sign_negative());
}

#[test]
fn test_conversion_accepts_more_than_json_grammar() {
    // Whatever the string-to-double conversion takes is a number
    assert_eq!(parse_number("+1"), 1.0);
    assert_eq!(parse_number(".5"), 0.5);
    assert_eq!(parse_number("1."), 1.0);
    assert_eq!(parse_number("0123"), 123.0);
    assert!(parse_number("Infinity").is_infinite());
    assert!(parse_number("-inf").is_infinite());
    assert!(parse_number("-nan").is_nan());
}

#[test]
fn test_literal_dispatch_shadows_special_words() {
    // 'n' always selects the null literal
    assert_eq!(parse_str("nan"), Err(ParseError::InvalidValue));
}

#[test]
fn test_numbers_inside_containers() {
    let v = parse_str("[-0.5,1e3,{\"n\":2E-2}]").unwrap();
    assert_eq!(v.get_array_element(0).get_number(), -0.5);
    assert_eq!(v.get_array_element(1).get_number(), 1000.0);
    assert_eq!(
        v.get_array_element(2).find_member("n"),
        Some(&Value::Number(0.02))
    );
}
