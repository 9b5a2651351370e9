use fractional::{Fraction, is_fraction, is_mixed_fraction, is_single_fraction, to_float};

fn float(s: &str) -> f64 {
    to_float(&Fraction::from(s)).unwrap_or_else(|e| panic!("failed to convert '{s}': {e}"))
}

#[test]
fn test_grammar_classification() {
    assert!(is_single_fraction("1/2"));
    assert!(is_mixed_fraction("1 1/2"));
    assert!(is_fraction("1/2"));
    assert!(is_fraction("1 1/2"));

    assert!(!is_fraction("2.3"));
    assert!(!is_fraction("2/3 9/5"));
    assert!(!is_fraction("n/a"));
}

#[test]
fn test_single_fractions() {
    assert_eq!(float("1/2"), 0.5);
    assert_eq!(float("-7/8"), -0.875);
    assert_eq!(float("3/4"), 0.75);
}

#[test]
fn test_mixed_fractions() {
    assert_eq!(float("1 1/2"), 1.5);
    assert_eq!(float("1100 7/8"), 1100.875);
    assert_eq!(float("-10 1/2"), -10.5);
}

#[test]
fn test_sign_handling() {
    assert_eq!(float("1/-64"), -0.015625);
    assert_eq!(float("-1/-64"), 0.015625);
    assert_eq!(float("-1/64"), -0.015625);
}

#[test]
fn test_negative_zero_whole_part_edge_case() {
    // The mixed-fraction sign rule negates only when the whole part is less
    // than zero, so a "-0" whole part leaves the value positive.
    assert_eq!(float("-0 1/2"), 0.5);
}

#[test]
fn test_plain_numbers_pass_through() {
    assert_eq!(float("2.3"), 2.3);
    assert_eq!(float("-11"), -11.0);
    assert_eq!(to_float(&Fraction::Number(1.25)).unwrap(), 1.25);
}

#[test]
fn test_unparseable_input_is_a_format_error() {
    let err = to_float(&Fraction::from("one half")).unwrap_err();
    assert_eq!(err.input(), "one half");
}
