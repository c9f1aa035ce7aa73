use catchcompare::{compare, compare_with_tolerance};

#[test]
fn test_identical_values_match() {
    for value in ["1000.0", "-3.5", "1e-12", "123456.789"] {
        let cmp = compare(value, value);
        assert!(cmp.matches, "{value} should match itself");
        assert_eq!(cmp.relative_error, Some(0.0));
    }
}

#[test]
fn test_zero_baseline_uses_absolute_difference() {
    assert!(compare("0", "0").matches);
    assert!(compare("0", "1e-7").matches);
    let far = compare("0", "1");
    assert!(!far.matches);
    assert_eq!(far.relative_error, Some(1.0));
}

#[test]
fn test_relative_error_normalises_by_sequential_value() {
    let close = compare("1000.0", "1000.0001");
    assert!(close.matches);
    let err = close.relative_error.expect("defined");
    assert!((err - 1e-7).abs() < 1e-9);

    let off = compare("1000.0", "999.0");
    assert!(!off.matches);
    assert!((off.relative_error.expect("defined") - 1e-3).abs() < 1e-12);
    assert!((off.absolute_diff.expect("defined") - 1.0).abs() < 1e-12);
}

#[test]
fn test_relative_error_is_asymmetric() {
    let forward = compare("2.0", "1.0").relative_error.expect("defined");
    let backward = compare("1.0", "2.0").relative_error.expect("defined");
    assert!((forward - 0.5).abs() < 1e-12);
    assert!((backward - 1.0).abs() < 1e-12);
}

#[test]
fn test_non_numeric_input_is_a_mismatch() {
    let cmp = compare("abc", "1.0");
    assert!(!cmp.matches);
    assert_eq!(cmp.absolute_diff, None);
    assert_eq!(cmp.relative_error, None);
    assert_eq!(cmp.relative_error_label(), "undefined");
    assert_eq!(compare("1000.0", "999.0").relative_error_label(), "1.00e-03");
    assert_eq!(compare("1.0", "3.0").relative_error_label(), "2.00e+00");

    assert!(!compare("1.0", "N/A").matches);
}

#[test]
fn test_custom_tolerance() {
    assert!(!compare("100.0", "100.1").matches);
    assert!(compare_with_tolerance("100.0", "100.1", 1e-2).matches);
}
