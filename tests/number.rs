mod common;

use common::run;

#[test]
fn integral_values_print_without_trailing_dot_zero() {
    let (out, _) = run("print 42;");
    assert_eq!(out, "42\n");
}

#[test]
fn fractional_values_round_trip() {
    let (out, _) = run("print 3.25;");
    assert_eq!(out, "3.25\n");
}

#[test]
fn numbers_round_trip_through_print_and_reparse() {
    for literal in ["0", "1", "100", "3.5", "0.125", "1000000"] {
        let source = format!("print {literal};");
        let (out, _) = run(&source);
        let printed: f64 = out.trim().parse().expect("printed value re-parses as a number");
        let original: f64 = literal.parse().unwrap();
        assert_eq!(printed, original, "round trip failed for {literal}");
    }
}

#[test]
fn arithmetic_on_non_numbers_is_a_runtime_error() {
    let (_, err) = run(r#"print "a" - 1;"#);
    assert_eq!(err, "Operands must be numbers.\n[line 1]\n");
}
