mod common;

use common::run;

#[test]
fn calling_a_non_callable_is_a_runtime_error() {
    let (_, err) = run("var n = 1; n();");
    assert_eq!(err, "Can only call functions and classes.\n[line 1]\n");
}

#[test]
fn arguments_are_evaluated_left_to_right() {
    let (out, _) = run(
        r#"var log = "";
           fun note(x) { print x; return x; }
           fun two(a, b) {}
           two(note("first"), note("second"));"#,
    );
    assert_eq!(out, "first\nsecond\n");
}

#[test]
fn native_clock_is_callable_with_no_arguments() {
    let (out, _) = run("print clock() > 0;");
    assert_eq!(out, "true\n");
}

#[test]
fn calling_clock_with_arguments_is_a_runtime_error() {
    let (_, err) = run("clock(1);");
    assert_eq!(err, "Expected 0 arguments but got 1.\n[line 1]\n");
}

#[test]
fn native_function_prints_as_native_fn() {
    let (out, _) = run("print clock;");
    assert_eq!(out, "<native fn>\n");
}
