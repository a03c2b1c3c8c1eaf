mod common;

use common::run;

#[test]
fn or_short_circuits_on_truthy_left() {
    let (out, _) = run(
        r#"fun sideEffect() { print "called"; return true; }
           if (true or sideEffect()) { print "done"; }"#,
    );
    assert_eq!(out, "done\n");
}

#[test]
fn or_evaluates_right_when_left_is_falsy() {
    let (out, _) = run(r#"print false or "b";"#);
    assert_eq!(out, "b\n");
}

#[test]
fn and_short_circuits_on_falsy_left() {
    let (out, _) = run(
        r#"fun sideEffect() { print "called"; return true; }
           if (false and sideEffect()) { print "unreachable"; } else { print "done"; }"#,
    );
    assert_eq!(out, "done\n");
}

#[test]
fn and_evaluates_right_when_left_is_truthy() {
    let (out, _) = run(r#"print true and "b";"#);
    assert_eq!(out, "b\n");
}

#[test]
fn logical_operators_return_the_operand_not_a_coerced_bool() {
    let (out, _) = run(r#"print nil or "fallback";"#);
    assert_eq!(out, "fallback\n");
}
