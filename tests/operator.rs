mod common;

use common::run;

#[test]
fn arithmetic_operators() {
    let (out, _) = run(
        r#"print 1 + 2;
           print 5 - 3;
           print 4 * 2;
           print 9 / 2;"#,
    );
    assert_eq!(out, "3\n2\n8\n4.5\n");
}

#[test]
fn string_concatenation() {
    let (out, _) = run(r#"print "foo" + "bar";"#);
    assert_eq!(out, "foobar\n");
}

#[test]
fn mixed_plus_operands_is_a_runtime_error() {
    let (_, err) = run(r#"print "foo" + 1;"#);
    assert_eq!(err, "Operands must be two numbers or two strings.\n[line 1]\n");
}

#[test]
fn comparison_operators() {
    let (out, _) = run(
        r#"print 1 < 2;
           print 2 <= 2;
           print 3 > 2;
           print 2 >= 3;"#,
    );
    assert_eq!(out, "true\ntrue\ntrue\nfalse\n");
}

#[test]
fn equality_never_errors_across_types() {
    let (out, _) = run(
        r#"print 1 == "1";
           print nil == false;
           print nil == nil;
           print 1 == 1;"#,
    );
    assert_eq!(out, "false\nfalse\ntrue\ntrue\n");
}

#[test]
fn unary_negation_and_not() {
    let (out, _) = run(
        r#"print -5;
           print !true;
           print !nil;
           print !0;"#,
    );
    assert_eq!(out, "-5\nfalse\ntrue\nfalse\n");
}

#[test]
fn unary_minus_on_a_non_number_is_a_runtime_error() {
    let (_, err) = run(r#"print -"a";"#);
    assert_eq!(err, "Operand must be number.\n[line 1]\n");
}

#[test]
fn comparison_requires_numbers() {
    let (_, err) = run(r#"print "a" < 1;"#);
    assert_eq!(err, "Operands must be numbers.\n[line 1]\n");
}
