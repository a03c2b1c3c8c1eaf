mod common;

use common::run;

#[test]
fn super_calls_the_parent_method() {
    let (out, _) = run(
        r#"class A { m() { return "A"; } }
           class B < A { m() { return super.m() + "B"; } }
           print B().m();"#,
    );
    assert_eq!(out, "AB\n");
}

#[test]
fn super_resolves_through_a_grandparent() {
    let (out, _) = run(
        r#"class A { greet() { return "A"; } }
           class B < A {}
           class C < B { greet() { return super.greet() + "C"; } }
           print C().greet();"#,
    );
    assert_eq!(out, "AC\n");
}

#[test]
fn super_outside_a_class_is_a_static_error() {
    let (_, err) = run("print super.m();");
    assert!(err.contains("Cannot use 'super' outside of a class."), "got: {err}");
}

#[test]
fn super_with_no_superclass_is_a_static_error() {
    let (_, err) = run("class A { m() { return super.m(); } }");
    assert!(err.contains("Cannot use 'super' in a class with no superclass."), "got: {err}");
}
