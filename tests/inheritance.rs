mod common;

use common::run;

#[test]
fn subclass_inherits_parent_methods() {
    let (out, _) = run(
        r#"class Doughnut { cook() { print "Fry until golden brown."; } }
           class BostonCream < Doughnut {}
           BostonCream().cook();"#,
    );
    assert_eq!(out, "Fry until golden brown.\n");
}

#[test]
fn subclass_can_override_a_parent_method() {
    let (out, _) = run(
        r#"class Doughnut { cook() { print "plain"; } }
           class BostonCream < Doughnut { cook() { print "with cream"; } }
           BostonCream().cook();"#,
    );
    assert_eq!(out, "with cream\n");
}

#[test]
fn a_class_cannot_inherit_from_itself() {
    let (_, err) = run("class Oops < Oops {}");
    assert!(err.contains("A class can't inherit from itself."), "got: {err}");
}

#[test]
fn superclass_must_evaluate_to_a_class() {
    let (_, err) = run(
        r#"var NotAClass = "just a string";
           class Sub < NotAClass {}"#,
    );
    assert_eq!(err, "Superclass must be a class.\n[line 2]\n");
}
