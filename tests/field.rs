mod common;

use common::run;

#[test]
fn undefined_field_read_is_a_runtime_error() {
    let (_, err) = run(r#"class Box {} var b = Box(); print b.contents;"#);
    assert_eq!(err, "Undefined property 'contents'.\n[line 1]\n");
}

#[test]
fn setting_a_field_on_a_non_instance_is_a_runtime_error() {
    let (_, err) = run(r#"var n = 1; n.x = 2;"#);
    assert_eq!(err, "Only instances have fields.\n[line 1]\n");
}

#[test]
fn reading_a_property_on_a_non_instance_is_a_runtime_error() {
    let (_, err) = run(r#"var n = 1; print n.x;"#);
    assert_eq!(err, "Only instances have properties.\n[line 1]\n");
}

#[test]
fn fields_shadow_methods_of_the_same_name() {
    let (out, _) = run(
        r#"class Box { value() { return "method"; } }
           var b = Box();
           b.value = "field";
           print b.value;"#,
    );
    assert_eq!(out, "field\n");
}

#[test]
fn set_expression_evaluates_to_the_assigned_value() {
    let (out, _) = run(
        r#"class Box {}
           var b = Box();
           print b.x = 7;"#,
    );
    assert_eq!(out, "7\n");
}
