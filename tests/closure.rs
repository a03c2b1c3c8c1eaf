mod common;

use common::run;

#[test]
fn each_call_captures_a_fresh_environment() {
    let (out, _) = run(
        r#"fun makeCounter() {
               var i = 0;
               fun count() { i = i + 1; return i; }
               return count;
           }
           var a = makeCounter();
           var b = makeCounter();
           print a();
           print a();
           print b();"#,
    );
    assert_eq!(out, "1\n2\n1\n");
}

#[test]
fn closures_from_sibling_scopes_do_not_see_each_others_mutations() {
    let (out, _) = run(
        r#"var closures = "";
           fun outer() {
               var x = "outer";
               fun inner() { print x; }
               {
                   var x = "shadowed";
               }
               inner();
           }
           outer();"#,
    );
    assert_eq!(out, "outer\n");
}

#[test]
fn a_function_object_prints_its_name() {
    let (out, _) = run("fun add(a, b) { return a + b; } print add;");
    assert_eq!(out, "<fn add>\n");
}
