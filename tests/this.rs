mod common;

use common::run;

#[test]
fn this_refers_to_the_receiver() {
    let (out, _) = run(
        r#"class Cake {
               taste() {
                   var adjective = "delicious";
                   print "The " + this.flavor + " cake is " + adjective + "!";
               }
           }
           var cake = Cake();
           cake.flavor = "German chocolate";
           cake.taste();"#,
    );
    assert_eq!(out, "The German chocolate cake is delicious!\n");
}

#[test]
fn bound_method_keeps_its_receiver_after_reassignment() {
    let (out, _) = run(
        r#"class Person {
               sayName() { print this.name; }
           }
           var jane = Person();
           jane.name = "Jane";
           var method = jane.sayName;
           method();"#,
    );
    assert_eq!(out, "Jane\n");
}

#[test]
fn this_outside_a_class_is_a_static_error() {
    let (_, err) = run("print this;");
    assert_eq!(err, "[line 1] Error at 'this': Cannot use 'this' outside of a class.\n");
}
