use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::RuntimeError;
use crate::function::Function;
use crate::interpreter::Interpreter;
use crate::object::{Callable, Object};
use crate::token::Token;

/// A class: its name, optional superclass, and its own (non-inherited)
/// methods. Immutable once built by the `Class` statement handler.
#[derive(Debug)]
pub struct Class {
    pub name: String,
    superclass: Option<Rc<Class>>,
    methods: HashMap<String, Function>,
}

impl Class {
    pub fn new(name: impl Into<String>, superclass: Option<Rc<Class>>, methods: HashMap<String, Function>) -> Self {
        Class { name: name.into(), superclass, methods }
    }

    /// Own methods first, then the superclass chain; first match wins.
    pub fn find_method(&self, name: &str) -> Option<Function> {
        if let Some(method) = self.methods.get(name) {
            return Some(method.clone());
        }
        self.superclass.as_ref().and_then(|s| s.find_method(name))
    }

    /// Arity of the class equals `init`'s arity, or 0 if it has none.
    pub fn arity(&self) -> usize {
        self.find_method("init").map_or(0, |init| init.arity())
    }

    /// Classes are invoked through the `Object::Class(Rc<Class>)` handle
    /// rather than through the `Callable` trait, since constructing an
    /// instance needs a strong reference to the class itself (to store on
    /// the new instance, and to bind `init` against it).
    pub fn instantiate(
        self_rc: &Rc<Class>,
        interpreter: &mut Interpreter,
        arguments: Vec<Object>,
    ) -> Result<Object, RuntimeError> {
        let instance = Rc::new(RefCell::new(Instance { class: Rc::clone(self_rc), fields: HashMap::new() }));

        if let Some(init) = self_rc.find_method("init") {
            init.bind(Rc::clone(&instance)).call(interpreter, arguments)?;
        }

        Ok(Object::Instance(instance))
    }
}

/// A class instance: a pointer back to its class plus a mutable field map.
#[derive(Debug)]
pub struct Instance {
    pub class: Rc<Class>,
    fields: HashMap<String, Object>,
}

impl Instance {
    pub fn get(this: &Rc<RefCell<Instance>>, name: &Token) -> Result<Object, RuntimeError> {
        {
            let borrowed = this.borrow();
            if let Some(value) = borrowed.fields.get(&name.lexeme) {
                return Ok(value.clone());
            }
        }

        let class = Rc::clone(&this.borrow().class);
        if let Some(method) = class.find_method(&name.lexeme) {
            return Ok(Object::Function(Rc::new(method.bind(Rc::clone(this)))));
        }

        Err(RuntimeError::new(name.clone(), format!("Undefined property '{}'.", name.lexeme)))
    }

    pub fn set(&mut self, name: &Token, value: Object) {
        self.fields.insert(name.lexeme.clone(), value);
    }
}
