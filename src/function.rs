use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::class::Instance;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::interpreter::{Interpreter, Unwind};
use crate::object::{Callable, Object};
use crate::stmt::FunctionData;

/// A user-defined function (or method): its declaration plus the
/// environment that was current at its declaration site. A bound method is
/// simply a `Function` produced by [`Function::bind`] whose closure has
/// been extended with `this`.
#[derive(Debug, Clone)]
pub struct Function {
    declaration: Rc<FunctionData>,
    closure: Rc<RefCell<Environment>>,
    is_initializer: bool,
}

impl Function {
    pub fn new(declaration: Rc<FunctionData>, closure: Rc<RefCell<Environment>>, is_initializer: bool) -> Self {
        Function { declaration, closure, is_initializer }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    pub fn bind(&self, instance: Rc<RefCell<Instance>>) -> Function {
        let env = Environment::with_enclosing(Rc::clone(&self.closure));
        env.borrow_mut().define("this", Object::Instance(instance));
        Function { declaration: Rc::clone(&self.declaration), closure: env, is_initializer: self.is_initializer }
    }
}

impl Callable for Function {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        let env = Environment::with_enclosing(Rc::clone(&self.closure));
        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            env.borrow_mut().define(param.lexeme.clone(), argument);
        }

        let receiver = || Environment::get_at(&self.closure, 0, "this");

        match interpreter.execute_block(&self.declaration.body, env) {
            Ok(()) => Ok(if self.is_initializer { receiver() } else { Object::Nil }),
            Err(Unwind::Return(value)) => Ok(if self.is_initializer { receiver() } else { value }),
            Err(Unwind::Error(err)) => Err(err),
        }
    }
}

/// A host-provided function, such as `clock`. Holds its implementation as a
/// boxed closure so `clock` can capture the injected time source without
/// the interpreter core touching `std::time` directly.
pub struct NativeFunction {
    name: String,
    arity: usize,
    implementation: Box<dyn Fn(&mut Interpreter, Vec<Object>) -> Result<Object, RuntimeError>>,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<String>,
        arity: usize,
        implementation: impl Fn(&mut Interpreter, Vec<Object>) -> Result<Object, RuntimeError> + 'static,
    ) -> Self {
        NativeFunction { name: name.into(), arity, implementation: Box::new(implementation) }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction").field("name", &self.name).finish()
    }
}

impl Callable for NativeFunction {
    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Object>) -> Result<Object, RuntimeError> {
        (self.implementation)(interpreter, arguments)
    }
}
