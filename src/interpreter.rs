use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::class::{Class, Instance};
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::expr::{AssignData, BinaryData, CallData, Expr, GetData, LogicalData, SetData, SuperData, UnaryData};
use crate::function::{Function, NativeFunction};
use crate::object::Object;
use crate::stmt::{ClassData, Stmt};
use crate::token::{Token, TokenType};

/// A sink for `print` output and any other text the running program emits,
/// shared rather than borrowed so the interpreter can outlive a single
/// `interpret` call without threading a writer through every signature.
pub type SharedWriter = Rc<RefCell<dyn Write>>;

/// The non-local control signal a `return` statement unwinds with, kept
/// distinct from [`RuntimeError`] so it can only be caught at a function's
/// own call boundary ([`crate::function::Function::call`]) and nowhere
/// else.
pub enum Unwind {
    Error(RuntimeError),
    Return(Object),
}

impl From<RuntimeError> for Unwind {
    fn from(err: RuntimeError) -> Self {
        Unwind::Error(err)
    }
}

/// Walks the AST, maintaining the current environment, the globals
/// environment, and the resolver's use-site → depth side-table.
pub struct Interpreter {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<u32, usize>,
    stdout: SharedWriter,
}

impl Interpreter {
    pub fn new(now_fn: fn() -> f64, stdout: SharedWriter) -> Self {
        let globals = Environment::new();
        globals.borrow_mut().define(
            "clock",
            Object::NativeFunction(Rc::new(NativeFunction::new("clock", 0, move |_interp, _args| {
                Ok(Object::Number(now_fn()))
            }))),
        );

        Interpreter { environment: Rc::clone(&globals), globals, locals: HashMap::new(), stdout }
    }

    /// Records the resolver's computed scope distance for a use-site node.
    pub fn resolve(&mut self, id: u32, depth: usize) {
        self.locals.insert(id, depth);
    }

    /// Executes a full program. Stops at the first runtime error, per §7:
    /// a runtime error halts the remaining statements of the current run.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            match self.execute(stmt) {
                Ok(()) => {}
                Err(Unwind::Error(err)) => return Err(err),
                Err(Unwind::Return(_)) => {
                    unreachable!("the resolver rejects `return` outside a function")
                }
            }
        }
        Ok(())
    }

    /// Runs `statements` in a fresh environment, restoring the previous one
    /// on every exit path — normal completion, a runtime error, or a return
    /// carrier unwinding through it.
    pub fn execute_block(&mut self, statements: &[Stmt], env: Rc<RefCell<Environment>>) -> Result<(), Unwind> {
        let previous = std::mem::replace(&mut self.environment, env);
        let result = statements.iter().try_for_each(|stmt| self.execute(stmt));
        self.environment = previous;
        result
    }

    fn execute(&mut self, stmt: &Stmt) -> Result<(), Unwind> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                let _ = writeln!(self.stdout.borrow_mut(), "{value}");
                Ok(())
            }
            Stmt::Var(data) => {
                let value = match &data.initializer {
                    Some(init) => self.evaluate(init)?,
                    None => Object::Nil,
                };
                self.environment.borrow_mut().define(data.name.lexeme.clone(), value);
                Ok(())
            }
            Stmt::Block(statements) => {
                let env = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, env)
            }
            Stmt::If(data) => {
                if self.evaluate(&data.condition)?.is_truthy() {
                    self.execute(&data.then_branch)
                } else if let Some(else_branch) = &data.else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While(data) => {
                while self.evaluate(&data.condition)?.is_truthy() {
                    self.execute(&data.body)?;
                }
                Ok(())
            }
            Stmt::Function(declaration) => {
                let function = Function::new(Rc::clone(declaration), Rc::clone(&self.environment), false);
                self.environment
                    .borrow_mut()
                    .define(declaration.name.lexeme.clone(), Object::Function(Rc::new(function)));
                Ok(())
            }
            Stmt::Return(data) => {
                let value = match &data.value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Object::Nil,
                };
                Err(Unwind::Return(value))
            }
            Stmt::Class(data) => self.execute_class(data).map_err(Unwind::from),
        }
    }

    fn execute_class(&mut self, data: &ClassData) -> Result<(), RuntimeError> {
        let superclass = match &data.superclass {
            Some(expr) => {
                let value = self.evaluate(expr).map_err(unwind_to_runtime)?;
                match value {
                    Object::Class(class) => Some(class),
                    _ => {
                        let name_token = match expr {
                            Expr::Variable(v) => v.name.clone(),
                            _ => unreachable!("parser only emits Variable for a superclass expression"),
                        };
                        return Err(RuntimeError::new(name_token, "Superclass must be a class."));
                    }
                }
            }
            None => None,
        };

        self.environment.borrow_mut().define(data.name.lexeme.clone(), Object::Nil);

        let method_env = if let Some(superclass) = &superclass {
            let env = Environment::with_enclosing(Rc::clone(&self.environment));
            env.borrow_mut().define("super", Object::Class(Rc::clone(superclass)));
            env
        } else {
            Rc::clone(&self.environment)
        };

        let mut methods = HashMap::new();
        for method in &data.methods {
            let is_initializer = method.name.lexeme == "init";
            let function = Function::new(Rc::clone(method), Rc::clone(&method_env), is_initializer);
            methods.insert(method.name.lexeme.clone(), function);
        }

        let class = Rc::new(Class::new(data.name.lexeme.clone(), superclass, methods));

        self.environment
            .borrow_mut()
            .assign(&data.name, Object::Class(class))
            .expect("class name was just defined in this environment");

        Ok(())
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Object, Unwind> {
        match expr {
            Expr::Literal(literal) => Ok(Object::from(literal.clone())),
            Expr::Grouping(data) => self.evaluate(&data.expression),
            Expr::Unary(data) => self.evaluate_unary(data),
            Expr::Binary(data) => self.evaluate_binary(data),
            Expr::Logical(data) => self.evaluate_logical(data),
            Expr::Variable(data) => self.lookup_variable(data.id, &data.name).map_err(Unwind::from),
            Expr::Assign(data) => self.evaluate_assign(data),
            Expr::Call(data) => self.evaluate_call(data),
            Expr::Get(data) => self.evaluate_get(data),
            Expr::Set(data) => self.evaluate_set(data),
            Expr::This(data) => {
                Ok(Environment::get_at(&self.environment, self.depth_of(data.id), "this"))
            }
            Expr::Super(data) => self.evaluate_super(data).map_err(Unwind::from),
        }
    }

    fn depth_of(&self, id: u32) -> usize {
        *self.locals.get(&id).expect("resolver recorded a depth for this use-site")
    }

    fn lookup_variable(&self, id: u32, name: &Token) -> Result<Object, RuntimeError> {
        match self.locals.get(&id) {
            Some(&depth) => Ok(Environment::get_at(&self.environment, depth, &name.lexeme)),
            None => self.globals.borrow().get(name),
        }
    }

    fn evaluate_assign(&mut self, data: &AssignData) -> Result<Object, Unwind> {
        let value = self.evaluate(&data.value)?;
        match self.locals.get(&data.id) {
            Some(&depth) => Environment::assign_at(&self.environment, depth, &data.name, value.clone()),
            None => self.globals.borrow_mut().assign(&data.name, value.clone())?,
        }
        Ok(value)
    }

    fn evaluate_unary(&mut self, data: &UnaryData) -> Result<Object, Unwind> {
        let right = self.evaluate(&data.right)?;
        match data.operator.kind {
            TokenType::Bang => Ok(Object::Bool(!right.is_truthy())),
            TokenType::Minus => match right {
                Object::Number(n) => Ok(Object::Number(-n)),
                _ => Err(RuntimeError::new(data.operator.clone(), "Operand must be number.").into()),
            },
            _ => unreachable!("parser only emits ! and - for Unary"),
        }
    }

    fn evaluate_binary(&mut self, data: &BinaryData) -> Result<Object, Unwind> {
        let left = self.evaluate(&data.left)?;

        // Equality never errors and never requires both operands to be
        // numbers, so it's handled before the numeric-operand checks below.
        match data.operator.kind {
            TokenType::EqualEqual => {
                let right = self.evaluate(&data.right)?;
                return Ok(Object::Bool(left.is_equal(&right)));
            }
            TokenType::BangEqual => {
                let right = self.evaluate(&data.right)?;
                return Ok(Object::Bool(!left.is_equal(&right)));
            }
            _ => {}
        }

        let right = self.evaluate(&data.right)?;
        let op = &data.operator;

        match op.kind {
            TokenType::Plus => match (&left, &right) {
                (Object::Number(a), Object::Number(b)) => Ok(Object::Number(a + b)),
                (Object::String(a), Object::String(b)) => Ok(Object::String(format!("{a}{b}"))),
                _ => Err(RuntimeError::new(op.clone(), "Operands must be two numbers or two strings.").into()),
            },
            TokenType::Minus => numeric(op, &left, &right, |a, b| Ok(Object::Number(a - b))),
            TokenType::Star => numeric(op, &left, &right, |a, b| Ok(Object::Number(a * b))),
            TokenType::Slash => numeric(op, &left, &right, |a, b| {
                if b == 0.0 {
                    Err(RuntimeError::new(op.clone(), "Cannot divide by 0."))
                } else {
                    Ok(Object::Number(a / b))
                }
            }),
            TokenType::Greater => numeric(op, &left, &right, |a, b| Ok(Object::Bool(a > b))),
            TokenType::GreaterEqual => numeric(op, &left, &right, |a, b| Ok(Object::Bool(a >= b))),
            TokenType::Less => numeric(op, &left, &right, |a, b| Ok(Object::Bool(a < b))),
            TokenType::LessEqual => numeric(op, &left, &right, |a, b| Ok(Object::Bool(a <= b))),
            _ => unreachable!("parser only emits arithmetic/comparison/equality ops for Binary"),
        }
        .map_err(Unwind::from)
    }

    fn evaluate_logical(&mut self, data: &LogicalData) -> Result<Object, Unwind> {
        let left = self.evaluate(&data.left)?;
        match data.operator.kind {
            TokenType::Or => {
                if left.is_truthy() {
                    Ok(left)
                } else {
                    self.evaluate(&data.right)
                }
            }
            TokenType::And => {
                if !left.is_truthy() {
                    Ok(left)
                } else {
                    self.evaluate(&data.right)
                }
            }
            _ => unreachable!("parser only emits and/or for Logical"),
        }
    }

    fn evaluate_call(&mut self, data: &CallData) -> Result<Object, Unwind> {
        let callee = self.evaluate(&data.callee)?;

        let mut arguments = Vec::with_capacity(data.arguments.len());
        for arg in &data.arguments {
            arguments.push(self.evaluate(arg)?);
        }

        let arity = callee
            .call_arity()
            .ok_or_else(|| RuntimeError::new(data.paren.clone(), "Can only call functions and classes."))?;

        if arguments.len() != arity {
            return Err(Unwind::from(RuntimeError::new(
                data.paren.clone(),
                format!("Expected {arity} arguments but got {}.", arguments.len()),
            )));
        }

        callee.invoke(self, arguments).map_err(Unwind::from)
    }

    fn evaluate_get(&mut self, data: &GetData) -> Result<Object, Unwind> {
        let object = self.evaluate(&data.object)?;
        match object {
            Object::Instance(instance) => Instance::get(&instance, &data.name).map_err(Unwind::from),
            _ => Err(Unwind::from(RuntimeError::new(data.name.clone(), "Only instances have properties."))),
        }
    }

    fn evaluate_set(&mut self, data: &SetData) -> Result<Object, Unwind> {
        let object = self.evaluate(&data.object)?;
        let instance = match object {
            Object::Instance(instance) => instance,
            _ => return Err(Unwind::from(RuntimeError::new(data.name.clone(), "Only instances have fields."))),
        };

        let value = self.evaluate(&data.value)?;
        instance.borrow_mut().set(&data.name, value.clone());
        Ok(value)
    }

    fn evaluate_super(&mut self, data: &SuperData) -> Result<Object, RuntimeError> {
        let depth = self.depth_of(data.id);
        let superclass = match Environment::get_at(&self.environment, depth, "super") {
            Object::Class(class) => class,
            _ => unreachable!("the resolver only ever binds `super` to a class"),
        };
        let instance = match Environment::get_at(&self.environment, depth - 1, "this") {
            Object::Instance(instance) => instance,
            _ => unreachable!("`this` always binds to an instance one scope inside `super`"),
        };

        match superclass.find_method(&data.method.lexeme) {
            Some(method) => Ok(Object::Function(Rc::new(method.bind(instance)))),
            None => Err(RuntimeError::new(data.method.clone(), format!("Undefined property '{}'.", data.method.lexeme))),
        }
    }
}

fn numeric(
    op: &Token,
    left: &Object,
    right: &Object,
    f: impl FnOnce(f64, f64) -> Result<Object, RuntimeError>,
) -> Result<Object, RuntimeError> {
    match (left, right) {
        (Object::Number(a), Object::Number(b)) => f(*a, *b),
        _ => Err(RuntimeError::new(op.clone(), "Operands must be numbers.")),
    }
}

fn unwind_to_runtime(unwind: Unwind) -> RuntimeError {
    match unwind {
        Unwind::Error(err) => err,
        Unwind::Return(_) => unreachable!("a superclass expression cannot contain a return"),
    }
}
