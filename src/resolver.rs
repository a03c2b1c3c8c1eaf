use std::collections::HashMap;
use std::io::Write;

use crate::error::{Diagnostics, ResolveError};
use crate::expr::Expr;
use crate::interpreter::Interpreter;
use crate::stmt::{ClassData, FunctionData, Stmt};
use crate::token::Token;

#[derive(Clone, Copy, PartialEq)]
enum FunctionKind {
    None,
    Function,
    Method,
    Initializer,
}

#[derive(Clone, Copy, PartialEq)]
enum ClassKind {
    None,
    Class,
    Subclass,
}

/// Static pass over the parsed program: for every variable/`this`/`super`
/// use-site, computes how many enclosing scopes to skip before reaching
/// its binding, and records that distance into the interpreter's
/// side-table. Also catches the handful of static errors that depend on
/// lexical nesting rather than parsing alone (illegal `return`, duplicate
/// local declarations, `this`/`super` outside a class, and so on).
pub struct Resolver<'a> {
    interpreter: &'a mut Interpreter,
    scopes: Vec<HashMap<String, bool>>,
    current_function: FunctionKind,
    current_class: ClassKind,
}

impl<'a> Resolver<'a> {
    pub fn new(interpreter: &'a mut Interpreter) -> Self {
        Resolver {
            interpreter,
            scopes: Vec::new(),
            current_function: FunctionKind::None,
            current_class: ClassKind::None,
        }
    }

    pub fn resolve(
        mut self,
        statements: &[Stmt],
        diagnostics: &Diagnostics,
        err_out: &mut dyn Write,
    ) {
        for stmt in statements {
            self.resolve_stmt(stmt, diagnostics, err_out);
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    fn declare(&mut self, name: &Token, diagnostics: &Diagnostics, err_out: &mut dyn Write) {
        let Some(scope) = self.scopes.last_mut() else { return };
        if scope.contains_key(&name.lexeme) {
            ResolveError {
                token: name.clone(),
                message: "Variable with this name already declared in this scope.".to_string(),
            }
            .report(err_out, diagnostics);
        }
        scope.insert(name.lexeme.clone(), false);
    }

    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), true);
        }
    }

    fn resolve_local(&mut self, id: u32, name: &Token) {
        let depth = self
            .scopes
            .iter()
            .rev()
            .enumerate()
            .find(|(_, scope)| scope.contains_key(&name.lexeme))
            .map(|(i, _)| i);

        if let Some(depth) = depth {
            self.interpreter.resolve(id, depth);
        }
        // Unresolved: treated as a global at evaluation time.
    }

    fn resolve_stmt(&mut self, stmt: &Stmt, diagnostics: &Diagnostics, err_out: &mut dyn Write) {
        match stmt {
            Stmt::Expression(expr) => self.resolve_expr(expr, diagnostics, err_out),
            Stmt::Print(expr) => self.resolve_expr(expr, diagnostics, err_out),
            Stmt::Var(data) => {
                self.declare(&data.name, diagnostics, err_out);
                if let Some(init) = &data.initializer {
                    self.resolve_expr(init, diagnostics, err_out);
                }
                self.define(&data.name);
            }
            Stmt::Block(statements) => {
                self.begin_scope();
                for stmt in statements {
                    self.resolve_stmt(stmt, diagnostics, err_out);
                }
                self.end_scope();
            }
            Stmt::If(data) => {
                self.resolve_expr(&data.condition, diagnostics, err_out);
                self.resolve_stmt(&data.then_branch, diagnostics, err_out);
                if let Some(else_branch) = &data.else_branch {
                    self.resolve_stmt(else_branch, diagnostics, err_out);
                }
            }
            Stmt::While(data) => {
                self.resolve_expr(&data.condition, diagnostics, err_out);
                self.resolve_stmt(&data.body, diagnostics, err_out);
            }
            Stmt::Function(declaration) => {
                self.declare(&declaration.name, diagnostics, err_out);
                self.define(&declaration.name);
                self.resolve_function(declaration, FunctionKind::Function, diagnostics, err_out);
            }
            Stmt::Return(data) => {
                if self.current_function == FunctionKind::None {
                    ResolveError {
                        token: data.keyword.clone(),
                        message: "Cannot return from top-level code.".to_string(),
                    }
                    .report(err_out, diagnostics);
                }
                if let Some(value) = &data.value {
                    if self.current_function == FunctionKind::Initializer {
                        ResolveError {
                            token: data.keyword.clone(),
                            message: "Cannot return a value from an initializer.".to_string(),
                        }
                        .report(err_out, diagnostics);
                    }
                    self.resolve_expr(value, diagnostics, err_out);
                }
            }
            Stmt::Class(data) => self.resolve_class(data, diagnostics, err_out),
        }
    }

    fn resolve_function(
        &mut self,
        declaration: &FunctionData,
        kind: FunctionKind,
        diagnostics: &Diagnostics,
        err_out: &mut dyn Write,
    ) {
        let enclosing_function = self.current_function;
        self.current_function = kind;

        self.begin_scope();
        for param in &declaration.params {
            self.declare(param, diagnostics, err_out);
            self.define(param);
        }
        for stmt in &declaration.body {
            self.resolve_stmt(stmt, diagnostics, err_out);
        }
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn resolve_class(&mut self, data: &ClassData, diagnostics: &Diagnostics, err_out: &mut dyn Write) {
        let enclosing_class = self.current_class;
        self.current_class = ClassKind::Class;

        self.declare(&data.name, diagnostics, err_out);
        self.define(&data.name);

        if let Some(Expr::Variable(superclass)) = &data.superclass {
            if superclass.name.lexeme == data.name.lexeme {
                ResolveError {
                    token: superclass.name.clone(),
                    message: "A class can't inherit from itself.".to_string(),
                }
                .report(err_out, diagnostics);
            }
            self.current_class = ClassKind::Subclass;
            self.resolve_expr(data.superclass.as_ref().unwrap(), diagnostics, err_out);
        }

        if data.superclass.is_some() {
            self.begin_scope();
            self.scopes.last_mut().unwrap().insert("super".to_string(), true);
        }

        self.begin_scope();
        self.scopes.last_mut().unwrap().insert("this".to_string(), true);

        for method in &data.methods {
            let kind = if method.name.lexeme == "init" { FunctionKind::Initializer } else { FunctionKind::Method };
            self.resolve_function(method, kind, diagnostics, err_out);
        }

        self.end_scope();

        if data.superclass.is_some() {
            self.end_scope();
        }

        self.current_class = enclosing_class;
    }

    fn resolve_expr(&mut self, expr: &Expr, diagnostics: &Diagnostics, err_out: &mut dyn Write) {
        match expr {
            Expr::Literal(_) => {}
            Expr::Variable(data) => {
                if let Some(scope) = self.scopes.last() {
                    if scope.get(&data.name.lexeme) == Some(&false) {
                        ResolveError {
                            token: data.name.clone(),
                            message: "Cannot read local variable in its own initializer.".to_string(),
                        }
                        .report(err_out, diagnostics);
                    }
                }
                self.resolve_local(data.id, &data.name);
            }
            Expr::Assign(data) => {
                self.resolve_expr(&data.value, diagnostics, err_out);
                self.resolve_local(data.id, &data.name);
            }
            Expr::Unary(data) => self.resolve_expr(&data.right, diagnostics, err_out),
            Expr::Binary(data) => {
                self.resolve_expr(&data.left, diagnostics, err_out);
                self.resolve_expr(&data.right, diagnostics, err_out);
            }
            Expr::Logical(data) => {
                self.resolve_expr(&data.left, diagnostics, err_out);
                self.resolve_expr(&data.right, diagnostics, err_out);
            }
            Expr::Grouping(data) => self.resolve_expr(&data.expression, diagnostics, err_out),
            Expr::Call(data) => {
                self.resolve_expr(&data.callee, diagnostics, err_out);
                for arg in &data.arguments {
                    self.resolve_expr(arg, diagnostics, err_out);
                }
            }
            Expr::Get(data) => self.resolve_expr(&data.object, diagnostics, err_out),
            Expr::Set(data) => {
                self.resolve_expr(&data.value, diagnostics, err_out);
                self.resolve_expr(&data.object, diagnostics, err_out);
            }
            Expr::This(data) => {
                if self.current_class == ClassKind::None {
                    ResolveError {
                        token: data.keyword.clone(),
                        message: "Cannot use 'this' outside of a class.".to_string(),
                    }
                    .report(err_out, diagnostics);
                    return;
                }
                self.resolve_local(data.id, &data.keyword);
            }
            Expr::Super(data) => {
                match self.current_class {
                    ClassKind::None => {
                        ResolveError {
                            token: data.keyword.clone(),
                            message: "Cannot use 'super' outside of a class.".to_string(),
                        }
                        .report(err_out, diagnostics);
                        return;
                    }
                    ClassKind::Class => {
                        ResolveError {
                            token: data.keyword.clone(),
                            message: "Cannot use 'super' in a class with no superclass.".to_string(),
                        }
                        .report(err_out, diagnostics);
                        return;
                    }
                    ClassKind::Subclass => {}
                }
                self.resolve_local(data.id, &data.keyword);
            }
        }
    }
}
