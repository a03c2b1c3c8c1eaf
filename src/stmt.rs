use std::rc::Rc;

use crate::expr::Expr;
use crate::token::Token;

#[derive(Debug, Clone)]
pub struct VarData {
    pub name: Token,
    pub initializer: Option<Expr>,
}

#[derive(Debug, Clone)]
pub struct IfData {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Debug, Clone)]
pub struct WhileData {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

/// Shared by free functions and methods; a method is just a `FunctionData`
/// stored in a `Class`'s method map rather than bound to a name in scope.
#[derive(Debug, Clone)]
pub struct FunctionData {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct ReturnData {
    pub keyword: Token,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone)]
pub struct ClassData {
    pub name: Token,
    pub superclass: Option<Expr>,
    pub methods: Vec<Rc<FunctionData>>,
}

/// `Function` and methods hold their declaration behind an `Rc` so a
/// function statement re-executed in a loop (each pass producing a fresh
/// closure) never re-clones the body AST, only the environment pointer.
#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    Var(VarData),
    Block(Vec<Stmt>),
    If(IfData),
    While(WhileData),
    Function(Rc<FunctionData>),
    Return(ReturnData),
    Class(ClassData),
}
