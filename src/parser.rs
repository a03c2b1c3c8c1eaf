use std::rc::Rc;

use crate::error::{Diagnostics, ParseError};
use crate::expr::{
    AssignData, BinaryData, CallData, Expr, GetData, GroupingData, LogicalData, SetData,
    SuperData, ThisData, UnaryData, VariableData,
};
use crate::literal::Literal;
use crate::stmt::{ClassData, FunctionData, IfData, ReturnData, Stmt, VarData, WhileData};
use crate::token::{Token, TokenType};

const MAX_ARGS: usize = 255;

type ExprResult = Result<Expr, ParseError>;
type StmtResult = Result<Stmt, ParseError>;

/// Recursive-descent parser with one token of lookahead and panic-mode
/// error recovery. Consumes the full token stream in one pass, collecting
/// every declaration it can while reporting (not propagating) individual
/// statement-level errors.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    next_id: u32,
    /// Excess-parameter/argument complaints: reported, but never fatal to
    /// parsing, so they're queued here rather than surfaced as `Err`.
    non_fatal: Vec<ParseError>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0, next_id: 0, non_fatal: Vec::new() }
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn parse(mut self, diagnostics: &Diagnostics, err_out: &mut dyn std::io::Write) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    err.report(err_out, diagnostics);
                    self.synchronize();
                }
            }
        }
        for err in &self.non_fatal {
            err.report(err_out, diagnostics);
        }
        statements
    }

    // --- declarations ---

    fn declaration(&mut self) -> StmtResult {
        if self.check(TokenType::Class) {
            self.advance();
            return self.class_declaration();
        }
        if self.check(TokenType::Fun) {
            self.advance();
            return self.function("function").map(Stmt::Function);
        }
        if self.check(TokenType::Var) {
            self.advance();
            return self.var_declaration();
        }
        self.statement()
    }

    fn class_declaration(&mut self) -> StmtResult {
        let name = self.consume(TokenType::Identifier, "Expect class name.")?;

        let superclass = if self.check(TokenType::Less) {
            self.advance();
            let super_name = self.consume(TokenType::Identifier, "Expect superclass name.")?;
            Some(Expr::Variable(VariableData { id: self.next_id(), name: super_name }))
        } else {
            None
        };

        self.consume(TokenType::LeftBrace, "Expect '{' before class body.")?;

        let mut methods = Vec::new();
        while !self.check(TokenType::RightBrace) && !self.is_at_end() {
            methods.push(self.function("method")?);
        }

        self.consume(TokenType::RightBrace, "Expect '}' after class body.")?;

        Ok(Stmt::Class(ClassData { name, superclass, methods }))
    }

    fn function(&mut self, kind: &str) -> Result<Rc<FunctionData>, ParseError> {
        let name = self.consume(TokenType::Identifier, &format!("Expect {kind} name."))?;
        self.consume(TokenType::LeftParen, &format!("Expect '(' after {kind} name."))?;

        let mut params = Vec::new();
        if !self.check(TokenType::RightParen) {
            loop {
                if params.len() >= MAX_ARGS {
                    let peek = self.peek().clone();
                    self.non_fatal.push(ParseError {
                        token: peek,
                        message: format!("Can't have more than {MAX_ARGS} parameters."),
                    });
                }
                params.push(self.consume(TokenType::Identifier, "Expect parameter name.")?);
                if !self.check(TokenType::Comma) {
                    break;
                }
                self.advance();
            }
        }
        self.consume(TokenType::RightParen, "Expect ')' after parameters.")?;

        self.consume(TokenType::LeftBrace, &format!("Expect '{{' before {kind} body."))?;
        let body = self.block()?;

        Ok(Rc::new(FunctionData { name, params, body }))
    }

    fn var_declaration(&mut self) -> StmtResult {
        let name = self.consume(TokenType::Identifier, "Expect variable name.")?;

        let initializer = if self.check(TokenType::Equal) {
            self.advance();
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenType::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var(VarData { name, initializer }))
    }

    // --- statements ---

    fn statement(&mut self) -> StmtResult {
        if self.check(TokenType::For) {
            self.advance();
            return self.for_statement();
        }
        if self.check(TokenType::If) {
            self.advance();
            return self.if_statement();
        }
        if self.check(TokenType::Print) {
            self.advance();
            return self.print_statement();
        }
        if self.check(TokenType::Return) {
            self.advance();
            return self.return_statement();
        }
        if self.check(TokenType::While) {
            self.advance();
            return self.while_statement();
        }
        if self.check(TokenType::LeftBrace) {
            self.advance();
            return Ok(Stmt::Block(self.block()?));
        }
        self.expression_statement()
    }

    fn for_statement(&mut self) -> StmtResult {
        self.consume(TokenType::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.check(TokenType::Semicolon) {
            self.advance();
            None
        } else if self.check(TokenType::Var) {
            self.advance();
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if !self.check(TokenType::Semicolon) {
            self.expression()?
        } else {
            Expr::Literal(Literal::Bool(true))
        };
        self.consume(TokenType::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if !self.check(TokenType::RightParen) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenType::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        body = Stmt::While(WhileData { condition, body: Box::new(body) });

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        Ok(body)
    }

    fn if_statement(&mut self) -> StmtResult {
        self.consume(TokenType::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenType::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.check(TokenType::Else) {
            self.advance();
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If(IfData { condition, then_branch, else_branch }))
    }

    fn print_statement(&mut self) -> StmtResult {
        let value = self.expression()?;
        self.consume(TokenType::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn return_statement(&mut self) -> StmtResult {
        let keyword = self.previous().clone();
        let value = if !self.check(TokenType::Semicolon) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(TokenType::Semicolon, "Expect ';' after return value.")?;
        Ok(Stmt::Return(ReturnData { keyword, value }))
    }

    fn while_statement(&mut self) -> StmtResult {
        self.consume(TokenType::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenType::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While(WhileData { condition, body }))
    }

    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.check(TokenType::RightBrace) && !self.is_at_end() {
            statements.push(self.declaration()?);
        }
        self.consume(TokenType::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn expression_statement(&mut self) -> StmtResult {
        let expr = self.expression()?;
        self.consume(TokenType::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }

    // --- expressions ---

    fn expression(&mut self) -> ExprResult {
        self.assignment()
    }

    fn assignment(&mut self) -> ExprResult {
        let expr = self.or()?;

        if self.check(TokenType::Equal) {
            let equals = self.advance().clone();
            let value = self.assignment()?;

            return match expr {
                Expr::Variable(v) => {
                    Ok(Expr::Assign(AssignData { id: self.next_id(), name: v.name, value: Box::new(value) }))
                }
                Expr::Get(g) => Ok(Expr::Set(SetData { object: g.object, name: g.name, value: Box::new(value) })),
                _ => Err(ParseError { token: equals, message: "Invalid assignment target.".to_string() }),
            };
        }

        Ok(expr)
    }

    fn or(&mut self) -> ExprResult {
        let mut expr = self.and()?;
        while self.check(TokenType::Or) {
            let operator = self.advance().clone();
            let right = self.and()?;
            expr = Expr::Logical(LogicalData { left: Box::new(expr), operator, right: Box::new(right) });
        }
        Ok(expr)
    }

    fn and(&mut self) -> ExprResult {
        let mut expr = self.equality()?;
        while self.check(TokenType::And) {
            let operator = self.advance().clone();
            let right = self.equality()?;
            expr = Expr::Logical(LogicalData { left: Box::new(expr), operator, right: Box::new(right) });
        }
        Ok(expr)
    }

    fn equality(&mut self) -> ExprResult {
        let mut expr = self.comparison()?;
        while self.check(TokenType::BangEqual) || self.check(TokenType::EqualEqual) {
            let operator = self.advance().clone();
            let right = self.comparison()?;
            expr = Expr::Binary(BinaryData { left: Box::new(expr), operator, right: Box::new(right) });
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> ExprResult {
        let mut expr = self.term()?;
        while self.check(TokenType::Greater)
            || self.check(TokenType::GreaterEqual)
            || self.check(TokenType::Less)
            || self.check(TokenType::LessEqual)
        {
            let operator = self.advance().clone();
            let right = self.term()?;
            expr = Expr::Binary(BinaryData { left: Box::new(expr), operator, right: Box::new(right) });
        }
        Ok(expr)
    }

    fn term(&mut self) -> ExprResult {
        let mut expr = self.factor()?;
        while self.check(TokenType::Minus) || self.check(TokenType::Plus) {
            let operator = self.advance().clone();
            let right = self.factor()?;
            expr = Expr::Binary(BinaryData { left: Box::new(expr), operator, right: Box::new(right) });
        }
        Ok(expr)
    }

    fn factor(&mut self) -> ExprResult {
        let mut expr = self.unary()?;
        while self.check(TokenType::Slash) || self.check(TokenType::Star) {
            let operator = self.advance().clone();
            let right = self.unary()?;
            expr = Expr::Binary(BinaryData { left: Box::new(expr), operator, right: Box::new(right) });
        }
        Ok(expr)
    }

    fn unary(&mut self) -> ExprResult {
        if self.check(TokenType::Bang) || self.check(TokenType::Minus) {
            let operator = self.advance().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary(UnaryData { operator, right: Box::new(right) }));
        }
        self.call()
    }

    fn call(&mut self) -> ExprResult {
        let mut expr = self.primary()?;

        loop {
            if self.check(TokenType::LeftParen) {
                self.advance();
                expr = self.finish_call(expr)?;
            } else if self.check(TokenType::Dot) {
                self.advance();
                let name = self.consume(TokenType::Identifier, "Expect property name after '.'.")?;
                expr = Expr::Get(GetData { object: Box::new(expr), name });
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> ExprResult {
        let mut arguments = Vec::new();
        if !self.check(TokenType::RightParen) {
            loop {
                if arguments.len() >= MAX_ARGS {
                    let peek = self.peek().clone();
                    self.non_fatal.push(ParseError {
                        token: peek,
                        message: format!("Can't have more than {MAX_ARGS} arguments."),
                    });
                }
                arguments.push(self.expression()?);
                if !self.check(TokenType::Comma) {
                    break;
                }
                self.advance();
            }
        }

        let paren = self.consume(TokenType::RightParen, "Expect ')' after arguments.")?;
        Ok(Expr::Call(CallData { callee: Box::new(callee), paren, arguments }))
    }

    fn primary(&mut self) -> ExprResult {
        if self.check(TokenType::False) {
            self.advance();
            return Ok(Expr::Literal(Literal::Bool(false)));
        }
        if self.check(TokenType::True) {
            self.advance();
            return Ok(Expr::Literal(Literal::Bool(true)));
        }
        if self.check(TokenType::Nil) {
            self.advance();
            return Ok(Expr::Literal(Literal::Nil));
        }
        if self.check(TokenType::Number) || self.check(TokenType::String) {
            let literal = self.advance().literal.clone().expect("scanner attaches a literal");
            return Ok(Expr::Literal(literal));
        }
        if self.check(TokenType::Super) {
            let keyword = self.advance().clone();
            self.consume(TokenType::Dot, "Expect '.' after 'super'.")?;
            let method = self.consume(TokenType::Identifier, "Expect superclass method name.")?;
            return Ok(Expr::Super(SuperData { id: self.next_id(), keyword, method }));
        }
        if self.check(TokenType::This) {
            let keyword = self.advance().clone();
            return Ok(Expr::This(ThisData { id: self.next_id(), keyword }));
        }
        if self.check(TokenType::Identifier) {
            let name = self.advance().clone();
            return Ok(Expr::Variable(VariableData { id: self.next_id(), name }));
        }
        if self.check(TokenType::LeftParen) {
            self.advance();
            let expr = self.expression()?;
            self.consume(TokenType::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(GroupingData { expression: Box::new(expr) }));
        }

        Err(ParseError { token: self.peek().clone(), message: "Expect expression.".to_string() })
    }

    // --- token stream plumbing ---

    fn check(&self, kind: TokenType) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenType::Eof
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn consume(&mut self, kind: TokenType, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(ParseError { token: self.peek().clone(), message: message.to_string() })
        }
    }

    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenType::Semicolon {
                return;
            }

            if matches!(
                self.peek().kind,
                TokenType::Class
                    | TokenType::Fun
                    | TokenType::Var
                    | TokenType::For
                    | TokenType::If
                    | TokenType::While
                    | TokenType::Print
                    | TokenType::Return
            ) {
                return;
            }

            self.advance();
        }
    }
}
