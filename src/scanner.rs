use std::io::Write;
use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};

use crate::error::{Diagnostics, ScanError};
use crate::literal::Literal;
use crate::token::{Token, TokenType};

fn keyword(word: &str) -> Option<TokenType> {
    use TokenType::*;
    Some(match word {
        "and" => And,
        "class" => Class,
        "else" => Else,
        "false" => False,
        "for" => For,
        "fun" => Fun,
        "if" => If,
        "nil" => Nil,
        "or" => Or,
        "print" => Print,
        "return" => Return,
        "super" => Super,
        "this" => This,
        "true" => True,
        "var" => Var,
        "while" => While,
        _ => return None,
    })
}

/// Converts a source string into an ordered token stream terminated by a
/// single `Eof` token. Scan errors are reported as encountered but never
/// stop scanning, so a source file with several bad characters reports all
/// of them in one pass.
pub struct Scanner<'a> {
    source: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            source: source.chars().peekmore(),
            tokens: Vec::new(),
            line: 1,
        }
    }

    pub fn scan_tokens(mut self, diagnostics: &Diagnostics, err_out: &mut dyn Write) -> Vec<Token> {
        while let Some(&c) = self.source.peek() {
            self.scan_token(c, diagnostics, err_out);
        }

        self.tokens.push(Token::new(TokenType::Eof, "", None, self.line));
        self.tokens
    }

    fn advance(&mut self) -> char {
        self.source.next().expect("advance called past end of source")
    }

    fn add(&mut self, kind: TokenType, lexeme: impl Into<String>, literal: Option<Literal>) {
        self.tokens.push(Token::new(kind, lexeme, literal, self.line));
    }

    /// Consumes the next character if it equals `expected`. Call only after
    /// the first character of a potential two-char token has already been
    /// consumed.
    fn match_and_consume(&mut self, expected: char) -> bool {
        if self.source.peek() == Some(&expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn scan_token(&mut self, c: char, diagnostics: &Diagnostics, err_out: &mut dyn Write) {
        use TokenType::*;
        match c {
            '(' => { self.advance(); self.add(LeftParen, "(", None); }
            ')' => { self.advance(); self.add(RightParen, ")", None); }
            '{' => { self.advance(); self.add(LeftBrace, "{", None); }
            '}' => { self.advance(); self.add(RightBrace, "}", None); }
            ',' => { self.advance(); self.add(Comma, ",", None); }
            '.' => { self.advance(); self.add(Dot, ".", None); }
            '-' => { self.advance(); self.add(Minus, "-", None); }
            '+' => { self.advance(); self.add(Plus, "+", None); }
            ';' => { self.advance(); self.add(Semicolon, ";", None); }
            '*' => { self.advance(); self.add(Star, "*", None); }

            '!' => {
                self.advance();
                if self.match_and_consume('=') {
                    self.add(BangEqual, "!=", None);
                } else {
                    self.add(Bang, "!", None);
                }
            }
            '=' => {
                self.advance();
                if self.match_and_consume('=') {
                    self.add(EqualEqual, "==", None);
                } else {
                    self.add(Equal, "=", None);
                }
            }
            '<' => {
                self.advance();
                if self.match_and_consume('=') {
                    self.add(LessEqual, "<=", None);
                } else {
                    self.add(Less, "<", None);
                }
            }
            '>' => {
                self.advance();
                if self.match_and_consume('=') {
                    self.add(GreaterEqual, ">=", None);
                } else {
                    self.add(Greater, ">", None);
                }
            }
            '/' => {
                self.advance();
                if self.match_and_consume('/') {
                    while let Some(&c) = self.source.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                } else {
                    self.add(Slash, "/", None);
                }
            }

            ' ' | '\r' | '\t' => { self.advance(); }
            '\n' => { self.advance(); self.line += 1; }

            '"' => self.string(diagnostics, err_out),
            c if c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() || c == '_' => self.identifier(),

            other => {
                self.advance();
                ScanError { line: self.line, message: format!("Unexpected character '{other}'") }
                    .report(err_out, diagnostics);
            }
        }
    }

    fn string(&mut self, diagnostics: &Diagnostics, err_out: &mut dyn Write) {
        self.advance(); // opening quote

        let mut value = String::new();
        loop {
            match self.source.peek() {
                None => {
                    ScanError { line: self.line, message: "Unterminated string".to_string() }
                        .report(err_out, diagnostics);
                    return;
                }
                Some('"') => break,
                Some(&c) => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    value.push(c);
                    self.advance();
                }
            }
        }
        self.advance(); // closing quote

        self.add(TokenType::String, value.clone(), Some(Literal::String(value)));
    }

    fn number(&mut self) {
        let mut lexeme = String::new();

        while matches!(self.source.peek(), Some(c) if c.is_ascii_digit()) {
            lexeme.push(self.advance());
        }

        if self.source.peek() == Some(&'.')
            && matches!(self.source.peek_nth(1), Some(c) if c.is_ascii_digit())
        {
            lexeme.push(self.advance()); // '.'
            while matches!(self.source.peek(), Some(c) if c.is_ascii_digit()) {
                lexeme.push(self.advance());
            }
        }

        let value: f64 = lexeme.parse().expect("scanned digits to parse as a number");
        self.add(TokenType::Number, lexeme, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        let mut lexeme = String::new();

        while matches!(self.source.peek(), Some(c) if c.is_alphanumeric() || *c == '_') {
            lexeme.push(self.advance());
        }

        let kind = keyword(&lexeme).unwrap_or(TokenType::Identifier);
        self.add(kind, lexeme, None);
    }
}
