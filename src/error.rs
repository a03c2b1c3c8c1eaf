use std::cell::Cell;
use std::io::Write;

use crate::token::{Token, TokenType};

/// Tracks whether a static (scan/parse/resolve) or runtime error has been
/// reported during the current run. Owned by the driver and threaded by
/// reference through every stage, rather than kept as process-global
/// mutable state, so a process can drive more than one interpreter (as the
/// test suite does) without data races.
#[derive(Debug, Default)]
pub struct Diagnostics {
    had_error: Cell<bool>,
    had_runtime_error: Cell<bool>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.had_error.get() || self.had_runtime_error.get()
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error.get()
    }

    pub fn flag_error(&self) {
        self.had_error.set(true);
    }

    pub fn flag_runtime_error(&self) {
        self.had_runtime_error.set(true);
    }

    /// Resets both flags; used between REPL lines.
    pub fn reset(&self) {
        self.had_error.set(false);
        self.had_runtime_error.set(false);
    }
}

/// A lexical error: an unterminated string, a stray character, and so on.
/// Scan errors never carry a token — the scanner hasn't produced one yet
/// for the offending text — only the line they occurred on.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub message: String,
}

impl ScanError {
    pub fn report(&self, out: &mut dyn Write, diagnostics: &Diagnostics) {
        let _ = writeln!(out, "[line {}] Error: {}", self.line, self.message);
        diagnostics.flag_error();
    }
}

/// A grammar error raised by the parser.
#[derive(Debug)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub fn report(&self, out: &mut dyn Write, diagnostics: &Diagnostics) {
        report_at_token(out, &self.token, &self.message);
        diagnostics.flag_error();
    }
}

/// A static error raised while resolving variable scopes.
#[derive(Debug)]
pub struct ResolveError {
    pub token: Token,
    pub message: String,
}

impl ResolveError {
    pub fn report(&self, out: &mut dyn Write, diagnostics: &Diagnostics) {
        report_at_token(out, &self.token, &self.message);
        diagnostics.flag_error();
    }
}

fn report_at_token(out: &mut dyn Write, token: &Token, message: &str) {
    let location = if token.kind == TokenType::Eof {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    };
    let _ = writeln!(out, "[line {}] Error{location}: {message}", token.line);
}

/// A runtime fault: a type mismatch, an undefined variable, division by
/// zero, and so on. Always carries the token whose evaluation produced it,
/// for the line number in the report.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        RuntimeError { token, message: message.into() }
    }

    pub fn report(&self, out: &mut dyn Write, diagnostics: &Diagnostics) {
        let _ = writeln!(out, "{}\n[line {}]", self.message, self.token.line);
        diagnostics.flag_runtime_error();
    }
}
