//! A tree-walking interpreter for a small, dynamically-typed,
//! object-oriented scripting language.
//!
//! The pipeline is strictly layered: [`scanner::Scanner`] turns source text
//! into tokens, [`parser::Parser`] turns tokens into an AST
//! ([`expr`]/[`stmt`]), [`resolver::Resolver`] annotates every variable
//! use-site with a scope distance, and [`interpreter::Interpreter`] walks
//! the AST to produce output and side effects. [`Rocks`] sequences the four
//! stages and tracks whether a run produced a static or runtime error.
//!
//! File reading, REPL line input, and the host clock are deliberately kept
//! out of this crate's core — callers supply a source string and an output
//! sink, and the `clock()` built-in's time source is injected at
//! [`Interpreter::new`] rather than read from `std::time` here.

pub mod class;
pub mod environment;
pub mod error;
pub mod expr;
pub mod function;
pub mod interpreter;
pub mod literal;
pub mod object;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod stmt;
pub mod token;

use std::io::Write;

use error::Diagnostics;
use interpreter::{Interpreter, SharedWriter};
use parser::Parser;
use resolver::Resolver;
use scanner::Scanner;

/// Sequences scanner → parser → resolver → interpreter over one source
/// string, and tracks the error flags a caller needs to pick an exit code.
/// A single `Rocks` can run more than one source string against the same
/// interpreter state (globals, environment) — this is what the REPL does,
/// resetting diagnostics between lines.
pub struct Rocks {
    diagnostics: Diagnostics,
    interpreter: Interpreter,
}

impl Rocks {
    pub fn new(now_fn: fn() -> f64, stdout: SharedWriter) -> Self {
        Rocks { diagnostics: Diagnostics::new(), interpreter: Interpreter::new(now_fn, stdout) }
    }

    /// Runs one source string end to end, writing any diagnostics to
    /// `err_out`. Resolution and execution are both skipped once a static
    /// error has been reported, per §4.3/§7.
    pub fn run(&mut self, source: &str, err_out: &mut dyn Write) {
        let tokens = Scanner::new(source).scan_tokens(&self.diagnostics, err_out);
        let statements = Parser::new(tokens).parse(&self.diagnostics, err_out);

        if self.diagnostics.had_error() {
            return;
        }

        Resolver::new(&mut self.interpreter).resolve(&statements, &self.diagnostics, err_out);

        if self.diagnostics.had_error() {
            return;
        }

        if let Err(err) = self.interpreter.interpret(&statements) {
            err.report(err_out, &self.diagnostics);
        }
    }

    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }

    pub fn had_runtime_error(&self) -> bool {
        self.diagnostics.had_runtime_error()
    }

    /// Clears both error flags. The REPL calls this between lines so one
    /// bad line doesn't poison the exit-code bookkeeping for the next.
    pub fn reset_diagnostics(&self) {
        self.diagnostics.reset();
    }
}
