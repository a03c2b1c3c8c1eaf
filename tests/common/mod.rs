use std::cell::RefCell;
use std::rc::Rc;

use rocks_lang::Rocks;

/// A fixed clock for tests that touch `clock()` — avoids nondeterministic
/// assertions against wall-clock time.
pub fn frozen_clock() -> f64 {
    1_700_000_000.0
}

/// Runs `source` against a fresh interpreter and returns (stdout, stderr)
/// as strings. Mirrors running a single file: one `Rocks::run` call, no
/// REPL-style diagnostics reset in between.
pub fn run(source: &str) -> (String, String) {
    let stdout: Rc<RefCell<dyn std::io::Write>> = Rc::new(RefCell::new(Vec::<u8>::new()));
    let mut rocks = Rocks::new(frozen_clock, Rc::clone(&stdout));

    let mut stderr = Vec::<u8>::new();
    rocks.run(source, &mut stderr);

    let out = String::from_utf8(
        Rc::try_unwrap(stdout)
            .expect("no other references to stdout buffer remain after run")
            .into_inner(),
    )
    .expect("program output is valid UTF-8");
    let err = String::from_utf8(stderr).expect("diagnostics output is valid UTF-8");

    (out, err)
}

/// Like [`run`], but also returns the exit-code-equivalent outcome the CLI
/// would have produced (0, 65, or 70).
pub fn run_with_exit(source: &str) -> (String, String, i32) {
    let stdout: Rc<RefCell<dyn std::io::Write>> = Rc::new(RefCell::new(Vec::<u8>::new()));
    let mut rocks = Rocks::new(frozen_clock, Rc::clone(&stdout));

    let mut stderr = Vec::<u8>::new();
    rocks.run(source, &mut stderr);

    let code = if rocks.had_runtime_error() {
        70
    } else if rocks.had_error() {
        65
    } else {
        0
    };

    let out = String::from_utf8(
        Rc::try_unwrap(stdout)
            .expect("no other references to stdout buffer remain after run")
            .into_inner(),
    )
    .expect("program output is valid UTF-8");
    let err = String::from_utf8(stderr).expect("diagnostics output is valid UTF-8");

    (out, err, code)
}
