use std::cell::RefCell;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rocks_lang::Rocks;

fn wall_clock() -> f64 {
    SystemTime::now().duration_since(UNIX_EPOCH).expect("system clock before the epoch").as_secs_f64()
}

fn history_path() -> Option<std::path::PathBuf> {
    home::home_dir().map(|dir| dir.join(".rocks_history"))
}

fn run_file(path: &str) -> ! {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Could not read file '{path}': {err}");
        process::exit(64);
    });

    let stdout: Rc<RefCell<dyn Write>> = Rc::new(RefCell::new(io::stdout()));
    let mut rocks = Rocks::new(wall_clock, stdout);
    let mut stderr = io::stderr();
    rocks.run(&source, &mut stderr);

    if rocks.had_runtime_error() {
        process::exit(70);
    }
    if rocks.had_error() {
        process::exit(65);
    }
    process::exit(0);
}

fn run_prompt() {
    let stdout: Rc<RefCell<dyn Write>> = Rc::new(RefCell::new(io::stdout()));
    let mut rocks = Rocks::new(wall_clock, stdout);

    let mut editor = DefaultEditor::new().expect("failed to initialize line editor");
    let history = history_path();
    if let Some(path) = &history {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline("-> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(&line);
                let mut stderr = io::stderr();
                rocks.run(&line, &mut stderr);
                rocks.reset_diagnostics();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Readline error: {err}");
                break;
            }
        }
    }

    if let Some(path) = &history {
        let _ = editor.save_history(path);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_prompt(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: rocks [script]");
            process::exit(64);
        }
    }
}
