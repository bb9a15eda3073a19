use ariadne::Source;
use clap::Parser;
use polydiff_compute::differentiate;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, IsTerminal};

/// Symbolic differentiator for polynomial expressions.
#[derive(Parser)]
#[command(name = "polydiff", about = "Symbolic differentiator for polynomial expressions")]
struct Cli {
    /// Expression to differentiate, e.g. "x^2 + 2*x + 1". Reads expressions
    /// from stdin, or starts an interactive session, when omitted.
    expression: Option<String>,

    /// Variable to differentiate with respect to.
    #[arg(short, long, default_value = "x")]
    variable: String,
}

/// Keywords that end an input session, compared case-insensitively.
const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

fn is_quit(line: &str) -> bool {
    QUIT_WORDS.iter().any(|word| line.eq_ignore_ascii_case(word))
}

/// Differentiates one input line, printing the result or the error report.
/// Returns whether the input was processed successfully.
fn process(input: &str, variable: &str) -> bool {
    match differentiate(input, variable) {
        Ok(result) => {
            println!("d/d{variable}({input}) = {result}");
            true
        },
        Err(err) => {
            let report = err.build_report("input");
            report.eprint(("input", Source::from(input))).unwrap();
            false
        },
    }
}

/// Processes one expression per line from stdin until end of input or a quit
/// keyword. Parse errors are reported and processing continues.
fn batch(variable: &str) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_quit(line) {
            break;
        }
        process(line, variable);
    }
}

/// Runs the interactive session.
fn interactive(variable: &str) {
    println!("Symbolic differentiator for polynomial expressions");
    println!("Enter an expression to differentiate, or `q` to quit.");

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{err}");
            return;
        },
    };

    /// Reads and processes one line. `Ok(false)` means the user asked to
    /// quit.
    fn process_line(
        rl: &mut DefaultEditor,
        variable: &str,
    ) -> Result<bool, ReadlineError> {
        let input = rl.readline("> ")?;
        let input = input.trim();
        if input.is_empty() {
            return Ok(true);
        }
        if is_quit(input) {
            return Ok(false);
        }

        rl.add_history_entry(input)?;
        process(input, variable);
        Ok(true)
    }

    loop {
        match process_line(&mut rl, variable) {
            Ok(true) => (),
            Ok(false) => break,
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{err}"),
                }
                break;
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(expression) = cli.expression {
        if !process(&expression, &cli.variable) {
            std::process::exit(1);
        }
    } else if !io::stdin().is_terminal() {
        batch(&cli.variable);
    } else {
        interactive(&cli.variable);
    }
}
