mod command;
mod parser;

pub use command::{CliCommand, USAGE};
pub use parser::parse_args;

use std::io::{self, Write};

use tracing::debug;

use crate::convert::{to_camel_case, to_dot_case};
use crate::input::Input;

const DEMO_WORDS: [&str; 3] = ["camel case", "CAMEL_case-Nope", "hello-world_example"];

/// Execute a command, writing results to `out` and diagnostics to `err`.
///
/// Returns whether the command succeeded.
pub fn run<W: Write, E: Write>(
    command: &CliCommand,
    out: &mut W,
    err: &mut E,
) -> io::Result<bool> {
    debug!(?command, "running command");

    match command {
        CliCommand::Convert { style, text } => match style.convert(text) {
            Ok(converted) => {
                writeln!(out, "{}", converted)?;
                Ok(true)
            }
            Err(e) => {
                writeln!(err, "{}", e)?;
                Ok(false)
            }
        },
        CliCommand::Demo => {
            run_demo(out, err)?;
            Ok(true)
        }
        CliCommand::Help => {
            writeln!(out, "{}", USAGE)?;
            Ok(true)
        }
        CliCommand::Unknown(input) => {
            writeln!(err, "Unknown command: {}", input)?;
            writeln!(err, "{}", USAGE)?;
            Ok(false)
        }
    }
}

/// Example conversions followed by the messages of the expected failures.
fn run_demo<W: Write, E: Write>(out: &mut W, err: &mut E) -> io::Result<()> {
    for words in DEMO_WORDS {
        if let Ok(converted) = to_camel_case(words) {
            writeln!(out, "{}", converted)?;
        }
    }
    if let Err(e) = to_camel_case(3) {
        writeln!(err, "{}", e)?;
    }

    for words in DEMO_WORDS {
        if let Ok(converted) = to_dot_case(words) {
            writeln!(out, "{}", converted)?;
        }
    }
    for bad in [Input::from(3), Input::Null] {
        if let Err(e) = to_dot_case(bad) {
            writeln!(err, "{}", e)?;
        }
    }

    Ok(())
}
