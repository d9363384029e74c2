use super::CliCommand;
use crate::convert::CaseStyle;

/// Parse command-line arguments (without the program name) into a command
///
/// Supports:
/// - `help`, `-h`, `--help` or no arguments → Help
/// - `demo` → Demo
/// - `<style> <words...>` → Convert, words joined with single spaces
/// - anything else → Unknown
pub fn parse_args(args: &[String]) -> CliCommand {
    let Some((first, rest)) = args.split_first() else {
        return CliCommand::Help;
    };

    match first.as_str() {
        "help" | "-h" | "--help" => return CliCommand::Help,
        "demo" if rest.is_empty() => return CliCommand::Demo,
        _ => {}
    }

    match first.parse::<CaseStyle>() {
        Ok(style) => CliCommand::Convert {
            style,
            text: rest.join(" "),
        },
        Err(_) => CliCommand::Unknown(args.join(" ")),
    }
}
