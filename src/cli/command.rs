use crate::convert::CaseStyle;

/// Commands that can be parsed from the command line
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Convert the joined words with the given style
    Convert { style: CaseStyle, text: String },

    /// Print the built-in example conversions
    Demo,

    /// Show usage
    Help,

    /// Unknown/invalid command
    Unknown(String),
}

pub const USAGE: &str = "\
usage: wordcase <style> <words...>
       wordcase demo
       wordcase help

styles: camel, to-camel, kebab, dot

Set RUST_LOG=wordcase=trace to trace conversions.";
