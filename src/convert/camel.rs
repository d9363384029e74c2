use tracing::trace;

use super::tokenize::{tokenize_lenient, tokenize_strict};
use super::CaseError;
use crate::input::Input;

/// Joins words into camelCase: the first word fully lowercased, every later word
/// lowercased with its first character upper-cased.
///
/// Only the head of each lowercased word is raised, so interior capitals of the
/// original word are not preserved.
pub fn join_camel<S: AsRef<str>>(words: &[S]) -> String {
    let mut out = String::new();

    for (index, word) in words.iter().enumerate() {
        let lower = word.as_ref().to_lowercase();
        if index == 0 {
            out.push_str(&lower);
            continue;
        }

        let mut chars = lower.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}

/// Converts any value to camelCase, never failing.
///
/// Non-string values are rendered to text first. Characters other than ASCII letters and
/// digits are dropped from every word; if nothing survives the result is empty.
///
/// ```
/// use wordcase::camel_case;
///
/// assert_eq!(camel_case("apple sauce"), "appleSauce");
/// assert_eq!(camel_case("Hello-world_example"), "helloWorldExample");
/// ```
pub fn camel_case(input: impl Into<Input>) -> String {
    let text = match input.into() {
        Input::Str(text) => text,
        other => other.coerce_to_string(),
    };

    let words = tokenize_lenient(&text);
    let out = join_camel(&words);
    trace!(%out, "camel_case");
    out
}

/// Converts a non-blank string to camelCase.
///
/// Words are split on whitespace, hyphens and underscores only; punctuation inside a
/// word is kept.
///
/// ```
/// use wordcase::{to_camel_case, CaseError, Input};
///
/// assert_eq!(to_camel_case("CAMEL_case-Nope").unwrap(), "camelCaseNope");
/// assert_eq!(to_camel_case(Input::Null), Err(CaseError::NullInput));
/// ```
pub fn to_camel_case(input: impl Into<Input>) -> Result<String, CaseError> {
    let input = input.into();
    let words = tokenize_strict(&input)?;
    let out = join_camel(&words);
    trace!(%out, "to_camel_case");
    Ok(out)
}
