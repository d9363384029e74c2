use tracing::{debug, trace};

use super::CaseError;
use crate::input::Input;

/// Word delimiters shared by every converter: whitespace, hyphen and underscore.
pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '_'
}

/// Splits on runs of delimiters; leading and trailing runs produce no empty words.
fn split_on_delimiters(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_delimiter).filter(|word| !word.is_empty())
}

/// Tokenizer behind `camel_case`.
///
/// Every character that is not an ASCII letter or digit is scrubbed from each word, and
/// words left empty by the scrub are dropped. Never fails; a result with no words means
/// the caller produces an empty string.
pub fn tokenize_lenient(text: &str) -> Vec<String> {
    let words: Vec<String> = split_on_delimiters(text.trim())
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect();

    trace!(words = words.len(), "lenient tokenize");
    words
}

/// Checks, in order, that the input is present, is a string, and is not blank.
pub fn validate_input(input: &Input) -> Result<&str, CaseError> {
    let result = match input {
        _ if input.is_nullish() => Err(CaseError::NullInput),
        Input::Str(text) if text.trim().is_empty() => Err(CaseError::EmptyInput),
        Input::Str(text) => Ok(text.as_str()),
        other => Err(CaseError::TypeMismatch {
            received: other.type_name(),
        }),
    };

    if let Err(err) = &result {
        debug!(%err, "rejected input");
    }
    result
}

/// Tokenizer behind `to_camel_case` and `to_dot_case`.
///
/// Words keep any punctuation they contain and no boundary is inferred from case changes.
/// A validated input always yields at least one word.
pub fn tokenize_strict(input: &Input) -> Result<Vec<&str>, CaseError> {
    let text = validate_input(input)?;
    let words: Vec<&str> = split_on_delimiters(text).collect();

    trace!(words = words.len(), "strict tokenize");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_delimiter() {
        assert!(is_delimiter(' '));
        assert!(is_delimiter('\t'));
        assert!(is_delimiter('\n'));
        assert!(is_delimiter('-'));
        assert!(is_delimiter('_'));
        assert!(!is_delimiter('.'));
        assert!(!is_delimiter('a'));
    }

    #[test]
    fn test_lenient_splits_on_mixed_delimiters() {
        assert_eq!(
            tokenize_lenient("Hello-world_example"),
            vec!["Hello", "world", "example"]
        );
    }

    #[test]
    fn test_lenient_collapses_delimiter_runs() {
        assert_eq!(tokenize_lenient("  a -_ b  "), vec!["a", "b"]);
    }

    #[test]
    fn test_lenient_scrubs_punctuation_inside_words() {
        assert_eq!(tokenize_lenient("apple!sauce pie"), vec!["applesauce", "pie"]);
    }

    #[test]
    fn test_lenient_drops_words_emptied_by_scrub() {
        assert_eq!(tokenize_lenient("hello !!! world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_lenient_scrubs_non_ascii_letters() {
        assert_eq!(tokenize_lenient("café au lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_lenient_empty_input() {
        assert!(tokenize_lenient("").is_empty());
        assert!(tokenize_lenient(" -_ ").is_empty());
        assert!(tokenize_lenient("?!").is_empty());
    }

    #[test]
    fn test_strict_keeps_punctuation() {
        let input = Input::from("apple!sauce pie");
        assert_eq!(tokenize_strict(&input).unwrap(), vec!["apple!sauce", "pie"]);
    }

    #[test]
    fn test_strict_ignores_camel_humps() {
        let input = Input::from("helloWorld");
        assert_eq!(tokenize_strict(&input).unwrap(), vec!["helloWorld"]);
    }

    #[test]
    fn test_strict_leading_and_trailing_delimiters() {
        let input = Input::from("__CAMEL_case-Nope  ");
        assert_eq!(tokenize_strict(&input).unwrap(), vec!["CAMEL", "case", "Nope"]);
    }

    #[test]
    fn test_validate_null_and_undefined() {
        assert_eq!(validate_input(&Input::Null), Err(CaseError::NullInput));
        assert_eq!(validate_input(&Input::Undefined), Err(CaseError::NullInput));
    }

    #[test]
    fn test_validate_type_mismatch() {
        assert_eq!(
            validate_input(&Input::from(42)),
            Err(CaseError::TypeMismatch { received: "number" })
        );
        assert_eq!(
            validate_input(&Input::from(true)),
            Err(CaseError::TypeMismatch { received: "boolean" })
        );
        assert_eq!(
            validate_input(&Input::Object),
            Err(CaseError::TypeMismatch { received: "object" })
        );
    }

    #[test]
    fn test_validate_blank_strings() {
        assert_eq!(validate_input(&Input::from("")), Err(CaseError::EmptyInput));
        assert_eq!(validate_input(&Input::from(" \t\n")), Err(CaseError::EmptyInput));
    }

    #[test]
    fn test_validate_delimiter_only_string_passes() {
        // Only whitespace counts as blank; hyphens and underscores do not.
        let input = Input::from("-_-");
        assert_eq!(validate_input(&input), Ok("-_-"));
        assert!(tokenize_strict(&input).unwrap().is_empty());
    }
}
