use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    static ref DELIMITER_RUN: Regex = Regex::new(r"[\s\-_]+").expect("invalid regex");
    static ref CAMEL_HUMP: Regex = Regex::new(r"([a-z])([A-Z])").expect("invalid regex");
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("invalid regex");
    static ref EDGE_HYPHENS: Regex = Regex::new(r"^-+|-+$").expect("invalid regex");
    static ref HYPHEN_RUN: Regex = Regex::new(r"-+").expect("invalid regex");
}

/// Converts a string to kebab-case.
///
/// Unlike the other converters this one also splits camel humps, so already camelCased
/// input converts cleanly. Runs of delimiters collapse to one hyphen and no hyphen is
/// left at either end.
///
/// ```
/// use wordcase::to_kebab_case;
///
/// assert_eq!(to_kebab_case("helloWorld"), "hello-world");
/// assert_eq!(to_kebab_case("  multiple   --  separators__here "), "multiple-separators-here");
/// ```
pub fn to_kebab_case(text: &str) -> String {
    let cleaned = DELIMITER_RUN.replace_all(text, " ");
    let cleaned = cleaned.trim();

    let humped = CAMEL_HUMP.replace_all(cleaned, "$1-$2");
    let hyphenated = WHITESPACE_RUN.replace_all(&humped, "-").to_lowercase();

    let trimmed = EDGE_HYPHENS.replace_all(&hyphenated, "");
    let out = HYPHEN_RUN.replace_all(&trimmed, "-").into_owned();

    trace!(%out, "to_kebab_case");
    out
}
