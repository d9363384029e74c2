use tracing::trace;

use super::tokenize::tokenize_strict;
use super::CaseError;
use crate::input::Input;

/// Converts a non-blank string to dot.case: every word lowercased and joined with `.`.
///
/// `.` is not a delimiter, so feeding the output back in lowercases it again but never
/// splits it further.
///
/// ```
/// use wordcase::to_dot_case;
///
/// assert_eq!(to_dot_case("hello-world_example").unwrap(), "hello.world.example");
/// ```
pub fn to_dot_case(input: impl Into<Input>) -> Result<String, CaseError> {
    let input = input.into();
    let out = tokenize_strict(&input)?
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(".");

    trace!(%out, "to_dot_case");
    Ok(out)
}
