//! String case conversion: camelCase, kebab-case and dot.case.
//!
//! Three families of converters live side by side and deliberately behave differently:
//!
//! - [`camel_case`] coerces any value to text, scrubs punctuation and never fails.
//! - [`to_camel_case`] and [`to_dot_case`] accept only non-blank strings and report
//!   anything else as a [`CaseError`].
//! - [`to_kebab_case`] takes any string and is the only converter that splits camel humps.

pub mod cli;
pub mod convert;
pub mod input;

pub use convert::{camel_case, to_camel_case, to_dot_case, to_kebab_case, CaseError, CaseStyle};
pub use input::Input;
