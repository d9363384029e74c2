pub mod camel;
pub mod dot;
pub mod error;
pub mod kebab;
pub mod style;
pub mod tokenize;

pub use camel::{camel_case, join_camel, to_camel_case};
pub use dot::to_dot_case;
pub use error::CaseError;
pub use kebab::to_kebab_case;
pub use style::CaseStyle;
pub use tokenize::{is_delimiter, tokenize_lenient, tokenize_strict, validate_input};
