use thiserror::Error;

/// Failures raised by the validating converters (`to_camel_case`, `to_dot_case`)
/// and by style lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    #[error("Input cannot be null or undefined")]
    NullInput,

    #[error("Expected a string, but received {received}")]
    TypeMismatch { received: &'static str },

    #[error("Input cannot be an empty string")]
    EmptyInput,

    #[error("Unknown case style: {0}")]
    UnknownStyle(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_verbatim() {
        assert_eq!(
            CaseError::NullInput.to_string(),
            "Input cannot be null or undefined"
        );
        assert_eq!(
            CaseError::TypeMismatch { received: "number" }.to_string(),
            "Expected a string, but received number"
        );
        assert_eq!(
            CaseError::EmptyInput.to_string(),
            "Input cannot be an empty string"
        );
    }

    #[test]
    fn test_unknown_style_message() {
        let err = CaseError::UnknownStyle("snake".to_string());
        assert_eq!(err.to_string(), "Unknown case style: snake");
    }
}
