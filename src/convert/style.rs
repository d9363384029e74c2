use std::fmt;
use std::str::FromStr;

use super::{camel_case, to_camel_case, to_dot_case, to_kebab_case, CaseError};

/// The conversions the crate offers, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// Lenient camelCase (`camel_case`).
    Camel,
    /// Validating camelCase (`to_camel_case`).
    StrictCamel,
    Kebab,
    Dot,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 4] = [
        CaseStyle::Camel,
        CaseStyle::StrictCamel,
        CaseStyle::Kebab,
        CaseStyle::Dot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::StrictCamel => "to-camel",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Dot => "dot",
        }
    }

    /// Runs the converter for this style. Lenient styles always succeed.
    pub fn convert(self, text: &str) -> Result<String, CaseError> {
        match self {
            CaseStyle::Camel => Ok(camel_case(text)),
            CaseStyle::StrictCamel => to_camel_case(text),
            CaseStyle::Kebab => Ok(to_kebab_case(text)),
            CaseStyle::Dot => to_dot_case(text),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "camel" => Ok(CaseStyle::Camel),
            "to-camel" | "strict-camel" => Ok(CaseStyle::StrictCamel),
            "kebab" => Ok(CaseStyle::Kebab),
            "dot" => Ok(CaseStyle::Dot),
            _ => Err(CaseError::UnknownStyle(s.to_string())),
        }
    }
}
