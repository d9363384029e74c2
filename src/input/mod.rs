/// A dynamically-typed value handed to the coercing and validating converters.
///
/// `camel_case` accepts anything and renders it to text first; `to_camel_case` and
/// `to_dot_case` reject everything that is not a non-blank string. Both need to see
/// null, undefined and non-string values, so those are representable here.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Null,
    Undefined,
    Str(String),
    Number(f64),
    Bool(bool),
    Array(Vec<Input>),
    /// Any other object; only its type name and `[object Object]` rendering matter.
    Object,
}

impl Input {
    /// Runtime type name reported in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Input::Null | Input::Array(_) | Input::Object => "object",
            Input::Undefined => "undefined",
            Input::Str(_) => "string",
            Input::Number(_) => "number",
            Input::Bool(_) => "boolean",
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Input::Null | Input::Undefined)
    }

    /// Render the value as text, the way `String(value)` would.
    pub fn coerce_to_string(&self) -> String {
        match self {
            Input::Null => "null".to_string(),
            Input::Undefined => "undefined".to_string(),
            Input::Str(s) => s.clone(),
            Input::Number(n) => format_number(*n),
            Input::Bool(b) => b.to_string(),
            Input::Array(items) => items
                .iter()
                .map(|item| {
                    if item.is_nullish() {
                        String::new()
                    } else {
                        item.coerce_to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Input::Object => "[object Object]".to_string(),
        }
    }
}

/// Shortest round-trip decimal rendering, switching to exponent form outside
/// `[1e-6, 1e21)` like a script runtime does.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers negative zero too.
        return "0".to_string();
    }

    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", n)
}

impl From<&str> for Input {
    fn from(s: &str) -> Self {
        Input::Str(s.to_string())
    }
}

impl From<String> for Input {
    fn from(s: String) -> Self {
        Input::Str(s)
    }
}

impl From<&String> for Input {
    fn from(s: &String) -> Self {
        Input::Str(s.clone())
    }
}

impl From<char> for Input {
    fn from(c: char) -> Self {
        Input::Str(c.to_string())
    }
}

impl From<bool> for Input {
    fn from(b: bool) -> Self {
        Input::Bool(b)
    }
}

impl From<f64> for Input {
    fn from(n: f64) -> Self {
        Input::Number(n)
    }
}

impl From<f32> for Input {
    fn from(n: f32) -> Self {
        Input::Number(n as f64)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input {
                fn from(n: $ty) -> Self {
                    Input::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Into<Input>> From<Vec<T>> for Input {
    fn from(items: Vec<T>) -> Self {
        Input::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Null, Into::into)
    }
}
