//! Parameter values and their GraphQL literal form

use std::fmt;

/// A parameter value
///
/// Rendered into the request as a GraphQL literal: strings are quoted and
/// escaped, enum values are written bare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Str(String),
    Bool(bool),
    /// Bare enum literal, e.g. `LIVE`
    Enum(String),
}

impl ParamValue {
    /// Create an enum literal value
    #[must_use]
    pub fn enum_value(value: impl Into<String>) -> Self {
        Self::Enum(value.into())
    }

    /// Render as a GraphQL literal
    #[must_use]
    pub fn to_graphql(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Enum(e) => e.clone(),
            Self::Str(s) => quote(s),
        }
    }

    /// Render as a GraphQL string literal regardless of the variant
    #[must_use]
    pub fn to_string_literal(&self) -> String {
        quote(&self.as_raw())
    }

    /// Raw text without quoting
    #[must_use]
    pub fn as_raw(&self) -> String {
        match self {
            Self::Str(s) | Self::Enum(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }

    /// Try to read as an integer
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Quote a string as a GraphQL string literal
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Other C0 controls are not valid GraphQL source characters
            c if u32::from(c) < 0x20 => out.push_str(&format!("\\u{:04X}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_graphql())
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for ParamValue {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for ParamValue {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}
