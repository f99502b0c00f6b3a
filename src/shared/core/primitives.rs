use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier carried by every record and by every foreign reference.
///
/// Fixture records use small integers. Records created at runtime get a random
/// UUID token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Token(String),
}

impl RecordId {
    pub fn generate() -> Self {
        Self::Token(Uuid::new_v4().to_string())
    }

    /// Numeric identifiers match on the base-10 coercion of `raw`, tokens on
    /// exact text.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Numeric(value) => parse_base10(raw) == Some(*value),
            Self::Token(token) => token == raw,
        }
    }

    /// True only for a token spelled exactly as `raw`.
    pub fn is_token(&self, raw: &str) -> bool {
        matches!(self, Self::Token(token) if token == raw)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Token(token) => f.write_str(token),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Token(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Token(value.to_string())
    }
}

/// Leading-digits integer coercion: skips leading whitespace, accepts one sign,
/// reads digits up to the first non-digit and ignores the rest.
pub fn parse_base10(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}
