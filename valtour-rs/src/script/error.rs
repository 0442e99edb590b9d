//! Failure signals raised by value operations.
//!
//! These mirror the three error classes a script can observe: type
//! mismatches, out-of-range numeric conversions, and unparseable literals.
//! Nothing in the library recovers from them; they propagate to the caller
//! with `?` and end the running walkthrough.

use thiserror::Error;

/// An error signalled by a value operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("TypeError: {0}")]
    Type(String),
    #[error("RangeError: {0}")]
    Range(String),
    #[error("SyntaxError: {0}")]
    Syntax(String),
}

impl ScriptError {
    pub fn type_error(msg: impl Into<String>) -> Self {
        ScriptError::Type(msg.into())
    }

    pub fn range_error(msg: impl Into<String>) -> Self {
        ScriptError::Range(msg.into())
    }

    pub fn syntax_error(msg: impl Into<String>) -> Self {
        ScriptError::Syntax(msg.into())
    }

    /// The error class name (`TypeError`, `RangeError`, `SyntaxError`).
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptError::Type(_) => "TypeError",
            ScriptError::Range(_) => "RangeError",
            ScriptError::Syntax(_) => "SyntaxError",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ScriptError::Type(m) | ScriptError::Range(m) | ScriptError::Syntax(m) => m,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScriptError>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_kind() {
        let e = ScriptError::type_error("x is not a function");
        assert_eq!(e.to_string(), "TypeError: x is not a function");
        assert_eq!(e.kind(), "TypeError");
        assert_eq!(e.message(), "x is not a function");
    }

    #[test]
    fn range_and_syntax() {
        assert_eq!(ScriptError::range_error("Division by zero").to_string(), "RangeError: Division by zero");
        assert_eq!(ScriptError::syntax_error("bad").kind(), "SyntaxError");
    }
}
