//! Tagged parsing for numeric form inputs.
//!
//! The forms previously coerced unparseable input with
//! `parse().unwrap_or(0)`, which makes "0", "" and "abc" indistinguishable
//! once submitted. `NumberInput` keeps the three cases apart: an empty
//! input clears the field, a valid number sets it, and garbage is reported
//! back to the user instead of being swallowed.

/// Outcome of parsing a raw numeric input string.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    /// Field left blank; serializes as an absent key, never as zero.
    Empty,
    Value(f64),
    Invalid(String),
}

impl NumberInput {
    /// Parses a raw input string. Whitespace-only counts as empty.
    pub fn parse(raw: &str) -> NumberInput {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NumberInput::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => NumberInput::Value(value),
            _ => NumberInput::Invalid(format!("not a number: \"{}\"", trimmed)),
        }
    }

    /// `Some(reason)` for invalid input, `None` otherwise.
    pub fn error(&self) -> Option<&str> {
        match self {
            NumberInput::Invalid(reason) => Some(reason),
            _ => None,
        }
    }
}
