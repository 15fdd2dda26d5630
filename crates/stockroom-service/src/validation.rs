//! Form field validation.
//!
//! Validation is an explicit ordered list of `(field, check, message)`
//! rules evaluated eagerly against a record of sanitized field values.
//! Every failing rule contributes one [`FieldError`]; evaluation never
//! short-circuits, so a submission collects all of its problems at once.

use std::fmt;

/// One rejected field: which field, the user-facing message, and the
/// sanitized value that was rejected (re-rendered into the form).
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// The form field name, e.g. `categoryName`.
    pub field: &'static str,
    /// User-facing message describing the failure.
    pub message: String,
    /// The sanitized submitted value.
    pub value: String,
}

/// A per-field predicate applied to a sanitized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The value must be non-empty after trimming.
    NotEmpty,
    /// The value may contain only ASCII letters, digits, and whitespace.
    /// An empty value passes; emptiness is `NotEmpty`'s concern.
    LettersDigitsSpaces,
    /// The value must parse as a finite number.
    Decimal,
    /// The value must parse as an integer no smaller than the bound.
    IntegerAtLeast(i32),
}

impl Check {
    fn passes(self, value: &str) -> bool {
        match self {
            Self::NotEmpty => !value.is_empty(),
            Self::LettersDigitsSpaces => value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace()),
            Self::Decimal => value.parse::<f64>().is_ok_and(f64::is_finite),
            Self::IntegerAtLeast(min) => value.parse::<i32>().is_ok_and(|n| n >= min),
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEmpty => write!(f, "not empty"),
            Self::LettersDigitsSpaces => write!(f, "letters, digits, and spaces"),
            Self::Decimal => write!(f, "decimal number"),
            Self::IntegerAtLeast(min) => write!(f, "integer >= {min}"),
        }
    }
}

/// An ordered list of `(field, check, message)` rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<(&'static str, Check, &'static str)>,
}

impl RuleSet {
    /// Build a rule set from an ordered rule list.
    pub fn new(rules: Vec<(&'static str, Check, &'static str)>) -> Self {
        Self { rules }
    }

    /// Evaluate every rule against a `(field, sanitized value)` record,
    /// returning all failures in rule order. A field missing from the
    /// record is checked as the empty string.
    pub fn check(&self, record: &[(&'static str, &str)]) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for &(field, check, message) in &self.rules {
            let value = record
                .iter()
                .find(|(name, _)| *name == field)
                .map(|(_, value)| *value)
                .unwrap_or("");
            if !check.passes(value) {
                errors.push(FieldError {
                    field,
                    message: message.to_string(),
                    value: value.to_string(),
                });
            }
        }
        errors
    }
}

/// Trim surrounding whitespace and escape markup-significant characters.
///
/// This is the sanitization step applied to every text field before
/// validation, persistence, and re-rendering.
pub fn sanitize(raw: &str) -> String {
    escape_markup(raw.trim())
}

/// Replace the characters that are significant in HTML with entities.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
