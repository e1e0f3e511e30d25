//! Per-field validation rules.

use super::error::FormError;
use super::state::FormState;
use regex::Regex;

/// A single validation rule with the message reported when it fails.
///
#[derive(Clone, Debug)]
pub enum Rule {
    /// Fails when the trimmed value is empty.
    Required { message: String },
    /// Fails when the value has fewer than `min` characters.
    MinLength { min: usize, message: String },
    /// Fails when the value does not match `regex`.
    Pattern { regex: Regex, message: String },
    /// Fails unless the value equals the current value of `other`.
    EqualsField { other: String, message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Rule::MinLength {
            min,
            message: message.into(),
        }
    }

    /// Compile `pattern` into a rule. `field` names the owning field for
    /// error reporting only.
    ///
    pub fn pattern(field: &str, pattern: &str, message: impl Into<String>) -> Result<Self, FormError> {
        let regex = Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
            field: field.to_string(),
            source,
        })?;
        Ok(Rule::Pattern {
            regex,
            message: message.into(),
        })
    }

    pub fn equals_field(other: impl Into<String>, message: impl Into<String>) -> Self {
        Rule::EqualsField {
            other: other.into(),
            message: message.into(),
        }
    }

    /// Evaluate the rule for `field` against the given snapshot. Returns the
    /// failure message, or `None` if the rule passes.
    ///
    pub fn check<'a>(&'a self, field: &str, state: &FormState) -> Option<&'a str> {
        let value = state.value(field);
        let passed = match self {
            Rule::Required { .. } => !value.trim().is_empty(),
            Rule::MinLength { min, .. } => value.chars().count() >= *min,
            Rule::Pattern { regex, .. } => regex.is_match(value),
            Rule::EqualsField { other, .. } => value == state.value(other),
        };
        if passed {
            None
        } else {
            Some(self.message())
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message }
            | Rule::MinLength { message, .. }
            | Rule::Pattern { message, .. }
            | Rule::EqualsField { message, .. } => message,
        }
    }

    /// Name of the sibling field this rule reads, if any.
    ///
    pub fn reference(&self) -> Option<&str> {
        match self {
            Rule::EqualsField { other, .. } => Some(other),
            _ => None,
        }
    }
}
