//! Form-specific error types.

/// A single failed validation rule, reported inline next to its field.
///
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Errors raised while building a form. Validation failures are never
/// reported through this type.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A pattern rule was declared with a regular expression that does not compile
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// A cross-field rule refers to a field the schema never declares
    #[error("Field '{field}' refers to undeclared field '{other}'")]
    UnknownReference { field: String, other: String },
}
