//! State management-specific error types.

use crate::form::FormError;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// A form could not be built
    #[error("Failed to build form: {0}")]
    Form(#[from] FormError),

    /// Operation requires a view that hosts a form
    #[error("View has no form: {0}")]
    NoActiveForm(String),
}
