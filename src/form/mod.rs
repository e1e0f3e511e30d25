//! Form validation and submission.
//!
//! This module contains the pieces shared by every input screen:
//! - `FormState` holding field values and touched flags
//! - `Rule` and `Schema` for declarative, ordered per-field validation
//! - `FormController` gating the submission handler on a clean `ErrorMap`
//! - `FieldBinding` connecting one named field to its controller

mod binding;
mod controller;
mod error;
mod rules;
mod schema;
mod state;

#[cfg(test)]
mod tests;

pub use binding::FieldBinding;
pub use controller::{
    FieldSpec, FormController, FormHandle, FormModel, FormOptions, FormPhase, SubmissionResult,
    SubmitOutcome, ValidationMode,
};
pub use error::FormError;
pub use rules::Rule;
pub use schema::{ErrorMap, Schema};
pub use state::FormState;
