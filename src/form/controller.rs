//! Form controller: owns field state, runs validation and gates submission.

use super::binding::FieldBinding;
use super::error::FormError;
use super::schema::{ErrorMap, Schema};
use super::state::FormState;
use log::*;
use serde::{Deserialize, Serialize};

/// Presentation metadata for a form field.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub secret: bool,
}

/// A typed payload assembled from a validated form.
///
pub trait FormModel: Sized {
    /// Fields in display order.
    fn fields() -> &'static [FieldSpec];

    fn schema() -> Result<Schema, FormError>;

    /// Build the payload from a snapshot that passed validation.
    fn from_state(state: &FormState) -> Self;
}

/// When validation runs outside of an explicit submit.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    #[default]
    OnSubmit,
    OnBlur,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormOptions {
    pub validation_mode: ValidationMode,
}

/// Lifecycle of a submission attempt.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Validating,
    Rejected,
    Submitting,
}

/// Outcome of [`FormController::submit`].
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionResult<T> {
    Accepted(T),
    Rejected(ErrorMap),
}

type SubmitHandler<T> = Box<dyn FnMut(&T)>;

/// Owns the state of one form and decides when its handler runs.
///
pub struct FormController<T: FormModel> {
    schema: Schema,
    state: FormState,
    errors: ErrorMap,
    phase: FormPhase,
    options: FormOptions,
    submit_count: usize,
    handler: Option<SubmitHandler<T>>,
}

impl<T: FormModel> FormController<T> {
    /// Build a controller for `T`, seeding an empty entry for every field the
    /// schema declares.
    ///
    pub fn new(options: FormOptions) -> Result<Self, FormError> {
        let schema = T::schema()?.checked()?;
        let state = FormState::with_fields(schema.field_names());
        Ok(FormController {
            schema,
            state,
            errors: ErrorMap::default(),
            phase: FormPhase::Editing,
            options,
            submit_count: 0,
            handler: None,
        })
    }

    /// Register the callback that receives accepted payloads.
    ///
    pub fn on_submit<F>(&mut self, handler: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    pub fn bind<'a>(&'a mut self, name: &'a str) -> FieldBinding<'a, T> {
        FieldBinding::new(name, self)
    }

    pub fn value(&self, name: &str) -> &str {
        self.state.value(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    /// Validate the current state and, only if it passes, hand the typed
    /// payload to the registered handler.
    ///
    pub fn submit(&mut self) -> SubmissionResult<T> {
        self.submit_count += 1;
        self.phase = FormPhase::Validating;

        let errors = self.schema.validate(&self.state);
        if !errors.is_empty() {
            self.state.touch_all();
            self.errors = errors.clone();
            self.phase = FormPhase::Rejected;
            return SubmissionResult::Rejected(errors);
        }

        self.errors = ErrorMap::default();
        self.phase = FormPhase::Submitting;
        let payload = T::from_state(&self.state);
        if let Some(handler) = self.handler.as_mut() {
            handler(&payload);
        }
        self.phase = FormPhase::Editing;
        SubmissionResult::Accepted(payload)
    }

    /// Clear values, touched flags, errors and submit history.
    ///
    pub fn reset(&mut self) {
        self.state = FormState::with_fields(self.schema.field_names());
        self.errors = ErrorMap::default();
        self.phase = FormPhase::Editing;
        self.submit_count = 0;
    }

    pub(super) fn change(&mut self, name: &str, value: String) {
        self.state.set_value(name, value);
        if self.phase == FormPhase::Rejected {
            self.phase = FormPhase::Editing;
        }
        if self.submit_count > 0 {
            self.refresh_errors();
        }
    }

    pub(super) fn blur(&mut self, name: &str) {
        self.state.touch(name);
        if self.submit_count > 0 || self.options.validation_mode == ValidationMode::OnBlur {
            self.refresh_errors();
        }
    }

    /// Recompute the exposed errors from the current snapshot. Before the
    /// first submit only touched fields are shown.
    ///
    fn refresh_errors(&mut self) {
        let errors = self.schema.validate(&self.state);
        self.errors = if self.submit_count > 0 {
            errors
        } else {
            let state = &self.state;
            errors.only(|field| state.is_touched(field))
        };
    }
}

/// Outcome of a type-erased submit.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { invalid_fields: usize },
}

/// Object-safe view of a controller, used where the payload type does not
/// matter (key routing, rendering).
///
pub trait FormHandle {
    fn fields(&self) -> &'static [FieldSpec];
    fn value(&self, name: &str) -> &str;
    fn error(&self, name: &str) -> Option<&str>;
    fn is_touched(&self, name: &str) -> bool;
    fn push_char(&mut self, name: &str, c: char);
    fn pop_char(&mut self, name: &str);
    fn blur(&mut self, name: &str);
    fn submit(&mut self) -> SubmitOutcome;
    fn reset(&mut self);
}

impl<T: FormModel> FormHandle for FormController<T> {
    fn fields(&self) -> &'static [FieldSpec] {
        T::fields()
    }

    fn value(&self, name: &str) -> &str {
        FormController::value(self, name)
    }

    fn error(&self, name: &str) -> Option<&str> {
        FormController::error(self, name)
    }

    fn is_touched(&self, name: &str) -> bool {
        self.state.is_touched(name)
    }

    fn push_char(&mut self, name: &str, c: char) {
        self.bind(name).push_char(c);
    }

    fn pop_char(&mut self, name: &str) {
        self.bind(name).pop_char();
    }

    fn blur(&mut self, name: &str) {
        self.bind(name).on_blur();
    }

    fn submit(&mut self) -> SubmitOutcome {
        match FormController::submit(self) {
            SubmissionResult::Accepted(_) => SubmitOutcome::Accepted,
            SubmissionResult::Rejected(errors) => {
                for error in errors.iter_errors() {
                    debug!("Rejected {}", error);
                }
                SubmitOutcome::Rejected {
                    invalid_fields: errors.len(),
                }
            }
        }
    }

    fn reset(&mut self) {
        FormController::reset(self);
    }
}
