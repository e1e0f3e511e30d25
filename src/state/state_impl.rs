use super::{StateError, View};
use crate::auth::{LoginForm, RegisterForm};
use crate::form::{FieldSpec, FormController, FormHandle, FormOptions, SubmitOutcome};
use crate::logger::LogBuffer;
use crate::ui::Theme;
use log::*;

/// Message shown in the footer after a submission attempt.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Status {
    Submitted(String),
    Invalid(usize),
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Status::Submitted(message) => message.clone(),
            Status::Invalid(1) => "1 field needs attention".to_string(),
            Status::Invalid(count) => format!("{} fields need attention", count),
        }
    }
}

/// Houses data representative of application state.
///
pub struct State {
    view_stack: Vec<View>,
    login: FormController<LoginForm>,
    register: FormController<RegisterForm>,
    focused_field: usize,
    status: Option<Status>,
    theme: Theme,
    log: LogBuffer,
    log_visible: bool,
}

impl State {
    /// Build the state for a new session. The authentication flag picks the
    /// initial view.
    ///
    pub fn new(authenticated: bool, options: FormOptions, theme: Theme) -> Result<Self, StateError> {
        let mut login = FormController::<LoginForm>::new(options)?;
        login.on_submit(|data| info!("Login data: {:?}", data));
        let mut register = FormController::<RegisterForm>::new(options)?;
        register.on_submit(|data| info!("Registration data: {:?}", data));

        let initial_view = if authenticated { View::Main } else { View::Login };
        Ok(State {
            view_stack: vec![initial_view],
            login,
            register,
            focused_field: 0,
            status: None,
            theme,
            log: LogBuffer::default(),
            log_visible: true,
        })
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Attach the buffer the application logger writes to.
    ///
    pub fn set_log(&mut self, log: LogBuffer) -> &mut Self {
        self.log = log;
        self
    }

    /// Return up to `count` of the most recent log entries.
    ///
    pub fn log_entries(&self, count: usize) -> Vec<String> {
        self.log.tail(count)
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    /// Return the view on top of the stack.
    ///
    pub fn current_view(&self) -> View {
        self.view_stack.last().copied().unwrap_or(View::Login)
    }

    /// Push a view onto the stack and focus its first field.
    ///
    pub fn push_view(&mut self, view: View) {
        debug!("Pushing view {:?}", view);
        self.view_stack.push(view);
        self.focused_field = 0;
        self.status = None;
    }

    /// Pop the current view. The root view is never popped.
    ///
    pub fn pop_view(&mut self) -> Option<View> {
        if self.view_stack.len() <= 1 {
            return None;
        }
        let popped = self.view_stack.pop();
        debug!("Popped view {:?}, remaining views: {}", popped, self.view_stack.len());
        self.focused_field = 0;
        self.status = None;
        popped
    }

    /// Open the registration screen from the login screen.
    ///
    pub fn open_register(&mut self) {
        if self.current_view() == View::Login {
            self.push_view(View::Register);
        }
    }

    pub fn login_form(&self) -> &FormController<LoginForm> {
        &self.login
    }

    pub fn register_form(&self) -> &FormController<RegisterForm> {
        &self.register
    }

    /// Return the form hosted by the current view, if any.
    ///
    pub fn active_form(&self) -> Option<&dyn FormHandle> {
        match self.current_view() {
            View::Login => Some(&self.login as &dyn FormHandle),
            View::Register => Some(&self.register as &dyn FormHandle),
            View::Main => None,
        }
    }

    fn active_form_mut(&mut self) -> Result<&mut dyn FormHandle, StateError> {
        match self.current_view() {
            View::Login => Ok(&mut self.login as &mut dyn FormHandle),
            View::Register => Ok(&mut self.register as &mut dyn FormHandle),
            view => Err(StateError::NoActiveForm(format!("{:?}", view))),
        }
    }

    pub fn focused_field(&self) -> usize {
        self.focused_field
    }

    pub fn focused_field_spec(&self) -> Option<FieldSpec> {
        self.active_form()
            .and_then(|form| form.fields().get(self.focused_field).copied())
    }

    /// Move focus to the next or previous field, wrapping around, and blur
    /// the field that lost focus.
    ///
    fn move_focus(&mut self, forward: bool) -> Result<(), StateError> {
        let current = self.focused_field;
        let form = self.active_form_mut()?;
        let fields = form.fields();
        if fields.is_empty() {
            return Ok(());
        }
        if let Some(spec) = fields.get(current) {
            form.blur(spec.name);
        }
        self.focused_field = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        Ok(())
    }

    pub fn focus_next_field(&mut self) -> Result<(), StateError> {
        self.move_focus(true)
    }

    pub fn focus_prev_field(&mut self) -> Result<(), StateError> {
        self.move_focus(false)
    }

    /// Append a character to the focused field.
    ///
    pub fn input_char(&mut self, c: char) -> Result<(), StateError> {
        let spec = self.focused_spec()?;
        self.active_form_mut()?.push_char(spec.name, c);
        Ok(())
    }

    /// Remove the last character of the focused field.
    ///
    pub fn backspace(&mut self) -> Result<(), StateError> {
        let spec = self.focused_spec()?;
        self.active_form_mut()?.pop_char(spec.name);
        Ok(())
    }

    fn focused_spec(&self) -> Result<FieldSpec, StateError> {
        self.focused_field_spec()
            .ok_or_else(|| StateError::NoActiveForm(format!("{:?}", self.current_view())))
    }

    /// Submit the form of the current view and record the outcome in the
    /// footer status.
    ///
    pub fn submit_active_form(&mut self) -> Result<SubmitOutcome, StateError> {
        let view = self.current_view();
        let outcome = self.active_form_mut()?.submit();
        self.status = Some(match outcome {
            SubmitOutcome::Accepted => {
                Status::Submitted(format!("{} data submitted", view.title()))
            }
            SubmitOutcome::Rejected { invalid_fields } => {
                warn!("{} form rejected with {} invalid fields", view.title(), invalid_fields);
                Status::Invalid(invalid_fields)
            }
        });
        Ok(outcome)
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
