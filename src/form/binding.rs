//! Binding between one named field and its controller.

use super::controller::{FormController, FormModel};

/// Exposes a single field's value together with its change and blur
/// handlers. Unknown names behave as freshly initialised empty fields.
///
pub struct FieldBinding<'a, T: FormModel> {
    name: &'a str,
    controller: &'a mut FormController<T>,
}

impl<'a, T: FormModel> FieldBinding<'a, T> {
    pub(super) fn new(name: &'a str, controller: &'a mut FormController<T>) -> Self {
        FieldBinding { name, controller }
    }

    pub fn value(&self) -> &str {
        self.controller.value(self.name)
    }

    pub fn error(&self) -> Option<&str> {
        self.controller.error(self.name)
    }

    pub fn is_touched(&self) -> bool {
        self.controller.state().is_touched(self.name)
    }

    /// Overwrite the field's value.
    ///
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.controller.change(self.name, value.into());
    }

    /// Mark the field touched.
    ///
    pub fn on_blur(&mut self) {
        self.controller.blur(self.name);
    }

    pub fn push_char(&mut self, c: char) {
        let mut value = self.value().to_string();
        value.push(c);
        self.on_change(value);
    }

    pub fn pop_char(&mut self) {
        let mut value = self.value().to_string();
        if value.pop().is_some() {
            self.on_change(value);
        }
    }
}
