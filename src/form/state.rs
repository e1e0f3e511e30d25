//! Field values and touched flags for one form instance.

use std::collections::BTreeMap;

/// Current value and touched flag of a single field.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
}

/// Mapping from field name to its current state.
///
/// Reads are public; writes go through a [`FieldBinding`](super::FieldBinding)
/// or the owning controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    fields: BTreeMap<String, FieldState>,
}

impl FormState {
    /// Return a state with an empty entry for each of the given names.
    ///
    pub fn with_fields<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        FormState {
            fields: names
                .into_iter()
                .map(|name| (name.to_string(), FieldState::default()))
                .collect(),
        }
    }

    /// Return the current value of the field, or an empty string if unset.
    ///
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .get(name)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|field| field.touched)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub(super) fn field_mut(&mut self, name: &str) -> &mut FieldState {
        self.fields.entry(name.to_string()).or_default()
    }

    pub(super) fn set_value(&mut self, name: &str, value: String) {
        self.field_mut(name).value = value;
    }

    pub(super) fn touch(&mut self, name: &str) {
        self.field_mut(name).touched = true;
    }

    pub(super) fn touch_all(&mut self) {
        for field in self.fields.values_mut() {
            field.touched = true;
        }
    }
}
