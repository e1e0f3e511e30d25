//! Declarative validation schemas and the error maps they produce.

use super::error::{FormError, ValidationError};
use super::rules::Rule;
use super::state::FormState;
use std::collections::BTreeMap;

/// Mapping from field name to the message of its first failing rule.
///
/// Always produced wholesale by [`Schema::validate`]; fields that pass have
/// no entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<String, String>,
}

impl ErrorMap {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Return the entries as owned validation errors, ordered by field name.
    ///
    pub fn iter_errors(&self) -> impl Iterator<Item = ValidationError> + '_ {
        self.errors.iter().map(|(field, message)| ValidationError {
            field: field.clone(),
            message: message.clone(),
        })
    }

    /// Return a copy keeping only the fields accepted by `keep`.
    ///
    pub fn only<F>(&self, keep: F) -> ErrorMap
    where
        F: Fn(&str) -> bool,
    {
        ErrorMap {
            errors: self
                .errors
                .iter()
                .filter(|(field, _)| keep(field))
                .map(|(field, message)| (field.clone(), message.clone()))
                .collect(),
        }
    }
}

#[derive(Clone, Debug)]
struct FieldRules {
    name: String,
    rules: Vec<Rule>,
}

/// Ordered per-field rule lists.
///
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new() -> Self {
        Schema::default()
    }

    /// Declare a field and its rules in evaluation order. Declaring the same
    /// field twice appends to its rule list.
    ///
    pub fn field<I>(mut self, name: &str, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => field.rules.extend(rules),
            None => self.fields.push(FieldRules {
                name: name.to_string(),
                rules: rules.into_iter().collect(),
            }),
        }
        self
    }

    /// Check that every cross-field rule refers to a declared field.
    ///
    pub fn checked(self) -> Result<Self, FormError> {
        for field in &self.fields {
            for other in field.rules.iter().filter_map(Rule::reference) {
                if !self.fields.iter().any(|declared| declared.name == other) {
                    return Err(FormError::UnknownReference {
                        field: field.name.clone(),
                        other: other.to_string(),
                    });
                }
            }
        }
        Ok(self)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Run the rules of one field against the snapshot, stopping at the
    /// first failure.
    ///
    pub fn validate_field(&self, name: &str, state: &FormState) -> Option<String> {
        self.fields
            .iter()
            .filter(|field| field.name == name)
            .flat_map(|field| field.rules.iter())
            .find_map(|rule| rule.check(name, state))
            .map(str::to_string)
    }

    /// Run every field's rules against the snapshot.
    ///
    pub fn validate(&self, state: &FormState) -> ErrorMap {
        let errors = self
            .fields
            .iter()
            .filter_map(|field| {
                field
                    .rules
                    .iter()
                    .find_map(|rule| rule.check(&field.name, state))
                    .map(|message| (field.name.clone(), message.to_string()))
            })
            .collect();
        ErrorMap { errors }
    }
}
