use super::{email_rules, password_rules, redact, CONFIRM_PASSWORD, EMAIL, NAME, PASSWORD};
use crate::form::{FieldSpec, FormError, FormModel, FormState, Rule, Schema};
use std::fmt;

const NAME_MIN_LENGTH: usize = 3;

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: NAME,
        label: "Name",
        placeholder: "Name",
        secret: false,
    },
    FieldSpec {
        name: EMAIL,
        label: "Email",
        placeholder: "email",
        secret: false,
    },
    FieldSpec {
        name: PASSWORD,
        label: "Password",
        placeholder: "Password",
        secret: true,
    },
    FieldSpec {
        name: CONFIRM_PASSWORD,
        label: "Confirm Password",
        placeholder: "Confirm Password",
        secret: true,
    },
];

/// Account details submitted from the registration screen.
///
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormModel for RegisterForm {
    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn schema() -> Result<Schema, FormError> {
        Ok(Schema::new()
            .field(
                NAME,
                [
                    Rule::required("Name is required"),
                    Rule::min_length(
                        NAME_MIN_LENGTH,
                        format!("Name must be at least {NAME_MIN_LENGTH} characters"),
                    ),
                ],
            )
            .field(EMAIL, email_rules()?)
            .field(PASSWORD, password_rules()?)
            .field(
                CONFIRM_PASSWORD,
                [
                    Rule::required("Confirm Password is required"),
                    Rule::equals_field(PASSWORD, "Passwords must match"),
                ],
            ))
    }

    fn from_state(state: &FormState) -> Self {
        RegisterForm {
            name: state.value(NAME).to_string(),
            email: state.value(EMAIL).to_string(),
            password: state.value(PASSWORD).to_string(),
            confirm_password: state.value(CONFIRM_PASSWORD).to_string(),
        }
    }
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .field("confirm_password", &redact(&self.confirm_password))
            .finish()
    }
}
