use super::{email_rules, password_rules, redact, EMAIL, PASSWORD};
use crate::form::{FieldSpec, FormError, FormModel, FormState, Schema};
use std::fmt;

const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: EMAIL,
        label: "Email",
        placeholder: "Email",
        secret: false,
    },
    FieldSpec {
        name: PASSWORD,
        label: "Password",
        placeholder: "Password",
        secret: true,
    },
];

/// Credentials submitted from the login screen.
///
#[derive(Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormModel for LoginForm {
    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn schema() -> Result<Schema, FormError> {
        Ok(Schema::new()
            .field(EMAIL, email_rules()?)
            .field(PASSWORD, password_rules()?))
    }

    fn from_state(state: &FormState) -> Self {
        LoginForm {
            email: state.value(EMAIL).to_string(),
            password: state.value(PASSWORD).to_string(),
        }
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FormController, FormOptions, SubmissionResult};
    use fake::faker::internet::en::SafeEmail;
    use fake::{Fake, Faker};
    use std::cell::Cell;
    use std::rc::Rc;

    fn form_with(email: &str, password: &str) -> FormController<LoginForm> {
        let mut form = FormController::<LoginForm>::new(FormOptions::default()).unwrap();
        form.bind(EMAIL).on_change(email);
        form.bind(PASSWORD).on_change(password);
        form
    }

    #[test]
    fn empty_login_requires_both_fields() {
        let mut form = form_with("", "");
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        form.on_submit(move |_| counter.set(counter.get() + 1));

        match form.submit() {
            SubmissionResult::Rejected(errors) => {
                assert_eq!(errors.get(EMAIL), Some("Email is required"));
                assert_eq!(errors.get(PASSWORD), Some("Password is required"));
                assert_eq!(errors.len(), 2);
            }
            SubmissionResult::Accepted(_) => panic!("empty login must be rejected"),
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        let mut form = form_with("not-an-email", "Aa1$aaaa");
        match form.submit() {
            SubmissionResult::Rejected(errors) => {
                assert_eq!(errors.get(EMAIL), Some("Enter a valid email"));
                assert_eq!(errors.len(), 1);
            }
            SubmissionResult::Accepted(_) => panic!("malformed email must be rejected"),
        }
    }

    #[test]
    fn validation_is_deterministic() {
        for _ in 0..20 {
            let email: String = SafeEmail().fake();
            let password: String = Faker.fake();
            let form = form_with(&email, &password);
            let schema = LoginForm::schema().unwrap();
            assert_eq!(schema.validate(form.state()), schema.validate(form.state()));
            assert_eq!(
                schema.validate(form.state()),
                schema.validate(&form.state().clone())
            );
        }
    }

    #[test]
    fn generated_email_accepted() {
        let email: String = SafeEmail().fake();
        let mut form = form_with(&email, "Aa1$aaaa");
        assert_eq!(
            form.submit(),
            SubmissionResult::Accepted(LoginForm {
                email,
                password: "Aa1$aaaa".to_string(),
            })
        );
    }

    #[test]
    fn debug_redacts_password() {
        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: "Aa1$aaaa".to_string(),
        };
        let debug = format!("{:?}", form);
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("Aa1$aaaa"));
        assert!(debug.contains("********"));
    }

    #[test]
    fn fields_match_schema() {
        let schema = LoginForm::schema().unwrap();
        let declared: Vec<&str> = schema.field_names().collect();
        let shown: Vec<&str> = LoginForm::fields().iter().map(|f| f.name).collect();
        assert_eq!(declared, shown);
    }
}
