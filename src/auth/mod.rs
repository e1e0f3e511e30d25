//! Authentication forms.
//!
//! Login and registration payloads, their field layouts and their validation
//! schemas. The rules shared by both forms live here.

mod login;
mod patterns;
mod register;

pub use login::LoginForm;
pub use register::RegisterForm;

use crate::form::{FormError, Rule};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";

const PASSWORD_MIN_LENGTH: usize = 6;

/// Required email in a plausible `local@domain.tld` shape.
///
fn email_rules() -> Result<Vec<Rule>, FormError> {
    Ok(vec![
        Rule::required("Email is required"),
        Rule::pattern(EMAIL, patterns::EMAIL, "Enter a valid email")?,
    ])
}

/// Required password with a minimum length and one rule per character
/// class, so the message names the missing class.
///
fn password_rules() -> Result<Vec<Rule>, FormError> {
    Ok(vec![
        Rule::required("Password is required"),
        Rule::min_length(
            PASSWORD_MIN_LENGTH,
            format!("Password must be at least {PASSWORD_MIN_LENGTH} characters"),
        ),
        Rule::pattern(
            PASSWORD,
            patterns::LOWERCASE,
            "Password must contain at least one Small letter",
        )?,
        Rule::pattern(
            PASSWORD,
            patterns::UPPERCASE,
            "Password must contain at least one Capital letter",
        )?,
        Rule::pattern(
            PASSWORD,
            patterns::DIGIT,
            "Password must contain at least one digit",
        )?,
        Rule::pattern(
            PASSWORD,
            patterns::SPECIAL,
            "Password must contain at least one special character",
        )?,
    ])
}

/// Replace every character of a secret with `*` for logging.
///
fn redact(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}
