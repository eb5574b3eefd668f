//! Signup form validation.
//!
//! Checks run in a fixed order and stop at the first failure so that a
//! rejected submission produces exactly one message. The email check is a
//! length heuristic only.

use crate::password::{PasswordRule, first_failed_rule};
use crate::text::{trim_form_value, utf16_len};
use std::fmt;

pub const MIN_NAME_CHARS: usize = 3;
pub const MIN_EMAIL_CHARS: usize = 4;

/// Raw field values as read from the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupFields<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupFailure {
    NameTooShort,
    EmailTooShort,
    Password(&'static PasswordRule),
    PasswordMismatch,
}

impl SignupFailure {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NameTooShort => "Name should contain minimum of 3 characters",
            Self::EmailTooShort => "Email should contain minimum of 4 characters",
            Self::Password(rule) => rule.message,
            Self::PasswordMismatch => "Passwords must match",
        }
    }
}

impl fmt::Display for SignupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SignupFailure {}

fn trimmed_len(value: &str) -> usize {
    utf16_len(trim_form_value(value))
}

/// Validate a signup submission.
///
/// # Errors
///
/// Returns the first failing check, in order: name, email, each password
/// rule, then password confirmation.
pub fn validate_signup(fields: &SignupFields<'_>) -> Result<(), SignupFailure> {
    if trimmed_len(fields.name) < MIN_NAME_CHARS {
        return Err(SignupFailure::NameTooShort);
    }
    if trimmed_len(fields.email) < MIN_EMAIL_CHARS {
        return Err(SignupFailure::EmailTooShort);
    }
    if let Some(rule) = first_failed_rule(fields.password) {
        return Err(SignupFailure::Password(rule));
    }
    if fields.password != fields.confirm {
        return Err(SignupFailure::PasswordMismatch);
    }
    Ok(())
}
