//! Ordered password rules. Evaluation stops at the first rule that fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::utf16_len;

/// Characters accepted by the special-character rule
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

pub const MIN_PASSWORD_CHARS: usize = 7;

static UPPERCASE: Lazy<Regex> = Lazy::new(|| compile("[A-Z]"));
static LOWERCASE: Lazy<Regex> = Lazy::new(|| compile("[a-z]"));
static DIGIT: Lazy<Regex> = Lazy::new(|| compile("[0-9]"));
static SPECIAL: Lazy<Regex> =
    Lazy::new(|| compile(&format!("[{}]", regex::escape(SPECIAL_CHARACTERS))));

#[allow(clippy::expect_used)] // patterns are compile-time constants
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("password rule pattern should compile")
}

/// A named predicate over the password string
#[derive(Clone, Copy)]
pub struct PasswordRule {
    pub name: &'static str,
    pub message: &'static str,
    check: fn(&str) -> bool,
}

impl PasswordRule {
    #[must_use]
    pub fn passes(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

impl std::fmt::Debug for PasswordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordRule")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for PasswordRule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PasswordRule {}

fn long_enough(password: &str) -> bool {
    utf16_len(password) >= MIN_PASSWORD_CHARS
}

fn has_uppercase(password: &str) -> bool {
    UPPERCASE.is_match(password)
}

fn has_lowercase(password: &str) -> bool {
    LOWERCASE.is_match(password)
}

fn has_digit(password: &str) -> bool {
    DIGIT.is_match(password)
}

fn has_special(password: &str) -> bool {
    SPECIAL.is_match(password)
}

pub static PASSWORD_RULES: [PasswordRule; 5] = [
    PasswordRule {
        name: "length",
        message: "Password should contain minimum of 7 characters",
        check: long_enough,
    },
    PasswordRule {
        name: "uppercase",
        message: "Password needs an uppercase letter",
        check: has_uppercase,
    },
    PasswordRule {
        name: "lowercase",
        message: "Password needs a lowercase letter",
        check: has_lowercase,
    },
    PasswordRule {
        name: "digit",
        message: "Password needs a digit",
        check: has_digit,
    },
    PasswordRule {
        name: "special",
        message: "Password needs a special character",
        check: has_special,
    },
];

/// First rule in table order that `password` does not satisfy
#[must_use]
pub fn first_failed_rule(password: &str) -> Option<&'static PasswordRule> {
    PASSWORD_RULES.iter().find(|rule| !rule.passes(password))
}
