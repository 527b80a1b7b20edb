//! Client-side credential checks.
//!
//! Validation is a pure function of the current [`Credentials`]; the email
//! and password checks never influence each other, so both errors can be
//! reported at once.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PASSWORD_CHARS: usize = 6;

pub const EMAIL_REQUIRED: &str = "Email address is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

// local@domain.tld: no whitespace, exactly one `@`, a dot somewhere after it.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Form input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

/// Values typed into the form. Held only in memory.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = None,
            Field::Password => self.password = None,
        }
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Checks that `email` looks like `local@domain.tld`. The caller trims.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn check_email(email: &str) -> Option<&'static str> {
    let email = email.trim();
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

/// Runs both field checks against `credentials`.
pub fn validate(credentials: &Credentials) -> FieldErrors {
    FieldErrors {
        email: check_email(&credentials.email),
        password: check_password(&credentials.password),
    }
}
