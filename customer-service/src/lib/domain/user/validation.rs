//! Structural checks on sign-up input.
//!
//! Checks never abort early: each one takes the accumulated [`Validation`] by
//! value and hands back a new one, so a single pass reports every failing field.

use std::str::FromStr;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::UserDetails;

pub const PASSWORD_MIN_BYTES: usize = 8;
pub const PASSWORD_MAX_BYTES: usize = 72;
pub const NAME_MAX_BYTES: usize = 100;

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Accumulated outcome of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    failures: Vec<FieldError>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field` unless `ok` holds.
    #[must_use]
    pub fn check(mut self, ok: bool, field: &'static str, message: &'static str) -> Self {
        if !ok {
            self.failures.push(FieldError { field, message });
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[FieldError] {
        &self.failures
    }

    /// Names of the failing fields, in check order, without repeats.
    pub fn failed_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        for failure in &self.failures {
            if !fields.contains(&failure.field) {
                fields.push(failure.field);
            }
        }
        fields
    }
}

const LOCAL_PART_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";
const DNS_LABEL_MAX_BYTES: usize = 63;

/// Unquoted ASCII local part, `@`, and a dotted domain of DNS labels.
///
/// `email_address` also accepts quoted local parts, `[...]` domain literals
/// and display text; the raw halves are checked so all of these are rejected.
pub fn is_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.rsplit_once('@') {
        Some((local, domain)) => {
            is_local_part(local)
                && is_domain(domain)
                && email_address::EmailAddress::from_str(email).is_ok()
        }
        None => false,
    }
}

fn is_local_part(local: &str) -> bool {
    !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
}

fn is_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| is_dns_label(label))
}

fn is_dns_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= DNS_LABEL_MAX_BYTES
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

pub fn validate_email(v: Validation, email: &str) -> Validation {
    v.check(!email.is_empty(), "email", "must be provided")
        .check(is_email(email), "email", "must be a valid email address")
}

pub fn validate_password(v: Validation, password: &str) -> Validation {
    v.check(!password.is_empty(), "password", "must be provided")
        .check(
            password.len() >= PASSWORD_MIN_BYTES,
            "password",
            "must be at least 8 bytes long",
        )
        .check(
            password.len() <= PASSWORD_MAX_BYTES,
            "password",
            "must not be more than 72 bytes long",
        )
}

pub fn validate_details(v: Validation, details: &UserDetails) -> Validation {
    v.check(!details.first_name.is_empty(), "first_name", "must be provided")
        .check(
            details.first_name.len() <= NAME_MAX_BYTES,
            "first_name",
            "must not be more than 100 bytes long",
        )
        .check(!details.last_name.is_empty(), "last_name", "must be provided")
        .check(
            details.last_name.len() <= NAME_MAX_BYTES,
            "last_name",
            "must not be more than 100 bytes long",
        )
        .check(!details.phone.is_empty(), "phone", "must be provided")
}

pub fn validate_new_user(v: Validation, user: &NewUser) -> Validation {
    validate_details(validate_email(v, &user.email), &user.details)
}
