//! Validation and throttling for the contact and newsletter forms.
//!
//! Submissions are validated on trimmed input first; only a valid submission
//! consumes a rate-limit attempt. Denied attempts are not recorded, so a
//! saturated form reopens once its oldest attempt leaves the window.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use widgets::rate_limit::{RateLimitConfig, RateLimiter};

pub const CONTACT_KEY: &str = "contact";
pub const NEWSLETTER_KEY: &str = "newsletter";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("too many attempts, please wait a minute and try again")]
    TooManyAttempts,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(name: &str, email: &str, message: &str) -> Result<Self, FormError> {
        let name = required("name", name)?;
        let email = validate_email(email)?;
        let message = required("message", message)?;
        Ok(Self { name, email, message })
    }
}

/// Trimmed, non-empty `value`.
pub fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(value.to_owned())
}

/// Trimmed address with one `@`, a non-empty local part and a dotted domain.
pub fn validate_email(raw: &str) -> Result<String, FormError> {
    let email = required("email", raw)?;
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FormError::InvalidEmail);
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(FormError::InvalidEmail);
    }
    Ok(email)
}

/// Record an attempt for `key`, or refuse when the window is saturated.
pub fn admit(limiter: &RateLimiter, key: &str, config: RateLimitConfig) -> Result<(), FormError> {
    if limiter.check(key, config) {
        Ok(())
    } else {
        Err(FormError::TooManyAttempts)
    }
}
