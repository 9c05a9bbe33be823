//! Input validation for student records.
//!
//! Valid emails have the shape `localpart@domain.tld`:
//! - `localpart`: one or more word characters, `.`, `+` or `-`
//! - `domain`: one or more word characters, `.` or `-`
//! - `tld`: one or more word characters after the last dot
//!
//! Word characters are Unicode alphanumerics and `_`. The whole input must
//! match; trailing content is rejected.

use crate::error::{GradebookError, Result};
use crate::store::codec::FIELD_SEPARATOR;

/// Returns `true` when `email` is a well-formed address.
///
/// # Examples
/// ```
/// use gradebook::validation::validate_email;
///
/// assert!(validate_email("a@b.com"));
/// assert!(validate_email("first.last+tag@mail-host.example.org"));
///
/// assert!(!validate_email("not-an-email"));
/// assert!(!validate_email("a@b"));
/// assert!(!validate_email("a@b.com extra"));
/// ```
pub fn validate_email(email: &str) -> bool {
    check_email(email).is_ok()
}

/// Checks an email address, reporting which part is malformed.
pub fn check_email(email: &str) -> std::result::Result<(), EmailValidationError> {
    if email.is_empty() {
        return Err(EmailValidationError::Empty);
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or(EmailValidationError::MissingAt)?;

    if local.is_empty() {
        return Err(EmailValidationError::EmptyLocalPart);
    }
    if let Some(ch) = local.chars().find(|&c| !is_local_char(c)) {
        return Err(EmailValidationError::InvalidCharacter(ch));
    }

    // The tld is everything after the last dot, so it can never contain one.
    let (host, tld) = domain
        .rsplit_once('.')
        .ok_or(EmailValidationError::MissingTld)?;

    if host.is_empty() {
        return Err(EmailValidationError::EmptyDomain);
    }
    if let Some(ch) = host.chars().find(|&c| !is_domain_char(c)) {
        return Err(EmailValidationError::InvalidCharacter(ch));
    }

    if tld.is_empty() {
        return Err(EmailValidationError::MissingTld);
    }
    if let Some(ch) = tld.chars().find(|&c| !is_word_char(c)) {
        return Err(EmailValidationError::InvalidCharacter(ch));
    }

    Ok(())
}

/// Trims a student name and rejects names the store file cannot hold.
pub fn normalize_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GradebookError::InvalidName(
            "name cannot be empty".to_string(),
        ));
    }
    // The first separator on the line must be the one written after the name,
    // so a trailing "-:" is as bad as a full separator.
    let framed = format!("{}{}", name, FIELD_SEPARATOR);
    if framed.find(FIELD_SEPARATOR) != Some(name.len()) {
        return Err(GradebookError::InvalidName(format!(
            "name cannot contain '{}' or end with '-:'",
            FIELD_SEPARATOR
        )));
    }
    if name.contains(['\n', '\r']) {
        return Err(GradebookError::InvalidName(
            "name cannot span multiple lines".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// Trims an email address and validates it.
pub fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim();
    check_email(email).map_err(GradebookError::InvalidEmail)?;
    Ok(email.to_string())
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_local_char(ch: char) -> bool {
    is_word_char(ch) || matches!(ch, '.' | '+' | '-')
}

fn is_domain_char(ch: char) -> bool {
    is_word_char(ch) || matches!(ch, '.' | '-')
}

/// Error type for email validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    /// Email is empty
    Empty,
    /// No `@` between local part and domain
    MissingAt,
    /// Nothing before the `@`
    EmptyLocalPart,
    /// Nothing between the `@` and the last dot
    EmptyDomain,
    /// No dot-separated top level domain
    MissingTld,
    /// A character not allowed in that part of the address
    InvalidCharacter(char),
}

impl std::fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailValidationError::Empty => write!(f, "email cannot be empty"),
            EmailValidationError::MissingAt => write!(f, "missing '@'"),
            EmailValidationError::EmptyLocalPart => write!(f, "nothing before '@'"),
            EmailValidationError::EmptyDomain => write!(f, "missing domain"),
            EmailValidationError::MissingTld => write!(f, "missing top level domain"),
            EmailValidationError::InvalidCharacter(ch) => {
                write!(f, "invalid character '{}'", ch)
            }
        }
    }
}

impl std::error::Error for EmailValidationError {}
