//! Validation rules shared by the user aggregate.
//!
//! Addresses are accepted either bare (`jane@example.com`) or with a display
//! name (`Jane Doe <jane@example.com>`), mirroring what mail clients accept.

use chrono::NaiveDate;
use std::fmt;
use validator::ValidateEmail;

/// Date format used for birthdates, both for parsing and for storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Minimum age a user must reach to be considered valid.
pub const MIN_AGE: i32 = 13;

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyFirstname,
    EmptyLastname,
    EmptyEmail,
    InvalidEmail(String),
    InvalidBirthdate(String),
    MissingBirthdate,
    TooYoung(i32),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyFirstname => write!(f, "first name is required"),
            ValidationIssue::EmptyLastname => write!(f, "last name is required"),
            ValidationIssue::EmptyEmail => write!(f, "email is required"),
            ValidationIssue::InvalidEmail(email) => write!(f, "'{}' is not a valid email address", email),
            ValidationIssue::InvalidBirthdate(date) => write!(f, "'{}' is not a valid date (expected YYYY-MM-DD)", date),
            ValidationIssue::MissingBirthdate => write!(f, "birthdate is required"),
            ValidationIssue::TooYoung(age) => write!(f, "user must be at least {} years old, got {}", MIN_AGE, age),
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(date: &str) -> Result<NaiveDate, ValidationIssue> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|_| ValidationIssue::InvalidBirthdate(date.to_string()))
}

/// Checks that `email` parses as a single mail address.
///
/// The address is handed to `validator`. Its grammar stops at ASCII dot-atom
/// local parts, so quoted and UTF-8 local parts are checked here and only the
/// domain is left to it.
pub fn is_valid_email(email: &str) -> bool {
    let Some(address) = strip_display_name(email.trim()) else {
        return false;
    };
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };

    let candidate = match classify_local_part(local) {
        Some(LocalPart::Ascii) => address.to_string(),
        Some(LocalPart::Extended) => format!("{}@{}", ASCII_LOCAL_STAND_IN, domain),
        None => return false,
    };

    candidate.validate_email()
}

/// Stands in for a local part `validator` cannot parse but we already accepted.
const ASCII_LOCAL_STAND_IN: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LocalPart {
    /// Plain ASCII dot-atom
    Ascii,
    /// Quoted string or dot-atom with UTF-8 characters
    Extended,
}

/// `Jane Doe <jane@example.com>` becomes `jane@example.com`.
fn strip_display_name(email: &str) -> Option<&str> {
    match (email.find('<'), email.ends_with('>')) {
        (Some(start), true) => Some(&email[start + 1..email.len() - 1]),
        (None, false) => Some(email),
        _ => None,
    }
}

fn classify_local_part(local: &str) -> Option<LocalPart> {
    if let Some(quoted) = local.strip_prefix('"').and_then(|l| l.strip_suffix('"')) {
        return is_valid_quoted_string(quoted).then_some(LocalPart::Extended);
    }

    if local.is_empty() || !local.split('.').all(|atom| !atom.is_empty() && atom.chars().all(is_atext)) {
        return None;
    }

    if local.is_ascii() {
        Some(LocalPart::Ascii)
    } else {
        Some(LocalPart::Extended)
    }
}

fn is_atext(c: char) -> bool {
    const SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

    c.is_ascii_alphanumeric() || SPECIALS.contains(c) || (!c.is_ascii() && !c.is_control())
}

fn is_vchar(c: char) -> bool {
    ('!'..='~').contains(&c) || (!c.is_ascii() && !c.is_control())
}

fn is_valid_quoted_string(quoted: &str) -> bool {
    if quoted.is_empty() {
        return false;
    }

    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        let valid = match c {
            '\\' => matches!(chars.next(), Some(next) if is_vchar(next) || next == ' ' || next == '\t'),
            '"' => false,
            ' ' | '\t' => true,
            c => is_vchar(c),
        };
        if !valid {
            return false;
        }
    }

    true
}
