//! Field validators: pure, total predicates over raw input strings.
//!
//! Every validator accepts the empty string: an untouched field is never an error.
//! A failed check is reported as a [`FormatError`] value, never as a panic.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fixed month set accepted in experience durations.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ────────────────────────────────────────────────────────────────────────────
// Patterns
// ────────────────────────────────────────────────────────────────────────────

/// `local@domain.tld` where neither part contains whitespace or a second `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Digits, spaces, `+` and `-` only.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9+\- ]+$").unwrap());

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?linkedin\.com/in/[A-Za-z0-9-]+/?$").unwrap()
});

/// `8.5`, `9`, `8.25/10`, `8.5/10.0`
static GRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}(\.[0-9]{1,2})?(/[0-9]{1,2}(\.[0-9]{1,2})?)?$").unwrap()
});

/// 0–99 with up to two decimals, or exactly 100 / 100.0 / 100.00.
static PERCENTAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(100(\.0{1,2})?|[0-9]{1,2}(\.[0-9]{1,2})?)$").unwrap()
});

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let month = MONTHS.join("|");
    Regex::new(&format!(
        r"^({month}) [0-9]{{4}} - (({month}) [0-9]{{4}}|Present)$"
    ))
    .unwrap()
});

// ────────────────────────────────────────────────────────────────────────────
// Validator kinds
// ────────────────────────────────────────────────────────────────────────────

/// Which format rule a field is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    Email,
    Phone,
    LinkedIn,
    Grade,
    Percentage,
    Year,
    Duration,
}

impl ValidatorKind {
    pub const ALL: [ValidatorKind; 7] = [
        ValidatorKind::Email,
        ValidatorKind::Phone,
        ValidatorKind::LinkedIn,
        ValidatorKind::Grade,
        ValidatorKind::Percentage,
        ValidatorKind::Year,
        ValidatorKind::Duration,
    ];

    /// Returns true if `value` is empty or matches this kind's format.
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            ValidatorKind::Email => is_valid_email(value),
            ValidatorKind::Phone => is_valid_phone(value),
            ValidatorKind::LinkedIn => is_valid_linkedin(value),
            ValidatorKind::Grade => is_valid_grade(value),
            ValidatorKind::Percentage => is_valid_percentage(value),
            ValidatorKind::Year => is_valid_year(value),
            ValidatorKind::Duration => is_valid_duration(value),
        }
    }

    /// Same verdict as [`is_valid`](Self::is_valid), carrying the inline message on failure.
    pub fn verify(self, value: &str) -> Result<(), FormatError> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(FormatError { kind: self })
        }
    }

    /// The message shown next to a field that fails this rule.
    pub fn message(self) -> &'static str {
        match self {
            ValidatorKind::Email => "Please enter a valid email address (e.g. name@example.com)",
            ValidatorKind::Phone => "Phone number may only contain digits, spaces, + and -",
            ValidatorKind::LinkedIn => {
                "Please enter a valid LinkedIn profile URL (e.g. linkedin.com/in/yourprofile)"
            }
            ValidatorKind::Grade => "Please enter a valid CGPA (e.g. 8.5 or 8.5/10.0)",
            ValidatorKind::Percentage => {
                "Please enter a percentage between 0 and 100 (up to 2 decimals)"
            }
            ValidatorKind::Year => "Please enter a 4-digit year (e.g. 2023)",
            ValidatorKind::Duration => {
                "Use the format 'Jan 2022 - Mar 2023' or 'Jan 2022 - Present'"
            }
        }
    }
}

/// A field value that does not match its format rule.
///
/// Non-fatal: it is recorded in the error state and shown inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .kind.message())]
pub struct FormatError {
    pub kind: ValidatorKind,
}

// ────────────────────────────────────────────────────────────────────────────
// Predicates
// ────────────────────────────────────────────────────────────────────────────

pub fn is_valid_email(value: &str) -> bool {
    value.is_empty() || EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    value.is_empty() || PHONE_RE.is_match(value)
}

pub fn is_valid_linkedin(value: &str) -> bool {
    value.is_empty() || LINKEDIN_RE.is_match(value)
}

pub fn is_valid_grade(value: &str) -> bool {
    value.is_empty() || GRADE_RE.is_match(value)
}

/// Format check only: `"100.00"` passes, `"100.5"` and `"150"` do not.
pub fn is_valid_percentage(value: &str) -> bool {
    value.is_empty() || PERCENTAGE_RE.is_match(value)
}

pub fn is_valid_year(value: &str) -> bool {
    value.is_empty() || YEAR_RE.is_match(value)
}

pub fn is_valid_duration(value: &str) -> bool {
    value.is_empty() || DURATION_RE.is_match(value)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
