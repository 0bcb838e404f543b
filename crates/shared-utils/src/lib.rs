//! Small pure helpers shared across the monorepo.
//!
//! String formatting and validation utilities plus a trailing-edge
//! [`Debouncer`] for collapsing bursts of repeated calls.

use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;

mod debounce;

pub use debounce::Debouncer;

/// Prefix `message` with the current UTC time in brackets.
///
/// Delegates to [`format_message_at`] with the wall clock; use that variant
/// directly when a deterministic timestamp is needed.
#[must_use]
pub fn format_message(message: &str) -> String {
    format_message_at(Utc::now(), message)
}

/// Prefix `message` with `timestamp` rendered as ISO-8601 with millisecond
/// precision, e.g. `"[2024-01-01T00:00:00.000Z] hello"`.
#[must_use]
pub fn format_message_at(timestamp: DateTime<Utc>, message: &str) -> String {
    format!(
        "[{}] {message}",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape check only: local@domain.suffix with no whitespace and no
        // second '@'. Not an RFC 5322 validator.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Return whether `email` has the rough shape of an email address.
///
/// Deliberately permissive: any non-whitespace local part and domain with at
/// least one dot pass, and no real TLD rule is applied.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Upper-case the first character of `text`, leaving the rest untouched.
///
/// Empty input comes back unchanged.
#[must_use]
pub fn capitalize_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
