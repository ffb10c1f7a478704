//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Check if an email address is plausibly valid
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Normalize an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
