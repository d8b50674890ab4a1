//! Validation and normalization utilities for login identifiers
//!
//! Email addresses are compared case-insensitively across the system, so the
//! normalized (trimmed, lowercased) form is the canonical one. Phone numbers
//! are stored as bare digit strings.

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic email shape check: local part, one `@`, dotted domain.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex")
});

/// Phone numbers are digits only after normalization, 3 to 15 digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,15}$").expect("invalid phone regex"));

/// Check whether a string is a plausible email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

/// Normalize an email address to its canonical comparison form
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check whether a normalized phone number is plausible
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Normalize a phone number by stripping separators and whitespace
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask an email address for logs, keeping the first character and the domain
/// (e.g. `a****@x.com`)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}****@{}", first, domain)
        }
        _ => "****".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("user.name@example.co.uk"));
        assert!(is_valid_email("  padded@x.com  "));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email("missing@domain"));
        assert!(!is_valid_email("spaces in@x.com"));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
        assert_eq!(normalize_email("user@EXAMPLE.COM"), "user@example.com");
    }

    #[test]
    fn test_phone_normalization_and_validation() {
        assert_eq!(normalize_phone("555-1234"), "5551234");
        assert_eq!(normalize_phone(" (555) 12 34 "), "5551234");
        assert!(is_valid_phone("5551234"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("55"));
        assert!(!is_valid_phone("555-1234"));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@x.com"), "a****@x.com");
        assert_eq!(mask_email("not-an-email"), "****");
    }
}
