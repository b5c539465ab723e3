//! Log sanitization utilities for masking sensitive data.
//!
//! Email addresses are personal data; mask them before they reach log output.

/// Mask an email address for safe logging.
///
/// Keeps at most the first 3 characters of the local part, followed by
/// asterisks and the domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", visible_prefix(local), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(value: &str) -> String {
    value.chars().take(3).collect()
}
