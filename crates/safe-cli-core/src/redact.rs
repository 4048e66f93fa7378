//! Masking of secrets before they reach logs or the terminal.

/// Strings shorter than this are masked entirely.
const MIN_LENGTH_FOR_PARTIAL: usize = 12;

/// Characters kept at each end of a partially masked string.
const VISIBLE_CHARS: usize = 4;

/// Mask a secret, keeping only its first and last four characters.
///
/// # Example
///
/// ```
/// use safe_cli_core::redact_sensitive;
///
/// assert_eq!(redact_sensitive("0x4c0883a69102937d6231471b5dbb6204"), "0x4c***6204");
/// assert_eq!(redact_sensitive("short"), "***");
/// ```
#[must_use]
pub fn redact_sensitive(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();

    if len < MIN_LENGTH_FOR_PARTIAL {
        return "***".to_string();
    }

    let prefix: String = chars[..VISIBLE_CHARS].iter().collect();
    let suffix: String = chars[len - VISIBLE_CHARS..].iter().collect();

    format!("{prefix}***{suffix}")
}
