//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{7,14}$").unwrap()
});

// Country-code-less local mobile number, optionally with a trunk `0`
static LOCAL_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0?(\d{10})$").unwrap()
});

static COUNTRY_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{0,2}$").unwrap()
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is in E.164 format
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Convert a user-supplied mobile number to E.164.
///
/// Numbers already carrying a `+` must be valid E.164 and are returned
/// unchanged. A bare 10-digit local number (or one with a single leading
/// trunk `0`) is prefixed with `default_country_code`. Returns `None` when the
/// input cannot be mapped to E.164.
///
/// ```
/// use otp_shared::phone::to_e164;
///
/// assert_eq!(to_e164("9999999999", "+91").as_deref(), Some("+919999999999"));
/// assert_eq!(to_e164("+14155552671", "+91").as_deref(), Some("+14155552671"));
/// assert_eq!(to_e164("12345", "+91"), None);
/// ```
pub fn to_e164(phone: &str, default_country_code: &str) -> Option<String> {
    if phone.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let normalized = normalize_phone_number(phone);
    if normalized.starts_with('+') {
        return is_valid_e164(&normalized).then_some(normalized);
    }

    if !COUNTRY_CODE_REGEX.is_match(default_country_code) {
        return None;
    }

    let local = LOCAL_MOBILE_REGEX.captures(&normalized)?.get(1)?.as_str();
    let e164 = format!("{}{}", default_country_code, local);
    is_valid_e164(&e164).then_some(e164)
}

/// Mask a phone number for logs (e.g., +91******9999)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        let prefix_len = if normalized.starts_with('+') { 3 } else { 2 };
        let suffix = &normalized[normalized.len() - 4..];
        let hidden = normalized.len() - prefix_len - 4;
        format!("{}{}{}", &normalized[..prefix_len], "*".repeat(hidden), suffix)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("999-999-9999"), "9999999999");
        assert_eq!(normalize_phone_number("+91 99999 99999"), "+919999999999");
        assert_eq!(normalize_phone_number("(999) 999 9999"), "9999999999");
    }

    #[test]
    fn test_to_e164_local_numbers() {
        assert_eq!(to_e164("9999999999", "+91").unwrap(), "+919999999999");
        assert_eq!(to_e164("09999999999", "+91").unwrap(), "+919999999999");
        assert_eq!(to_e164("99999 99999", "+91").unwrap(), "+919999999999");
        assert_eq!(to_e164("4155552671", "+1").unwrap(), "+14155552671");
    }

    #[test]
    fn test_to_e164_is_idempotent() {
        let once = to_e164("9999999999", "+91").unwrap();
        let twice = to_e164(&once, "+91").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_to_e164_rejects_garbage() {
        assert_eq!(to_e164("", "+91"), None);
        assert_eq!(to_e164("123", "+91"), None);
        assert_eq!(to_e164("99999999999999", "+91"), None);
        assert_eq!(to_e164("99999abcde", "+91"), None);
        assert_eq!(to_e164("+0123456789", "+91"), None);
        assert_eq!(to_e164("9999999999", "91"), None);
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+919999991234"), "+91******1234");
        assert_eq!(mask_phone_number("9999991234"), "99****1234");
        assert_eq!(mask_phone_number("123"), "****");
    }
}
