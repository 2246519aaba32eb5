//! Phone number normalization
//!
//! Free-form Brazilian phone strings are reduced to an 11-digit canonical
//! form: 2-digit area code + mobile prefix `9` + 8-digit number. Equality of
//! clients is decided on this form.

use crate::constants::{COUNTRY_CODE, DEFAULT_AREA_CODE, MOBILE_PREFIX, NORMALIZED_PHONE_LEN};

/// Canonicalize a free-form phone string.
///
/// Strips every non-digit, drops a leading `55` country code from 12/13-digit
/// input, then:
/// - 11 digits: returned as-is
/// - 10 digits: mobile prefix `9` inserted after the area code
/// - 9 digits: default area code prepended
/// - 8 digits: default area code and mobile prefix prepended
///
/// Any other length comes back as the stripped digits.
///
/// # Examples
///
/// ```
/// use agenda_domain::utils::phone::normalize_phone;
///
/// assert_eq!(normalize_phone("+55 (11) 99999-9999"), "11999999999");
/// assert_eq!(normalize_phone("(11) 9999-9999"), "11999999999");
/// assert_eq!(normalize_phone("98888-7777"), "31988887777");
/// assert_eq!(normalize_phone("8888-7777"), "31988887777");
/// ```
#[must_use]
pub fn normalize_phone(input: &str) -> String {
    let mut digits: String = input.chars().filter(char::is_ascii_digit).collect();

    if matches!(digits.len(), 12 | 13) && digits.starts_with(COUNTRY_CODE) {
        digits.drain(..COUNTRY_CODE.len());
    }

    match digits.len() {
        11 => digits,
        10 => format!("{}{MOBILE_PREFIX}{}", &digits[..2], &digits[2..]),
        9 => format!("{DEFAULT_AREA_CODE}{digits}"),
        8 => format!("{DEFAULT_AREA_CODE}{MOBILE_PREFIX}{digits}"),
        _ => digits,
    }
}

/// Render a phone as `(DD) DDDDD-DDDD`.
///
/// Input that does not normalize to 11 digits is returned unchanged.
#[must_use]
pub fn format_phone_display(input: &str) -> String {
    let normalized = normalize_phone(input);
    if normalized.len() == NORMALIZED_PHONE_LEN {
        format!("({}) {}-{}", &normalized[..2], &normalized[2..7], &normalized[7..])
    } else {
        input.to_string()
    }
}

/// Two phone strings refer to the same line.
#[must_use]
pub fn phones_match(a: &str, b: &str) -> bool {
    normalize_phone(a) == normalize_phone(b)
}

/// The phone normalizes to a full 11-digit number.
#[must_use]
pub fn is_valid_phone(input: &str) -> bool {
    normalize_phone(input).len() == NORMALIZED_PHONE_LEN
}
