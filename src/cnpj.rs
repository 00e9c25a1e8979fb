//! CNPJ normalization, validation, and display formatting
//!
//! A CNPJ is a 14-digit Brazilian company tax registry number. This module
//! provides the pure string routines the rest of the crate builds on:
//! stripping user input down to digits, checking the digit-count shape, and
//! rendering the standard `XX.XXX.XXX/XXXX-XX` display form.
//!
//! Validation here is shape-only. No mod-11 check-digit verification is
//! performed, so a syntactically valid but non-existent CNPJ passes and is
//! only rejected by the remote registry service.

/// Number of digits in a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Strip every character that is not an ASCII decimal digit
///
/// Total function with no failure mode. The output preserves the relative
/// order of the digits in the input.
///
/// # Examples
///
/// ```
/// use cnpj_lookup::cnpj::normalize;
///
/// assert_eq!(normalize("11.222.333/0001-81"), "11222333000181");
/// assert_eq!(normalize("abc"), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Check whether a string is exactly 14 ASCII decimal digits
///
/// Callers are expected to [`normalize`] first; this function does not strip
/// separators itself.
///
/// # Examples
///
/// ```
/// use cnpj_lookup::cnpj::is_valid;
///
/// assert!(is_valid("11222333000181"));
/// assert!(!is_valid("11.222.333/0001-81"));
/// assert!(!is_valid("123"));
/// ```
#[must_use]
pub fn is_valid(digits: &str) -> bool {
    digits.len() == CNPJ_LENGTH && digits.chars().all(|c| c.is_ascii_digit())
}

/// Render a 14-digit CNPJ in the standard `XX.XXX.XXX/XXXX-XX` display form
///
/// Separators are inserted after the 2nd, 5th, 8th, and 12th digits. Input
/// that is not exactly 14 digits is returned unchanged, so the function is
/// safe to apply to partial or garbage input.
///
/// # Examples
///
/// ```
/// use cnpj_lookup::cnpj::format;
///
/// assert_eq!(format("11222333000181"), "11.222.333/0001-81");
/// assert_eq!(format("123"), "123");
/// ```
#[must_use]
pub fn format(digits: &str) -> String {
    if !is_valid(digits) {
        return digits.to_string();
    }

    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}

/// Live input masking: normalize, cap at 14 digits, and format
///
/// Intended to be re-applied on every keystroke of a single-CNPJ input
/// field. Extra digits beyond the 14th are discarded; fewer than 14 digits
/// are returned bare (digits only) since the display form only exists for
/// complete identifiers.
#[must_use]
pub fn mask_input(raw: &str) -> String {
    let mut digits = normalize(raw);
    digits.truncate(CNPJ_LENGTH);
    format(&digits)
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_everything_but_digits() {
        assert_eq!(normalize("11.222.333/0001-81"), "11222333000181");
        assert_eq!(normalize("  13 037 746 0001 11 "), "13037746000111");
        assert_eq!(normalize("no digits here"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_preserves_digit_order() {
        assert_eq!(normalize("1a2b3c"), "123");
        assert_eq!(normalize("9-8-7"), "987");
    }

    #[test]
    fn normalize_ignores_non_ascii_digits() {
        // Devanagari and Arabic-Indic digits are not valid CNPJ characters
        assert_eq!(normalize("१२٣45"), "45");
    }

    #[test]
    fn is_valid_requires_exactly_fourteen_digits() {
        assert!(is_valid("00000000000000"));
        assert!(is_valid("11222333000181"));
        assert!(!is_valid("123"));
        assert!(!is_valid("112223330001810")); // 15 digits
        assert!(!is_valid(""));
    }

    #[test]
    fn is_valid_rejects_non_digit_characters() {
        assert!(!is_valid("1122233300018A"));
        assert!(!is_valid("11.222.333/0001-81"));
        // Normalizing first drops the letter, leaving 13 digits
        assert!(!is_valid(&normalize("1234567890123A")));
    }

    #[test]
    fn format_inserts_standard_separators() {
        assert_eq!(format("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format("00000000000000"), "00.000.000/0000-00");
    }

    #[test]
    fn format_returns_wrong_length_input_unchanged() {
        assert_eq!(format("123"), "123");
        assert_eq!(format(""), "");
        assert_eq!(format("112223330001811"), "112223330001811");
    }

    #[test]
    fn format_returns_non_digit_input_unchanged() {
        // 14 characters but not 14 digits — must not panic or mis-slice
        assert_eq!(format("1122233300018A"), "1122233300018A");
    }

    #[test]
    fn mask_input_caps_at_fourteen_digits() {
        assert_eq!(mask_input("112223330001819999"), "11.222.333/0001-81");
    }

    #[test]
    fn mask_input_leaves_partial_input_bare() {
        assert_eq!(mask_input("11.222"), "11222");
        assert_eq!(mask_input(""), "");
    }

    #[test]
    fn mask_input_formats_complete_input() {
        assert_eq!(mask_input("11222333000181"), "11.222.333/0001-81");
        assert_eq!(mask_input("11.222.333/0001-81"), "11.222.333/0001-81");
    }
}
