//! CEP normalization and shape checks.

use crate::error::ViacepError;

/// Canonical digit count of a Brazilian CEP.
pub const CEP_LENGTH: usize = 8;

/// Strips every non-digit character from the input.
#[must_use]
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returns `true` when the input's digits form the 8-digit CEP shape.
///
/// Used by callers to decide between the CEP lookup path and free-text
/// search; it never errors.
#[must_use]
pub fn looks_like_cep(raw: &str) -> bool {
    strip_non_digits(raw).len() == CEP_LENGTH
}

/// Normalize a raw CEP (`"01310-100"`, `"01310100"`, ...) to its canonical
/// 8-digit form.
///
/// # Errors
///
/// Returns [`ViacepError::InvalidCep`] when the stripped digit count is not
/// exactly 8.
pub fn normalize_cep(raw: &str) -> Result<String, ViacepError> {
    let digits = strip_non_digits(raw);
    if digits.len() != CEP_LENGTH {
        return Err(ViacepError::InvalidCep(raw.to_string()));
    }
    Ok(digits)
}
