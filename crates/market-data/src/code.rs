//! Security-code normalization.

use crate::errors::DataError;

/// Normalizes a security code to the five-character local-code form.
///
/// Exchange codes are four characters for most listings (`"1301"`), with the
/// fifth character reserved for share-class variants; providers key
/// everything by the five-character form. A four-character code gets a `"0"`
/// appended, a five-character code passes through, and anything else is
/// rejected. Letters are uppercased (`"215a"` -> `"215A0"`).
pub fn normalize_stock_code(input: &str) -> Result<String, DataError> {
    let code = input.trim().to_uppercase();

    match code.len() {
        4 => Ok(format!("{}0", code)),
        5 => Ok(code),
        _ => Err(DataError::InvalidCode(code)),
    }
}
