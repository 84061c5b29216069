//! Short code generation and validation utilities.
//!
//! Random codes are drawn uniformly from the 62-symbol alphanumeric alphabet.
//! Custom user-provided codes must match the wire contract
//! `^[A-Za-z0-9]{6,8}$` exactly, since clients pre-validate against it.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated codes. Sits inside the 6-8 range the validator accepts.
pub const CODE_LENGTH: usize = 7;

/// Alphabet for generated codes: digits, uppercase, lowercase.
const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Codes that would shadow top-level route segments, blocked to prevent
/// routing conflicts. Every entry differs from [`CODE_LENGTH`] in length, so
/// a generated code can never land on one.
const RESERVED_CODES: &[&str] = &["health", "api", "links", "admin", "status", "docs"];

/// Compiled format contract for custom codes.
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("valid code pattern"));

/// Generates a random 7-character alphanumeric short code.
///
/// Each character is drawn independently and uniformly, so the collision
/// probability of a single draw against an existing code is 1/62^7 per
/// stored code.
///
/// # Examples
///
/// ```
/// use shortcode::utils::code_generator::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// Accepts only strings matching `^[A-Za-z0-9]{6,8}$` that are not reserved
/// route segments. Pure, no I/O.
///
/// # Errors
///
/// Returns [`AppError::InvalidCodeFormat`] for empty, too-short, too-long,
/// or non-alphanumeric input, and for reserved codes such as `health` that
/// would shadow a static route and never redirect.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CODE_PATTERN.is_match(code) {
        return Err(AppError::invalid_code_format(
            "Custom code must be 6-8 alphanumeric characters",
            json!({ "code": code, "pattern": "^[A-Za-z0-9]{6,8}$" }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::invalid_code_format(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
