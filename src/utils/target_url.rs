//! Target URL validation.
//!
//! A target must be a well-formed absolute URL at creation time. Dangerous
//! schemes like `javascript:` or `data:` are rejected so a redirect can never
//! be weaponized.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a target URL and returns its canonical string form.
///
/// The URL must parse as absolute and use the `http` or `https` scheme.
/// The canonical form is whatever the parser emits (e.g. a bare host gains
/// a trailing slash path).
///
/// # Errors
///
/// Returns [`TargetUrlError::InvalidFormat`] for malformed or relative input.
/// Returns [`TargetUrlError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_target_url(input: &str) -> Result<String, TargetUrlError> {
    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    Ok(url.to_string())
}
