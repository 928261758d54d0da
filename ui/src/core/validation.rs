//! Profile URL validation.

use crate::core::errors::ValidationError;

/// Substring every accepted profile URL must contain.
pub const PROFILE_DOMAIN: &str = "tiktok.com";

/// Trim and check the URL. Returns the trimmed URL on success.
pub fn validate_profile_url(raw: &str) -> Result<&str, ValidationError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ValidationError::MissingUrl);
    }
    if !url.contains(PROFILE_DOMAIN) {
        return Err(ValidationError::WrongDomain {
            url: url.to_string(),
            expected: PROFILE_DOMAIN,
        });
    }
    Ok(url)
}
