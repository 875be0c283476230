use axum::http::HeaderMap;
use rhub_domain::constants::ADMIN_PASSWORD_HEADER;
use subtle::ConstantTimeEq;

use crate::error::AdminError;

/// Compares a candidate secret against the configured one in constant time.
///
/// Returns `false` when no secret is configured so the admin surface stays
/// closed rather than open.
#[must_use]
pub fn verify(configured: Option<&str>, candidate: &str) -> bool {
    let Some(secret) = configured else {
        return false;
    };
    secret.as_bytes().ct_eq(candidate.as_bytes()).into()
}

/// Authorizes a request against the shared admin secret using the
/// `x-admin-password` header.
pub fn authorize(configured: Option<&str>, headers: &HeaderMap) -> Result<(), AdminError> {
    let candidate = headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(AdminError::unauthorized)?;

    if verify(configured, candidate) {
        Ok(())
    } else {
        Err(AdminError::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn matching_secret_is_accepted() {
        assert!(verify(Some("hunter2"), "hunter2"));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        assert!(!verify(Some("hunter2"), "hunter3"));
        assert!(!verify(Some("hunter2"), ""));
        assert!(!verify(Some("hunter2"), "hunter22"));
    }

    #[test]
    fn missing_configured_secret_rejects_everything() {
        assert!(!verify(None, "hunter2"));
        assert!(!verify(None, ""));
    }

    #[test]
    fn authorize_requires_the_header() {
        let headers = HeaderMap::new();
        let result = authorize(Some("hunter2"), &headers);
        assert!(matches!(result, Err(AdminError::Auth { .. })));
    }

    #[test]
    fn authorize_accepts_the_correct_header() {
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_PASSWORD_HEADER, HeaderValue::from_static("hunter2"));
        assert!(authorize(Some("hunter2"), &headers).is_ok());
    }

    #[test]
    fn authorize_rejects_a_stale_header() {
        let mut headers = HeaderMap::new();
        headers.insert(ADMIN_PASSWORD_HEADER, HeaderValue::from_static("old-secret"));
        let result = authorize(Some("hunter2"), &headers);
        assert!(matches!(result, Err(AdminError::Auth { .. })));
    }
}
