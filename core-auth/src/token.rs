//! Access Token Value Object

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// A bearer credential paired with its absolute expiry.
///
/// The expiry is always a fixed point in time, computed at issuance from the
/// provider-reported remaining lifetime; it is never stored as a relative
/// duration. A token exists only as the result of a successful acquisition,
/// is replaced wholesale on re-acquisition, and is dropped on revocation or
/// acquisition failure.
///
/// # Security
///
/// The credential is redacted from `Debug` output and must never be logged.
///
/// # Examples
///
/// ```
/// use core_auth::AccessToken;
/// use chrono::{Duration, Utc};
///
/// let issued_at = Utc::now();
/// let token = AccessToken::new("ya29.a0...".to_string(), 3600, issued_at);
///
/// assert!(token.is_valid_at(issued_at));
/// assert!(!token.is_valid_at(issued_at + Duration::seconds(3600)));
/// ```
#[derive(Clone)]
pub struct AccessToken {
    /// The opaque bearer credential sent in the `Authorization` header.
    pub value: String,
    /// The instant after which the token must not be used (UTC).
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Create a token issued at `issued_at` with a remaining lifetime of
    /// `expires_in` seconds.
    pub fn new(value: String, expires_in: i64, issued_at: DateTime<Utc>) -> Self {
        Self {
            value,
            expires_at: issued_at + Duration::seconds(expires_in),
        }
    }

    /// Whether the token is usable at `now`.
    ///
    /// Requires a non-empty credential and a strictly future expiry: a token
    /// expiring in 0 ms is already stale and must be re-acquired rather than
    /// sent with a request.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.value.is_empty() && self.expires_at > now
    }

    /// Expiry as epoch milliseconds.
    pub fn expires_at_millis(&self) -> i64 {
        self.expires_at.timestamp_millis()
    }
}

// Custom Debug implementation to avoid logging the credential
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn epoch() -> DateTime<Utc> {
        Utc.timestamp_opt(0, 0).unwrap()
    }

    #[test]
    fn test_expiry_is_absolute() {
        let token = AccessToken::new("tok1".to_string(), 3600, epoch());
        assert_eq!(token.expires_at_millis(), 3_600_000);
    }

    #[test]
    fn test_valid_before_expiry() {
        let token = AccessToken::new("tok1".to_string(), 3600, epoch());
        assert!(token.is_valid_at(epoch()));
        assert!(token.is_valid_at(epoch() + Duration::milliseconds(3_599_999)));
    }

    #[test]
    fn test_stale_at_exact_expiry() {
        let token = AccessToken::new("tok1".to_string(), 3600, epoch());
        assert!(!token.is_valid_at(epoch() + Duration::seconds(3600)));
        assert!(!token.is_valid_at(epoch() + Duration::seconds(7200)));
    }

    #[test]
    fn test_empty_credential_is_never_valid() {
        let token = AccessToken::new(String::new(), 3600, epoch());
        assert!(!token.is_valid_at(epoch()));
    }

    #[test]
    fn test_debug_redacts_credential() {
        let token = AccessToken::new("secret_access_token".to_string(), 3600, epoch());
        let debug_str = format!("{:?}", token);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("secret_access_token"));
    }
}
