//! Interactive Identity Capability
//!
//! Contract for the host-side identity SDK that drives the interactive
//! consent surface. The provider SDKs expose this as a pair of success and
//! error callbacks fired outside the caller's stack; host adapters are
//! expected to fold that into a single awaitable call per acquisition
//! attempt, resolving to either a grant or a discriminable failure.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Outcome of a successful interactive consent prompt.
#[derive(Clone)]
pub struct ConsentGrant {
    /// The opaque bearer credential issued by the provider.
    pub access_token: String,
    /// Remaining token lifetime reported by the provider, in seconds.
    pub expires_in: i64,
    /// Scopes the user actually granted, which may be fewer than requested.
    pub granted_scopes: Vec<String>,
}

// The credential never appears in Debug output.
impl fmt::Debug for ConsentGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsentGrant")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("granted_scopes", &self.granted_scopes)
            .finish()
    }
}

/// Failure reported by the identity SDK.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The user closed the consent prompt without authorizing.
    #[error("consent prompt dismissed by user")]
    Dismissed,

    /// The prompt failed to open, or the SDK reported an unexpected error.
    #[error("identity provider error: {0}")]
    Provider(String),
}

/// Interactive identity capability implemented by each host platform.
///
/// Both operations are plain awaitable tasks; an open consent prompt awaits
/// user action indefinitely — no timeout is imposed at this layer.
#[async_trait]
pub trait IdentityBroker: Send + Sync {
    /// Open the interactive consent surface and resolve once the user acts.
    ///
    /// # Arguments
    ///
    /// * `client_id` - OAuth client identifier of this application
    /// * `scope` - the single scope to request
    async fn request_access(
        &self,
        client_id: &str,
        scope: &str,
    ) -> std::result::Result<ConsentGrant, PromptError>;

    /// Ask the provider to revoke an access token.
    async fn revoke_access(&self, access_token: &str) -> std::result::Result<(), PromptError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consent_grant_debug_redacts_token() {
        let grant = ConsentGrant {
            access_token: "very_secret_token".to_string(),
            expires_in: 3600,
            granted_scopes: vec!["scope1".to_string()],
        };

        let debug_str = format!("{:?}", grant);
        assert!(debug_str.contains("[REDACTED]"));
        assert!(!debug_str.contains("very_secret_token"));
        assert!(debug_str.contains("3600"));
    }

    #[test]
    fn test_prompt_error_display() {
        assert_eq!(
            PromptError::Dismissed.to_string(),
            "consent prompt dismissed by user"
        );
        assert_eq!(
            PromptError::Provider("popup blocked".to_string()).to_string(),
            "identity provider error: popup blocked"
        );
    }
}
