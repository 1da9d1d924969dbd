//! Startup Configuration
//!
//! The OAuth client identifier is the only configuration this core needs.
//! It is read from the environment exactly once at startup and injected into
//! [`TokenManager`](crate::TokenManager) at construction; nothing reads the
//! environment after that.

use crate::error::{AuthError, Result};

/// Environment variable holding the OAuth client identifier.
pub const CLIENT_ID_VAR: &str = "GOOGLE_CLIENT_ID";

/// OAuth client configuration.
///
/// # Examples
///
/// ```
/// use core_auth::AuthConfig;
///
/// let config = AuthConfig::new("my-client-id.apps.googleusercontent.com");
/// assert_eq!(config.client_id, "my-client-id.apps.googleusercontent.com");
/// ```
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// OAuth client ID identifying this application to the identity provider.
    pub client_id: String,
}

impl AuthConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// Fails with [`AuthError::ConfigurationMissing`] naming the variable
    /// when `GOOGLE_CLIENT_ID` is unset or empty. Callers are expected to
    /// treat this as a startup failure; an application without an identity
    /// must not reach the point of prompting anyone.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(CLIENT_ID_VAR)
    }

    fn from_env_var(key: &str) -> Result<Self> {
        match std::env::var(key) {
            Ok(value) if !value.trim().is_empty() => Ok(Self { client_id: value }),
            _ => Err(AuthError::ConfigurationMissing {
                key: key.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_var_present() {
        std::env::set_var("AUTH_CONFIG_TEST_PRESENT", "client-123");
        let config = AuthConfig::from_env_var("AUTH_CONFIG_TEST_PRESENT").unwrap();
        assert_eq!(config.client_id, "client-123");
    }

    #[test]
    fn test_from_env_var_missing() {
        let result = AuthConfig::from_env_var("AUTH_CONFIG_TEST_MISSING");
        match result {
            Err(AuthError::ConfigurationMissing { key }) => {
                assert_eq!(key, "AUTH_CONFIG_TEST_MISSING");
            }
            other => panic!("expected ConfigurationMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_from_env_var_empty_counts_as_missing() {
        std::env::set_var("AUTH_CONFIG_TEST_EMPTY", "");
        let result = AuthConfig::from_env_var("AUTH_CONFIG_TEST_EMPTY");
        assert!(matches!(
            result,
            Err(AuthError::ConfigurationMissing { .. })
        ));
    }
}
