//! # Token Manager
//!
//! Owns the session's single access token: when it is acquired, when it is
//! considered stale, and when it is revoked.
//!
//! ## State machine
//!
//! ```text
//! Absent --acquisition ok--> Valid --clock reaches expiry--> Expired
//!   ^                          |                               |
//!   |                          v                               v
//!   +--- revocation / failed acquisition <---------------------+
//! ```
//!
//! The manager starts `Absent`, has no terminal state, and is reusable for
//! the whole session. Both `Absent` and `Expired` trigger a fresh
//! interactive acquisition on the next token request.
//!
//! ## Concurrency
//!
//! `get_valid_token` holds one async lock across the whole check-then-acquire
//! sequence, so concurrent callers coalesce onto a single consent prompt:
//! the second caller waits and then observes the freshly stored token.

use crate::config::{AuthConfig, CLIENT_ID_VAR};
use crate::error::{AuthError, Result};
use crate::token::AccessToken;
use bridge_traits::identity::{IdentityBroker, PromptError};
use bridge_traits::time::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// The single scope requested on every acquisition.
pub const DRIVE_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";

/// Owner of the session credential.
///
/// Holds at most one [`AccessToken`] in memory; nothing is persisted across
/// sessions. All acquisition goes through the host's [`IdentityBroker`],
/// which opens the interactive consent surface and may await user action
/// indefinitely.
///
/// # Example
///
/// ```ignore
/// use core_auth::{AuthConfig, TokenManager};
/// use std::sync::Arc;
///
/// let config = AuthConfig::from_env()?;
/// let manager = TokenManager::new(config, broker);
/// let token = manager.get_valid_token().await?;
/// ```
pub struct TokenManager {
    config: AuthConfig,
    broker: Arc<dyn IdentityBroker>,
    clock: Arc<dyn Clock>,
    /// The one credential this session holds; `None` is the absent state.
    /// Locked across check-then-acquire so at most one consent prompt is in
    /// flight per manager.
    current: Mutex<Option<AccessToken>>,
}

impl TokenManager {
    /// Create a manager running against the system clock.
    pub fn new(config: AuthConfig, broker: Arc<dyn IdentityBroker>) -> Self {
        Self::with_clock(config, broker, Arc::new(SystemClock))
    }

    /// Same as [`TokenManager::new`] with an injected time source.
    pub fn with_clock(
        config: AuthConfig,
        broker: Arc<dyn IdentityBroker>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            broker,
            clock,
            current: Mutex::new(None),
        }
    }

    /// Return the cached token while it is still fresh, acquiring a new one
    /// through the interactive consent prompt otherwise.
    ///
    /// Freshness uses a strict comparison against the clock at the moment of
    /// the check; a token whose expiry has been reached is re-acquired
    /// rather than returned stale. When the cached token is fresh the call
    /// completes without touching the identity capability.
    ///
    /// # Errors
    ///
    /// - [`AuthError::ConfigurationMissing`] - no client id configured;
    ///   raised before any capability call
    /// - [`AuthError::UserCancelled`] - the user dismissed the prompt
    /// - [`AuthError::PromptFailed`] - the prompt could not open or the SDK
    ///   reported an unexpected error
    /// - [`AuthError::ScopeNotGranted`] - the grant lacks the requested scope
    ///
    /// Every failure leaves the manager absent; re-acquisition is the
    /// caller's decision (typically the user acting again).
    #[instrument(skip(self))]
    pub async fn get_valid_token(&self) -> Result<AccessToken> {
        let mut slot = self.current.lock().await;

        if let Some(token) = slot.as_ref() {
            if token.is_valid_at(self.clock.now()) {
                debug!("cached token still fresh");
                return Ok(token.clone());
            }
            debug!("cached token expired, re-acquiring");
        }

        self.acquire(&mut slot).await
    }

    /// Run one interactive acquisition attempt.
    ///
    /// The slot is cleared up front so any failure leaves the manager
    /// absent, never holding a half-trusted credential.
    async fn acquire(&self, slot: &mut Option<AccessToken>) -> Result<AccessToken> {
        *slot = None;

        if self.config.client_id.trim().is_empty() {
            return Err(AuthError::ConfigurationMissing {
                key: CLIENT_ID_VAR.to_string(),
            });
        }

        info!("requesting interactive authorization");
        let grant = self
            .broker
            .request_access(&self.config.client_id, DRIVE_READONLY_SCOPE)
            .await
            .map_err(|err| match err {
                PromptError::Dismissed => {
                    warn!("user dismissed the consent prompt");
                    AuthError::UserCancelled
                }
                PromptError::Provider(reason) => {
                    warn!(%reason, "consent prompt failed");
                    AuthError::PromptFailed(reason)
                }
            })?;

        // An empty credential is an SDK anomaly, whatever the scope state.
        if grant.access_token.is_empty() {
            return Err(AuthError::PromptFailed(
                "provider returned an empty access token".to_string(),
            ));
        }

        if !grant
            .granted_scopes
            .iter()
            .any(|granted| granted == DRIVE_READONLY_SCOPE)
        {
            warn!("authorization response lacks the requested scope");
            return Err(AuthError::ScopeNotGranted {
                scope: DRIVE_READONLY_SCOPE.to_string(),
            });
        }

        let token = AccessToken::new(grant.access_token, grant.expires_in, self.clock.now());
        info!(expires_at = %token.expires_at, "access token acquired");
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Revoke the current token, if any.
    ///
    /// The remote revocation call is best-effort: local state is cleared
    /// whether or not the provider acknowledges, so signing out cannot be
    /// blocked by a network failure. Calling with no token held is a no-op.
    #[instrument(skip(self))]
    pub async fn revoke(&self) {
        let mut slot = self.current.lock().await;

        let Some(token) = slot.take() else {
            debug!("revoke called with no token held");
            return;
        };

        match self.broker.revoke_access(&token.value).await {
            Ok(()) => info!("access token revoked"),
            Err(err) => {
                warn!(error = %err, "remote revocation failed, local session cleared anyway");
            }
        }
    }

    /// Expiry of the currently held token, or `None` when absent.
    ///
    /// Purely observational; never triggers acquisition.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.current.lock().await.as_ref().map(|t| t.expires_at)
    }
}
