//! # Session Credential Management
//!
//! Owns the single in-memory access token for a delegated Drive session.
//!
//! ## Overview
//!
//! This crate implements the credential half of the recents client:
//! interactive acquisition through the host's
//! [`IdentityBroker`](bridge_traits::identity::IdentityBroker), in-memory
//! caching with an absolute expiry, freshness gating, and explicit
//! revocation. Tokens never touch disk; every session starts and ends with
//! no credential held.
//!
//! ## Features
//!
//! - Interactive acquisition for a single fixed read-only scope
//! - Absolute-expiry caching with strict staleness checks
//! - Prompt coalescing: concurrent callers share one consent prompt
//! - Fail-open local revocation

pub mod config;
pub mod error;
pub mod manager;
pub mod token;

pub use config::{AuthConfig, CLIENT_ID_VAR};
pub use error::{AuthError, Result};
pub use manager::{TokenManager, DRIVE_READONLY_SCOPE};
pub use token::AccessToken;
