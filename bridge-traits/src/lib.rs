//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host.
//!
//! ## Overview
//!
//! This crate defines the contract between the core library and
//! platform-specific implementations. Each trait represents a capability the
//! core requires but that is provided differently per host (web component,
//! desktop shell, tests).
//!
//! ## Traits
//!
//! - [`IdentityBroker`](identity::IdentityBroker) - Interactive consent and
//!   token revocation via the provider's identity SDK
//! - [`HttpClient`](http::HttpClient) - Async HTTP execution
//! - [`Clock`](time::Clock) - Time source for deterministic testing
//!
//! ## Error Handling
//!
//! Transport capabilities report failures through
//! [`BridgeError`](error::BridgeError). The identity capability uses its own
//! [`PromptError`](identity::PromptError) because callers must discriminate a
//! user dismissal from an SDK failure.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks.

pub mod error;
pub mod http;
pub mod identity;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use identity::{ConsentGrant, IdentityBroker, PromptError};
pub use time::{Clock, SystemClock};
