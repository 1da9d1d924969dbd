//! # Drive Recents Provider
//!
//! Lists the most recently modified files from the Drive API v3, gated on a
//! valid access token.
//!
//! ## Overview
//!
//! This module provides:
//! - A single gated listing call, `orderBy=modifiedTime desc`, capped at 10
//! - Token freshness enforcement via `core-auth` before any request
//! - A typed error surface covering authorization, transport, API status,
//!   and response-shape failures

pub mod connector;
pub mod error;
pub mod types;

pub use connector::DriveConnector;
pub use error::{FetchError, Result};
pub use types::{DriveFile, FilesListResponse};
