//! Recently-modified file listing against the Drive API v3.

use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use core_auth::TokenManager;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::error::{FetchError, Result};
use crate::types::{DriveFile, FilesListResponse};

/// Drive API base URL
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Upstream ordering clause; results are returned exactly as the API orders
/// them, never re-sorted locally.
const RECENT_ORDER: &str = "modifiedTime desc";

/// Number of entries requested per listing
const RECENT_PAGE_SIZE: u32 = 10;

/// Request timeout for listing calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the most recently modified files, gated on a valid access token.
///
/// The connector owns no credential state of its own: every call asks the
/// [`TokenManager`] for a fresh token first, which may open the interactive
/// consent prompt. Acquisition always completes, successfully or not,
/// strictly before the network request is issued.
pub struct DriveConnector {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,

    /// Owner of the session credential
    tokens: Arc<TokenManager>,
}

impl DriveConnector {
    pub fn new(http_client: Arc<dyn HttpClient>, tokens: Arc<TokenManager>) -> Self {
        Self {
            http_client,
            tokens,
        }
    }

    /// List the ten most recently modified files.
    ///
    /// An authorization failure is surfaced as [`FetchError::Unauthorized`]
    /// without touching the network. A response status of 400 or above is
    /// surfaced as [`FetchError::Api`] with the status captured; the cached
    /// token is left untouched in that case, since the credential itself was
    /// valid and only the request failed. No retries happen at this layer.
    #[instrument(skip(self))]
    pub async fn list_recent_files(&self) -> Result<Vec<DriveFile>> {
        let token = self.tokens.get_valid_token().await?;

        let url = format!(
            "{}/files?orderBy={}&pageSize={}",
            DRIVE_API_BASE,
            urlencoding::encode(RECENT_ORDER),
            RECENT_PAGE_SIZE
        );

        let request = HttpRequest::new(HttpMethod::Get, url)
            .bearer_token(&token.value)
            .header("Accept", "application/json")
            .timeout(REQUEST_TIMEOUT);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        if response.is_error() {
            let message = response
                .text()
                .unwrap_or_else(|_| "unable to read error response".to_string());
            warn!(status = response.status, "file listing request failed");
            return Err(FetchError::Api {
                status: response.status,
                message,
            });
        }

        let listing: FilesListResponse = serde_json::from_slice(&response.body)
            .map_err(|err| FetchError::MalformedResponse(err.to_string()))?;

        info!(count = listing.files.len(), "listed recently modified files");
        Ok(listing.files)
    }
}
