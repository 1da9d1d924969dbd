//! Drive API response types
//!
//! Data structures for deserializing Drive API v3 `files.list` responses.

use serde::Deserialize;

/// A file resource from the Drive `files.list` response.
///
/// The full resource is retained even though the current surface only
/// renders `name`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    /// File ID
    pub id: String,

    /// File name
    pub name: String,

    /// MIME type, when the API includes it
    #[serde(default)]
    pub mime_type: Option<String>,

    /// Modification time (RFC 3339), when the API includes it
    #[serde(default)]
    pub modified_time: Option<String>,
}

/// Shape of the `files.list` response body.
///
/// `files` is deliberately not defaulted: a body without it is malformed,
/// not an empty listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesListResponse {
    /// Listed files, in the order the query's `orderBy` clause produced.
    pub files: Vec<DriveFile>,
}
