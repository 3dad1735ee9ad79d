// Wire format of the processing endpoint: JSON bodies in both directions
// of the single POST. Parsing is pure so it tests natively.

use serde::{Deserialize, Serialize};

use crate::error::UploadError;

/// Fallback when a failing response carries no `error` field.
pub const GENERIC_SERVER_ERROR: &str = "An unknown error occurred.";

/// Body of a successful processing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// URL of the generated video, used for both playback and download.
    pub video_url: String,
}

/// Body of a failing response. Only `error` is read; anything else is ignored.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Interpret a response body. The success/failure branch follows the HTTP
/// status (`ok`), independent of what the body contains.
pub fn parse_process_response(ok: bool, body: &str) -> Result<ProcessResponse, UploadError> {
    if ok {
        Ok(serde_json::from_str(body)?)
    } else {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
        Err(UploadError::Server { message })
    }
}

/// Download filename for a result URL: its last path segment.
pub fn download_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
