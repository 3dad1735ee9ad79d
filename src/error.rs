// Typed errors with thiserror. Surface meaningful messages to the page.

use thiserror::Error;

/// Everything that can go wrong during one submission attempt.
///
/// `Network` and `Server` display as the bare message so the view can
/// render "Error: {message}" exactly as the server or browser reported it.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No video file selected")]
    NoFileSelected,

    /// The request itself failed (connectivity loss, fetch rejection).
    #[error("{0}")]
    Network(String),

    /// The server answered with a failing status.
    #[error("{message}")]
    Server { message: String },

    /// Success status but the body did not parse as a result object.
    #[error("Malformed server response: {0}")]
    MalformedResponse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        UploadError::MalformedResponse(err.to_string())
    }
}
