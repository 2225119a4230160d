//! Error types for the quote client.

/// Errors that can occur when requesting a quote.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be built or sent, or the body could not be read.
    #[error("{0}")]
    RequestFailed(String),
    /// The service answered with a non-success status.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not a JSON quote object.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
