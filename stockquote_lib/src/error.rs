//! Error types for a single quote lookup.

use std::fmt;

/// Why a lookup ended without a quote to show.
///
/// Every variant is terminal for its request: the widget renders it into
/// the result panel and the lookup is over.
#[derive(Debug)]
pub enum LookupError {
    /// The service answered with a non-success status.
    NotFound,
    /// The service answered successfully but reported an error in the body.
    Service(String),
    /// The request never produced a usable body (network, timeout, bad JSON).
    Transport(stockquote_api::Error),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Ticker not found"),
            Self::Service(msg) => write!(f, "{}", msg),
            Self::Transport(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<stockquote_api::Error> for LookupError {
    fn from(e: stockquote_api::Error) -> Self {
        match e {
            stockquote_api::Error::HttpStatus { .. } => Self::NotFound,
            other => Self::Transport(other),
        }
    }
}
