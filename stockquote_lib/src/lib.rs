//! Library layer for stockquote: the quote lookup widget.
//!
//! Wraps the `stockquote_api` client with ticker input handling, the
//! result panel model, and a lookup flow that never lets a stale response
//! overwrite a newer one.

pub mod error;
pub mod input;
pub mod panel;
pub mod widget;

pub use stockquote_api;
pub use stockquote_api::types;
pub use stockquote_api::{Client, DEFAULT_BASE_URL, HOSTED_BASE_URL, LOCAL_BASE_URL};

pub use error::LookupError;
pub use input::{normalize_ticker, InputSource, Trigger};
pub use panel::{PanelContent, PriceColor, QuotePanel, RenderTarget};
pub use widget::{LookupOutcome, QuoteWidget};
