//! Result panel model: everything the widget can show, and the surface it
//! shows it on.

use serde::Serialize;
use std::sync::Mutex;
use stockquote_api::types::{FieldValue, QuoteResponse};

use crate::error::LookupError;

/// Shown in place of any field the service did not provide.
pub const PLACEHOLDER: &str = "N/A";
/// Shown when a lookup is triggered with an empty ticker.
pub const PROMPT_MESSAGE: &str = "Enter a stock ticker.";
/// Shown while a request is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Display color of the price, picked from the sign of the daily change.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceColor {
    Positive,
    Negative,
    Neutral,
}

impl PriceColor {
    /// Three-way sign classification. Zero and unknown are neutral.
    pub fn from_change(change: Option<f64>) -> Self {
        match change {
            Some(c) if c > 0.0 => Self::Positive,
            Some(c) if c < 0.0 => Self::Negative,
            _ => Self::Neutral,
        }
    }

    /// Picks the color for a quote.
    ///
    /// `daily_change` decides when it is numeric. Otherwise the local
    /// service's scaled `ndaily_change_percent` is consulted.
    pub fn for_quote(quote: &QuoteResponse) -> Self {
        let change = quote
            .daily_change
            .as_ref()
            .and_then(FieldValue::as_number)
            .or_else(|| {
                quote
                    .ndaily_change_percent
                    .as_ref()
                    .and_then(FieldValue::as_number)
            });
        Self::from_change(change)
    }

    pub fn css_color(self) -> &'static str {
        match self {
            Self::Positive => "green",
            Self::Negative => "red",
            Self::Neutral => "black",
        }
    }
}

/// A successful quote, reduced to display strings in panel order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuotePanel {
    pub company_name: String,
    /// Price with its `$` prefix, or the placeholder.
    pub price: String,
    pub price_color: PriceColor,
    /// Daily change with its `%` suffix, or the placeholder.
    pub daily_change: String,
    pub market_cap: String,
    pub volume: String,
    pub year_high: String,
    pub year_low: String,
    pub pe_ratio: String,
    pub beta: String,
}

impl QuotePanel {
    /// Builds the panel for a response, or reports the service's own error.
    pub fn from_response(quote: &QuoteResponse) -> Result<Self, LookupError> {
        if let Some(message) = quote.service_error() {
            return Err(LookupError::Service(message.to_string()));
        }
        Ok(Self {
            company_name: display_or_placeholder(&quote.company_name),
            price: decorate(&quote.price, "$", ""),
            price_color: PriceColor::for_quote(quote),
            daily_change: decorate(&quote.daily_change, "", "%"),
            market_cap: display_or_placeholder(&quote.market_cap),
            volume: display_or_placeholder(&quote.volume),
            year_high: display_or_placeholder(&quote.year_high),
            year_low: display_or_placeholder(&quote.year_low),
            pe_ratio: display_or_placeholder(&quote.pe_ratio_total),
            beta: display_or_placeholder(&quote.beta),
        })
    }

    /// Labeled rows shown under the company heading, in display order.
    pub fn rows(&self) -> [(&'static str, &str); 8] {
        [
            ("Price", self.price.as_str()),
            ("Daily Change", self.daily_change.as_str()),
            ("Market Cap", self.market_cap.as_str()),
            ("Vol/Avg", self.volume.as_str()),
            ("52 Week High", self.year_high.as_str()),
            ("52 Week Low", self.year_low.as_str()),
            ("PE Ratio (TTM/FTM)", self.pe_ratio.as_str()),
            ("Beta(5Y)", self.beta.as_str()),
        ]
    }
}

fn display_or_placeholder(value: &Option<FieldValue>) -> String {
    value
        .as_ref()
        .and_then(FieldValue::display_text)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn decorate(value: &Option<FieldValue>, prefix: &str, suffix: &str) -> String {
    match value.as_ref().and_then(FieldValue::display_text) {
        Some(text) => format!("{}{}{}", prefix, text, suffix),
        None => PLACEHOLDER.to_string(),
    }
}

/// One state of the result panel.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum PanelContent {
    Prompt,
    Loading,
    Quote(QuotePanel),
    /// Failure message, without the `Error: ` prefix.
    Error(String),
}

impl PanelContent {
    /// Plain-text message for every state except `Quote`.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Prompt => Some(PROMPT_MESSAGE.to_string()),
            Self::Loading => Some(LOADING_MESSAGE.to_string()),
            Self::Error(msg) => Some(format!("Error: {}", msg)),
            Self::Quote(_) => None,
        }
    }
}

impl From<Result<QuotePanel, LookupError>> for PanelContent {
    fn from(result: Result<QuotePanel, LookupError>) -> Self {
        match result {
            Ok(panel) => Self::Quote(panel),
            Err(e) => Self::Error(e.to_string()),
        }
    }
}

/// Surface the panel is drawn on. Each call replaces what was shown before.
pub trait RenderTarget {
    fn render(&self, content: &PanelContent);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &T {
    fn render(&self, content: &PanelContent) {
        (**self).render(content)
    }
}

/// Keeps every rendered state in order. The last entry is what is on screen.
impl RenderTarget for Mutex<Vec<PanelContent>> {
    fn render(&self, content: &PanelContent) {
        self.lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(content.clone());
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
