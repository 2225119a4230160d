//! Quote payload returned by the `/stock/{ticker}` endpoint.

use serde::{Deserialize, Serialize};

/// Body of a `/stock/{ticker}` response.
///
/// Every field is optional: the service omits, nulls, or stringifies values
/// depending on what its upstream data source knows about the ticker. When
/// the lookup fails server-side, only `error` is populated.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct QuoteResponse {
    /// Long company name.
    pub company_name: Option<FieldValue>,

    /// Current price, usually a two-decimal string.
    pub price: Option<FieldValue>,

    /// Daily change in percent. Numeric on the hosted service, free text on
    /// the local one.
    pub daily_change: Option<FieldValue>,

    /// Daily change scaled by 1000, only sent by the local service.
    pub ndaily_change_percent: Option<FieldValue>,

    /// Market capitalization with its size bracket, e.g. `2.5T - Mega Cap`.
    pub market_cap: Option<FieldValue>,

    /// Volume and average volume, e.g. `50M / 60M`.
    pub volume: Option<FieldValue>,

    /// 52-week high.
    pub year_high: Option<FieldValue>,

    /// 52-week low.
    pub year_low: Option<FieldValue>,

    /// Trailing/forward P/E ratio.
    pub pe_ratio_total: Option<FieldValue>,

    /// Five-year beta.
    pub beta: Option<FieldValue>,

    /// Server-side failure message. Present instead of quote fields.
    pub error: Option<String>,
}

impl QuoteResponse {
    /// Returns the service error message, if one was sent.
    ///
    /// Blank messages are treated as absent.
    pub fn service_error(&self) -> Option<&str> {
        self.error
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}

/// A single scalar from the quote payload. Can be either a number or text.
///
/// Anything else (booleans, arrays, objects) is kept as `Other` so that one
/// odd field never fails the whole response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON number.
    Number(f64),

    /// A JSON string, kept verbatim.
    Text(String),

    /// Any other JSON value.
    Other(serde_json::Value),
}

impl FieldValue {
    /// Text shown for this value, or `None` when there is nothing to show.
    ///
    /// Zero is a real value and is displayed. Blank strings and the service's
    /// own `N/A` marker are not.
    pub fn display_text(&self) -> Option<String> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(n.to_string()),
            FieldValue::Text(s) if !is_missing_marker(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Numeric reading of this value. Numeric strings such as `"2.5"` count.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
            FieldValue::Other(_) => return None,
        };
        n.is_finite().then_some(n)
    }
}

/// The service spells unknown values as `N/A`.
const SERVICE_MISSING: &str = "N/A";

fn is_missing_marker(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed == SERVICE_MISSING
}
