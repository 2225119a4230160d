//! The quote lookup widget: one trigger, one request, one panel update.

use std::sync::atomic::{AtomicU64, Ordering};

use stockquote_api::Client;

use crate::error::LookupError;
use crate::input::{normalize_ticker, InputSource, Trigger};
use crate::panel::{PanelContent, QuotePanel, RenderTarget};

/// How a single lookup ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The ticker was blank; the prompt was shown and nothing was requested.
    Prompted,
    /// A quote was rendered.
    Rendered,
    /// An error message was rendered.
    Failed,
    /// A newer trigger arrived before this one resolved; nothing was rendered.
    Superseded,
}

/// Reads a ticker from `I`, asks the quote service, and draws the result on `R`.
///
/// Lookups take `&self`, so triggers may overlap. Every trigger takes a new
/// generation number and only the newest generation may draw its result.
pub struct QuoteWidget<I, R> {
    client: Client,
    input: I,
    target: R,
    generation: AtomicU64,
}

impl<I, R> QuoteWidget<I, R>
where
    I: InputSource,
    R: RenderTarget,
{
    pub fn new(client: Client, input: I, target: R) -> Self {
        Self {
            client,
            input,
            target,
            generation: AtomicU64::new(0),
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Runs a lookup if `trigger` is a click or the submit key.
    pub async fn on_trigger(&self, trigger: &Trigger) -> Option<LookupOutcome> {
        if !trigger.activates_lookup() {
            return None;
        }
        Some(self.lookup_and_render().await)
    }

    /// Looks up the ticker currently in the input and renders the outcome.
    pub async fn lookup_and_render(&self) -> LookupOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let raw = self.input.current_value();

        let Some(ticker) = normalize_ticker(&raw) else {
            self.target.render(&PanelContent::Prompt);
            return LookupOutcome::Prompted;
        };

        self.target.render(&PanelContent::Loading);
        let result = self
            .client
            .get_quote(ticker)
            .await
            .map_err(LookupError::from)
            .and_then(|quote| QuotePanel::from_response(&quote));

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Discarding stale result for {} (generation {})", ticker, generation);
            return LookupOutcome::Superseded;
        }

        let outcome = match &result {
            Ok(_) => LookupOutcome::Rendered,
            Err(e) => {
                tracing::warn!("Lookup for {} failed: {}", ticker, e);
                LookupOutcome::Failed
            }
        };
        self.target.render(&PanelContent::from(result));
        outcome
    }
}
