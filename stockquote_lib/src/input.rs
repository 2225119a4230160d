//! Where the widget reads its ticker from, and what starts a lookup.

use std::sync::Mutex;

/// Source of the ticker text, read once per lookup.
pub trait InputSource {
    /// Current raw contents of the ticker field.
    fn current_value(&self) -> String;
}

impl InputSource for String {
    fn current_value(&self) -> String {
        self.clone()
    }
}

impl InputSource for Mutex<String> {
    fn current_value(&self) -> String {
        self.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl<T: InputSource + ?Sized> InputSource for &T {
    fn current_value(&self) -> String {
        (**self).current_value()
    }
}

/// Trim a raw ticker. Returns `None` when nothing is left.
pub fn normalize_ticker(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// A user action on the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The lookup button was activated.
    Click,
    /// A key went down while the ticker field had focus.
    KeyDown(String),
}

impl Trigger {
    /// Key name that submits the ticker field.
    pub const SUBMIT_KEY: &'static str = "Enter";

    /// Whether this action starts a lookup.
    pub fn activates_lookup(&self) -> bool {
        match self {
            Self::Click => true,
            Self::KeyDown(key) => key == Self::SUBMIT_KEY,
        }
    }
}
