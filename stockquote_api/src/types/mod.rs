mod quote;
pub use self::quote::{FieldValue, QuoteResponse};
