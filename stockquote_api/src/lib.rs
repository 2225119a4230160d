mod client;
mod errors;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, HOSTED_BASE_URL, LOCAL_BASE_URL};
pub use self::errors::Error;
