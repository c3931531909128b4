pub mod api_key;

pub use api_key::{ApiKeyError, get_api_key};
