//! Extraction of `Authorization: ApiKey <token>` credentials, plus the axum
//! middleware / extractor that turn extraction failures into 401 responses.
//!
//! The core is [`get_api_key`]; everything else is the HTTP adapter around it.
//!
//! ```ignore
//! let config = api_key_auth::Config::from_env()?;
//! let app = api_key_auth::build_router(api_key_auth::AppState::new(config));
//! axum::serve(listener, app).await?;
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
pub mod telemetry;

pub use api::v1::extractors::{ApiKey, ApiKeyExtractor};
pub use app::build_router;
pub use config::Config;
pub use error::AppError;
pub use services::auth::{ApiKeyError, get_api_key};
pub use state::AppState;
