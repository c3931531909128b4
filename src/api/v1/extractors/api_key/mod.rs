/*!
 * API key extractor
 *
 * Responsibility:
 * - `Authorization: ApiKey <token>` から取り出したクレデンシャル (ApiKey) を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - ApiKey
 * - ApiKeyExtractor
 */

mod core;
mod types;

pub use self::core::ApiKeyExtractor;
pub use self::types::ApiKey;
