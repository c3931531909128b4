/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - API key が必要な範囲は app.rs 側で middleware::auth::api_key::apply を掛ける
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::credential::credential;

pub fn routes() -> Router<AppState> {
    Router::new().route("/credential", get(credential))
}
