/*
 * Responsibility
 * - 依存生成済みの AppState → Router 組み立て
 * - Middleware の適用 (API key / request-id / trace)
 * - serve はしない。呼び出し側が自分の listener に載せる
 */
use axum::{Router, routing::get};

use crate::api;
use crate::api::v1::handlers::health::health;
use crate::middleware;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let v1 = middleware::auth::api_key::apply(api::v1::routes(), state.clone());

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", v1)
        .with_state(state);

    middleware::http::apply(router)
}
