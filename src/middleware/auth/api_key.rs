//! `Authorization: ApiKey <token>` の抽出 → ApiKey を extensions に入れる
//!
//! - キーの照合（store lookup）は行わない。抽出できたキーを handler / 後段に渡すだけ。
//! - 抽出失敗は 401 + `WWW-Authenticate: ApiKey`。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKey;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// `/api/v1/*` に API key を要求するための middleware を適用する。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::api_key::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, api_key_middleware))
}

async fn api_key_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let key = match get_api_key(req.headers()) {
        Ok(key) => ApiKey::from(key),
        Err(err) => {
            tracing::warn!(
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key rejected"
            );
            return Err(AppError::unauthorized(
                err,
                state.config.expose_error_detail,
            ));
        }
    };

    tracing::debug!(fingerprint = %key.fingerprint(), "api key extracted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(key);

    Ok(next.run(req).await)
}
