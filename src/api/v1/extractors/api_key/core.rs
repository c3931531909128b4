use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

use super::ApiKey;

/// Handler で ApiKey を受け取るための extractor
/// middleware が ApiKey を request.extensions() に insert 済みならそれを使い、
/// 無ければ Authorization ヘッダをその場で parse する（失敗時は 401）
pub struct ApiKeyExtractor(pub ApiKey);

impl FromRequestParts<AppState> for ApiKeyExtractor
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(Self(key.clone()));
        }

        match get_api_key(&parts.headers) {
            Ok(key) => Ok(Self(ApiKey::from(key))),
            Err(err) => {
                tracing::warn!(error = %err, "api key extraction failed");
                Err(AppError::unauthorized(
                    err,
                    state.config.expose_error_detail,
                ))
            }
        }
    }
}
