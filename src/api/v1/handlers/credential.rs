/*
 * Responsibility
 * - GET /api/v1/credential
 * - 抽出済みの ApiKey を fingerprint で返す (キー本体は返さない)
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyExtractor;
use crate::services::auth::api_key::SCHEME;

#[derive(Debug, Serialize)]
pub struct CredentialResponse {
    pub scheme: &'static str,
    pub fingerprint: String,
    pub empty: bool,
}

pub async fn credential(ApiKeyExtractor(key): ApiKeyExtractor) -> Json<CredentialResponse> {
    Json(CredentialResponse {
        scheme: SCHEME,
        fingerprint: key.fingerprint(),
        empty: key.is_empty(),
    })
}
