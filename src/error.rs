/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - ApiKeyError を 401 + WWW-Authenticate に統一的に変換
 */
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::ApiKeyError;
use crate::services::auth::api_key::SCHEME;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized: {source}")]
    Unauthorized {
        source: ApiKeyError,
        expose_detail: bool,
    },
}

impl AppError {
    pub fn unauthorized(source: ApiKeyError, expose_detail: bool) -> Self {
        Self::Unauthorized {
            source,
            expose_detail,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized {
                source,
                expose_detail: true,
            } => {
                let code = match source {
                    ApiKeyError::NoAuthHeader => "NO_AUTH_HEADER",
                    ApiKeyError::MalformedHeader => "MALFORMED_AUTH_HEADER",
                };
                (StatusCode::UNAUTHORIZED, code, source.to_string())
            }
            AppError::Unauthorized {
                expose_detail: false,
                ..
            } => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "unauthorized".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (
            status,
            [(header::WWW_AUTHENTICATE, HeaderValue::from_static(SCHEME))],
            Json(body),
        )
            .into_response()
    }
}
