/*
 * Responsibility
 * - Authorization ヘッダから `ApiKey <token>` 形式のクレデンシャルを取り出す
 * - HTTP / axum の Request には依存しない (HeaderMap だけを読む純粋関数)
 * - キーの照合 (store lookup) はここの責務ではない
 *
 * Notes
 * - ログは出さない。拒否時のログ・401 変換は middleware / extractor 側で行う
 */
use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Scheme token that must prefix the Authorization header value.
pub const SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

/// Extracts the API key from `Authorization: ApiKey <token>`.
///
/// Only the first Authorization value is consulted. Everything after the
/// first space is returned untouched, so `"ApiKey "` yields an empty key.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(ApiKeyError::NoAuthHeader),
    };

    // token charset is not restricted; only bytes that are not UTF-8 are rejected
    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| ApiKeyError::MalformedHeader)?;

    match value.split_once(' ') {
        Some((SCHEME, key)) => Ok(key.to_owned()),
        _ => Err(ApiKeyError::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, HeaderValue};

    use super::*;

    fn with_auth(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn valid_api_key_header() {
        assert_eq!(
            get_api_key(&with_auth("ApiKey mysecretkey")),
            Ok("mysecretkey".to_string())
        );
    }

    #[test]
    fn no_authorization_header() {
        assert_eq!(
            get_api_key(&HeaderMap::new()),
            Err(ApiKeyError::NoAuthHeader)
        );
    }

    #[test]
    fn unrelated_headers_only() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("ApiKey nope"));
        headers.insert("x-api-key", HeaderValue::from_static("mysecretkey"));

        assert_eq!(get_api_key(&headers), Err(ApiKeyError::NoAuthHeader));
    }

    #[test]
    fn empty_authorization_value() {
        assert_eq!(get_api_key(&with_auth("")), Err(ApiKeyError::NoAuthHeader));
    }

    #[test]
    fn missing_scheme_prefix() {
        assert_eq!(
            get_api_key(&with_auth("mysecretkey")),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn scheme_without_space() {
        assert_eq!(
            get_api_key(&with_auth("ApiKeymysecretkey")),
            Err(ApiKeyError::MalformedHeader)
        );
        assert_eq!(
            get_api_key(&with_auth("ApiKey")),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    #[test]
    fn wrong_scheme() {
        assert_eq!(
            get_api_key(&with_auth("Bearer mysecretkey")),
            Err(ApiKeyError::MalformedHeader)
        );
        // scheme match is exact, not case-insensitive
        assert_eq!(
            get_api_key(&with_auth("apikey mysecretkey")),
            Err(ApiKeyError::MalformedHeader)
        );
        assert_eq!(
            get_api_key(&with_auth(" ApiKey mysecretkey")),
            Err(ApiKeyError::MalformedHeader)
        );
    }

    // "ApiKey " is accepted and yields an empty key; rejecting it is left to
    // whoever verifies the key.
    #[test]
    fn prefix_only_yields_empty_key() {
        assert_eq!(get_api_key(&with_auth("ApiKey ")), Ok(String::new()));
    }

    #[test]
    fn remainder_is_not_trimmed_or_split() {
        assert_eq!(
            get_api_key(&with_auth("ApiKey  two  spaces ")),
            Ok(" two  spaces ".to_string())
        );
    }

    #[test]
    fn header_name_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        let name = HeaderName::from_bytes(b"AUTHORIZATION").unwrap();
        headers.insert(name, HeaderValue::from_static("ApiKey k"));

        assert_eq!(get_api_key(&headers), Ok("k".to_string()));
    }

    #[test]
    fn first_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("Bearer second"));
        assert_eq!(get_api_key(&headers), Ok("first".to_string()));

        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static(""));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Err(ApiKeyError::NoAuthHeader));
    }

    #[test]
    fn opaque_bytes_are_malformed() {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_bytes(b"ApiKey \xffkey").unwrap();
        headers.insert(header::AUTHORIZATION, value);

        assert_eq!(get_api_key(&headers), Err(ApiKeyError::MalformedHeader));
    }

    #[test]
    fn utf8_token_is_returned_as_is() {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_bytes("ApiKey café".as_bytes()).unwrap();
        headers.insert(header::AUTHORIZATION, value);

        assert_eq!(get_api_key(&headers), Ok("café".to_string()));
    }

    #[test]
    fn repeated_calls_agree() {
        let headers = with_auth("ApiKey mysecretkey");
        assert_eq!(get_api_key(&headers), get_api_key(&headers));

        let headers = with_auth("Bearer x");
        assert_eq!(get_api_key(&headers), get_api_key(&headers));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApiKeyError::NoAuthHeader.to_string(),
            "no authorization header included"
        );
        assert_eq!(
            ApiKeyError::MalformedHeader.to_string(),
            "malformed authorization header"
        );
    }
}
