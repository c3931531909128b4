/*
 * Responsibility
 * - Handler から見える「抽出済みクレデンシャル」の型
 * - middleware / extractor が Authorization ヘッダから作り、handler はこの型だけを受け取る
 *
 * Notes
 * - キーそのものはログに出さない。相関には fingerprint() を使う
 */
use std::fmt;

use sha2::{Digest, Sha256};

/// Opaque credential taken from an `ApiKey` Authorization header.
///
/// May be empty: `Authorization: ApiKey ` is accepted by the parser.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First 16 hex chars of SHA-256(key).
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(&digest[..8])
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_leak_key() {
        let key = ApiKey::new("mysecretkey");
        let out = format!("{key:?}");

        assert!(!out.contains("mysecretkey"));
        assert!(out.contains(&key.fingerprint()));
    }

    #[test]
    fn fingerprint_is_stable_and_short() {
        let a = ApiKey::new("mysecretkey");
        let b = ApiKey::new("mysecretkey");

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 16);
        assert_ne!(a.fingerprint(), ApiKey::new("other").fingerprint());
    }

    #[test]
    fn empty_key() {
        // sha256("") = e3b0c442 98fc1c14 ...
        let key = ApiKey::new("");
        assert!(key.is_empty());
        assert_eq!(key.fingerprint(), "e3b0c44298fc1c14");
    }
}
