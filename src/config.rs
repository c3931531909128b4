/*
 * Responsibility
 * - 環境変数や設定の読み込み (APP_ENV, 401 の詳細をレスポンスに出すかどうか)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<&str>) -> Self {
        match raw
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: AppEnv,
    /// 401 の body に NO_AUTH_HEADER / MALFORMED_AUTH_HEADER を出すか
    pub expose_error_detail: bool,
}

impl Config {
    /// Entry point for callers: loads `.env` (if any), then reads the process env.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let expose_error_detail = match lookup("AUTH_EXPOSE_ERROR_DETAIL") {
            None => !app_env.is_production(),
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(ConfigError::Invalid("AUTH_EXPOSE_ERROR_DETAIL")),
            },
        };

        Ok(Self {
            app_env,
            expose_error_detail,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_env: AppEnv::Development,
            expose_error_detail: true,
        }
    }
}
