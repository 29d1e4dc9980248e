use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ApiBaseUrl,
    AccessToken,
    AuthEmail,
    AuthPassword,
    RequestTimeoutSecs,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ApiBaseUrl => "MOVIE_API_URL",
            EnvKey::AccessToken => "MOVIE_API_TOKEN",
            EnvKey::AuthEmail => "MOVIE_API_EMAIL",
            EnvKey::AuthPassword => "MOVIE_API_PASSWORD",
            EnvKey::RequestTimeoutSecs => "MOVIE_API_TIMEOUT_SECS",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

/// Unset and blank variables both read as `None`.
pub fn get_opt(key: EnvKey) -> Option<String> {
    env::var(key.as_str())
        .ok()
        .filter(|val| !val.trim().is_empty())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
