use serde::Deserialize;
use crate::config::env::{self, EnvKey};

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub access_token: Option<String>,
    pub auth_email: Option<String>,
    pub auth_password: Option<String>,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            api_base_url: env::get_or(EnvKey::ApiBaseUrl, DEFAULT_API_URL),
            access_token: env::get_opt(EnvKey::AccessToken),
            auth_email: env::get_opt(EnvKey::AuthEmail),
            auth_password: env::get_opt(EnvKey::AuthPassword),
            request_timeout_secs: env::get_parsed(EnvKey::RequestTimeoutSecs, 30),
        })
    }

    /// Email and password, when both are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.auth_email, &self.auth_password) {
            (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            api_base_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            auth_email: None,
            auth_password: None,
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn credentials_require_both_email_and_password() {
        let mut cfg = config();
        assert!(cfg.credentials().is_none());

        cfg.auth_email = Some("admin@example.com".to_string());
        assert!(cfg.credentials().is_none());

        cfg.auth_password = Some("secret".to_string());
        assert_eq!(cfg.credentials(), Some(("admin@example.com", "secret")));
    }
}
