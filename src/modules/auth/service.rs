use super::dto::{AuthResponse, LoginRequest, UserResponse};
use super::session::{AuthSession, SessionStore};
use crate::common::response::ServiceError;
use crate::infrastructure::http::client::ApiClient;
use reqwest::Method;
use time::OffsetDateTime;
use tracing::{info, warn};
use validator::Validate;

/// Answers whether the current user may change catalog data.
#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn is_authenticated(&self) -> bool;
}

pub struct AuthApi {
    api: ApiClient,
    session: SessionStore,
}

impl AuthApi {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self { api, session }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserResponse, ServiceError> {
        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        req.validate()?;

        let response = self
            .api
            .request(Method::POST, "auth/login", None)
            .json(&req)
            .send()
            .await?;

        let res: AuthResponse = match ApiClient::parse_envelope(response).await {
            Ok(res) => res,
            Err(e) => {
                warn!("Login failed for {}: {}", email, e);
                return Err(e);
            }
        };

        self.session
            .sign_in(AuthSession::from_login(&res, OffsetDateTime::now_utc()));

        info!("Signed in as {}", res.user.username);
        Ok(res.user)
    }
}
