use super::dto::AuthResponse;
use super::service::AuthService;
use std::sync::{Arc, PoisonError, RwLock};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    /// `None` for tokens supplied by configuration, whose lifetime is unknown.
    pub expires_at: Option<OffsetDateTime>,
}

impl AuthSession {
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// A lifetime too large to represent as an instant is treated as no expiry.
    pub fn from_login(res: &AuthResponse, now: OffsetDateTime) -> Self {
        let expires_at = i64::try_from(res.access_token_expires_in)
            .ok()
            .and_then(|secs| now.checked_add(Duration::seconds(secs)));

        Self {
            access_token: res.access_token.clone(),
            expires_at,
        }
    }

    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Session shared by the auth check and every outgoing API call.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<AuthSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, session: AuthSession) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    pub fn sign_in_with_token(&self, token: impl Into<String>) {
        self.sign_in(AuthSession::from_token(token));
    }

    pub fn current(&self) -> Option<AuthSession> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The bearer token, unless the session is missing or expired.
    pub fn access_token(&self) -> Option<String> {
        self.access_token_at(OffsetDateTime::now_utc())
    }

    fn access_token_at(&self, now: OffsetDateTime) -> Option<String> {
        self.current()
            .filter(|session| !session.is_expired_at(now))
            .map(|session| session.access_token)
    }
}

impl AuthService for SessionStore {
    fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}
