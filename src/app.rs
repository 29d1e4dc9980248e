use crate::config::settings::AppConfig;
use crate::infrastructure::http::client::ApiClient;
use crate::modules::auth::service::AuthApi;
use crate::modules::auth::session::SessionStore;
use crate::state::AppState;
use anyhow::Result;
use tracing::{info, warn};

/// Builds the API client and signs in with whatever the configuration offers.
/// A failed login is not fatal: the editor opens and refuses to submit.
pub async fn create_app(config: AppConfig) -> Result<AppState> {
    let api = ApiClient::new(&config.api_base_url, config.request_timeout_secs)?;
    let session = SessionStore::new();

    if let Some(token) = &config.access_token {
        session.sign_in_with_token(token.clone());
        info!("Using access token from environment");
    } else if let Some((email, password)) = config.credentials() {
        let auth = AuthApi::new(api.clone(), session.clone());
        if let Err(e) = auth.login(email, password).await {
            warn!("Continuing signed out: {}", e);
        }
    } else {
        warn!("No credentials configured, updates will be rejected");
    }

    Ok(AppState::new(api, session))
}
