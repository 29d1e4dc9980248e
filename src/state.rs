use crate::infrastructure::http::client::ApiClient;
use crate::modules::auth::service::AuthService;
use crate::modules::auth::session::SessionStore;
use crate::modules::movie::service::{HttpMovieService, MovieService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub session: SessionStore,
}

impl AppState {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self {
            api,
            session,
        }
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        Arc::new(self.session.clone())
    }

    pub fn movies(&self) -> Arc<dyn MovieService> {
        Arc::new(HttpMovieService::new(self.api.clone(), self.session.clone()))
    }
}
