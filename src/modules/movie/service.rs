use super::dto::MovieDto;
use super::model::{Movie, MovieId};
use crate::common::response::ServiceError;
use crate::common::upload::SelectedFile;
use crate::infrastructure::http::client::ApiClient;
use crate::modules::auth::session::SessionStore;
use async_trait::async_trait;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::info;

pub const DTO_PART: &str = "movieDto";
pub const FILE_PART: &str = "file";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieService: Send + Sync {
    async fn get_movie(&self, id: MovieId) -> Result<Movie, ServiceError>;

    /// Replaces the movie's fields. A `file` replaces its poster.
    async fn update_movie(
        &self,
        id: MovieId,
        dto: MovieDto,
        file: Option<SelectedFile>,
    ) -> Result<Movie, ServiceError>;
}

/// [`MovieService`] backed by the catalog REST API.
pub struct HttpMovieService {
    api: ApiClient,
    session: SessionStore,
}

impl HttpMovieService {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self { api, session }
    }

    fn update_form(dto: &MovieDto, file: Option<SelectedFile>) -> Result<Form, ServiceError> {
        let json = serde_json::to_string(dto)?;
        let form = Form::new().part(
            DTO_PART,
            Part::text(json).mime_str(mime::APPLICATION_JSON.as_ref())?,
        );

        Ok(match file {
            Some(file) => form.part(FILE_PART, file.into_part()?),
            None => form,
        })
    }
}

#[async_trait]
impl MovieService for HttpMovieService {
    async fn get_movie(&self, id: MovieId) -> Result<Movie, ServiceError> {
        let token = self.session.access_token();
        let response = self
            .api
            .request(Method::GET, &format!("movies/{}", id), token.as_deref())
            .send()
            .await?;

        ApiClient::parse_envelope(response).await
    }

    async fn update_movie(
        &self,
        id: MovieId,
        dto: MovieDto,
        file: Option<SelectedFile>,
    ) -> Result<Movie, ServiceError> {
        if let Some(file) = &file {
            info!("Uploading poster {} ({} bytes) for movie {}", file.file_name, file.len(), id);
        }

        let form = Self::update_form(&dto, file)?;
        let token = self.session.access_token();
        let response = self
            .api
            .request(Method::PUT, &format!("movies/{}", id), token.as_deref())
            .multipart(form)
            .send()
            .await?;

        ApiClient::parse_envelope(response).await
    }
}
