//! Controller behind the "edit movie" dialog.
//!
//! The controller is owned by the dialog host and driven through `&mut self`
//! from a single task. A submit that gets past the auth and form checks makes
//! exactly one call to [`MovieService::update_movie`] and then closes the
//! dialog with `Some(true)`, whether the call succeeded or not.

use super::dialog::{DialogRef, DialogResult};
use super::form::{FormField, MovieForm};
use super::model::{Movie, MovieId};
use super::notification::{self, InlineNotification};
use super::service::MovieService;
use crate::common::upload::SelectedFile;
use crate::modules::auth::service::AuthService;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Stopped before any network call.
    Rejected,
    Updated,
    Failed,
}

pub struct UpdateMovieController {
    movie_id: MovieId,
    poster: Option<String>,
    form: MovieForm,
    selected_file: Option<SelectedFile>,
    notification: InlineNotification,
    dialog: DialogRef,
    auth: Arc<dyn AuthService>,
    movies: Arc<dyn MovieService>,
}

impl UpdateMovieController {
    pub fn new(
        movie: Movie,
        dialog: DialogRef,
        auth: Arc<dyn AuthService>,
        movies: Arc<dyn MovieService>,
    ) -> Self {
        let form = MovieForm::from_movie(&movie);
        info!("Editing movie {} ({})", movie.movie_id, movie.title);

        Self {
            movie_id: movie.movie_id,
            poster: movie.poster,
            form,
            selected_file: None,
            notification: InlineNotification::default(),
            dialog,
            auth,
            movies,
        }
    }

    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    pub fn notification(&self) -> &InlineNotification {
        &self.notification
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_value(field, value);
    }

    /// Keeps the first file of a selection. An empty selection changes nothing.
    pub fn select_file(&mut self, files: Vec<SelectedFile>) {
        let Some(file) = files.into_iter().next() else {
            return;
        };

        info!("Selected file: {}", file.file_name);
        self.form.poster = Some(file.file_name.clone());
        self.selected_file = Some(file);
    }

    pub async fn submit(&mut self) -> SubmitStatus {
        if !self.auth.is_authenticated() {
            warn!("Update rejected: user is not authenticated");
            self.notification = InlineNotification::error(notification::NOT_AUTHENTICATED);
            return SubmitStatus::Rejected;
        }

        let poster = match &self.selected_file {
            Some(file) => Some(file.file_name.clone()),
            None => self.poster.clone(),
        };

        let dto = match self.form.to_dto(poster) {
            Ok(dto) => dto,
            Err(e) => {
                warn!("Update rejected: {} (fields: {:?})", e, self.form.invalid_fields());
                self.notification = InlineNotification::error(notification::INVALID_FORM);
                return SubmitStatus::Rejected;
            }
        };

        info!("Sending update for movie {}: {:?}", self.movie_id, dto);

        let status = match self
            .movies
            .update_movie(self.movie_id, dto, self.selected_file.clone())
            .await
        {
            Ok(movie) => {
                info!("Movie {} updated: {}", movie.movie_id, movie.title);
                self.notification = InlineNotification::success(notification::UPDATE_SUCCEEDED);
                SubmitStatus::Updated
            }
            Err(e) => {
                error!("Failed to update movie {}: {}", self.movie_id, e);
                self.notification = InlineNotification::error(notification::UPDATE_FAILED);
                SubmitStatus::Failed
            }
        };

        // Settled either way.
        self.close(Some(true));
        status
    }

    pub fn cancel(&mut self) {
        info!("Edit of movie {} cancelled", self.movie_id);
        self.close(None);
    }

    fn close(&mut self, result: DialogResult) {
        self.dialog.close(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::response::ServiceError;
    use crate::modules::auth::service::MockAuthService;
    use crate::modules::movie::dialog::{self, DialogHandle};
    use crate::modules::movie::notification::NotificationKind;
    use crate::modules::movie::service::MockMovieService;

    fn movie() -> Movie {
        Movie {
            movie_id: 42,
            title: "Heat".to_string(),
            director: "Michael Mann".to_string(),
            studio: "Warner Bros.".to_string(),
            movie_cast: vec!["Alice".to_string(), "Bob".to_string()],
            release_year: 1995,
            poster: Some("old-poster.jpg".to_string()),
            poster_url: None,
        }
    }

    fn auth(signed_in: bool) -> Arc<dyn AuthService> {
        let mut auth = MockAuthService::new();
        auth.expect_is_authenticated().return_const(signed_in);
        Arc::new(auth)
    }

    fn controller(
        signed_in: bool,
        movies: MockMovieService,
    ) -> (UpdateMovieController, DialogHandle) {
        let (dialog_ref, handle) = dialog::channel();
        let controller =
            UpdateMovieController::new(movie(), dialog_ref, auth(signed_in), Arc::new(movies));
        (controller, handle)
    }

    #[test]
    fn initializes_fields_from_movie() {
        let (controller, _handle) = controller(true, MockMovieService::new());

        assert_eq!(controller.movie_id(), 42);
        assert_eq!(controller.form().value(FormField::MovieCast), "Alice, Bob");
        assert_eq!(controller.form().value(FormField::ReleaseYear), "1995");
        assert!(!controller.notification().show);
        assert!(controller.is_open());
    }

    #[tokio::test]
    async fn unauthenticated_submit_makes_no_call() {
        let mut movies = MockMovieService::new();
        movies.expect_update_movie().never();
        let (mut controller, _handle) = controller(false, movies);

        assert_eq!(controller.submit().await, SubmitStatus::Rejected);

        let note = controller.notification();
        assert!(note.show);
        assert_eq!(note.kind, Some(NotificationKind::Error));
        assert_eq!(note.text, notification::NOT_AUTHENTICATED);
        assert!(controller.is_open());
    }

    #[tokio::test]
    async fn empty_required_field_makes_no_call() {
        let mut movies = MockMovieService::new();
        movies.expect_update_movie().never();
        let (mut controller, _handle) = controller(true, movies);
        controller.set_field(FormField::Director, "");

        assert_eq!(controller.submit().await, SubmitStatus::Rejected);

        assert_eq!(controller.notification().kind, Some(NotificationKind::Error));
        assert_eq!(controller.notification().text, notification::INVALID_FORM);
        assert!(controller.is_open());
    }

    #[tokio::test]
    async fn valid_submit_sends_parsed_dto_and_closes_with_true() {
        let mut movies = MockMovieService::new();
        movies
            .expect_update_movie()
            .withf(|id, dto, file| {
                *id == 42
                    && dto.release_year == 1994
                    && dto.movie_cast == vec!["Alice".to_string(), "Bob".to_string()]
                    && dto.poster.as_deref() == Some("old-poster.jpg")
                    && file.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(movie()));
        let (mut controller, handle) = controller(true, movies);
        controller.set_field(FormField::MovieCast, "Alice, , Bob,");
        controller.set_field(FormField::ReleaseYear, "1994");

        assert_eq!(controller.submit().await, SubmitStatus::Updated);

        assert_eq!(controller.notification().kind, Some(NotificationKind::Success));
        assert!(!controller.is_open());
        assert_eq!(handle.closed().await, Some(true));
    }

    #[tokio::test]
    async fn failed_update_shows_error_and_still_closes_with_true() {
        let mut movies = MockMovieService::new();
        movies.expect_update_movie().times(1).returning(|_, _, _| {
            Err(ServiceError::Status {
                status: 500,
                message: "boom".to_string(),
            })
        });
        let (mut controller, handle) = controller(true, movies);

        assert_eq!(controller.submit().await, SubmitStatus::Failed);

        assert_eq!(controller.notification().kind, Some(NotificationKind::Error));
        assert_eq!(controller.notification().text, notification::UPDATE_FAILED);
        assert_eq!(handle.closed().await, Some(true));
    }

    #[tokio::test]
    async fn selected_file_replaces_poster_and_is_uploaded() {
        let mut movies = MockMovieService::new();
        movies
            .expect_update_movie()
            .withf(|_, dto, file| {
                dto.poster.as_deref() == Some("first.png")
                    && file.as_ref().map(|f| f.file_name.as_str()) == Some("first.png")
            })
            .times(1)
            .returning(|_, _, _| Ok(movie()));
        let (mut controller, _handle) = controller(true, movies);

        controller.select_file(vec![
            SelectedFile::new("first.png", "image/png", b"1".to_vec()),
            SelectedFile::new("second.png", "image/png", b"2".to_vec()),
        ]);
        assert_eq!(controller.form().poster.as_deref(), Some("first.png"));

        assert_eq!(controller.submit().await, SubmitStatus::Updated);
    }

    #[test]
    fn empty_selection_keeps_previous_file() {
        let (mut controller, _handle) = controller(true, MockMovieService::new());
        controller.select_file(vec![SelectedFile::new("a.jpg", "image/jpeg", b"a".to_vec())]);

        controller.select_file(Vec::new());

        assert_eq!(
            controller.selected_file.as_ref().map(|f| f.file_name.as_str()),
            Some("a.jpg")
        );
        assert_eq!(controller.form().poster.as_deref(), Some("a.jpg"));
    }

    #[tokio::test]
    async fn cancel_closes_without_value() {
        let (mut controller, handle) = controller(true, MockMovieService::new());

        controller.cancel();

        assert!(!controller.is_open());
        assert_eq!(handle.closed().await, None);
    }
}
