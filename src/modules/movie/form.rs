//! Field table behind the edit-movie dialog.
//!
//! Every field is held as raw text while the user edits it. Derived values
//! (the cast list and the numeric release year) are only computed when the
//! form is turned into a [`MovieDto`].

use super::dto::MovieDto;
use super::model::Movie;
use validator::{Validate, ValidationErrors};

const CAST_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Director,
    Studio,
    MovieCast,
    ReleaseYear,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Director,
        FormField::Studio,
        FormField::MovieCast,
        FormField::ReleaseYear,
    ];

    /// Key used by validation errors.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Director => "director",
            FormField::Studio => "studio",
            FormField::MovieCast => "movie_cast",
            FormField::ReleaseYear => "release_year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Director => "Director",
            FormField::Studio => "Studio",
            FormField::MovieCast => "Cast (comma separated)",
            FormField::ReleaseYear => "Release year",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("invalid form: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("release year must be a whole number, got {0:?}")]
    ReleaseYear(String),
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MovieForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Director is required"))]
    pub director: String,
    #[validate(length(min = 1, message = "Studio is required"))]
    pub studio: String,
    #[validate(length(min = 1, message = "Cast is required"))]
    pub movie_cast: String,
    #[validate(length(min = 1, message = "Release year is required"))]
    pub release_year: String,
    /// Name of the newly selected poster file, if any. Not required.
    pub poster: Option<String>,
}

impl MovieForm {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            director: movie.director.clone(),
            studio: movie.studio.clone(),
            movie_cast: join_cast(&movie.movie_cast),
            release_year: movie.release_year.to_string(),
            poster: None,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Director => &self.director,
            FormField::Studio => &self.studio,
            FormField::MovieCast => &self.movie_cast,
            FormField::ReleaseYear => &self.release_year,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Director => &mut self.director,
            FormField::Studio => &mut self.studio,
            FormField::MovieCast => &mut self.movie_cast,
            FormField::ReleaseYear => &mut self.release_year,
        };
        *slot = value.into();
    }

    /// Fields failing their rules, in table order.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        let mut invalid: Vec<FormField> = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => {
                let keys = errors.field_errors();
                FormField::ALL
                    .into_iter()
                    .filter(|field| keys.contains_key(field.key()))
                    .collect()
            }
        };

        if !self.release_year.is_empty() && parse_release_year(&self.release_year).is_none() {
            invalid.push(FormField::ReleaseYear);
        }
        invalid
    }

    /// Builds the transfer object. `poster` is the reference to send as-is.
    pub fn to_dto(&self, poster: Option<String>) -> Result<MovieDto, FormError> {
        let release_year = self.check()?;

        Ok(MovieDto {
            movie_id: None,
            title: self.title.clone(),
            director: self.director.clone(),
            studio: self.studio.clone(),
            movie_cast: parse_cast(&self.movie_cast),
            release_year,
            poster,
        })
    }

    fn check(&self) -> Result<i32, FormError> {
        self.validate()?;
        parse_release_year(&self.release_year)
            .ok_or_else(|| FormError::ReleaseYear(self.release_year.clone()))
    }
}

pub fn join_cast(cast: &[String]) -> String {
    cast.join(", ")
}

/// Splits on commas, trims, drops empty names. Order and duplicates are kept.
pub fn parse_cast(text: &str) -> Vec<String> {
    text.split(CAST_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_release_year(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}
