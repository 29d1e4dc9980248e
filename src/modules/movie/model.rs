use serde::{Deserialize, Serialize};

pub type MovieId = i64;

/// A catalog entry as returned by the movie API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: MovieId,
    pub title: String,
    pub director: String,
    pub studio: String,
    #[serde(default)]
    pub movie_cast: Vec<String>,
    pub release_year: i32,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}
