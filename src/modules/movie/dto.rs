use serde::{Deserialize, Serialize};
use super::model::MovieId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<MovieId>,
    pub title: String,
    pub director: String,
    pub studio: String,
    pub movie_cast: Vec<String>,
    pub release_year: i32,
    pub poster: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let dto = MovieDto {
            movie_id: None,
            title: "Heat".to_string(),
            director: "Michael Mann".to_string(),
            studio: "Warner Bros.".to_string(),
            movie_cast: vec!["Al Pacino".to_string(), "Robert De Niro".to_string()],
            release_year: 1995,
            poster: Some("heat.jpg".to_string()),
        };

        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["movieCast"][1], "Robert De Niro");
        assert_eq!(value["releaseYear"], 1995);
        assert!(value.get("movieId").is_none());
    }
}
