pub mod edit_movie;
