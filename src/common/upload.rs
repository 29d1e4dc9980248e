use anyhow::{Context, Result};
use bytes::Bytes;
use reqwest::multipart::Part;
use std::path::Path;
use tracing::info;

/// A poster picked by the user, held in memory until the next submit.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: String,
    pub contents: Bytes,
}

impl SelectedFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        contents: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            contents: contents.into(),
        }
    }

    /// Reads the whole file. The content type is guessed from the extension;
    /// nothing checks that it really is an image.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("poster")
            .to_string();
        let content_type = mime_guess::from_path(path).first_or_octet_stream().to_string();

        info!("Loaded poster {} ({} bytes, {})", file_name, contents.len(), content_type);

        Ok(Self::new(file_name, content_type, contents))
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn into_part(self) -> Result<Part, reqwest::Error> {
        Part::bytes(self.contents.to_vec())
            .file_name(self.file_name)
            .mime_str(&self.content_type)
    }
}
