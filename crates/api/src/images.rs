//! Remote image download and local image storage.
//!
//! Series posters are downloaded once and stored in the image directory under
//! a content-addressed name (see [`sj_core::images`]).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sj_core::images::validate_file_name;

/// Largest image accepted from a remote host (10 MiB).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Errors from image download and storage.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Invalid image URL '{0}'")]
    InvalidUrl(String),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Image download failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote host returned a non-2xx status code.
    #[error("Image download failed with HTTP {0}")]
    Status(u16),

    #[error("Image exceeds {MAX_IMAGE_BYTES} bytes")]
    TooLarge,

    #[error("Invalid image file name '{0}'")]
    InvalidName(String),

    /// Writing or removing the local file failed.
    #[error("Image storage failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of remote image bytes.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError>;
}

/// [`ImageFetcher`] over HTTP(S) using [`reqwest`].
#[derive(Debug, Clone, Default)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing client (connection pooling).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ImageError::InvalidUrl(url.to_string()));
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status(status.as_u16()));
        }
        if response
            .content_length()
            .is_some_and(|len| len > MAX_IMAGE_BYTES as u64)
        {
            return Err(ImageError::TooLarge);
        }

        let bytes = response.bytes().await?;
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ImageError::TooLarge);
        }
        tracing::debug!(url, size = bytes.len(), "Downloaded image");
        Ok(bytes.to_vec())
    }
}

/// The directory stored images live in.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute location of a stored image.
    pub fn path(&self, file_name: &str) -> Result<PathBuf, ImageError> {
        validate_file_name(file_name).map_err(|_| ImageError::InvalidName(file_name.to_string()))?;
        Ok(self.dir.join(file_name))
    }

    /// Write `content` under `file_name` unless the file already exists.
    ///
    /// Returns `true` when a new file was written.
    pub async fn save(&self, file_name: &str, content: &[u8]) -> Result<bool, ImageError> {
        let path = self.path(file_name)?;
        if tokio::fs::try_exists(&path).await? {
            tracing::debug!(file_name, "Image already stored");
            return Ok(false);
        }
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(&path, content).await?;
        tracing::info!(file_name, size = content.len(), "Stored image");
        Ok(true)
    }

    pub async fn remove(&self, file_name: &str) -> Result<(), ImageError> {
        let path = self.path(file_name)?;
        tokio::fs::remove_file(&path).await?;
        tracing::info!(file_name, "Removed image");
        Ok(())
    }

    pub async fn exists(&self, file_name: &str) -> Result<bool, ImageError> {
        let path = self.path(file_name)?;
        Ok(tokio::fs::try_exists(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn save_is_idempotent_and_remove_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("images"));

        assert!(store.save("a.png", b"one").await.unwrap());
        assert!(!store.save("a.png", b"two").await.unwrap());
        assert_eq!(tokio::fs::read(store.path("a.png").unwrap()).await.unwrap(), b"one");

        store.remove("a.png").await.unwrap();
        assert!(!store.exists("a.png").await.unwrap());
        assert_matches!(store.remove("a.png").await, Err(ImageError::Io(_)));
    }

    #[tokio::test]
    async fn rejects_names_outside_the_directory() {
        let store = ImageStore::new("/tmp/images");
        assert_matches!(store.save("../x.png", b"x").await, Err(ImageError::InvalidName(_)));
    }

    #[tokio::test]
    async fn http_fetcher_rejects_non_http_urls() {
        let fetcher = HttpImageFetcher::new();
        assert_matches!(
            fetcher.fetch("file:///etc/passwd").await,
            Err(ImageError::InvalidUrl(_))
        );
    }
}
