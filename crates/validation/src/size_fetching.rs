//! Resolving the size of a remote binary without downloading its content.

use {async_trait::async_trait, reqwest::header::CONTENT_LENGTH, url::Url};

#[derive(Debug, thiserror::Error)]
pub enum SizeFetchError {
    #[error("request for remote binary metadata failed")]
    Request(#[from] reqwest::Error),
    #[error("remote binary response carries no content length")]
    MissingContentLength,
    #[error("remote binary content length is not a valid size")]
    InvalidContentLength,
}

/// Determines how large a remote binary is, in bytes.
#[mockall::automock]
#[async_trait]
pub trait BinarySizeFetching: Send + Sync {
    async fn fetch_size(&self, url: &Url) -> Result<u64, SizeFetchError>;
}

/// Size fetcher issuing a metadata-only HEAD request and reading the declared
/// `Content-Length`.
pub struct HttpSizeFetcher {
    client: reqwest::Client,
}

impl HttpSizeFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BinarySizeFetching for HttpSizeFetcher {
    async fn fetch_size(&self, url: &Url) -> Result<u64, SizeFetchError> {
        let response = self
            .client
            .head(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let length = response
            .headers()
            .get(CONTENT_LENGTH)
            .ok_or(SizeFetchError::MissingContentLength)?;
        length
            .to_str()
            .ok()
            .and_then(|value| value.parse().ok())
            .ok_or(SizeFetchError::InvalidContentLength)
    }
}
