use std::time::Duration;

use catview_core::{DEFAULT_API_BASE, SENTINEL_TAG};
use catview_logging::{catview_debug, catview_info};
use futures_util::StreamExt;
use reqwest::header::USER_AGENT;
use url::Url;

use crate::{Endpoint, FailureKind, RemoteFetchError};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Root of the service; the tags endpoint and image paths hang off it.
    pub api_base: Url,
    pub tags_timeout: Duration,
    pub image_timeout: Duration,
    pub connect_timeout: Duration,
    pub max_tags_bytes: u64,
    pub max_image_bytes: u64,
    pub user_agent: String,
}

impl ClientSettings {
    /// Settings for the public service at [`DEFAULT_API_BASE`].
    pub fn for_default_service() -> Result<Self, url::ParseError> {
        Url::parse(DEFAULT_API_BASE).map(Self::with_api_base)
    }

    pub fn with_api_base(api_base: Url) -> Self {
        Self {
            api_base,
            tags_timeout: Duration::from_secs(10),
            image_timeout: Duration::from_secs(20),
            connect_timeout: Duration::from_secs(10),
            max_tags_bytes: 1024 * 1024,
            max_image_bytes: 16 * 1024 * 1024,
            user_agent: format!("catview/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// `<api_base>/api/tags`
    pub fn tags_url(&self) -> Result<Url, RemoteFetchError> {
        let mut url = self.api_base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| {
                RemoteFetchError::new(
                    Endpoint::Tags,
                    FailureKind::InvalidUrl,
                    format!("{} cannot be used as a base", self.api_base),
                )
            })?
            .pop_if_empty()
            .extend(["api", "tags"]);
        Ok(url)
    }
}

/// The two HTTP operations the viewer needs. Each call is a single attempt.
#[async_trait::async_trait]
pub trait RemoteClient: Send + Sync {
    /// Fetches the tag list, with the sentinel entry prepended.
    async fn fetch_tag_list(&self) -> Result<Vec<String>, RemoteFetchError>;

    /// Fetches raw encoded image bytes from a fully built image URL.
    async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, RemoteFetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    settings: ClientSettings,
}

impl ReqwestClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn build_client(&self, endpoint: Endpoint) -> Result<reqwest::Client, RemoteFetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .build()
            .map_err(|err| RemoteFetchError::new(endpoint, FailureKind::Network, err.to_string()))
    }

    async fn get(
        &self,
        endpoint: Endpoint,
        url: Url,
        timeout: Duration,
    ) -> Result<reqwest::Response, RemoteFetchError> {
        let client = self.build_client(endpoint)?;
        let response = client
            .get(url)
            .header(USER_AGENT, self.settings.user_agent.as_str())
            .timeout(timeout)
            .send()
            .await
            .map_err(|err| RemoteFetchError::from_reqwest(endpoint, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteFetchError::new(
                endpoint,
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        Ok(response)
    }
}

/// Streams the body, failing once it grows past `max_bytes`.
async fn read_capped(
    endpoint: Endpoint,
    response: reqwest::Response,
    max_bytes: u64,
) -> Result<Vec<u8>, RemoteFetchError> {
    let too_large = |actual: u64| {
        RemoteFetchError::new(
            endpoint,
            FailureKind::TooLarge { max_bytes },
            format!("received {actual} bytes"),
        )
    };
    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(content_len));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|err| RemoteFetchError::from_reqwest(endpoint, err))?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(next_len));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// True when the path holds a segment URL parsing would resolve away,
/// such as `..` or its percent-encoded forms.
fn has_dot_segment(url: &str) -> bool {
    let path = url.split(|ch| ch == '?' || ch == '#').next().unwrap_or(url);
    path.split('/').skip(3).any(|segment| {
        matches!(
            segment.to_ascii_lowercase().as_str(),
            "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e."
        )
    })
}

#[async_trait::async_trait]
impl RemoteClient for ReqwestClient {
    async fn fetch_tag_list(&self) -> Result<Vec<String>, RemoteFetchError> {
        let url = self.settings.tags_url()?;
        catview_info!("Fetching tags from {}", url);

        let response = self
            .get(Endpoint::Tags, url, self.settings.tags_timeout)
            .await?;
        let body = read_capped(Endpoint::Tags, response, self.settings.max_tags_bytes).await?;
        let remote: Vec<String> = serde_json::from_slice(&body).map_err(|err| {
            RemoteFetchError::new(Endpoint::Tags, FailureKind::Decode, err.to_string())
        })?;

        let mut tags = Vec::with_capacity(remote.len() + 1);
        tags.push(SENTINEL_TAG.to_string());
        tags.extend(remote);
        Ok(tags)
    }

    async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, RemoteFetchError> {
        if has_dot_segment(url) {
            return Err(RemoteFetchError::new(
                Endpoint::Image,
                FailureKind::InvalidUrl,
                "path contains a dot segment that cannot be sent",
            ));
        }
        let parsed = Url::parse(url).map_err(|err| {
            RemoteFetchError::new(Endpoint::Image, FailureKind::InvalidUrl, err.to_string())
        })?;
        catview_info!("Fetching image {}", parsed);

        let response = self
            .get(Endpoint::Image, parsed, self.settings.image_timeout)
            .await?;

        let bytes = read_capped(Endpoint::Image, response, self.settings.max_image_bytes).await?;

        catview_debug!("Image body complete: {} bytes", bytes.len());
        Ok(bytes)
    }
}
