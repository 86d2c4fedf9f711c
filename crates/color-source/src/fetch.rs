//! Remote image fetching
//!
//! [`ImageSource`] is the seam between the resolver and the network. The
//! default implementation, [`HttpImageSource`], downloads the full body with
//! reqwest; tests substitute their own sources.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use thiserror::Error;

/// Default cap on downloaded image bodies (20 MB)
pub const DEFAULT_MAX_BYTES: usize = 20 * 1024 * 1024;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while fetching an image
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Body exceeded the configured limit
    #[error("Image of {size} bytes exceeds maximum {max}")]
    TooLarge {
        /// Actual or advertised body size
        size: usize,
        /// Configured maximum
        max: usize,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Remote fetching is not available on this source
    #[error("Remote images are not supported here: {0}")]
    Offline(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for fetching remote images
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
    /// Maximum body size in bytes
    pub max_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("shadcn-mdc/{}", env!("CARGO_PKG_VERSION")),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl FetchConfig {
    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the maximum body size
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

// =============================================================================
// Image Sources
// =============================================================================

/// Something that can turn a URL into encoded image bytes
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch the full body at `url`
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// HTTP image source backed by reqwest
///
/// # Examples
/// ```no_run
/// use color_source::fetch::{FetchConfig, HttpImageSource, ImageSource};
/// use std::time::Duration;
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let config = FetchConfig::default().with_timeout(Duration::from_secs(10));
///     let source = HttpImageSource::new(config)?;
///     let bytes = source.fetch("https://example.com/logo.png").await?;
///     println!("{} bytes", bytes.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: ReqwestClient,
    config: FetchConfig,
}

impl HttpImageSource {
    /// Create a new HTTP image source
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let mut builder = ReqwestClient::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let max = self.config.max_bytes;
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(len) = response.content_length() {
            let size = usize::try_from(len).unwrap_or(usize::MAX);
            if size > max {
                return Err(FetchError::TooLarge { size, max });
            }
        }

        // Chunked responses carry no length, so the cap is enforced while reading
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
            if body.len() > max {
                return Err(FetchError::TooLarge {
                    size: body.len(),
                    max,
                });
            }
        }

        tracing::info!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Image source that refuses every URL
///
/// Used when the input is known to be local, so no HTTP client is built.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

#[async_trait]
impl ImageSource for OfflineSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Offline(url.to_string()))
    }
}
