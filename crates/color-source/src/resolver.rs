//! Resolution of a [`ColorInput`] to a single base color

use crate::average::{average_color, AverageOptions};
use crate::fetch::{FetchConfig, HttpImageSource, ImageSource, OfflineSource};
use crate::input::ColorInput;
use crate::{ResolveError, Result};
use std::path::Path;
use theme_core::Rgb;

/// Configuration for a [`ColorResolver`]
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Remote image fetching
    pub fetch: FetchConfig,
    /// Average color extraction
    pub average: AverageOptions,
}

impl ResolverConfig {
    /// Set the fetch configuration
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    /// Set the averaging options
    pub fn with_average(mut self, average: AverageOptions) -> Self {
        self.average = average;
        self
    }
}

/// Read a local file's full contents
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| ResolveError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves inputs to a base color
///
/// # Examples
/// ```
/// use color_source::{ColorInput, ColorResolver, ResolverConfig};
/// use theme_core::Rgb;
///
/// # async fn example() -> color_source::Result<()> {
/// let resolver = ColorResolver::new(ResolverConfig::default())?;
/// let color = resolver.resolve(&ColorInput::classify("#ff0000")).await?;
/// assert_eq!(color, Rgb::new(255, 0, 0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ColorResolver<S = HttpImageSource> {
    source: S,
    average: AverageOptions,
}

impl ColorResolver<HttpImageSource> {
    /// Create a resolver that fetches URLs over HTTP
    pub fn new(config: ResolverConfig) -> Result<Self> {
        let source = HttpImageSource::new(config.fetch)?;
        Ok(Self::with_source(source, config.average))
    }
}

impl ColorResolver<OfflineSource> {
    /// Create a resolver for local inputs only; URLs fail with [`FetchError::Offline`]
    ///
    /// [`FetchError::Offline`]: crate::FetchError::Offline
    pub fn offline(average: AverageOptions) -> Self {
        Self::with_source(OfflineSource, average)
    }
}

impl<S: ImageSource> ColorResolver<S> {
    /// Create a resolver with a custom image source
    pub fn with_source(source: S, average: AverageOptions) -> Self {
        Self { source, average }
    }

    /// Get the averaging options
    pub fn average_options(&self) -> &AverageOptions {
        &self.average
    }

    /// Resolve an input to its representative color
    pub async fn resolve(&self, input: &ColorInput) -> Result<Rgb> {
        tracing::debug!("Resolving {} color input", input.kind());

        let color = match input {
            ColorInput::Hex(hex) => Rgb::from_hex(hex)?,
            ColorInput::Url(url) => {
                let bytes = self.source.fetch(url).await?;
                average_color(&bytes, &self.average)?
            }
            ColorInput::Path(path) => {
                let bytes = read_bytes(path)?;
                average_color(&bytes, &self.average)?
            }
            ColorInput::Bytes(bytes) => average_color(bytes, &self.average)?,
        };

        tracing::debug!("Resolved base color {}", color);
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use async_trait::async_trait;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn png(color: [u8; 3]) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, image::Rgb(color)));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// Serves fixed bytes for every URL and counts calls
    struct StaticSource {
        body: Vec<u8>,
        calls: AtomicUsize,
    }

    impl StaticSource {
        fn new(body: Vec<u8>) -> Self {
            Self {
                body,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ImageSource for StaticSource {
        async fn fetch(&self, _url: &str) -> std::result::Result<Vec<u8>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.body.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ImageSource for FailingSource {
        async fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
            Err(FetchError::Status {
                status: 503,
                url: url.to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_resolve_hex() {
        let resolver = ColorResolver::with_source(StaticSource::new(vec![]), AverageOptions::default());
        let color = resolver.resolve(&ColorInput::classify("#3B82F6")).await.unwrap();
        assert_eq!(color, Rgb::new(59, 130, 246));
        assert_eq!(resolver.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_resolve_malformed_hex() {
        let resolver = ColorResolver::with_source(StaticSource::new(vec![]), AverageOptions::default());
        let result = resolver.resolve(&ColorInput::classify("#12345")).await;
        assert!(matches!(result, Err(ResolveError::Color(_))));
    }

    #[tokio::test]
    async fn test_resolve_url_uses_source() {
        let resolver = ColorResolver::with_source(
            StaticSource::new(png([0, 255, 0])),
            AverageOptions::default(),
        );
        let color = resolver
            .resolve(&ColorInput::classify("https://example.com/logo.png"))
            .await
            .unwrap();
        assert_eq!(color, Rgb::new(0, 255, 0));
        assert_eq!(resolver.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolve_url_failure() {
        let resolver = ColorResolver::with_source(FailingSource, AverageOptions::default());
        let err = resolver
            .resolve(&ColorInput::classify("https://example.com/logo.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Fetch(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_resolve_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, png([0, 0, 255])).unwrap();

        let resolver = ColorResolver::with_source(FailingSource, AverageOptions::default());
        let color = resolver.resolve(&ColorInput::from(path)).await.unwrap();
        assert_eq!(color, Rgb::new(0, 0, 255));
    }

    #[tokio::test]
    async fn test_resolve_missing_path() {
        let resolver = ColorResolver::with_source(FailingSource, AverageOptions::default());
        let err = resolver
            .resolve(&ColorInput::classify("/nonexistent/path.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/path.png"));
    }

    #[tokio::test]
    async fn test_resolve_undecodable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let resolver = ColorResolver::with_source(FailingSource, AverageOptions::default());
        let err = resolver.resolve(&ColorInput::from(path)).await.unwrap_err();
        assert!(matches!(err, ResolveError::Decode(_)));
    }

    #[tokio::test]
    async fn test_resolve_bytes() {
        let resolver = ColorResolver::with_source(FailingSource, AverageOptions::default());
        let color = resolver
            .resolve(&ColorInput::from(png([255, 255, 0])))
            .await
            .unwrap();
        assert_eq!(color, Rgb::new(255, 255, 0));
    }

    #[tokio::test]
    async fn test_offline_resolver() {
        let resolver = ColorResolver::offline(AverageOptions::default());
        let color = resolver.resolve(&ColorInput::classify("#f00")).await.unwrap();
        assert_eq!(color, Rgb::new(255, 0, 0));

        let err = resolver
            .resolve(&ColorInput::classify("https://example.com/logo.png"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Fetch(FetchError::Offline(_))));
    }

    #[test]
    fn test_read_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("raw.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();
        assert_eq!(read_bytes(&path).unwrap(), vec![1, 2, 3]);
        assert!(read_bytes(&dir.path().join("missing.bin")).is_err());
    }

    #[test]
    fn test_resolver_config_builder() {
        let config = ResolverConfig::default()
            .with_fetch(FetchConfig::default().with_max_bytes(64))
            .with_average(AverageOptions::default().full_resolution());
        assert_eq!(config.fetch.max_bytes, 64);
        assert_eq!(config.average.sample_size, None);

        let resolver = ColorResolver::new(config).unwrap();
        assert_eq!(resolver.average_options().sample_size, None);
    }
}
