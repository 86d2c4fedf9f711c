//! shadcn-mdc
//!
//! Derives a light/dark pair of shadcn themes from a single color source:
//! a hex literal, an image URL, a local image file or raw image bytes.
//!
//! # Example
//!
//! ```rust
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let theme = shadcn_mdc::mdctotheme("#ff0000", 0.5).await.unwrap();
//!
//! let light = theme.light().unwrap();
//! assert_eq!(light.primary, "0 100% 50%");
//! assert_eq!(light.radius, 0.5);
//! # }
//! ```
//!
//! A radius outside `(0, 1)` fails the call itself. Every other failure
//! (missing file, network error, undecodable image, malformed hex) is
//! reported through [`Theme::error`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use color_source::{
    AverageAlgorithm, AverageOptions, ColorInput, ColorResolver, FetchConfig, ResolveError,
    ResolverConfig,
};
pub use theme_core::{
    derive, Hsl, InvalidRadius, Radius, Rgb, Slot, Theme, ThemeMode, ThemeObject, ThemePair,
};

/// Derive a theme using the default resolver configuration
pub async fn mdctotheme(
    input: impl Into<ColorInput>,
    radius: f64,
) -> Result<Theme, InvalidRadius> {
    mdctotheme_with(input, radius, ResolverConfig::default()).await
}

/// Derive a theme with an explicit resolver configuration
pub async fn mdctotheme_with(
    input: impl Into<ColorInput>,
    radius: f64,
    config: ResolverConfig,
) -> Result<Theme, InvalidRadius> {
    let radius = Radius::new(radius)?;
    let input = input.into();

    match resolve(&input, config).await {
        Ok(base) => Ok(Theme::derived(derive(base, radius))),
        Err(err) => {
            tracing::warn!("Theme derivation from {} input failed: {}", input.kind(), err);
            Ok(Theme::failed(err.to_string()))
        }
    }
}

async fn resolve(input: &ColorInput, config: ResolverConfig) -> color_source::Result<Rgb> {
    // Only remote inputs need an HTTP client
    match input {
        ColorInput::Url(_) => ColorResolver::new(config)?.resolve(input).await,
        _ => ColorResolver::offline(config.average).resolve(input).await,
    }
}
