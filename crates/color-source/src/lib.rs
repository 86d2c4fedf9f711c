//! Base color resolution for shadcn-mdc
//!
//! This crate turns a user-supplied input (hex literal, image URL, local
//! image path or raw image bytes) into the single color a theme is derived
//! from.
//!
//! # Modules
//!
//! - [`input`] - Classification of inputs into [`ColorInput`]
//! - [`fetch`] - The [`ImageSource`](fetch::ImageSource) seam and its HTTP implementation
//! - [`average`] - Image decoding and average color extraction
//! - [`resolver`] - [`ColorResolver`], tying the above together

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod average;
pub mod fetch;
pub mod input;
pub mod resolver;

pub use average::{AverageAlgorithm, AverageOptions};
pub use fetch::{FetchConfig, FetchError, HttpImageSource, ImageSource, OfflineSource};
pub use input::ColorInput;
pub use resolver::{read_bytes, ColorResolver, ResolverConfig};

use std::path::PathBuf;
use theme_core::ColorError;

/// Result type for resolution operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// Errors that can occur while resolving a base color
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Local file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Remote image could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Bytes are not a decodable image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Hex literal could not be parsed
    #[error(transparent)]
    Color(#[from] ColorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = ResolveError::Decode("bad header".to_string());
        assert!(err.to_string().contains("Failed to decode image"));

        let err = ResolveError::from(ColorError::InvalidLength { len: 5 });
        assert!(err.to_string().contains("Unable to parse color"));

        let err = ResolveError::Read {
            path: PathBuf::from("/tmp/x.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/x.png"));
    }
}
