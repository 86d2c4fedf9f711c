//! Classification of color inputs
//!
//! A textual input is a hex literal, an HTTP(S) image URL, or a local file
//! path, checked in that order. Raw bytes bypass classification.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// A source the base color can be resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// A `#`-prefixed hex color literal
    Hex(String),
    /// An HTTP or HTTPS URL pointing at an image
    Url(String),
    /// A local image file
    Path(PathBuf),
    /// Encoded image bytes supplied by the caller
    Bytes(Vec<u8>),
}

impl ColorInput {
    /// Classify a textual input
    ///
    /// # Examples
    /// ```
    /// use color_source::ColorInput;
    ///
    /// assert!(matches!(ColorInput::classify("#3b82f6"), ColorInput::Hex(_)));
    /// assert!(matches!(ColorInput::classify("https://example.com/a.png"), ColorInput::Url(_)));
    /// assert!(matches!(ColorInput::classify("./logo.png"), ColorInput::Path(_)));
    /// ```
    pub fn classify(input: &str) -> Self {
        if is_hex_literal(input) {
            Self::Hex(input.to_string())
        } else if is_image_url(input) {
            Self::Url(input.to_string())
        } else {
            Self::Path(PathBuf::from(input))
        }
    }

    /// Short name of the variant, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hex(_) => "hex",
            Self::Url(_) => "url",
            Self::Path(_) => "path",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl From<&str> for ColorInput {
    fn from(input: &str) -> Self {
        Self::classify(input)
    }
}

impl From<String> for ColorInput {
    fn from(input: String) -> Self {
        Self::classify(&input)
    }
}

impl From<&Path> for ColorInput {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ColorInput {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<u8>> for ColorInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for ColorInput {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

/// `#` followed by one or more hex digits, any case
fn is_hex_literal(input: &str) -> bool {
    static HEX_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = HEX_REGEX.get_or_init(|| Regex::new(r"(?i)^#[0-9a-f]+$").unwrap());
    re.is_match(input)
}

/// `http` or `https` scheme followed by non-space, non-quote characters
fn is_image_url(input: &str) -> bool {
    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = URL_REGEX.get_or_init(|| Regex::new(r#"^(http|https)://[^ "]+$"#).unwrap());
    re.is_match(input)
}
