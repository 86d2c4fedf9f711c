//! Color math for theme derivation
//!
//! Colors enter the system as 8-bit sRGB (parsed from a hex literal or
//! averaged from an image) and are converted once to HSL, which is the
//! form every slot transformation works on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while parsing a color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not a `#`-prefixed run of hex digits
    #[error("Unable to parse color from string: {0}")]
    InvalidHex(String),

    /// Hex digits were valid but the length is not a CSS color length
    #[error("Unable to parse color from string: expected 3, 4, 6 or 8 hex digits, got {len}")]
    InvalidLength {
        /// Number of hex digits after the `#`
        len: usize,
    },
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;

// =============================================================================
// RGB
// =============================================================================

/// An opaque 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color literal (`#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`)
    ///
    /// The alpha channel, when present, is validated and then dropped.
    ///
    /// # Examples
    /// ```
    /// use theme_core::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#3b82f6").unwrap(), Rgb::new(0x3b, 0x82, 0xf6));
    /// assert_eq!(Rgb::from_hex("#F00").unwrap(), Rgb::new(255, 0, 0));
    /// assert!(Rgb::from_hex("#12345").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::InvalidHex(hex.to_string()))?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };
        // Short form: each digit is doubled (#f80 == #ff8800)
        let short = |idx: usize| channel(idx..idx + 1).map(|v| v * 17);

        match digits.len() {
            3 | 4 => Ok(Self::new(short(0)?, short(1)?, short(2)?)),
            6 | 8 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            len => Err(ColorError::InvalidLength { len }),
        }
    }

    /// Format as an uppercase `#RRGGBB` string
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// =============================================================================
// HSL
// =============================================================================

/// A color in hue/saturation/lightness space
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are percentages `[0, 100]`.
/// Values are kept unrounded; rounding only happens when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation in percent
    pub s: f64,
    /// Lightness in percent
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color, normalizing the hue and clamping the percentages
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Replace the hue; any real value is wrapped into `[0, 360)`
    pub fn with_hue(self, h: f64) -> Self {
        Self { h: wrap_hue(h), ..self }
    }

    /// Subtract `delta` degrees from the hue, wrapping around the color wheel
    ///
    /// # Examples
    /// ```
    /// use theme_core::Hsl;
    ///
    /// assert_eq!(Hsl::new(10.0, 50.0, 50.0).shift_hue(38.0).h, 332.0);
    /// ```
    pub fn shift_hue(self, delta: f64) -> Self {
        self.with_hue(self.h - delta)
    }

    /// Replace the saturation
    pub fn with_saturation(self, s: f64) -> Self {
        Self {
            s: s.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Replace the lightness
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let mut h = if delta == 0.0 {
            0.0
        } else if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        h = (h * 60.0).min(360.0);
        if h < 0.0 {
            h += 360.0;
        }

        let l = (min + max) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else if l <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        Self::new(h, s * 100.0, l * 100.0)
    }
}

/// Formats as the bare `H S% L%` triple used by shadcn CSS variables
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut h = round1(self.h);
        if h >= 360.0 {
            h = 0.0;
        }
        write!(f, "{} {}% {}%", h, round1(self.s), round1(self.l))
    }
}

/// Wrap a hue in degrees into `[0, 360)`
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Round to one decimal place, folding negative zero
fn round1(v: f64) -> f64 {
    let r = (v * 10.0).round() / 10.0;
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(Rgb::from_hex("#3b82f6").unwrap(), Rgb::new(59, 130, 246));
        assert_eq!(Rgb::from_hex("#3B82F6").unwrap(), Rgb::new(59, 130, 246));
        assert_eq!(Rgb::from_hex("#3b82f680").unwrap(), Rgb::new(59, 130, 246));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(Rgb::from_hex("#f80").unwrap(), Rgb::new(255, 136, 0));
        assert_eq!(Rgb::from_hex("#f80c").unwrap(), Rgb::new(255, 136, 0));
    }

    #[test]
    fn test_parse_rejects_bad_lengths() {
        assert_eq!(
            Rgb::from_hex("#12345"),
            Err(ColorError::InvalidLength { len: 5 })
        );
        assert_eq!(Rgb::from_hex("#1"), Err(ColorError::InvalidLength { len: 1 }));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(matches!(Rgb::from_hex("3b82f6"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Rgb::from_hex("#"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Rgb::from_hex("#zzzzzz"), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_error_message_is_readable() {
        let err = Rgb::from_hex("#12345").unwrap_err();
        assert!(err.to_string().contains("Unable to parse color"));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(30, 58, 95).to_hex(), "#1E3A5F");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_rgb_to_hsl_primaries() {
        let red = Hsl::from(Rgb::new(255, 0, 0));
        assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));

        let green = Hsl::from(Rgb::new(0, 255, 0));
        assert_eq!((green.h, green.s, green.l), (120.0, 100.0, 50.0));

        let blue = Hsl::from(Rgb::new(0, 0, 255));
        assert_eq!((blue.h, blue.s, blue.l), (240.0, 100.0, 50.0));
    }

    #[test]
    fn test_rgb_to_hsl_gray_has_zero_hue() {
        let gray = Hsl::from(Rgb::new(128, 128, 128));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 50.196).abs() < 0.001);
    }

    #[test]
    fn test_rgb_to_hsl_magenta_side_hue() {
        // max == r with b > g yields a negative raw hue that must wrap
        let hsl = Hsl::from(Rgb::new(255, 0, 128));
        assert!(hsl.h > 329.0 && hsl.h < 331.0);
    }

    #[test]
    fn test_display_format() {
        let hsl = Hsl::from(Rgb::from_hex("#3b82f6").unwrap());
        assert_eq!(hsl.to_string(), "217.2 91.2% 59.8%");

        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_string(), "0 100% 50%");
        assert_eq!(Hsl::from(Rgb::new(128, 128, 128)).to_string(), "0 0% 50.2%");
    }

    #[test]
    fn test_display_rounds_hue_up_to_zero() {
        let hsl = Hsl::new(359.97, 10.0, 10.0);
        assert_eq!(hsl.to_string(), "0 10% 10%");
    }

    #[test]
    fn test_wrap_hue() {
        assert_eq!(wrap_hue(-18.0), 342.0);
        assert_eq!(wrap_hue(-28.0), 332.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(725.0), 5.0);
        assert_eq!(wrap_hue(-1e-20), 0.0);
    }

    #[test]
    fn test_shift_hue_wraps_negative() {
        let base = Hsl::new(20.0, 40.0, 40.0);
        let shifted = base.shift_hue(38.0);
        assert_eq!(shifted.h, 342.0);
        assert_eq!(shifted.s, 40.0);
        assert_eq!(shifted.l, 40.0);
    }

    #[test]
    fn test_setters_keep_other_components() {
        let base = Hsl::new(200.0, 40.0, 60.0);
        let s = base.with_saturation(5.0);
        assert_eq!((s.h, s.s, s.l), (200.0, 5.0, 60.0));
        let l = base.with_lightness(95.0);
        assert_eq!((l.h, l.s, l.l), (200.0, 40.0, 95.0));
        let h = base.with_hue(0.0);
        assert_eq!((h.h, h.s, h.l), (0.0, 40.0, 60.0));
    }
}
