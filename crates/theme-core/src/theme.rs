//! Theme objects and the light/dark derivation
//!
//! # Usage
//!
//! ```rust
//! use theme_core::{derive, Radius, Rgb, Slot};
//!
//! let base = Rgb::from_hex("#ff0000").unwrap();
//! let pair = derive(base, Radius::new(0.5).unwrap());
//! assert_eq!(pair.light.get(Slot::Primary), "0 100% 50%");
//! assert_eq!(pair.dark.radius, 0.5);
//! ```

use crate::color::Hsl;
use crate::slots::{Slot, ThemeMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Radius
// =============================================================================

/// Radius outside the open interval `(0, 1)`
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("radius must be between 0 and 1 (got {0})")]
pub struct InvalidRadius(pub f64);

/// Corner radius, validated to lie strictly between 0 and 1
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Radius(f64);

impl Radius {
    /// Validate a radius; NaN and both interval endpoints are rejected
    pub fn new(value: f64) -> Result<Self, InvalidRadius> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(InvalidRadius(value))
        }
    }

    /// The radius value
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Radius {
    type Error = InvalidRadius;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// =============================================================================
// Theme Object
// =============================================================================

/// One complete theme mode: 19 `H S% L%` color slots plus the radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeObject {
    /// Page background
    pub background: String,
    /// Default text
    pub foreground: String,
    /// Card surface
    pub card: String,
    /// Text on cards
    pub card_foreground: String,
    /// Popover surface
    pub popover: String,
    /// Text on popovers
    pub popover_foreground: String,
    /// Primary brand color
    pub primary: String,
    /// Text on primary
    pub primary_foreground: String,
    /// Secondary surface
    pub secondary: String,
    /// Text on secondary
    pub secondary_foreground: String,
    /// Muted surface
    pub muted: String,
    /// Muted text
    pub muted_foreground: String,
    /// Accent surface
    pub accent: String,
    /// Text on accent
    pub accent_foreground: String,
    /// Destructive action color
    pub destructive: String,
    /// Text on destructive
    pub destructive_foreground: String,
    /// Borders
    pub border: String,
    /// Form input borders
    pub input: String,
    /// Focus ring
    pub ring: String,
    /// Corner radius, copied from the input
    pub radius: f64,
}

impl ThemeObject {
    /// Derive every slot of one mode from a base color
    pub fn derive(base: Hsl, mode: ThemeMode, radius: Radius) -> Self {
        let slot = |s: Slot| mode.rule(s).apply(base).to_string();

        Self {
            background: slot(Slot::Background),
            foreground: slot(Slot::Foreground),
            card: slot(Slot::Card),
            card_foreground: slot(Slot::CardForeground),
            popover: slot(Slot::Popover),
            popover_foreground: slot(Slot::PopoverForeground),
            primary: slot(Slot::Primary),
            primary_foreground: slot(Slot::PrimaryForeground),
            secondary: slot(Slot::Secondary),
            secondary_foreground: slot(Slot::SecondaryForeground),
            muted: slot(Slot::Muted),
            muted_foreground: slot(Slot::MutedForeground),
            accent: slot(Slot::Accent),
            accent_foreground: slot(Slot::AccentForeground),
            destructive: slot(Slot::Destructive),
            destructive_foreground: slot(Slot::DestructiveForeground),
            border: slot(Slot::Border),
            input: slot(Slot::Input),
            ring: slot(Slot::Ring),
            radius: radius.get(),
        }
    }

    /// Get a slot value by name
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Background => &self.background,
            Slot::Foreground => &self.foreground,
            Slot::Card => &self.card,
            Slot::CardForeground => &self.card_foreground,
            Slot::Popover => &self.popover,
            Slot::PopoverForeground => &self.popover_foreground,
            Slot::Primary => &self.primary,
            Slot::PrimaryForeground => &self.primary_foreground,
            Slot::Secondary => &self.secondary,
            Slot::SecondaryForeground => &self.secondary_foreground,
            Slot::Muted => &self.muted,
            Slot::MutedForeground => &self.muted_foreground,
            Slot::Accent => &self.accent,
            Slot::AccentForeground => &self.accent_foreground,
            Slot::Destructive => &self.destructive,
            Slot::DestructiveForeground => &self.destructive_foreground,
            Slot::Border => &self.border,
            Slot::Input => &self.input,
            Slot::Ring => &self.ring,
        }
    }

    /// Iterate over `(slot, value)` in canonical order
    pub fn slots(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Light and dark variants derived from the same base color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePair {
    /// Light mode
    pub light: ThemeObject,
    /// Dark mode
    pub dark: ThemeObject,
}

impl ThemePair {
    /// Get a mode by name
    pub fn mode(&self, mode: ThemeMode) -> &ThemeObject {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Derive the light/dark pair for a base color
pub fn derive(base: impl Into<Hsl>, radius: Radius) -> ThemePair {
    let base = base.into();
    ThemePair {
        light: ThemeObject::derive(base, ThemeMode::Light, radius),
        dark: ThemeObject::derive(base, ThemeMode::Dark, radius),
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Outcome of a theme derivation
///
/// Either both modes are present and `error` is absent, or both modes are
/// absent and `error` describes the failure. Serializes as
/// `{"light": ..., "dark": ...}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    #[serde(skip_serializing_if = "Option::is_none")]
    light: Option<ThemeObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dark: Option<ThemeObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Theme {
    /// A successful theme
    pub fn derived(pair: ThemePair) -> Self {
        Self {
            light: Some(pair.light),
            dark: Some(pair.dark),
            error: None,
        }
    }

    /// A failed derivation carrying a human-readable message
    pub fn failed(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = "unknown error".to_string();
        }
        Self {
            light: None,
            dark: None,
            error: Some(message),
        }
    }

    /// Check if derivation succeeded
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Light mode, if derivation succeeded
    pub fn light(&self) -> Option<&ThemeObject> {
        self.light.as_ref()
    }

    /// Dark mode, if derivation succeeded
    pub fn dark(&self) -> Option<&ThemeObject> {
        self.dark.as_ref()
    }

    /// Failure message, if derivation failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Convert into the pair or the failure message
    pub fn into_result(self) -> Result<ThemePair, String> {
        match (self.light, self.dark, self.error) {
            (Some(light), Some(dark), None) => Ok(ThemePair { light, dark }),
            (_, _, Some(error)) => Err(error),
            _ => Err("unknown error".to_string()),
        }
    }
}

impl From<ThemePair> for Theme {
    fn from(pair: ThemePair) -> Self {
        Self::derived(pair)
    }
}
