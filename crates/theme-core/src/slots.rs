//! Semantic color slots and the per-mode derivation tables
//!
//! Every slot is described by a [`SlotRule`]: what happens to the hue and
//! which saturation/lightness targets replace the base color's own. The
//! light and dark tables share one evaluator, [`SlotRule::apply`].

use crate::color::Hsl;
use serde::{Deserialize, Serialize};

/// Degrees subtracted from the base hue for the muted and accent families
pub const HUE_SHIFT: f64 = 38.0;

// =============================================================================
// Slots
// =============================================================================

/// A named color role in a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Page background
    Background,
    /// Default text
    Foreground,
    /// Card surface
    Card,
    /// Text on cards
    CardForeground,
    /// Popover surface
    Popover,
    /// Text on popovers
    PopoverForeground,
    /// Primary brand color
    Primary,
    /// Text on primary
    PrimaryForeground,
    /// Secondary surface
    Secondary,
    /// Text on secondary
    SecondaryForeground,
    /// Muted surface
    Muted,
    /// Muted text
    MutedForeground,
    /// Accent surface
    Accent,
    /// Text on accent
    AccentForeground,
    /// Destructive action color
    Destructive,
    /// Text on destructive
    DestructiveForeground,
    /// Borders
    Border,
    /// Form input borders
    Input,
    /// Focus ring
    Ring,
}

impl Slot {
    /// All slots in canonical order
    pub const ALL: [Slot; 19] = [
        Slot::Background,
        Slot::Foreground,
        Slot::Card,
        Slot::CardForeground,
        Slot::Popover,
        Slot::PopoverForeground,
        Slot::Primary,
        Slot::PrimaryForeground,
        Slot::Secondary,
        Slot::SecondaryForeground,
        Slot::Muted,
        Slot::MutedForeground,
        Slot::Accent,
        Slot::AccentForeground,
        Slot::Destructive,
        Slot::DestructiveForeground,
        Slot::Border,
        Slot::Input,
        Slot::Ring,
    ];

    /// Field name of the slot in a serialized theme
    pub fn name(self) -> &'static str {
        match self {
            Slot::Background => "background",
            Slot::Foreground => "foreground",
            Slot::Card => "card",
            Slot::CardForeground => "card_foreground",
            Slot::Popover => "popover",
            Slot::PopoverForeground => "popover_foreground",
            Slot::Primary => "primary",
            Slot::PrimaryForeground => "primary_foreground",
            Slot::Secondary => "secondary",
            Slot::SecondaryForeground => "secondary_foreground",
            Slot::Muted => "muted",
            Slot::MutedForeground => "muted_foreground",
            Slot::Accent => "accent",
            Slot::AccentForeground => "accent_foreground",
            Slot::Destructive => "destructive",
            Slot::DestructiveForeground => "destructive_foreground",
            Slot::Border => "border",
            Slot::Input => "input",
            Slot::Ring => "ring",
        }
    }

    /// Position of the slot in [`Slot::ALL`] and in the mode tables
    pub fn index(self) -> usize {
        self as usize
    }
}

// =============================================================================
// Rules
// =============================================================================

/// How a slot treats the base hue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HueRule {
    /// Keep the base hue
    Base,
    /// Force an absolute hue
    Fixed(f64),
    /// Subtract a number of degrees from the base hue
    Shift(f64),
}

/// Transformation applied to the base color to produce one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotRule {
    /// Hue handling
    pub hue: HueRule,
    /// Target saturation, or `None` to keep the base saturation
    pub saturation: Option<f64>,
    /// Target lightness, or `None` to keep the base lightness
    pub lightness: Option<f64>,
}

impl SlotRule {
    /// The base color, unchanged
    pub const fn identity() -> Self {
        Self {
            hue: HueRule::Base,
            saturation: None,
            lightness: None,
        }
    }

    /// Base hue with fixed saturation and lightness
    pub const fn tone(saturation: f64, lightness: f64) -> Self {
        Self {
            hue: HueRule::Base,
            saturation: Some(saturation),
            lightness: Some(lightness),
        }
    }

    /// Absolute hue with fixed saturation and lightness
    pub const fn fixed(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: HueRule::Fixed(hue),
            saturation: Some(saturation),
            lightness: Some(lightness),
        }
    }

    /// Base hue shifted by [`HUE_SHIFT`] with fixed saturation and lightness
    pub const fn shifted(saturation: f64, lightness: f64) -> Self {
        Self {
            hue: HueRule::Shift(HUE_SHIFT),
            saturation: Some(saturation),
            lightness: Some(lightness),
        }
    }

    /// Apply the rule to a base color
    ///
    /// Hue is resolved first, then saturation, then lightness.
    pub fn apply(&self, base: Hsl) -> Hsl {
        let mut color = match self.hue {
            HueRule::Base => base,
            HueRule::Fixed(h) => base.with_hue(h),
            HueRule::Shift(delta) => base.shift_hue(delta),
        };
        if let Some(s) = self.saturation {
            color = color.with_saturation(s);
        }
        if let Some(l) = self.lightness {
            color = color.with_lightness(l);
        }
        color
    }
}

/// Light mode rules, indexed by [`Slot::index`]
pub const LIGHT_RULES: [SlotRule; 19] = [
    SlotRule::tone(100.0, 95.0),       // background
    SlotRule::tone(5.0, 10.0),         // foreground
    SlotRule::tone(50.0, 90.0),        // card
    SlotRule::tone(5.0, 15.0),         // card_foreground
    SlotRule::tone(100.0, 95.0),       // popover
    SlotRule::tone(100.0, 10.0),       // popover_foreground
    SlotRule::identity(),              // primary
    SlotRule::fixed(0.0, 0.0, 100.0),  // primary_foreground
    SlotRule::tone(30.0, 70.0),        // secondary
    SlotRule::fixed(0.0, 0.0, 0.0),    // secondary_foreground
    SlotRule::shifted(30.0, 85.0),     // muted
    SlotRule::tone(5.0, 35.0),         // muted_foreground
    SlotRule::shifted(30.0, 80.0),     // accent
    SlotRule::tone(5.0, 15.0),         // accent_foreground
    SlotRule::fixed(0.0, 100.0, 30.0), // destructive
    SlotRule::tone(5.0, 90.0),         // destructive_foreground
    SlotRule::tone(30.0, 50.0),        // border
    SlotRule::tone(30.0, 26.0),        // input
    SlotRule::tone(36.0, 54.0),        // ring
];

/// Dark mode rules, indexed by [`Slot::index`]
pub const DARK_RULES: [SlotRule; 19] = [
    SlotRule::tone(50.0, 10.0),        // background
    SlotRule::tone(5.0, 90.0),         // foreground
    SlotRule::tone(50.0, 10.0),        // card
    SlotRule::tone(5.0, 90.0),         // card_foreground
    SlotRule::tone(50.0, 5.0),         // popover
    SlotRule::tone(5.0, 90.0),         // popover_foreground
    SlotRule::identity(),              // primary
    SlotRule::fixed(0.0, 0.0, 100.0),  // primary_foreground
    SlotRule::tone(30.0, 20.0),        // secondary
    SlotRule::fixed(0.0, 0.0, 100.0),  // secondary_foreground
    SlotRule::shifted(30.0, 25.0),     // muted
    SlotRule::tone(5.0, 60.0),         // muted_foreground
    SlotRule::shifted(30.0, 25.0),     // accent
    SlotRule::tone(5.0, 90.0),         // accent_foreground
    SlotRule::fixed(0.0, 100.0, 30.0), // destructive
    SlotRule::tone(5.0, 90.0),         // destructive_foreground
    SlotRule::tone(30.0, 26.0),        // border
    SlotRule::tone(30.0, 26.0),        // input
    SlotRule::tone(36.0, 54.0),        // ring
];

/// Theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

impl ThemeMode {
    /// Both modes, light first
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// The full rule table for this mode
    pub fn rules(self) -> &'static [SlotRule; 19] {
        match self {
            ThemeMode::Light => &LIGHT_RULES,
            ThemeMode::Dark => &DARK_RULES,
        }
    }

    /// The rule for one slot in this mode
    pub fn rule(self, slot: Slot) -> &'static SlotRule {
        &self.rules()[slot.index()]
    }
}
