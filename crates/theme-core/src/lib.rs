//! Theme derivation for shadcn-mdc
//!
//! This crate turns a single base color into a light/dark pair of shadcn
//! style themes. It is pure: no I/O, no async, no failure path beyond
//! parsing a hex literal or validating the radius.
//!
//! # Modules
//!
//! - [`color`] - RGB/HSL types, hex parsing and `H S% L%` formatting
//! - [`slots`] - The 19 semantic slots and the per-mode rule tables
//! - [`theme`] - Theme objects, the [`Theme`] result type and [`derive`]
//! - [`css`] - `globals.css` variable export
//!
//! # Example
//!
//! ```rust
//! use theme_core::{derive, Radius, Rgb};
//!
//! let base = Rgb::from_hex("#3b82f6").unwrap();
//! let pair = derive(base, Radius::new(0.5).unwrap());
//!
//! assert_eq!(pair.light.primary, "217.2 91.2% 59.8%");
//! assert_eq!(pair.dark.background, "217.2 50% 10%");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod css;
pub mod slots;
pub mod theme;

pub use color::{ColorError, Hsl, Rgb};
pub use slots::{HueRule, Slot, SlotRule, ThemeMode, HUE_SHIFT};
pub use theme::{derive, InvalidRadius, Radius, Theme, ThemeObject, ThemePair};
