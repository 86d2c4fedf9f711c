//! CSS variable export in the shadcn `globals.css` layout

use crate::slots::ThemeMode;
use crate::theme::{ThemeObject, ThemePair};
use std::fmt::Write;

impl ThemeMode {
    /// CSS selector the mode's variables are declared under
    pub fn css_selector(self) -> &'static str {
        match self {
            ThemeMode::Light => ":root",
            ThemeMode::Dark => ".dark",
        }
    }
}

impl ThemeObject {
    /// Render one mode as a CSS rule block
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} {{", selector);
        for (slot, value) in self.slots() {
            let _ = writeln!(out, "  --{}: {};", slot.name().replace('_', "-"), value);
        }
        let _ = writeln!(out, "  --radius: {}rem;", self.radius);
        out.push_str("}\n");
        out
    }
}

impl ThemePair {
    /// Render both modes as a `globals.css` fragment
    ///
    /// # Examples
    /// ```
    /// use theme_core::{derive, Radius, Rgb};
    ///
    /// let css = derive(Rgb::new(255, 0, 0), Radius::new(0.5).unwrap()).to_css();
    /// assert!(css.starts_with(":root {"));
    /// assert!(css.contains("--primary: 0 100% 50%;"));
    /// assert!(css.contains(".dark {"));
    /// ```
    pub fn to_css(&self) -> String {
        ThemeMode::ALL
            .iter()
            .map(|mode| self.mode(*mode).to_css(mode.css_selector()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
