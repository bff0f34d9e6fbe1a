//! Particle colors and terminal themes.

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// An RGB color with a floating point alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A neutral grey of the given channel value.
    pub const fn grey(value: u8, a: f32) -> Self {
        Self::new(value, value, value, a)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Color with every channel mirrored around the midpoint.
    pub fn inverted(self) -> Self {
        Self::new(255 - self.r, 255 - self.g, 255 - self.b, self.a)
    }

    /// Composite over an opaque background and return the opaque result.
    pub fn over(self, background: (u8, u8, u8)) -> (u8, u8, u8) {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        (
            mix(self.r, background.0),
            mix(self.g, background.1),
            mix(self.b, background.2),
        )
    }

    /// Format as a CSS `rgba()` string.
    pub fn to_css_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Terminal color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Toggle between dark and light.
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Background color as RGB.
    pub fn background(self) -> (u8, u8, u8) {
        match self {
            Theme::Dark => (12, 12, 16),
            Theme::Light => (245, 245, 245),
        }
    }

    /// Resolve a particle color to an opaque terminal color.
    ///
    /// Particle greys are dark ink meant for a light page, so the dark
    /// theme mirrors them to light ink first.
    pub fn ink(self, color: Rgba) -> Color {
        let color = match self {
            Theme::Dark => color.inverted(),
            Theme::Light => color,
        };
        let (r, g, b) = color.over(self.background());
        Color::Rgb(r, g, b)
    }

    /// Background as a ratatui color.
    pub fn background_color(self) -> Color {
        let (r, g, b) = self.background();
        Color::Rgb(r, g, b)
    }

    /// Color used for the status line text.
    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Gray,
            Theme::Light => Color::DarkGray,
        }
    }
}
