//! SolidColor: the color type used by slider styling.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Parses and formats hex, and
//! round-trips through serde as a hex string so configs stay readable.

use floem::peniko::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl SolidColor {
    pub const CLEAR: Self = Self::from_rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::from_rgba(0.0, 0.0, 0.0, 1.0);
    /// 1/3 white, the default filled-side track color.
    pub const DARK_GRAY: Self = Self::from_rgba(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0);
    /// 2/3 white, the default remaining-side track color.
    pub const LIGHT_GRAY: Self = Self::from_rgba(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0);
    pub const RED: Self = Self::from_rgba(1.0, 0.0, 0.0, 1.0);

    /// Create from f64 RGBA (all 0.0–1.0).
    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from a gray level and alpha (both 0.0–1.0).
    pub const fn from_white(white: f64, a: f64) -> Self {
        Self::from_rgba(white, white, white, a)
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create from 0–255 RGBA values.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Convert to 0–255 RGBA, clamping out-of-range components.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Same color with alpha multiplied by `factor`.
    pub fn with_opacity(&self, factor: f64) -> Self {
        Self {
            a: self.a * factor.clamp(0.0, 1.0),
            ..*self
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.to_rgba8()[3] == 0
    }

    /// Convert for handing to the renderer.
    pub fn to_peniko(&self) -> Color {
        let [r, g, b, a] = self.to_rgba8();
        Color::rgba8(r, g, b, a)
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim().trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&stripped[i..i + 2], 16).ok();
        match stripped.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&stripped[i..i + 1], 16).ok();
                Some(Self::from_rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17))
            }
            6 => Some(Self::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when fully opaque, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

impl TryFrom<String> for SolidColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or(ConfigError::InvalidColor(value))
    }
}

impl From<SolidColor> for String {
    fn from(color: SolidColor) -> Self {
        color.to_hex()
    }
}
