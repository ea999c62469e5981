use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CoreError, Result};

/// A 24-bit RGB color.
///
/// Stored as `0xRRGGBB`. Serializes as a `#rrggbb` string so scene and
/// configuration files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Self = Self(0x00ff_ffff);
    pub const BLACK: Self = Self(0x0000_0000);

    /// Creates a color from a `0xRRGGBB` value. Bits above 24 are dropped.
    #[inline]
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self(hex & 0x00ff_ffff)
    }

    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    #[must_use]
    pub const fn hex(self) -> u32 {
        self.0
    }

    /// Six lowercase hex digits without prefix, e.g. `"ff0000"`.
    #[must_use]
    pub fn hex_string(self) -> String {
        format!("{:06x}", self.0)
    }

    /// Source literal form, e.g. `"0xff0000"`.
    #[must_use]
    pub fn hex_literal(self) -> String {
        format!("0x{:06x}", self.0)
    }

    /// Parses `#rrggbb`, `rrggbb` or `0xrrggbb` (case-insensitive).
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidColor(text.to_string()));
        }

        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| CoreError::InvalidColor(text.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
