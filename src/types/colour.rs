//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SandbrushError};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a colour from wide integer channels.
    ///
    /// Fails with a range error if any channel is outside `[0, 255]`.
    pub fn checked(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self::rgb(
            checked_channel("red", r)?,
            checked_channel("green", g)?,
            checked_channel("blue", b)?,
        ))
    }

    /// Parse a hex colour string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the leading `#`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        match hex.len() {
            3 => {
                let mut digits = [0u8; 3];
                for (slot, c) in digits.iter_mut().zip(hex.chars()) {
                    let d = parse_hex_digit(c)?;
                    *slot = d << 4 | d;
                }
                Ok(Self::rgb(digits[0], digits[1], digits[2]))
            }
            6 if hex.is_ascii() => Ok(Self::rgb(
                parse_hex_byte(&hex[0..2])?,
                parse_hex_byte(&hex[2..4])?,
                parse_hex_byte(&hex[4..6])?,
            )),
            _ => Err(SandbrushError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB or #RRGGBB format".to_string()),
            }),
        }
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to an opaque RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Move every channel toward `target` by `factor` of the remaining distance.
    ///
    /// `factor` is clamped to `[0, 1]`, so the result never overshoots either end.
    pub fn mix(self, target: Colour, factor: f64) -> Colour {
        let factor = factor.clamp(0.0, 1.0);
        let lerp = |from: u8, to: u8| -> u8 {
            let from = from as f64;
            (from + factor * (to as f64 - from)).round().clamp(0.0, 255.0) as u8
        };

        Colour::rgb(
            lerp(self.r, target.r),
            lerp(self.g, target.g),
            lerp(self.b, target.b),
        )
    }

    /// Lighten by a percentage of the remaining HSL lightness.
    pub fn lighten(self, percent: f32) -> Colour {
        adjust_lightness(self, percent.abs())
    }

    /// Darken by a percentage of the current HSL lightness.
    pub fn darken(self, percent: f32) -> Colour {
        adjust_lightness(self, -percent.abs())
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Colour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl FromStr for Colour {
    type Err = SandbrushError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn checked_channel(name: &str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| SandbrushError::Range {
        message: format!("{} channel {} is outside 0..=255", name, value),
        help: Some("Colour channels are 8-bit integers".to_string()),
    })
}

/// Adjust lightness in HSL space.
fn adjust_lightness(colour: Colour, percent: f32) -> Colour {
    use palette::{Hsl, IntoColor, Srgb};

    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );

    let mut hsl: Hsl = rgb.into_color();

    let delta = percent / 100.0;
    if delta > 0.0 {
        hsl.lightness += (1.0 - hsl.lightness) * delta;
    } else {
        hsl.lightness += hsl.lightness * delta;
    }
    hsl.lightness = hsl.lightness.clamp(0.0, 1.0);

    let rgb_out: Srgb<f32> = hsl.into_color();
    Colour::rgb(
        (rgb_out.red * 255.0).round().clamp(0.0, 255.0) as u8,
        (rgb_out.green * 255.0).round().clamp(0.0, 255.0) as u8,
        (rgb_out.blue * 255.0).round().clamp(0.0, 255.0) as u8,
    )
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| SandbrushError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| SandbrushError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Colour::from_hex("#4F453F").unwrap(), Colour::rgb(79, 69, 63));
        assert_eq!(Colour::from_hex("2d2d2d").unwrap(), Colour::rgb(45, 45, 45));
        assert_eq!(Colour::from_hex("#ABC").unwrap(), Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#FF000080").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_checked_range() {
        assert_eq!(Colour::checked(0, 128, 255).unwrap(), Colour::rgb(0, 128, 255));
        assert!(Colour::checked(256, 0, 0).unwrap_err().is_range());
        assert!(Colour::checked(0, -1, 0).unwrap_err().is_range());
    }

    #[test]
    fn test_display() {
        insta::assert_snapshot!(Colour::rgb(79, 69, 63).to_string(), @"#4F453F");
    }

    #[test]
    fn test_mix_bounds() {
        let base = Colour::rgb(100, 50, 200);
        assert_eq!(base.mix(Colour::BLACK, 0.0), base);
        assert_eq!(base.mix(Colour::BLACK, 1.0), Colour::BLACK);
        assert_eq!(base.mix(Colour::BLACK, 0.5), Colour::rgb(50, 25, 100));
        // Out-of-range factors clamp instead of overshooting
        assert_eq!(base.mix(Colour::WHITE, 3.0), Colour::WHITE);
    }

    #[test]
    fn test_lighten_darken() {
        let grey = Colour::rgb(128, 128, 128);
        assert!(grey.lighten(50.0).r > grey.r);
        assert!(grey.darken(50.0).r < grey.r);
        assert_eq!(Colour::WHITE.lighten(20.0), Colour::WHITE);
        assert_eq!(Colour::BLACK.darken(20.0), Colour::BLACK);
    }
}
