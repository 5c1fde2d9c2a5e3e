use palette::{IntoColor, LinSrgba, Mix, Oklch, Srgb, Srgba};

use crate::error::ConfigError;

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into `0xAARRGGBB`.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        let oklch = Oklch::new(l, c, h);
        let srgb: Srgb = oklch.into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();

        Self::rgb(r, g, b)
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(value.to_string());
        let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        let packed = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

        match hex.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | packed)),
            8 => Ok(Self::from_argb(packed)),
            _ => Err(invalid()),
        }
    }

    /// Blend toward `other` by `fraction` (0.0 keeps `self`, 1.0 yields `other`).
    ///
    /// Channels are mixed in linear light, alpha linearly.
    pub fn blend(self, other: Color, fraction: f32) -> Color {
        if !fraction.is_finite() || fraction <= 0.0 {
            return self;
        }
        if fraction >= 1.0 {
            return other;
        }

        let from: LinSrgba = self.to_srgba().into_linear();
        let to: LinSrgba = other.to_srgba().into_linear();
        let mixed = from.mix(to, fraction);

        let (r, g, b, a) = Srgba::<f32>::from_linear(mixed)
            .into_format::<u8, u8>()
            .into_components();
        Color::rgba(r, g, b, a)
    }

    fn to_srgba(self) -> Srgba<f32> {
        Srgba::new(self.r, self.g, self.b, self.a).into_format::<f32, f32>()
    }
}

/// Color of a dot at `distance` from the current absolute position.
///
/// Within one page of the current position the color moves from `active`
/// to `inactive`; farther away it is plain `inactive`.
pub fn dot_color(distance: f32, active: Color, inactive: Color) -> Color {
    if distance < 1.0 {
        active.blend(inactive, distance)
    } else {
        inactive
    }
}
