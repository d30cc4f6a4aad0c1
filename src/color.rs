//! ArgbColor: the public color representation for floem-argb.
//!
//! Stores four 8-bit channels. Packs to and from `0xAARRGGBB` and parses
//! the strict 6/8 digit hex forms the picker's text field accepts.

use std::fmt;

use crate::codec;
use crate::error::HexError;

/// A color with alpha, red, green and blue channels in 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArgbColor {
    a: u8,
    r: u8,
    g: u8,
    b: u8,
}

impl ArgbColor {
    /// Alpha channel (0–255).
    pub fn a(&self) -> u8 {
        self.a
    }
    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }
}

/// Opaque black.
impl Default for ArgbColor {
    fn default() -> Self {
        Self::OPAQUE_BLACK
    }
}

impl ArgbColor {
    pub const OPAQUE_BLACK: Self = Self::new(255, 0, 0, 0);

    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create from unchecked integer channels.
    ///
    /// Any channel outside 0–255 becomes 0, not the nearest bound.
    pub fn from_channels(a: i32, r: i32, g: i32, b: i32) -> Self {
        Self {
            a: codec::clamp_channel(a),
            r: codec::clamp_channel(r),
            g: codec::clamp_channel(g),
            b: codec::clamp_channel(b),
        }
    }

    /// Like [`ArgbColor::from_channels`] with full opacity.
    pub fn from_rgb_channels(r: i32, g: i32, b: i32) -> Self {
        Self::from_channels(255, r, g, b)
    }

    /// Unpack `0xAARRGGBB`.
    pub fn from_packed(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { a, r, g, b }
    }

    /// Pack as `0xAARRGGBB`.
    pub fn to_packed_argb(&self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Pack as `0xFFRRGGBB`, ignoring the stored alpha.
    pub fn to_packed_rgb(&self) -> u32 {
        u32::from_be_bytes([0xFF, self.r, self.g, self.b])
    }

    /// The same color with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `RRGGBB` or `AARRGGBB`, optionally prefixed with `#`.
    ///
    /// Six digits yield an opaque color. No shorthand, no sign, no names.
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        let len = stripped.chars().count();
        if len != 6 && len != 8 {
            return Err(HexError::BadLength { len });
        }
        if let Some((index, found)) = stripped
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(HexError::BadDigit { index, found });
        }
        // All ASCII hex digits from here on, so the radix parse cannot fail
        // and fits in u32 (at most 8 digits).
        let value = u32::from_str_radix(stripped, 16).map_err(|_| HexError::BadLength { len })?;
        Ok(if len == 6 {
            Self::from_packed(0xFF00_0000 | value)
        } else {
            Self::from_packed(value)
        })
    }

    /// Format as uppercase `RRGGBB` (no `#` prefix).
    pub fn to_hex_rgb(&self) -> String {
        codec::format_rgb(self.r.into(), self.g.into(), self.b.into())
    }

    /// Format as uppercase `AARRGGBB` (no `#` prefix).
    pub fn to_hex_argb(&self) -> String {
        codec::format_argb(self.a.into(), self.r.into(), self.g.into(), self.b.into())
    }
}

impl fmt::Display for ArgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_packed_argb())
    }
}

impl From<ArgbColor> for floem::peniko::Color {
    fn from(c: ArgbColor) -> Self {
        floem::peniko::Color::rgba8(c.r, c.g, c.b, c.a)
    }
}

impl From<u32> for ArgbColor {
    fn from(argb: u32) -> Self {
        Self::from_packed(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_black() {
        let c = ArgbColor::default();
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (255, 0, 0, 0));
    }

    #[test]
    fn out_of_range_channels_reset_to_zero() {
        let c = ArgbColor::from_channels(300, -1, 256, 12);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (0, 0, 0, 12));
        assert_eq!(ArgbColor::from_rgb_channels(1000, 5, 6).r(), 0);
    }

    #[test]
    fn packing() {
        let c = ArgbColor::new(0x80, 0x12, 0x34, 0x56);
        assert_eq!(c.to_packed_argb(), 0x8012_3456);
        assert_eq!(c.to_packed_rgb(), 0xFF12_3456);
        assert_eq!(ArgbColor::from_packed(0x8012_3456), c);
        assert_eq!(ArgbColor::from(0x0000_00FF).b(), 0xFF);
    }

    #[test]
    fn hex_six_digits_is_opaque() {
        let c = ArgbColor::from_hex("1a2b3c").unwrap();
        assert_eq!(c, ArgbColor::new(255, 0x1A, 0x2B, 0x3C));
        assert_eq!(ArgbColor::from_hex("#1A2B3C").unwrap(), c);
    }

    #[test]
    fn hex_eight_digits_is_alpha_first() {
        let c = ArgbColor::from_hex("0AFF0080").unwrap();
        assert_eq!(c, ArgbColor::new(0x0A, 0xFF, 0x00, 0x80));
    }

    #[test]
    fn hex_rejects_malformed() {
        assert_eq!(
            ArgbColor::from_hex("fff"),
            Err(HexError::BadLength { len: 3 })
        );
        assert_eq!(
            ArgbColor::from_hex("12345g"),
            Err(HexError::BadDigit {
                index: 5,
                found: 'g'
            })
        );
        assert!(ArgbColor::from_hex("+12345").is_err());
        assert!(ArgbColor::from_hex("").is_err());
        assert!(ArgbColor::from_hex("##123456").is_err());
    }

    #[test]
    fn display_is_hash_argb() {
        assert_eq!(ArgbColor::new(10, 255, 0, 128).to_string(), "#0AFF0080");
    }
}
