//! Channel coercion, hex validation and hex formatting.
//!
//! Formatting never fails: out-of-range channels are written as `00`.
//! Validation is the only place a failure is reported.

use crate::color::ArgbColor;
use crate::error::HexError;

/// `value` if it lies in 0–255, otherwise 0.
pub fn clamp_channel(value: i32) -> u8 {
    u8::try_from(value).unwrap_or(0)
}

/// Validate `text` as a color, returning the parsed value.
///
/// With `uses_alpha` set, anything shorter than 8 characters is rejected
/// before parsing, so a 6-digit RGB string is never mistaken for a
/// partially typed ARGB one.
pub fn check_hex(text: &str, uses_alpha: bool) -> Result<ArgbColor, HexError> {
    let len = text.chars().count();
    if uses_alpha && len < 8 {
        return Err(HexError::TooShortForAlpha { len });
    }
    // The field never shows a `#`, so one typed by the user is a bad digit.
    if text.starts_with('#') {
        return Err(HexError::BadDigit {
            index: 0,
            found: '#',
        });
    }
    ArgbColor::from_hex(text)
}

/// Whether `text` is accepted by [`check_hex`].
pub fn is_valid_hex(text: &str, uses_alpha: bool) -> bool {
    check_hex(text, uses_alpha).is_ok()
}

/// Uppercase `RRGGBB`.
pub fn format_rgb(r: i32, g: i32, b: i32) -> String {
    format!(
        "{:02X}{:02X}{:02X}",
        clamp_channel(r),
        clamp_channel(g),
        clamp_channel(b)
    )
}

/// Uppercase `AARRGGBB`.
pub fn format_argb(a: i32, r: i32, g: i32, b: i32) -> String {
    format!(
        "{:02X}{:02X}{:02X}{:02X}",
        clamp_channel(a),
        clamp_channel(r),
        clamp_channel(g),
        clamp_channel(b)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_in_range_values() {
        for v in 0..=255 {
            assert_eq!(clamp_channel(v) as i32, v);
        }
    }

    #[test]
    fn clamp_resets_out_of_range_to_zero() {
        for v in [-1, -255, 256, 1000, i32::MIN, i32::MAX] {
            assert_eq!(clamp_channel(v), 0, "value {v}");
        }
    }

    #[test]
    fn format_rgb_known_values() {
        assert_eq!(format_rgb(255, 0, 128), "FF0080");
        assert_eq!(format_rgb(0, 0, 0), "000000");
        assert_eq!(format_rgb(1, 2, 3), "010203");
    }

    #[test]
    fn format_rgb_groups_match_channels() {
        for (r, g, b) in [(0, 127, 255), (171, 205, 239), (16, 15, 160)] {
            let hex = format_rgb(r, g, b);
            assert_eq!(hex.len(), 6);
            assert_eq!(hex, hex.to_uppercase());
            assert_eq!(i32::from_str_radix(&hex[0..2], 16).unwrap(), r);
            assert_eq!(i32::from_str_radix(&hex[2..4], 16).unwrap(), g);
            assert_eq!(i32::from_str_radix(&hex[4..6], 16).unwrap(), b);
        }
    }

    #[test]
    fn format_argb_is_alpha_first() {
        assert_eq!(format_argb(10, 255, 0, 128), "0AFF0080");
    }

    #[test]
    fn format_neutralizes_bad_channels() {
        assert_eq!(format_rgb(-5, 300, 17), "000011");
        assert_eq!(format_argb(256, 255, 255, 255), "00FFFFFF");
    }

    #[test]
    fn hex_validation() {
        assert!(!is_valid_hex("ZZZZZZ", false));
        assert!(is_valid_hex("1a2b3c", false));
        assert!(!is_valid_hex("1a2b3c", true));
        assert!(is_valid_hex("ff1a2b3c", true));
        assert!(is_valid_hex("ff1a2b3c", false));
        assert!(!is_valid_hex("1a2b3", false));
        assert!(!is_valid_hex("#1a2b3c", false));
    }

    #[test]
    fn short_text_in_alpha_mode_is_not_parsed() {
        assert_eq!(
            check_hex("zz", true),
            Err(HexError::TooShortForAlpha { len: 2 })
        );
    }

    #[test]
    fn six_digit_round_trip_is_uppercased() {
        for s in ["1a2b3c", "FFFFFF", "00ff7f", "abcdef"] {
            let c = check_hex(s, false).unwrap();
            let out = format_rgb(c.r().into(), c.g().into(), c.b().into());
            assert_eq!(out, s.to_uppercase());
        }
    }
}
