//! Errors surfaced by hex input validation.

use thiserror::Error;

/// Why a piece of hex text was not accepted as a color.
///
/// These are advisory: the picker keeps its current color and shows the
/// message next to the hex field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Alpha is in use but fewer than 8 characters were typed.
    #[error("expected 8 hex digits (AARRGGBB), got {len}")]
    TooShortForAlpha { len: usize },

    /// Not 6 or 8 digits long.
    #[error("expected 6 or 8 hex digits, got {len}")]
    BadLength { len: usize },

    /// A character outside `0-9`, `a-f`, `A-F`.
    #[error("invalid hex digit {found:?} at position {index}")]
    BadDigit { index: usize, found: char },
}
