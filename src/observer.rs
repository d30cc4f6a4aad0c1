//! Observer interface notified by the picker.

use crate::color::ArgbColor;

/// Receives the picker's color events.
///
/// `color` is the packed-consistent value: opaque when the picker does not
/// use alpha.
pub trait ColorPickerObserver {
    /// The confirm button was pressed.
    ///
    /// `hex` is `#AARRGGBB`, `hex_no_alpha` is `#RRGGBB`.
    fn on_color_chosen(&mut self, color: ArgbColor, hex: &str, hex_no_alpha: &str);

    /// A slider moved or valid hex text was entered.
    ///
    /// `hex_no_alpha` is `RRGGBB` and `hex` is `AARRGGBB` with the stored
    /// alpha, both without a `#`.
    fn on_color_changed(&mut self, color: ArgbColor, hex_no_alpha: &str, hex: &str);
}

/// Adapts a pair of closures into a [`ColorPickerObserver`].
pub struct FnObserver<C, H> {
    chosen: C,
    changed: H,
}

/// Build an observer from `(color, hex, hex_no_alpha)` for choices and
/// `(color, hex_no_alpha, hex)` for live changes.
pub fn fn_observer<C, H>(chosen: C, changed: H) -> FnObserver<C, H>
where
    C: FnMut(ArgbColor, &str, &str),
    H: FnMut(ArgbColor, &str, &str),
{
    FnObserver { chosen, changed }
}

impl<C, H> ColorPickerObserver for FnObserver<C, H>
where
    C: FnMut(ArgbColor, &str, &str),
    H: FnMut(ArgbColor, &str, &str),
{
    fn on_color_chosen(&mut self, color: ArgbColor, hex: &str, hex_no_alpha: &str) {
        (self.chosen)(color, hex, hex_no_alpha);
    }

    fn on_color_changed(&mut self, color: ArgbColor, hex_no_alpha: &str, hex: &str) {
        (self.changed)(color, hex_no_alpha, hex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_receive_arguments_in_order() {
        let mut chosen = Vec::new();
        let mut changed = Vec::new();
        {
            let mut observer = fn_observer(
                |c: ArgbColor, hex: &str, rgb: &str| chosen.push((c, hex.to_string(), rgb.to_string())),
                |c: ArgbColor, rgb: &str, hex: &str| changed.push((c, rgb.to_string(), hex.to_string())),
            );
            let c = ArgbColor::new(1, 2, 3, 4);
            observer.on_color_chosen(c, "#01020304", "#020304");
            observer.on_color_changed(c, "020304", "01020304");
        }
        assert_eq!(chosen.len(), 1);
        assert_eq!(chosen[0].1, "#01020304");
        assert_eq!(changed[0].1, "020304");
        assert_eq!(changed[0].2, "01020304");
    }
}
