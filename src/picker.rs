//! Headless picker state: channels, visibility and hex text.
//!
//! The controller owns the authoritative color. Every input handler
//! mutates it synchronously and leaves the derived state (preview, hex
//! text, advisory error) consistent; the Floem view only renders
//! [`PickerSnapshot`]s.

use crate::codec;
use crate::color::ArgbColor;
use crate::config::{ButtonAppearance, PickerConfig};
use crate::error::HexError;
use crate::observer::ColorPickerObserver;

/// One of the four slider-driven channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter slider label.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Alpha => "A",
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    /// Read this channel out of `color`.
    pub fn of(self, color: ArgbColor) -> u8 {
        match self {
            Channel::Alpha => color.a(),
            Channel::Red => color.r(),
            Channel::Green => color.g(),
            Channel::Blue => color.b(),
        }
    }

    /// `color` with this channel replaced by `value`.
    pub fn set(self, color: ArgbColor, value: u8) -> ArgbColor {
        let (a, r, g, b) = (color.a(), color.r(), color.g(), color.b());
        match self {
            Channel::Alpha => ArgbColor::new(value, r, g, b),
            Channel::Red => ArgbColor::new(a, value, g, b),
            Channel::Green => ArgbColor::new(a, r, value, b),
            Channel::Blue => ArgbColor::new(a, r, g, value),
        }
    }
}

/// Whether the dialog surface is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// What the confirm button reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChoice {
    pub color: ArgbColor,
    /// `#AARRGGBB`
    pub hex: String,
    /// `#RRGGBB`
    pub hex_no_alpha: String,
}

/// Everything the view needs to draw the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSnapshot {
    pub visibility: Visibility,
    pub alpha_slider_visible: bool,
    /// Slider positions, alpha included even when its slider is hidden.
    pub channels: ArgbColor,
    pub preview: ArgbColor,
    pub hex_text: String,
    pub hex_max_len: usize,
    pub hex_error: Option<HexError>,
    pub button: ButtonAppearance,
}

impl PickerSnapshot {
    /// Hex text of the current color as the field shows it when not
    /// editing: 8 digits with alpha, 6 without.
    pub fn color_hex(&self) -> String {
        if self.alpha_slider_visible {
            self.channels.to_hex_argb()
        } else {
            self.channels.to_hex_rgb()
        }
    }
}

/// The color picker dialog controller.
pub struct PickerController {
    color: ArgbColor,
    uses_alpha: bool,
    config: PickerConfig,
    observer: Option<Box<dyn ColorPickerObserver>>,
    visibility: Visibility,
    hex_text: String,
    hex_error: Option<HexError>,
    button: ButtonAppearance,
}

impl Default for PickerController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PickerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerController")
            .field("color", &self.color)
            .field("uses_alpha", &self.uses_alpha)
            .field("visibility", &self.visibility)
            .field("hex_text", &self.hex_text)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl PickerController {
    /// Opaque black, alpha slider hidden.
    pub fn new() -> Self {
        Self::from_color(ArgbColor::OPAQUE_BLACK, false)
    }

    /// Seed with RGB channels; out-of-range values become 0.
    pub fn with_rgb(r: i32, g: i32, b: i32) -> Self {
        Self::from_color(ArgbColor::from_rgb_channels(r, g, b), false)
    }

    /// Seed with ARGB channels and enable the alpha slider.
    pub fn with_argb(a: i32, r: i32, g: i32, b: i32) -> Self {
        Self::from_color(ArgbColor::from_channels(a, r, g, b), true)
    }

    fn from_color(color: ArgbColor, uses_alpha: bool) -> Self {
        let config = PickerConfig::default();
        let button = config.button_appearance();
        let mut picker = Self {
            color,
            uses_alpha,
            config,
            observer: None,
            visibility: Visibility::Hidden,
            hex_text: String::new(),
            hex_error: None,
            button,
        };
        picker.hex_text = picker.canonical_hex();
        picker
    }

    pub fn with_config(mut self, config: PickerConfig) -> Self {
        self.set_config(config);
        self
    }

    pub fn with_observer(mut self, observer: impl ColorPickerObserver + 'static) -> Self {
        self.set_observer(observer);
        self
    }

    /// Replace the configuration. Button styling is picked up on the next
    /// [`present`](Self::present).
    pub fn set_config(&mut self, config: PickerConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn set_observer(&mut self, observer: impl ColorPickerObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Seed all four channels from a packed `0xAARRGGBB` color.
    pub fn set_color(&mut self, argb: u32) {
        self.color = ArgbColor::from_packed(argb);
        self.sync_text();
    }

    pub fn alpha(&self) -> u8 {
        self.color.a()
    }

    pub fn red(&self) -> u8 {
        self.color.r()
    }

    pub fn green(&self) -> u8 {
        self.color.g()
    }

    pub fn blue(&self) -> u8 {
        self.color.b()
    }

    pub fn uses_alpha(&self) -> bool {
        self.uses_alpha
    }

    /// The current color, opaque when alpha is not in use.
    pub fn color(&self) -> ArgbColor {
        ArgbColor::from_packed(self.packed_color())
    }

    /// `0xAARRGGBB` when alpha is in use, otherwise `0xFFRRGGBB`.
    pub fn packed_color(&self) -> u32 {
        if self.uses_alpha {
            self.color.to_packed_argb()
        } else {
            self.color.to_packed_rgb()
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    /// Shown with hex text that does not match the current color.
    pub fn is_editing(&self) -> bool {
        self.is_shown() && self.hex_text != self.canonical_hex()
    }

    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Advisory error from the last rejected hex input.
    pub fn hex_error(&self) -> Option<&HexError> {
        self.hex_error.as_ref()
    }

    /// Longest text the hex field accepts.
    pub fn hex_max_len(&self) -> usize {
        if self.uses_alpha { 8 } else { 6 }
    }

    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot {
            visibility: self.visibility,
            alpha_slider_visible: self.uses_alpha,
            channels: self.color,
            preview: self.color(),
            hex_text: self.hex_text.clone(),
            hex_max_len: self.hex_max_len(),
            hex_error: self.hex_error.clone(),
            button: self.button.clone(),
        }
    }

    /// Hidden → Shown. Syncs every input from the channels and applies the
    /// configured button styling.
    pub fn present(&mut self) {
        if self.visibility == Visibility::Hidden {
            log::debug!("presenting color picker with {}", self.color);
        }
        self.visibility = Visibility::Shown;
        self.button = self.config.button_appearance();
        self.sync_text();
    }

    /// Shown → Hidden regardless of the dismissal settings.
    pub fn dismiss(&mut self) {
        if self.visibility == Visibility::Shown {
            log::debug!("dismissing color picker");
        }
        self.visibility = Visibility::Hidden;
    }

    /// A slider moved.
    pub fn channel_changed(&mut self, channel: Channel, value: u8) {
        log::trace!("{channel:?} slider -> {value}");
        self.color = channel.set(self.color, value);
        self.sync_text();
        self.notify_changed();
    }

    /// The hex field's text changed.
    ///
    /// Text beyond [`hex_max_len`](Self::hex_max_len) is dropped. Invalid
    /// text leaves the channels alone and records an advisory error.
    pub fn text_changed(&mut self, text: &str) {
        self.hex_text = text.chars().take(self.hex_max_len()).collect();
        match codec::check_hex(&self.hex_text, self.uses_alpha) {
            Ok(parsed) => self.apply_parsed(parsed),
            Err(err) => {
                log::debug!("rejected hex input {:?}: {err}", self.hex_text);
                self.hex_error = Some(err);
            }
        }
    }

    /// The hex field's done/Enter action.
    ///
    /// Unlike [`text_changed`](Self::text_changed) a 6-digit entry is
    /// accepted in alpha mode and read as opaque.
    pub fn text_submitted(&mut self) {
        match codec::check_hex(&self.hex_text, false) {
            Ok(parsed) => self.apply_parsed(parsed),
            Err(err) => {
                log::debug!("rejected submitted hex {:?}: {err}", self.hex_text);
                self.hex_error = Some(err);
            }
        }
    }

    /// The confirm button was pressed.
    ///
    /// Returns `None` when the dialog is not shown.
    pub fn confirm_pressed(&mut self) -> Option<ColorChoice> {
        if !self.is_shown() {
            log::trace!("confirm ignored while hidden");
            return None;
        }
        let packed = self.packed_color();
        let choice = ColorChoice {
            color: self.color(),
            hex: format!("#{packed:08X}"),
            hex_no_alpha: format!("#{:06X}", packed & 0x00FF_FFFF),
        };
        log::debug!("color chosen: {}", choice.hex);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_color_chosen(choice.color, &choice.hex, &choice.hex_no_alpha);
        }
        if self.config.close_on_dialog_button_pressed {
            self.dismiss();
        }
        Some(choice)
    }

    /// Back / Escape. Returns whether the dialog closed.
    pub fn back_requested(&mut self) -> bool {
        if self.is_shown() && self.config.close_on_back_pressed {
            self.dismiss();
            true
        } else {
            false
        }
    }

    fn apply_parsed(&mut self, parsed: ArgbColor) {
        self.color = parsed;
        self.sync_text();
        self.notify_changed();
    }

    fn canonical_hex(&self) -> String {
        if self.uses_alpha {
            self.color.to_hex_argb()
        } else {
            self.color.to_hex_rgb()
        }
    }

    fn sync_text(&mut self) {
        self.hex_text = self.canonical_hex();
        self.hex_error = None;
    }

    fn notify_changed(&mut self) {
        let color = self.color();
        let hex_no_alpha = self.color.to_hex_rgb();
        let hex = self.color.to_hex_argb();
        if let Some(observer) = self.observer.as_mut() {
            observer.on_color_changed(color, &hex_no_alpha, &hex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_set_touches_one_channel() {
        let c = ArgbColor::new(1, 2, 3, 4);
        assert_eq!(Channel::Alpha.set(c, 9), ArgbColor::new(9, 2, 3, 4));
        assert_eq!(Channel::Red.set(c, 9), ArgbColor::new(1, 9, 3, 4));
        assert_eq!(Channel::Green.set(c, 9), ArgbColor::new(1, 2, 9, 4));
        assert_eq!(Channel::Blue.set(c, 9), ArgbColor::new(1, 2, 3, 9));
        for ch in Channel::ALL {
            assert_eq!(ch.of(ch.set(c, 200)), 200);
        }
    }

    #[test]
    fn editing_tracks_partial_text() {
        let mut picker = PickerController::new();
        picker.present();
        assert!(!picker.is_editing());
        picker.text_changed("ff0");
        assert!(picker.is_editing());
        assert_eq!(picker.hex_text(), "ff0");
        picker.text_changed("ff0000");
        assert!(!picker.is_editing());
        assert_eq!(picker.hex_text(), "FF0000");
    }

    #[test]
    fn snapshot_color_hex_ignores_half_typed_text() {
        let mut picker = PickerController::with_rgb(0x12, 0x34, 0x56);
        picker.present();
        picker.text_changed("zz");
        let snap = picker.snapshot();
        assert_eq!(snap.hex_text, "zz");
        assert_eq!(snap.color_hex(), "123456");

        let mut argb = PickerController::with_argb(0x80, 1, 2, 3);
        argb.text_changed("80");
        assert_eq!(argb.snapshot().color_hex(), "80010203");
    }

    #[test]
    fn text_is_limited_to_field_length() {
        let mut picker = PickerController::new();
        picker.text_changed("00ff00ab");
        assert_eq!(picker.green(), 255);
        assert_eq!(picker.hex_text(), "00FF00");
    }
}
