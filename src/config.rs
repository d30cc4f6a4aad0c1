//! Picker configuration: dismissal policy and confirm-button styling.
//!
//! Styling fields are optional and only take effect when the picker is
//! presented, via [`PickerConfig::button_appearance`].

use crate::color::ArgbColor;
use crate::constants;

/// Settings applied to a [`PickerController`](crate::PickerController).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// Close the dialog after the confirm button reports a color.
    pub close_on_dialog_button_pressed: bool,
    /// Close the dialog on back / Escape.
    pub close_on_back_pressed: bool,
    /// Confirm button label; `None` keeps [`constants::DEFAULT_BUTTON_TEXT`].
    pub dialog_button_text: Option<String>,
    pub dialog_button_text_color: Option<ArgbColor>,
    pub dialog_button_background_color: Option<ArgbColor>,
    /// Draw the confirm button without a background. An explicit
    /// background color still takes precedence.
    pub button_transparent: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            close_on_dialog_button_pressed: true,
            close_on_back_pressed: true,
            dialog_button_text: None,
            dialog_button_text_color: None,
            dialog_button_background_color: None,
            button_transparent: false,
        }
    }
}

impl PickerConfig {
    pub fn close_on_dialog_button_pressed(mut self, close: bool) -> Self {
        self.close_on_dialog_button_pressed = close;
        self
    }

    pub fn close_on_back_pressed(mut self, close: bool) -> Self {
        self.close_on_back_pressed = close;
        self
    }

    pub fn dialog_button_text(mut self, text: impl Into<String>) -> Self {
        self.dialog_button_text = Some(text.into());
        self
    }

    pub fn dialog_button_text_color(mut self, color: impl Into<ArgbColor>) -> Self {
        self.dialog_button_text_color = Some(color.into());
        self
    }

    pub fn dialog_button_background_color(mut self, color: impl Into<ArgbColor>) -> Self {
        self.dialog_button_background_color = Some(color.into());
        self
    }

    pub fn button_transparent(mut self, transparent: bool) -> Self {
        self.button_transparent = transparent;
        self
    }

    /// Resolve the optional styling fields into what the button shows.
    pub fn button_appearance(&self) -> ButtonAppearance {
        let background = match (self.dialog_button_background_color, self.button_transparent) {
            (Some(color), _) => ButtonBackground::Color(color),
            (None, true) => ButtonBackground::Transparent,
            (None, false) => ButtonBackground::Default,
        };
        ButtonAppearance {
            text: self
                .dialog_button_text
                .clone()
                .unwrap_or_else(|| constants::DEFAULT_BUTTON_TEXT.to_string()),
            text_color: self.dialog_button_text_color,
            background,
        }
    }
}

/// Background of the confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonBackground {
    /// The dialog's own accent.
    #[default]
    Default,
    Transparent,
    Color(ArgbColor),
}

/// Fully resolved confirm button styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonAppearance {
    pub text: String,
    /// `None` keeps the dialog's own text color.
    pub text_color: Option<ArgbColor>,
    pub background: ButtonBackground,
}

impl Default for ButtonAppearance {
    fn default() -> Self {
        PickerConfig::default().button_appearance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_close_on_both_actions() {
        let config = PickerConfig::default();
        assert!(config.close_on_dialog_button_pressed);
        assert!(config.close_on_back_pressed);
        assert!(!config.button_transparent);
    }

    #[test]
    fn default_appearance() {
        let look = PickerConfig::default().button_appearance();
        assert_eq!(look.text, "SUBMIT");
        assert_eq!(look.text_color, None);
        assert_eq!(look.background, ButtonBackground::Default);
    }

    #[test]
    fn builder_overrides() {
        let look = PickerConfig::default()
            .dialog_button_text("CONFIRM")
            .dialog_button_text_color(0xFF11_2233)
            .button_transparent(true)
            .button_appearance();
        assert_eq!(look.text, "CONFIRM");
        assert_eq!(look.text_color, Some(ArgbColor::new(0xFF, 0x11, 0x22, 0x33)));
        assert_eq!(look.background, ButtonBackground::Transparent);
    }

    #[test]
    fn explicit_background_beats_transparent() {
        let look = PickerConfig::default()
            .button_transparent(true)
            .dialog_button_background_color(0xFF00_00FF)
            .button_appearance();
        assert_eq!(
            look.background,
            ButtonBackground::Color(ArgbColor::new(0xFF, 0, 0, 0xFF))
        );
    }
}
