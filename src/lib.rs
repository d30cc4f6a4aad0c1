//! # floem-argb
//!
//! An ARGB color picker dialog for [Floem](https://github.com/lapce/floem).
//!
//! The picker shows a preview swatch, one slider per channel (the alpha
//! slider only when alpha is enabled), an editable hex code and a confirm
//! button. All state lives in a headless [`PickerController`], which can be
//! driven and tested without a window; the Floem view only renders it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_argb::{PickerConfig, PickerController, PickerHandle, color_picker_dialog, fn_observer};
//!
//! let picker = PickerController::with_argb(255, 59, 130, 246)
//!     .with_config(PickerConfig::default().dialog_button_text("CONFIRM"))
//!     .with_observer(fn_observer(
//!         |color, hex, _| println!("chosen {hex} ({color:?})"),
//!         |_, _, _| {},
//!     ));
//! let handle = PickerHandle::new(picker);
//! handle.present();
//! // Use `color_picker_dialog(handle)` in your Floem view tree.
//! ```

mod channel_slider;
mod checkerboard;
pub mod codec;
mod color;
mod config;
pub mod constants;
mod dialog;
mod error;
mod inputs;
mod observer;
mod picker;
mod swatch;

pub use color::ArgbColor;
pub use config::{ButtonAppearance, ButtonBackground, PickerConfig};
pub use dialog::{PickerHandle, color_picker_dialog};
pub use error::HexError;
pub use observer::{ColorPickerObserver, FnObserver, fn_observer};
pub use picker::{Channel, ColorChoice, PickerController, PickerSnapshot, Visibility};

use std::sync::Once;

use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Registers the icon font used by the copy button.
///
/// [`color_picker_dialog`] calls this itself; hosts that build their own
/// view around the pieces can call it up front.
pub fn load_icon_font() {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}
