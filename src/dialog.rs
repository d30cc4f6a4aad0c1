//! Dialog panel: preview swatch, channel sliders, hex field and confirm
//! button, all driven by a shared [`PickerController`].

use std::cell::RefCell;
use std::rc::Rc;

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate, SignalWith};

use crate::channel_slider::channel_slider;
use crate::color::ArgbColor;
use crate::config::ButtonBackground;
use crate::constants;
use crate::inputs::hex_input;
use crate::picker::{Channel, ColorChoice, PickerController, PickerSnapshot, Visibility};
use crate::swatch::swatch;

/// Shared handle to a picker and the signal its view renders from.
///
/// Every call goes through the controller and then republishes its
/// snapshot, so host code and the view never disagree.
#[derive(Clone)]
pub struct PickerHandle {
    picker: Rc<RefCell<PickerController>>,
    snapshot: RwSignal<PickerSnapshot>,
}

impl PickerHandle {
    pub fn new(picker: PickerController) -> Self {
        let snapshot = RwSignal::new(picker.snapshot());
        Self {
            picker: Rc::new(RefCell::new(picker)),
            snapshot,
        }
    }

    /// Run `f` against the controller and publish the resulting snapshot.
    ///
    /// Returns `None` if the controller is already borrowed, which happens
    /// when an observer callback calls back into its own picker.
    pub fn update<R>(&self, f: impl FnOnce(&mut PickerController) -> R) -> Option<R> {
        let Ok(mut picker) = self.picker.try_borrow_mut() else {
            log::warn!("picker re-entered from its own callback; ignoring");
            return None;
        };
        let out = f(&mut picker);
        let next = picker.snapshot();
        drop(picker);
        self.publish(next);
        Some(out)
    }

    /// Set the snapshot signal if `next` differs. Returns whether it did.
    fn publish(&self, next: PickerSnapshot) -> bool {
        if self.snapshot.with_untracked(|s| *s == next) {
            return false;
        }
        self.snapshot.set(next);
        true
    }

    /// Read from the controller without publishing.
    ///
    /// Returns `None` while an [`update`](Self::update) is running, i.e.
    /// from inside an observer callback.
    pub fn with<R>(&self, f: impl FnOnce(&PickerController) -> R) -> Option<R> {
        let Ok(picker) = self.picker.try_borrow() else {
            log::debug!("picker busy; read skipped");
            return None;
        };
        Some(f(&picker))
    }

    pub fn present(&self) {
        self.update(PickerController::present);
    }

    pub fn dismiss(&self) {
        self.update(PickerController::dismiss);
    }

    pub fn confirm(&self) -> Option<ColorChoice> {
        self.update(PickerController::confirm_pressed).flatten()
    }

    pub fn back(&self) -> bool {
        self.update(PickerController::back_requested).unwrap_or(false)
    }

    /// The current color. From inside an observer callback this is the
    /// last published preview.
    pub fn color(&self) -> ArgbColor {
        self.with(PickerController::color)
            .unwrap_or_else(|| self.snapshot.with_untracked(|s| s.preview))
    }

    pub fn is_shown(&self) -> bool {
        self.snapshot.with(|s| s.visibility == Visibility::Shown)
    }

    pub fn snapshot(&self) -> RwSignal<PickerSnapshot> {
        self.snapshot
    }
}

/// One labelled slider row. The alpha row collapses when alpha is off.
fn slider_row(handle: PickerHandle, channel: Channel) -> impl IntoView {
    let snapshot = handle.snapshot;
    let on_change = move |value: u8| {
        handle.update(|p| p.channel_changed(channel, value));
    };
    h_stack((
        label(move || channel.label()).style(|s| {
            s.width(constants::LABEL_WIDTH)
                .font_size(constants::LABEL_FONT)
                .color(Color::rgb8(120, 120, 120))
        }),
        channel_slider(snapshot, channel, on_change),
        label(move || snapshot.with(|s| channel.of(s.channels)).to_string()).style(|s| {
            s.width(24.0)
                .font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(80, 80, 80))
        }),
    ))
    .style(move |s| {
        let hidden = channel == Channel::Alpha && !snapshot.with(|snap| snap.alpha_slider_visible);
        s.items_center()
            .gap(constants::GAP)
            .width_full()
            .apply_if(hidden, |s| s.hide())
    })
}

fn confirm_button(handle: PickerHandle) -> impl IntoView {
    let snapshot = handle.snapshot;
    label(move || snapshot.with(|s| s.button.text.clone()))
        .style(move |s| {
            let (text_color, background) = snapshot.with(|snap| {
                let look = &snap.button;
                let accent = Color::from(ArgbColor::from_packed(constants::BUTTON_ACCENT));
                let background = match look.background {
                    ButtonBackground::Default => accent,
                    ButtonBackground::Transparent => Color::TRANSPARENT,
                    ButtonBackground::Color(c) => Color::from(c),
                };
                let fallback_text = match look.background {
                    ButtonBackground::Transparent => accent,
                    _ => Color::WHITE,
                };
                (look.text_color.map(Color::from).unwrap_or(fallback_text), background)
            });
            s.padding_horiz(16.0)
                .padding_vert(6.0)
                .border_radius(constants::RADIUS)
                .font_size(12.0)
                .font_bold()
                .color(text_color)
                .background(background)
                .cursor(floem::style::CursorStyle::Pointer)
                .align_self(Some(floem::taffy::AlignItems::End))
        })
        .on_event_stop(EventListener::PointerUp, move |_| {
            handle.confirm();
        })
}

/// Creates the dialog view for `handle`.
///
/// The panel collapses while the picker is hidden. It takes keyboard focus,
/// and Escape on it or any of its inputs is routed to
/// [`PickerController::back_requested`].
pub fn color_picker_dialog(handle: PickerHandle) -> impl IntoView {
    crate::load_icon_font();
    let snapshot = handle.snapshot;

    let rows = Channel::ALL.map(|channel| slider_row(handle.clone(), channel));
    let [alpha, red, green, blue] = rows;

    let on_edit = {
        let handle = handle.clone();
        move |text: String| {
            handle.update(|p| p.text_changed(&text));
        }
    };
    let on_submit = {
        let handle = handle.clone();
        move || {
            handle.update(PickerController::text_submitted);
        }
    };

    let back = handle.clone();
    v_stack((
        swatch(snapshot),
        alpha,
        red,
        green,
        blue,
        hex_input(snapshot, on_edit, on_submit),
        confirm_button(handle.clone()),
    ))
    .style(move |s| {
        let hidden = snapshot.with(|snap| snap.visibility == Visibility::Hidden);
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .width(280.0)
            .border_radius(constants::RADIUS * 2.0)
            .border(1.0)
            .border_color(Color::rgb8(210, 210, 210))
            .background(Color::rgb8(242, 242, 242))
            .apply_if(hidden, |s| s.hide())
    })
    .keyboard_navigable()
    .on_event(EventListener::KeyDown, move |e| {
        if let Event::KeyDown(ke) = e
            && ke.key.logical_key == Key::Named(NamedKey::Escape)
        {
            back.back();
            return EventPropagation::Stop;
        }
        EventPropagation::Continue
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;
    use crate::observer::ColorPickerObserver;

    #[test]
    fn publish_skips_unchanged_snapshots() {
        let handle = PickerHandle::new(PickerController::new());
        let same = handle.snapshot.with_untracked(PickerSnapshot::clone);
        assert!(!handle.publish(same));

        let mut shown = PickerController::new();
        shown.present();
        assert!(handle.publish(shown.snapshot()));
        assert!(handle.is_shown());
    }

    #[test]
    fn update_publishes_controller_state() {
        let handle = PickerHandle::new(PickerController::with_rgb(0, 0, 0));
        handle.present();
        handle.update(|p| p.text_changed("ff00ff"));
        let snap = handle.snapshot().with_untracked(PickerSnapshot::clone);
        assert_eq!(snap.hex_text, "FF00FF");
        assert_eq!(snap.preview, ArgbColor::new(255, 255, 0, 255));
        assert_eq!(handle.color(), ArgbColor::new(255, 255, 0, 255));
    }

    #[test]
    fn confirm_through_handle_reports_and_hides() {
        let handle = PickerHandle::new(PickerController::with_argb(10, 255, 0, 128));
        assert_eq!(handle.confirm(), None);

        handle.present();
        let choice = handle.confirm().expect("shown picker reports");
        assert_eq!(choice.hex, "#0AFF0080");
        assert_eq!(choice.hex_no_alpha, "#FF0080");
        assert!(!handle.is_shown());
    }

    #[test]
    fn back_through_handle_honors_config() {
        let handle = PickerHandle::new(PickerController::new());
        handle.present();
        assert!(handle.back());
        assert!(!handle.is_shown());

        let sticky = PickerHandle::new(
            PickerController::new().with_config(PickerConfig::default().close_on_back_pressed(false)),
        );
        sticky.present();
        assert!(!sticky.back());
        assert!(sticky.is_shown());
    }

    struct CallsBack {
        handle: Rc<RefCell<Option<PickerHandle>>>,
        seen: Rc<RefCell<Vec<(ArgbColor, bool, Option<u8>)>>>,
    }

    impl ColorPickerObserver for CallsBack {
        fn on_color_chosen(&mut self, _color: ArgbColor, _hex: &str, _hex_no_alpha: &str) {
            if let Some(handle) = self.handle.borrow().as_ref() {
                let color = handle.color();
                let updated = handle.update(PickerController::dismiss).is_some();
                let red = handle.with(PickerController::red);
                self.seen.borrow_mut().push((color, updated, red));
            }
        }

        fn on_color_changed(&mut self, _color: ArgbColor, _hex_no_alpha: &str, _hex: &str) {}
    }

    #[test]
    fn observer_calling_its_own_handle_does_not_panic() {
        let slot = Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let picker = PickerController::with_rgb(12, 34, 56)
            .with_config(PickerConfig::default().close_on_dialog_button_pressed(false))
            .with_observer(CallsBack {
                handle: slot.clone(),
                seen: seen.clone(),
            });
        let handle = PickerHandle::new(picker);
        *slot.borrow_mut() = Some(handle.clone());

        handle.present();
        assert!(handle.confirm().is_some());

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        let (color, updated, red) = seen[0];
        assert_eq!(color, ArgbColor::new(255, 12, 34, 56));
        assert!(!updated);
        assert_eq!(red, None);
        // The nested dismiss was dropped, so the dialog stays up.
        assert!(handle.is_shown());
        assert_eq!(handle.with(PickerController::red), Some(12));
    }
}
