//! Hex code field and copy button.

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, SignalWith, create_effect};

use crate::constants;
use crate::picker::PickerSnapshot;

/// A `#`-prefixed hex field mirroring the snapshot's hex text.
///
/// Every edit that differs from the controller's text goes to `on_edit`;
/// Enter goes to `on_submit`. The advisory error, if any, is shown below.
pub(crate) fn hex_input(
    snapshot: RwSignal<PickerSnapshot>,
    on_edit: impl Fn(String) + 'static,
    on_submit: impl Fn() + 'static,
) -> impl IntoView {
    let text = RwSignal::new(snapshot.with_untracked(|s| s.hex_text.clone()));

    // Controller → field
    create_effect(move |_| {
        let hex = snapshot.with(|s| s.hex_text.clone());
        if text.with_untracked(|t| *t != hex) {
            text.set(hex);
        }
    });

    // Field → controller, skipping echoes of our own writes
    create_effect(move |_| {
        let raw = text.get();
        if snapshot.with_untracked(|s| s.hex_text != raw) {
            on_edit(raw);
        }
    });

    let field = h_stack((
        label(|| "#").style(|s| {
            s.font_size(constants::INPUT_FONT)
                .font_family("monospace".to_string())
                .color(Color::rgb8(120, 120, 120))
        }),
        text_input(text)
            .style(|s| {
                s.width(constants::HEX_INPUT_WIDTH)
                    .padding(2.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
            .on_event(EventListener::KeyDown, move |e| {
                if let Event::KeyDown(ke) = e
                    && ke.key.logical_key == Key::Named(NamedKey::Enter)
                {
                    on_submit();
                    return EventPropagation::Stop;
                }
                EventPropagation::Continue
            }),
        copy_button(move || format!("#{}", snapshot.with_untracked(PickerSnapshot::color_hex))),
    ))
    .style(|s| s.items_center().gap(constants::GAP / 2.0));

    let error = label(move || {
        snapshot.with(|s| {
            s.hex_error
                .as_ref()
                .map(|err| err.to_string())
                .unwrap_or_default()
        })
    })
    .style(move |s| {
        let has_error = snapshot.with(|snap| snap.hex_error.is_some());
        s.font_size(constants::LABEL_FONT)
            .color(Color::rgb8(200, 40, 40))
            .apply_if(!has_error, |s| s.hide())
    });

    v_stack((field, error)).style(|s| s.items_center().gap(2.0))
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub(crate) fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(20.0, 20.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => log::trace!("copied {text} to clipboard"),
        Err(err) => log::warn!("failed to copy {text} to clipboard: {err}"),
    }
}
