//! Standalone demo: a swatch that opens the ARGB picker dialog.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_argb::{
    ArgbColor, PickerConfig, PickerController, PickerHandle, color_picker_dialog, fn_observer,
};

fn main() {
    env_logger::init();

    let chosen = RwSignal::new(ArgbColor::from_packed(0xFF3F_51B5));

    let picker = PickerController::with_argb(0, 0, 0, 0)
        .with_config(
            PickerConfig::default()
                .dialog_button_text("CONFIRM")
                .close_on_back_pressed(false)
                .button_transparent(true),
        )
        .with_observer(fn_observer(
            move |color, hex, hex_no_alpha| {
                log::info!("chosen ARGB: {hex} | RGB: {hex_no_alpha}");
                chosen.set(color);
            },
            |color, hex_no_alpha, hex| {
                log::debug!("changed {color:?}: {hex_no_alpha} / {hex}");
            },
        ));
    let handle = PickerHandle::new(picker);
    handle.update(|p| p.set_color(chosen.get_untracked().to_packed_argb()));

    floem::Application::new()
        .window(
            move |_| {
                demo_view(handle, chosen).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((340.0, 560.0))
                    .title("floem-argb"),
            ),
        )
        .run();
}

fn demo_view(handle: PickerHandle, chosen: RwSignal<ArgbColor>) -> impl IntoView {
    let open = handle.clone();
    v_stack((
        empty().style(move |s| {
            s.width(120.0)
                .height(120.0)
                .border_radius(8.0)
                .background(Color::from(chosen.get()))
        }),
        label(|| "Open color picker")
            .style(|s| {
                s.padding(6.0)
                    .border(1.0)
                    .border_radius(4.0)
                    .cursor(floem::style::CursorStyle::Pointer)
            })
            .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
                open.present();
            }),
        color_picker_dialog(handle),
    ))
    .style(|s| s.gap(12.0).padding(16.0).items_center().size_full())
}
