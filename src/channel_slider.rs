//! Horizontal 0–255 slider for one color channel.
//!
//! The track shows the channel's own ramp: the current color with the
//! channel at 0 on the left and at 255 on the right. The alpha track is
//! drawn over a checkerboard.

use floem::kurbo::{Circle, Rect, Shape, Stroke};
use floem::peniko::{Color, Gradient};

use floem::reactive::{RwSignal, SignalWith, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::color::ArgbColor;
use crate::constants;
use crate::picker::{Channel, PickerSnapshot};

struct SliderUpdate {
    value: u8,
    base: ArgbColor,
}

pub(crate) struct ChannelSlider {
    id: ViewId,
    channel: Channel,
    held: bool,
    value: u8,
    base: ArgbColor,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(u8)>,
}

/// Creates a slider bound to `channel` of the snapshot's slider positions.
///
/// `on_change` receives every new position while the pointer is held.
pub(crate) fn channel_slider(
    snapshot: RwSignal<PickerSnapshot>,
    channel: Channel,
    on_change: impl Fn(u8) + 'static,
) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let channels = snapshot.with(|s| s.channels);
        id.update_state(SliderUpdate {
            value: channel.of(channels),
            base: channels,
        });
    });

    let channels = snapshot.with_untracked(|s| s.channels);
    ChannelSlider {
        id,
        channel,
        held: false,
        value: channel.of(channels),
        base: channels,
        size: Default::default(),
        on_change: Box::new(on_change),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .flex_grow(1.0)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

/// Map a pointer x to a channel value; the thumb stays inside the track.
fn value_at(x: f64, width: f64) -> Option<u8> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    if usable <= 0.0 {
        return None;
    }
    let t = ((x - r) / usable).clamp(0.0, 1.0);
    Some((t * 255.0).round() as u8)
}

impl ChannelSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let Some(value) = value_at(x, self.size.width as f64) else {
            return;
        };
        if value != self.value {
            self.value = value;
            (self.on_change)(value);
        }
        self.id.request_layout();
    }

    /// Ends of the track ramp. Color channels are shown opaque.
    fn ramp(&self) -> (Color, Color) {
        let base = match self.channel {
            Channel::Alpha => self.base,
            _ => self.base.with_alpha(255),
        };
        (
            Color::from(self.channel.set(base, 0)),
            Color::from(self.channel.set(base, 255)),
        )
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn debug_name(&self) -> std::borrow::Cow<'static, str> {
        format!("ChannelSlider({})", self.channel.label()).into()
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            self.value = update.value;
            self.base = update.base;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        if self.channel == Channel::Alpha {
            checkerboard::paint_checkerboard(cx, rect);
        }
        let (low, high) = self.ramp();
        let gradient = Gradient::new_linear((0.0, h / 2.0), (w, h / 2.0)).with_stops([low, high]);
        // vello's Rect fast-path only does solid fills
        let path = rect.to_path(0.1);
        cx.fill(&path, &gradient, 0.0);
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        // Thumb (left = 0, right = 255)
        let radius = constants::THUMB_RADIUS;
        let thumb_x = radius + (self.value as f64 / 255.0) * (w - 2.0 * radius);
        let center = (thumb_x, h / 2.0);
        cx.stroke(
            &Circle::new(center, radius),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 1.5),
            Color::WHITE,
            &Stroke::new(2.0),
        );
        cx.stroke(
            &Circle::new(center, radius - 3.0),
            Color::rgba8(0, 0, 0, 80),
            &Stroke::new(1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_to_full_range() {
        let w = 2.0 * constants::THUMB_RADIUS + 255.0;
        assert_eq!(value_at(0.0, w), Some(0));
        assert_eq!(value_at(constants::THUMB_RADIUS + 128.0, w), Some(128));
        assert_eq!(value_at(w, w), Some(255));
        assert_eq!(value_at(w + 50.0, w), Some(255));
    }

    #[test]
    fn degenerate_track_has_no_value() {
        assert_eq!(value_at(3.0, 10.0), None);
    }
}
