//! Preview swatch: the picked color over a checkerboard.

use floem::kurbo::{Rect, Stroke};
use floem::peniko::Color;

use floem::reactive::{RwSignal, SignalWith, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
};
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::color::ArgbColor;
use crate::constants;
use crate::picker::PickerSnapshot;

pub(crate) struct Swatch {
    id: ViewId,
    color: ArgbColor,
    size: floem::taffy::prelude::Size<f32>,
}

pub(crate) fn swatch(snapshot: RwSignal<PickerSnapshot>) -> Swatch {
    let id = ViewId::new();

    create_effect(move |_| {
        let preview = snapshot.with(|s| s.preview);
        id.update_state(preview);
    });

    Swatch {
        id,
        color: snapshot.with_untracked(|s| s.preview),
        size: Default::default(),
    }
    .style(|s| {
        s.height(constants::SWATCH_HEIGHT)
            .width_full()
            .border_radius(constants::RADIUS)
    })
}

impl View for Swatch {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(color) = state.downcast::<ArgbColor>() {
            self.color = *color;
            self.id.request_layout();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let rect = Rect::new(0.0, 0.0, self.size.width as f64, self.size.height as f64);
        if rect.is_zero_area() {
            return;
        }
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);
        cx.save();
        cx.clip(&rrect);
        if self.color.a() < 255 {
            checkerboard::paint_checkerboard(cx, rect);
        }
        cx.fill(&rect, Color::from(self.color), 0.0);
        cx.restore();
        cx.stroke(&rrect, Color::rgb8(180, 180, 180), &Stroke::new(1.0));
    }
}
