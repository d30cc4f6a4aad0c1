//! Checkerboard backdrop that makes translucent colors readable.

use floem::context::PaintCx;
use floem::kurbo::Rect;
use floem::peniko::Color;
use floem_renderer::Renderer;

use crate::constants;

const LIGHT: Color = Color::rgb8(255, 255, 255);
const DARK: Color = Color::rgb8(204, 204, 204);

/// Cells of `rect` that get the dark shade, clipped to `rect`.
fn dark_cells(rect: Rect, cell: f64) -> impl Iterator<Item = Rect> {
    let cols = (rect.width() / cell).ceil() as usize;
    let rows = (rect.height() / cell).ceil() as usize;
    (0..rows).flat_map(move |row| {
        (0..cols)
            .filter(move |col| (row + col) % 2 == 1)
            .map(move |col| {
                let x = rect.x0 + col as f64 * cell;
                let y = rect.y0 + row as f64 * cell;
                Rect::new(x, y, (x + cell).min(rect.x1), (y + cell).min(rect.y1))
            })
    })
}

/// Paint a checkerboard into `rect`.
pub(crate) fn paint_checkerboard(cx: &mut PaintCx, rect: Rect) {
    cx.fill(&rect, LIGHT, 0.0);
    for cell in dark_cells(rect, constants::CHECKER_CELL) {
        cx.fill(&cell, DARK, 0.0);
    }
}
