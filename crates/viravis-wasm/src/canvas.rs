//! Canvas2D drawing surface.
//!
//! Wraps the page's `<canvas>` element and its 2D context so the client can
//! resize, clear, and fill it.

use viravis_core::{BarRect, DrawSurface, Viewport};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        // Assigning either dimension resets the bitmap.
        self.canvas.set_width(viewport.width as u32);
        self.canvas.set_height(viewport.height as u32);
    }

    fn clear(&mut self) {
        let Viewport { width, height } = self.viewport();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_round_rect(&mut self, rect: &BarRect, radius: f64, fill: &str) {
        let r = rect.normalized();
        self.ctx.set_fill_style_str(fill);
        rounded_rect_path(&self.ctx, r.x, r.y, r.width, r.height, radius);
        self.ctx.fill();
    }
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = clamp_radius(w, h, r);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.arc_to(x + w, y, x + w, y + r, r).unwrap_or(());
    ctx.line_to(x + w, y + h - r);
    ctx.arc_to(x + w, y + h, x + w - r, y + h, r).unwrap_or(());
    ctx.line_to(x + r, y + h);
    ctx.arc_to(x, y + h, x, y + h - r, r).unwrap_or(());
    ctx.line_to(x, y + r);
    ctx.arc_to(x, y, x + r, y, r).unwrap_or(());
    ctx.close_path();
}

/// Largest usable corner radius for a `w`×`h` box. Degenerate sizes (NaN,
/// zero) give 0.
fn clamp_radius(w: f64, h: f64, r: f64) -> f64 {
    let limit = (w / 2.0).min(h / 2.0);
    if limit.is_nan() || limit <= 0.0 {
        0.0
    } else {
        r.min(limit)
    }
}
