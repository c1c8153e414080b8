//! The drawing-surface seam shared by the browser canvas, the vello scene,
//! and tests.

use crate::layout::{BarRect, Viewport};

/// A mutable 2D target the client resizes, clears, and fills.
pub trait DrawSurface {
    /// Current drawing-surface dimensions.
    fn viewport(&self) -> Viewport;

    /// Resize the drawing surface. Resizing resets the bitmap.
    fn set_viewport(&mut self, viewport: Viewport);

    /// Clear the whole surface.
    fn clear(&mut self);

    /// Fill a rounded rectangle. `rect` may carry a negative height.
    fn fill_round_rect(&mut self, rect: &BarRect, radius: f64, fill: &str);
}

/// A single recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Resize(Viewport),
    Clear,
    FillRoundRect {
        rect: BarRect,
        radius: f64,
        fill: String,
    },
}

/// Records every operation instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// Commands issued since the most recent clear or resize, i.e. what is
    /// currently visible.
    pub fn visible(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear | DrawCommand::Resize(_)))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    /// Drain the command history. `visible()` is empty afterwards, as if
    /// nothing had been drawn.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.commands.push(DrawCommand::Resize(viewport));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_round_rect(&mut self, rect: &BarRect, radius: f64, fill: &str) {
        self.commands.push(DrawCommand::FillRoundRect {
            rect: *rect,
            radius,
            fill: fill.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_starts_after_last_reset() {
        let mut s = RecordingSurface::new(Viewport::default());
        let r = BarRect { x: 0.0, y: 0.0, width: 1.0, height: 1.0 };
        s.fill_round_rect(&r, 5.0, "#fff");
        s.clear();
        s.fill_round_rect(&r, 5.0, "#fff");
        assert_eq!(s.visible().len(), 1);

        s.set_viewport(Viewport::new(10.0, 10.0));
        assert!(s.visible().is_empty());
    }

    #[test]
    fn take_commands_drains_visible() {
        let mut s = RecordingSurface::new(Viewport::default());
        let r = BarRect { x: 0.0, y: 0.0, width: 1.0, height: 1.0 };
        s.fill_round_rect(&r, 5.0, "#fff");
        s.fill_round_rect(&r, 5.0, "#fff");
        assert_eq!(s.visible().len(), 2);

        assert_eq!(s.take_commands().len(), 2);
        assert!(s.visible().is_empty());
        assert!(s.commands.is_empty());
    }
}
