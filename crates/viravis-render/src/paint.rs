//! Bars → Vello drawing commands.
//!
//! `SceneSurface` is the native counterpart of the browser canvas: the
//! client clears and fills it, and the host hands the scene to a vello
//! renderer.

use kurbo::{Affine, Rect, RoundedRect};
use peniko::{Color, Fill};
use vello::Scene;
use viravis_core::{BarRect, DrawSurface, Viewport};

/// A `DrawSurface` that accumulates fills into a Vello scene.
pub struct SceneSurface {
    scene: Scene,
    viewport: Viewport,
    fills: usize,
}

impl SceneSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            scene: Scene::new(),
            viewport,
            fills: 0,
        }
    }

    /// The scene built since the last clear or resize.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Shapes filled since the last clear or resize.
    pub fn fill_count(&self) -> usize {
        self.fills
    }
}

impl DrawSurface for SceneSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.clear();
    }

    fn clear(&mut self) {
        self.scene.reset();
        self.fills = 0;
    }

    fn fill_round_rect(&mut self, rect: &BarRect, radius: f64, fill: &str) {
        let color = parse_hex_rgb(fill)
            .map(|[r, g, b]| Color::from_rgba8(r, g, b, 255))
            .unwrap_or_else(|| {
                log::warn!("unsupported fill {fill:?}, painting white");
                Color::from_rgb8(255, 255, 255)
            });
        let shape = bar_shape(rect, radius);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, color, None, &shape);
        self.fills += 1;
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Rounded rectangle for a bar. Negative heights extend downward from `y`.
pub fn bar_shape(rect: &BarRect, radius: f64) -> RoundedRect {
    let r = rect.normalized();
    Rect::new(r.x, r.y, r.x + r.width, r.y + r.height).to_rounded_rect(radius)
}

/// Parse `#rgb` or `#rrggbb`.
pub fn parse_hex_rgb(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, ch) in out.iter_mut().zip(hex.chars()) {
                let v = ch.to_digit(16)? as u8;
                *slot = v * 17;
            }
            Some(out)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some([r, g, b])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use viravis_core::{ChartClient, PollPolicy};

    #[test]
    fn short_and_long_hex() {
        assert_eq!(parse_hex_rgb("#fff"), Some([255, 255, 255]));
        assert_eq!(parse_hex_rgb("#1a2B3c"), Some([0x1a, 0x2b, 0x3c]));
        assert_eq!(parse_hex_rgb("fff"), None);
        assert_eq!(parse_hex_rgb("#ffff"), None);
        assert_eq!(parse_hex_rgb("#ggg"), None);
    }

    #[test]
    fn bar_shape_matches_rect() {
        let shape = bar_shape(
            &BarRect {
                x: 100.0,
                y: 80.0,
                width: 100.0,
                height: 20.0,
            },
            5.0,
        );
        assert_eq!(shape.rect(), Rect::new(100.0, 80.0, 200.0, 100.0));
    }

    #[test]
    fn negative_bar_extends_below_bottom() {
        let shape = bar_shape(
            &BarRect {
                x: 0.0,
                y: 120.0,
                width: 50.0,
                height: -20.0,
            },
            5.0,
        );
        assert_eq!(shape.rect(), Rect::new(0.0, 100.0, 50.0, 120.0));
    }

    #[test]
    fn client_drives_scene_surface() {
        let surface = SceneSurface::new(Viewport::new(300.0, 100.0));
        let mut client = ChartClient::new(surface, PollPolicy::Overlapping);

        client.render(&[1.0, 2.0, 3.0]);
        assert_eq!(client.surface().fill_count(), 3);

        client.render(&[1.0]);
        assert_eq!(client.surface().fill_count(), 1);

        client.resize(Viewport::new(1024.0, 768.0));
        assert_eq!(client.surface().fill_count(), 0);
    }
}
