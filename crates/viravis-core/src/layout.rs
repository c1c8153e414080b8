//! Bar geometry.
//!
//! Bars share a uniform width, sit left-to-right in input order, and grow
//! upward from the bottom edge of the viewport.

use crate::config::BAR_SCALE;

/// Drawing-surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// One bar's rectangle. `height` is signed: a negative value means the
/// bar extends below the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    /// The same rectangle with non-negative extents.
    pub fn normalized(&self) -> Self {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Self { x, y, width, height }
    }
}

/// Compute one rectangle per data point.
///
/// An empty series yields no bars.
pub fn bar_layout(data: &[f64], viewport: Viewport) -> Vec<BarRect> {
    if data.is_empty() {
        return Vec::new();
    }

    let w = viewport.width / data.len() as f64;
    let bottom = viewport.height;

    data.iter()
        .enumerate()
        .map(|(i, &l)| {
            let h = l * BAR_SCALE;
            BarRect {
                x: i as f64 * w,
                y: bottom - h,
                width: w,
                height: h,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_bars_on_300_by_100() {
        let bars = bar_layout(&[1.0, 2.0, 3.0], Viewport::new(300.0, 100.0));
        assert_eq!(
            bars,
            vec![
                BarRect { x: 0.0, y: 90.0, width: 100.0, height: 10.0 },
                BarRect { x: 100.0, y: 80.0, width: 100.0, height: 20.0 },
                BarRect { x: 200.0, y: 70.0, width: 100.0, height: 30.0 },
            ]
        );
    }

    #[test]
    fn empty_series_has_no_bars() {
        assert!(bar_layout(&[], Viewport::default()).is_empty());
    }

    #[test]
    fn negative_value_hangs_below_bottom() {
        let bars = bar_layout(&[-2.0], Viewport::new(50.0, 100.0));
        assert_eq!(bars[0], BarRect { x: 0.0, y: 120.0, width: 50.0, height: -20.0 });
        assert_eq!(
            bars[0].normalized(),
            BarRect { x: 0.0, y: 100.0, width: 50.0, height: 20.0 }
        );
    }

    #[test]
    fn zero_value_is_a_flat_bar_on_the_edge() {
        let bars = bar_layout(&[0.0, 1.0], Viewport::new(10.0, 40.0));
        assert_eq!(bars[0], BarRect { x: 0.0, y: 40.0, width: 5.0, height: 0.0 });
    }

    #[test]
    fn fractional_width_is_kept() {
        let bars = bar_layout(&[1.0, 1.0, 1.0], Viewport::new(100.0, 10.0));
        let w = 100.0 / 3.0;
        for (i, bar) in bars.iter().enumerate() {
            assert!((bar.width - w).abs() < 1e-9);
            assert!((bar.x - i as f64 * w).abs() < 1e-9);
        }
    }
}
