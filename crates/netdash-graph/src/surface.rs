//! Minimal drawing capability the renderer targets.
//!
//! All coordinates are screen-space CSS pixels; the renderer applies the
//! camera before calling into the surface.

use crate::camera::{Point, Size};

/// A CSS color plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: &'static str,
    pub alpha: f64,
}

impl Paint {
    pub const fn solid(color: &'static str) -> Self {
        Self { color, alpha: 1.0 }
    }

    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self {
            color: self.color,
            alpha,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f64,
    pub paint: Paint,
}

/// Drawing target: a canvas in the browser, a recorder in tests.
pub trait Surface {
    /// Logical size in CSS pixels.
    fn size(&self) -> Size;

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: &'static str);

    fn fill_rect(&mut self, origin: Point, size: Size, paint: Paint);

    fn draw_line(&mut self, from: Point, to: Point, width: f64, paint: Paint);

    /// Filled circle.
    fn draw_circle(&mut self, center: Point, radius: f64, paint: Paint);

    /// Text horizontally centered on `at.x`, top edge at `at.y`.
    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle);
}
