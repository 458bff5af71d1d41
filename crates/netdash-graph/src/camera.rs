//! Pan/zoom camera for the topology canvas.
//!
//! World space is where layout happens; screen space is canvas pixels.
//! `screen = world * scale + pan`.

use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;

/// A 2D point or vector. Which space it lives in depends on context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(self, other: Self) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when either side is zero, negative or NaN.
    pub fn is_degenerate(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Camera state: a screen-space translation plus a uniform scale.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Screen-space translation applied after scaling.
    pan: Point,
    /// Zoom factor (1.0 = identity), kept within the configured range.
    scale: f64,
    config: CameraConfig,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            pan: Point::ORIGIN,
            scale: 1.0,
            config,
        }
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.pan.x,
            world.y * self.scale + self.pan.y,
        )
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.scale,
            (screen.y - self.pan.y) / self.scale,
        )
    }

    /// Converts a world-space length (radius, font size) to screen pixels.
    pub fn to_screen_len(&self, len: f64) -> f64 {
        len * self.scale
    }

    /// Translates the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Zooms one step in the wheel direction, keeping the world point under
    /// `cursor` fixed on screen.
    ///
    /// Negative `delta_y` (wheel up) zooms in. Returns `false` when the scale
    /// did not change, either because `delta_y` is zero or the scale is
    /// already at the limit.
    pub fn zoom_at(&mut self, cursor: Point, delta_y: f64) -> bool {
        let step = if delta_y < 0.0 {
            self.config.zoom_step
        } else if delta_y > 0.0 {
            -self.config.zoom_step
        } else {
            return false;
        };

        let old_scale = self.scale;
        let new_scale = (old_scale + step).clamp(self.config.min_scale, self.config.max_scale);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return false;
        }

        let ratio = new_scale / old_scale;
        self.pan.x = cursor.x - (cursor.x - self.pan.x) * ratio;
        self.pan.y = cursor.y - (cursor.y - self.pan.y) * ratio;
        self.scale = new_scale;
        true
    }

    /// Back to identity: no pan, scale 1.
    pub fn reset(&mut self) {
        self.pan = Point::ORIGIN;
        self.scale = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_round_trip_with_pan_and_scale() {
        let mut camera = Camera::default();
        camera.pan_by(40.0, -12.0);
        camera.zoom_at(Point::new(10.0, 10.0), -1.0);

        let world = Point::new(123.0, 456.0);
        let back = camera.screen_to_world(camera.world_to_screen(world));
        assert!(close(world, back));
    }

    #[test]
    fn test_zoom_anchors_at_cursor() {
        let mut camera = Camera::default();
        let cursor = Point::new(100.0, 100.0);
        let world_before = camera.screen_to_world(cursor);

        assert!(camera.zoom_at(cursor, -120.0));
        assert!((camera.scale() - 1.1).abs() < EPS);
        assert!(close(camera.world_to_screen(world_before), cursor));
    }

    #[test]
    fn test_zoom_out_and_clamp() {
        let mut camera = Camera::default();
        for _ in 0..20 {
            camera.zoom_at(Point::ORIGIN, 1.0);
        }
        assert!((camera.scale() - 0.5).abs() < EPS);
        assert!(!camera.zoom_at(Point::ORIGIN, 1.0));

        for _ in 0..40 {
            camera.zoom_at(Point::ORIGIN, -1.0);
        }
        assert!((camera.scale() - 2.5).abs() < EPS);
    }

    #[test]
    fn test_zero_delta_is_ignored() {
        let mut camera = Camera::default();
        assert!(!camera.zoom_at(Point::new(5.0, 5.0), 0.0));
        assert_eq!(camera.scale(), 1.0);
        assert_eq!(camera.pan(), Point::ORIGIN);
    }

    #[test]
    fn test_reset() {
        let mut camera = Camera::default();
        camera.pan_by(50.0, 70.0);
        camera.zoom_at(Point::new(300.0, 200.0), -1.0);

        camera.reset();
        assert_eq!(camera.pan(), Point::ORIGIN);
        assert_eq!(camera.scale(), 1.0);
    }

    #[test]
    fn test_degenerate_size() {
        assert!(Size::new(0.0, 100.0).is_degenerate());
        assert!(Size::new(100.0, -1.0).is_degenerate());
        assert!(Size::new(f64::NAN, 10.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }
}
