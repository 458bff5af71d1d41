//! Headless surface and tooltip that record what they were asked to do.
//!
//! Used by the unit and integration tests; also handy for snapshotting a
//! frame outside the browser.

use crate::camera::{Point, Size};
use crate::surface::{Paint, Surface, TextStyle};
use crate::tooltip::TooltipPresenter;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        color: &'static str,
    },
    Rect {
        origin: Point,
        size: Size,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Text {
        text: String,
        at: Point,
        style: TextStyle,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    calls: Vec<DrawCall>,
    frames: usize,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            calls: Vec::new(),
            frames: 0,
        }
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Calls since the most recent `clear`.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Number of frames drawn so far (one per `clear`).
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64, Paint)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Circle {
                center,
                radius,
                paint,
            } => Some((*center, *radius, *paint)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Paint of the circle drawn within half a pixel of `center`.
    pub fn circle_near(&self, center: Point) -> Option<Paint> {
        self.circles()
            .find(|(c, _, _)| c.distance_sq(center) < 0.25)
            .map(|(_, _, paint)| paint)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: &'static str) {
        self.calls.clear();
        self.frames += 1;
        self.calls.push(DrawCall::Clear { color });
    }

    fn fill_rect(&mut self, origin: Point, size: Size, paint: Paint) {
        self.calls.push(DrawCall::Rect {
            origin,
            size,
            paint,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f64, paint: Paint) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            width,
            paint,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: Paint) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            paint,
        });
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            at,
            style,
        });
    }
}

/// Tooltip state as last set by the view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingTooltip {
    /// `(anchor, html)` while visible.
    pub shown: Option<(Point, String)>,
    pub show_count: usize,
    pub hide_count: usize,
}

impl RecordingTooltip {
    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    pub fn html(&self) -> Option<&str> {
        self.shown.as_ref().map(|(_, html)| html.as_str())
    }
}

impl TooltipPresenter for RecordingTooltip {
    fn show(&mut self, anchor: Point, html: &str) {
        self.show_count += 1;
        self.shown = Some((anchor, html.to_string()));
    }

    fn hide(&mut self) {
        self.hide_count += 1;
        self.shown = None;
    }
}
