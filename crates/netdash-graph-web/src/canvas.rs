//! `Surface` over a 2D canvas, rendered at the display's pixel density.

use netdash_graph::{Paint, Point, Size, Surface, TextStyle};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::error::WebError;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Logical size in CSS pixels.
    size: Size,
    pixel_ratio: f64,
}

impl CanvasSurface {
    /// Creates a canvas filling `container` and appends it.
    pub fn attach(container: &Element) -> Result<Self, WebError> {
        let document = web_sys::window()
            .ok_or(WebError::NoWindow)?
            .document()
            .ok_or(WebError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| WebError::dom(&e))?
            .dyn_into()
            .map_err(|_| WebError::Dom("created element is not a canvas".to_string()))?;
        let style = canvas.style();
        style.set_property("display", "block").ok();
        style.set_property("width", "100%").ok();
        style.set_property("height", "100%").ok();
        style.set_property("cursor", "grab").ok();
        container.append_child(&canvas).map_err(|e| WebError::dom(&e))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| WebError::dom(&e))?
            .ok_or(WebError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::ContextUnavailable)?;

        let mut surface = Self {
            canvas,
            ctx,
            size: Size::default(),
            pixel_ratio: 1.0,
        };
        surface.fit_to(container);
        Ok(surface)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Matches the backing store to the container at the current device pixel
    /// ratio. Returns the new logical size.
    pub fn fit_to(&mut self, container: &Element) -> Size {
        let pixel_ratio = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio()).max(1.0);
        let width = f64::from(container.client_width().max(0));
        let height = f64::from(container.client_height().max(0));

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((width * pixel_ratio).round() as u32);
            self.canvas.set_height((height * pixel_ratio).round() as u32);
        }
        self.size = Size::new(width, height);
        self.pixel_ratio = pixel_ratio;
        tracing::debug!(width, height, pixel_ratio, "canvas resized");
        self.size
    }

    /// Converts viewport client coordinates to canvas-local CSS pixels.
    pub fn to_local(&self, client_x: i32, client_y: i32) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(f64::from(client_x) - rect.left(), f64::from(client_y) - rect.top())
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x <= self.size.width && point.y <= self.size.height
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: &'static str) {
        let ratio = self.pixel_ratio;
        self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0).ok();
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, self.size.width, self.size.height);
    }

    fn fill_rect(&mut self, origin: Point, size: Size, paint: Paint) {
        self.ctx.set_global_alpha(paint.alpha);
        self.ctx.set_fill_style_str(paint.color);
        self.ctx.fill_rect(origin.x, origin.y, size.width, size.height);
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f64, paint: Paint) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.set_stroke_style_str(paint.color);
        self.ctx.set_line_width(width);
        self.ctx.set_global_alpha(paint.alpha);
        self.ctx.stroke();
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: Paint) {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI)
            .ok();
        self.ctx.set_global_alpha(paint.alpha);
        self.ctx.set_fill_style_str(paint.color);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.ctx.set_global_alpha(style.paint.alpha);
        self.ctx.set_fill_style_str(style.paint.color);
        self.ctx.set_font(&format!("{:.1}px sans-serif", style.size_px));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("top");
        self.ctx.fill_text(text, at.x, at.y).ok();
        self.ctx.set_global_alpha(1.0);
    }
}
