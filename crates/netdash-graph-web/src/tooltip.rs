use netdash_graph::{Point, TooltipPresenter};
use web_sys::{HtmlCanvasElement, HtmlElement};

/// Tooltip backed by a page element the host page supplies. The element is
/// positioned in page coordinates, so it is expected to be `position: absolute`
/// relative to the document.
pub struct DomTooltip {
    element: HtmlElement,
    canvas: HtmlCanvasElement,
}

impl DomTooltip {
    pub fn new(element: HtmlElement, canvas: HtmlCanvasElement) -> Self {
        let tooltip = Self { element, canvas };
        tooltip.hide_element();
        tooltip
    }

    fn hide_element(&self) {
        self.element.style().set_property("display", "none").ok();
    }

    fn page_offset(&self) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        let (scroll_x, scroll_y) = web_sys::window()
            .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
            .unwrap_or_default();
        Point::new(rect.left() + scroll_x, rect.top() + scroll_y)
    }
}

impl TooltipPresenter for DomTooltip {
    fn show(&mut self, anchor: Point, html: &str) {
        let offset = self.page_offset();
        self.element.set_inner_html(html);
        let style = self.element.style();
        style.set_property("left", &format!("{:.0}px", anchor.x + offset.x)).ok();
        style.set_property("top", &format!("{:.0}px", anchor.y + offset.y)).ok();
        style.set_property("display", "block").ok();
    }

    fn hide(&mut self) {
        self.hide_element();
    }
}
