//! Browser binding for the netdash topology graph.
//!
//! ```js
//! import init_wasm, { init } from "./netdash_graph_web.js";
//! await init_wasm();
//! const graph = init("topology", document.getElementById("tooltip"));
//! graph.setData(status);
//! graph.resetView();
//! ```

#![cfg(target_arch = "wasm32")]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

mod canvas;
mod error;
mod events;
mod logging;
mod tooltip;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use netdash_graph::{GraphConfig, StatusSnapshot, TopologyView};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

pub use canvas::CanvasSurface;
pub use error::WebError;
pub use tooltip::DomTooltip;

use events::SharedView;

/// A topology graph bound to one container. Returned by [`init`] and held by
/// the page for its lifetime; dropping it detaches every listener.
#[wasm_bindgen]
pub struct TopologyGraph {
    view: SharedView,
    container: Element,
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl TopologyGraph {
    /// Replaces the displayed snapshot with a parsed `/api/status` object.
    #[wasm_bindgen(js_name = setData)]
    pub fn set_data(&self, snapshot: JsValue) -> Result<(), JsValue> {
        let snapshot: StatusSnapshot = serde_wasm_bindgen::from_value(snapshot)
            .map_err(|e| WebError::InvalidSnapshot(e.to_string()))?;
        let mut view = self
            .view
            .try_borrow_mut()
            .map_err(|e| WebError::Dom(e.to_string()))?;
        // The container may have changed size without a window resize.
        view.surface_mut().fit_to(&self.container);
        view.set_data(&snapshot);
        Ok(())
    }

    #[wasm_bindgen(js_name = resetView)]
    pub fn reset_view(&self) -> Result<(), JsValue> {
        self.view
            .try_borrow_mut()
            .map_err(|e| WebError::Dom(e.to_string()))?
            .reset_view();
        Ok(())
    }
}

/// Attaches a graph to the element with id `container_id`, using `tooltip`
/// for hover details.
#[wasm_bindgen]
pub fn init(container_id: &str, tooltip: HtmlElement) -> Result<TopologyGraph, JsValue> {
    build(container_id, tooltip, GraphConfig::default()).map_err(JsValue::from)
}

/// Like [`init`], with tuning overrides. Missing fields keep their defaults.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(
    container_id: &str,
    tooltip: HtmlElement,
    config: JsValue,
) -> Result<TopologyGraph, JsValue> {
    let config: GraphConfig = if config.is_undefined() || config.is_null() {
        GraphConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(|e| WebError::InvalidConfig(e.to_string()))?
    };
    build(container_id, tooltip, config).map_err(JsValue::from)
}

fn build(container_id: &str, tooltip: HtmlElement, config: GraphConfig) -> Result<TopologyGraph, WebError> {
    logging::init();

    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| WebError::ContainerNotFound(container_id.to_string()))?;

    let surface = CanvasSurface::attach(&container)?;
    let tooltip = DomTooltip::new(tooltip, surface.canvas().clone());
    let mut view = TopologyView::new(surface, tooltip, config);
    view.redraw();

    let view = Rc::new(RefCell::new(view));
    let listeners = events::attach(&view, &container, &window);
    tracing::info!(container = container_id, "topology graph initialized");

    Ok(TopologyGraph {
        view,
        container,
        _listeners: listeners,
    })
}
