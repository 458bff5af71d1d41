//! DOM event wiring. Press, wheel and leave are taken from the canvas; move,
//! release and resize from the window, so a drag keeps tracking after the
//! pointer leaves the canvas.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use netdash_graph::{InputEvent, TopologyView};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, WheelEvent, Window};

use crate::canvas::CanvasSurface;
use crate::tooltip::DomTooltip;

/// `MouseEvent.button` of the main (usually left) button.
const PRIMARY_BUTTON: i16 = 0;

pub type SharedView = Rc<RefCell<TopologyView<CanvasSurface, DomTooltip>>>;

pub fn attach(view: &SharedView, container: &Element, window: &Window) -> Vec<EventListener> {
    let canvas = view.borrow().surface().canvas().clone();
    let mut listeners = Vec::with_capacity(6);

    listeners.push({
        let view = Rc::clone(view);
        EventListener::new(&canvas, "mousedown", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if event.button() != PRIMARY_BUTTON {
                return;
            }
            let Ok(mut view) = view.try_borrow_mut() else {
                return;
            };
            let at = view.surface().to_local(event.client_x(), event.client_y());
            view.handle(InputEvent::Press { at });
        })
    });

    listeners.push({
        let view = Rc::clone(view);
        EventListener::new_with_options(
            &canvas,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(event) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                event.prevent_default();
                let Ok(mut view) = view.try_borrow_mut() else {
                    return;
                };
                let at = view.surface().to_local(event.client_x(), event.client_y());
                view.handle(InputEvent::Wheel {
                    at,
                    delta_y: event.delta_y(),
                });
            },
        )
    });

    listeners.push({
        let view = Rc::clone(view);
        EventListener::new(&canvas, "mouseleave", move |_event| {
            if let Ok(mut view) = view.try_borrow_mut() {
                view.pointer_left();
            }
        })
    });

    listeners.push({
        let view = Rc::clone(view);
        EventListener::new(window, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let Ok(mut view) = view.try_borrow_mut() else {
                return;
            };
            let at = view.surface().to_local(event.client_x(), event.client_y());
            // Hover only matters over the canvas; drags and pans track everywhere.
            if view.mode().is_idle() && !view.surface().contains(at) {
                return;
            }
            view.handle(InputEvent::Move { at });
        })
    });

    listeners.push({
        let view = Rc::clone(view);
        EventListener::new(window, "mouseup", move |_event| {
            if let Ok(mut view) = view.try_borrow_mut() {
                view.handle(InputEvent::Release);
            }
        })
    });

    listeners.push({
        let view = Rc::clone(view);
        let container = container.clone();
        EventListener::new(window, "resize", move |_event| {
            let Ok(mut view) = view.try_borrow_mut() else {
                return;
            };
            let size = view.surface_mut().fit_to(&container);
            view.handle(InputEvent::Resize { size });
        })
    });

    tracing::debug!(count = listeners.len(), "event listeners attached");
    listeners
}
