//! Pointer interaction state machine.
//!
//! One transition function consumes a closed set of events. Drag and pan are
//! mutually exclusive; releasing the pointer anywhere returns to idle.

use crate::camera::{Camera, Point, Size};
use crate::config::InputConfig;
use crate::graph::GraphState;
use crate::tooltip::node_html;

/// Input events, already translated to canvas-relative CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Press { at: Point },
    Move { at: Point },
    /// Pointer released, on or off the canvas.
    Release,
    Wheel { at: Point, delta_y: f64 },
    /// Container resized; the surface has already adjusted its backing store.
    Resize { size: Size },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// A node follows the cursor.
    Dragging { node_id: String },
    /// The camera follows the cursor; `last` is the previous screen point.
    Panning { last: Point },
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum TooltipUpdate {
    #[default]
    Keep,
    Show {
        anchor: Point,
        html: String,
    },
    Hide,
}

/// What the caller must do after an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub redraw: bool,
    pub tooltip: TooltipUpdate,
}

impl Response {
    fn redraw() -> Self {
        Self {
            redraw: true,
            tooltip: TooltipUpdate::Keep,
        }
    }

    fn tooltip(tooltip: TooltipUpdate) -> Self {
        Self {
            redraw: false,
            tooltip,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputController {
    mode: InteractionMode,
    config: InputConfig,
}

impl InputController {
    pub fn new(config: InputConfig) -> Self {
        Self {
            mode: InteractionMode::Idle,
            config,
        }
    }

    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    /// Applies one event. Only the camera and, while dragging, the dragged
    /// node's position are mutated.
    pub fn handle(&mut self, event: InputEvent, graph: &mut GraphState, camera: &mut Camera) -> Response {
        match event {
            // A second press (another button) while a gesture runs is ignored.
            InputEvent::Press { .. } if !self.mode.is_idle() => Response::default(),
            InputEvent::Press { at } => {
                let world = camera.screen_to_world(at);
                self.mode = match graph.hit_test(world, self.config.hit_tolerance) {
                    Some(node) => InteractionMode::Dragging {
                        node_id: node.id.clone(),
                    },
                    None => InteractionMode::Panning { last: at },
                };
                tracing::trace!(mode = ?self.mode, "pointer pressed");
                Response::default()
            }
            InputEvent::Move { at } => self.pointer_moved(at, graph, camera),
            InputEvent::Release => {
                if !self.mode.is_idle() {
                    tracing::trace!(mode = ?self.mode, "pointer released");
                }
                self.mode = InteractionMode::Idle;
                Response::tooltip(TooltipUpdate::Hide)
            }
            InputEvent::Wheel { at, delta_y } => Response {
                redraw: camera.zoom_at(at, delta_y),
                tooltip: TooltipUpdate::Keep,
            },
            // Backing resolution changed; the active mode carries on.
            InputEvent::Resize { .. } => Response::redraw(),
        }
    }

    fn pointer_moved(&mut self, at: Point, graph: &mut GraphState, camera: &mut Camera) -> Response {
        match &mut self.mode {
            InteractionMode::Dragging { node_id } => {
                let world = camera.screen_to_world(at);
                if graph.positions_mut().update(node_id, world) {
                    Response::redraw()
                } else {
                    Response::default()
                }
            }
            InteractionMode::Panning { last } => {
                camera.pan_by(at.x - last.x, at.y - last.y);
                *last = at;
                Response::redraw()
            }
            InteractionMode::Idle => {
                let world = camera.screen_to_world(at);
                let update = match graph.hit_test(world, self.config.hit_tolerance) {
                    Some(node) => TooltipUpdate::Show {
                        anchor: Point::new(at.x + self.config.tooltip_offset, at.y + self.config.tooltip_offset),
                        html: node_html(node),
                    },
                    None => TooltipUpdate::Hide,
                };
                Response::tooltip(update)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NodeRadii;
    use crate::snapshot::{Device, StatusSnapshot};

    fn graph() -> GraphState {
        let mut snapshot = StatusSnapshot::default();
        snapshot.discovery.known_devices = vec![
            Device {
                name: "nas".to_string(),
                up: true,
                ..Device::default()
            },
            Device {
                name: "<b>tv</b>".to_string(),
                up: false,
                ..Device::default()
            },
        ];
        let mut graph = GraphState::from_snapshot(&snapshot, &NodeRadii::default());
        graph.positions_mut().insert("internet", Point::new(400.0, 40.0));
        graph.positions_mut().insert("nas", Point::new(100.0, 100.0));
        graph.positions_mut().insert("<b>tv</b>", Point::new(300.0, 300.0));
        graph
    }

    #[test]
    fn test_press_on_node_starts_drag() {
        let mut graph = graph();
        let mut camera = Camera::default();
        let mut input = InputController::default();

        input.handle(InputEvent::Press { at: Point::new(102.0, 98.0) }, &mut graph, &mut camera);
        assert_eq!(
            input.mode(),
            &InteractionMode::Dragging {
                node_id: "nas".to_string()
            }
        );
    }

    #[test]
    fn test_press_during_gesture_keeps_mode() {
        let mut graph = graph();
        let mut camera = Camera::default();
        let mut input = InputController::default();

        input.handle(InputEvent::Press { at: Point::new(600.0, 500.0) }, &mut graph, &mut camera);
        let response = input.handle(InputEvent::Press { at: Point::new(100.0, 100.0) }, &mut graph, &mut camera);
        assert_eq!(response, Response::default());
        assert_eq!(
            input.mode(),
            &InteractionMode::Panning {
                last: Point::new(600.0, 500.0)
            }
        );

        input.handle(InputEvent::Release, &mut graph, &mut camera);
        input.handle(InputEvent::Press { at: Point::new(100.0, 100.0) }, &mut graph, &mut camera);
        input.handle(InputEvent::Press { at: Point::new(600.0, 500.0) }, &mut graph, &mut camera);
        assert!(matches!(input.mode(), InteractionMode::Dragging { node_id } if node_id == "nas"));
    }

    #[test]
    fn test_drag_moves_only_that_node() {
        let mut graph = graph();
        let mut camera = Camera::default();
        camera.pan_by(10.0, 0.0);
        let mut input = InputController::default();
        let before = graph.positions().clone();

        input.handle(InputEvent::Press { at: Point::new(110.0, 100.0) }, &mut graph, &mut camera);
        let response = input.handle(InputEvent::Move { at: Point::new(210.0, 150.0) }, &mut graph, &mut camera);

        assert!(response.redraw);
        assert_eq!(graph.position("nas"), Some(Point::new(200.0, 150.0)));
        assert_eq!(graph.position("internet"), before.get("internet"));
        assert_eq!(graph.position("<b>tv</b>"), before.get("<b>tv</b>"));
        assert_eq!(camera.pan(), Point::new(10.0, 0.0));
        assert_eq!(camera.scale(), 1.0);
    }

    #[test]
    fn test_press_on_empty_space_pans() {
        let mut graph = graph();
        let mut camera = Camera::default();
        let mut input = InputController::default();
        let before = graph.positions().clone();

        input.handle(InputEvent::Press { at: Point::new(600.0, 500.0) }, &mut graph, &mut camera);
        assert!(matches!(input.mode(), InteractionMode::Panning { .. }));

        input.handle(InputEvent::Move { at: Point::new(610.0, 505.0) }, &mut graph, &mut camera);
        input.handle(InputEvent::Move { at: Point::new(630.0, 515.0) }, &mut graph, &mut camera);
        assert_eq!(camera.pan(), Point::new(30.0, 15.0));
        assert_eq!(graph.positions(), &before);
    }

    #[test]
    fn test_release_returns_to_idle_and_hides_tooltip() {
        let mut graph = graph();
        let mut camera = Camera::default();
        let mut input = InputController::default();

        input.handle(InputEvent::Press { at: Point::new(100.0, 100.0) }, &mut graph, &mut camera);
        let response = input.handle(InputEvent::Release, &mut graph, &mut camera);
        assert!(input.mode().is_idle());
        assert_eq!(response.tooltip, TooltipUpdate::Hide);
    }

    #[test]
    fn test_hover_shows_escaped_tooltip_for_down_node() {
        let mut graph = graph();
        let mut camera = Camera::default();
        let mut input = InputController::default();

        let response = input.handle(InputEvent::Move { at: Point::new(300.0, 300.0) }, &mut graph, &mut camera);
        let TooltipUpdate::Show { anchor, html } = response.tooltip else {
            panic!("expected tooltip");
        };
        assert_eq!(anchor, Point::new(314.0, 314.0));
        assert!(html.contains("&lt;b&gt;tv&lt;/b&gt;"));
        assert!(html.contains("Status: Down"));
        assert!(!response.redraw);

        let response = input.handle(InputEvent::Move { at: Point::new(700.0, 500.0) }, &mut graph, &mut camera);
        assert_eq!(response.tooltip, TooltipUpdate::Hide);
    }

    #[test]
    fn test_hit_test_uses_world_coordinates() {
        let mut graph = graph();
        let mut camera = Camera::default();
        camera.zoom_at(Point::ORIGIN, -1.0); // scale 1.1, pan stays at origin
        let mut input = InputController::default();

        input.handle(InputEvent::Press { at: Point::new(110.0, 110.0) }, &mut graph, &mut camera);
        assert!(matches!(input.mode(), InteractionMode::Dragging { node_id } if node_id == "nas"));
    }

    #[test]
    fn test_resize_keeps_active_mode() {
        let mut graph = graph();
        let mut camera = Camera::default();
        let mut input = InputController::default();

        input.handle(InputEvent::Press { at: Point::new(600.0, 500.0) }, &mut graph, &mut camera);
        let response = input.handle(
            InputEvent::Resize {
                size: Size::new(1024.0, 768.0),
            },
            &mut graph,
            &mut camera,
        );
        assert!(response.redraw);
        assert!(matches!(input.mode(), InteractionMode::Panning { .. }));
    }

    #[test]
    fn test_wheel_zooms_without_changing_mode() {
        let mut graph = graph();
        let mut camera = Camera::default();
        let mut input = InputController::default();

        let response = input.handle(
            InputEvent::Wheel {
                at: Point::new(100.0, 100.0),
                delta_y: -100.0,
            },
            &mut graph,
            &mut camera,
        );
        assert!(response.redraw);
        assert!(camera.scale() > 1.0);
        assert!(input.mode().is_idle());
    }

    #[test]
    fn test_drag_of_vanished_node_is_ignored() {
        let mut graph = graph();
        let mut camera = Camera::default();
        let mut input = InputController::default();
        input.handle(InputEvent::Press { at: Point::new(100.0, 100.0) }, &mut graph, &mut camera);

        let mut replaced = GraphState::from_snapshot(&StatusSnapshot::default(), &NodeRadii::default());
        let response = input.handle(InputEvent::Move { at: Point::new(5.0, 5.0) }, &mut replaced, &mut camera);
        assert!(!response.redraw);
        assert!(replaced.position("nas").is_none());
    }
}
