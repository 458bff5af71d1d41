//! The topology view: one instance per page, owning graph, camera and
//! interaction state.
//!
//! Callers may only replace the snapshot, reset the camera, or feed input
//! events; nodes, edges and the camera are never mutated from outside.

use crate::camera::{Camera, Size};
use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::graph::GraphState;
use crate::input::{InputController, InputEvent, InteractionMode, TooltipUpdate};
use crate::layout;
use crate::render;
use crate::snapshot::StatusSnapshot;
use crate::surface::Surface;
use crate::tooltip::TooltipPresenter;

pub struct TopologyView<S, T> {
    config: GraphConfig,
    graph: GraphState,
    camera: Camera,
    input: InputController,
    /// Container size observed at the last snapshot; layout is not rerun on resize.
    layout_area: Size,
    surface: S,
    tooltip: T,
}

impl<S: Surface, T: TooltipPresenter> TopologyView<S, T> {
    pub fn new(surface: S, tooltip: T, config: GraphConfig) -> Self {
        Self {
            camera: Camera::new(config.camera),
            input: InputController::new(config.input),
            graph: GraphState::default(),
            layout_area: surface.size(),
            config,
            surface,
            tooltip,
        }
    }

    /// Replaces the whole graph, recomputes layout for the current surface
    /// size and redraws. Camera and interaction mode are left as they are.
    pub fn set_data(&mut self, snapshot: &StatusSnapshot) {
        self.graph = GraphState::from_snapshot(snapshot, &self.config.radii);
        self.layout_area = self.surface.size();
        layout::apply(&mut self.graph, self.layout_area, &self.config.layout);

        let dangling = self.graph.dangling_edges().count();
        if dangling > 0 {
            tracing::warn!(dangling, "edges reference unknown nodes and will not be drawn");
        }
        tracing::debug!(
            nodes = self.graph.nodes().len(),
            edges = self.graph.edges().len(),
            host = self.graph.host_id(),
            gateway = ?self.graph.gateway_id(),
            "snapshot loaded"
        );
        self.redraw();
    }

    /// Parses a raw `/api/status` body and loads it.
    pub fn set_data_json(&mut self, json: &str) -> Result<(), GraphError> {
        let snapshot: StatusSnapshot = serde_json::from_str(json).map_err(GraphError::InvalidSnapshot)?;
        self.set_data(&snapshot);
        Ok(())
    }

    /// Recenters the camera. Node positions and data are untouched.
    pub fn reset_view(&mut self) {
        self.camera.reset();
        self.redraw();
    }

    /// Feeds one input event through the interaction state machine.
    pub fn handle(&mut self, event: InputEvent) {
        let response = self.input.handle(event, &mut self.graph, &mut self.camera);
        match response.tooltip {
            TooltipUpdate::Keep => {}
            TooltipUpdate::Show { anchor, html } => self.tooltip.show(anchor, &html),
            TooltipUpdate::Hide => self.tooltip.hide(),
        }
        if response.redraw {
            self.redraw();
        }
    }

    /// Hides the tooltip when the pointer leaves the drawing area. A drag or
    /// pan in progress keeps running.
    pub fn pointer_left(&mut self) {
        if self.input.mode().is_idle() {
            self.tooltip.hide();
        }
    }

    pub fn redraw(&mut self) {
        render::draw(&mut self.surface, &self.graph, &self.camera);
    }

    pub fn graph(&self) -> &GraphState {
        &self.graph
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mode(&self) -> &InteractionMode {
        self.input.mode()
    }

    pub fn layout_area(&self) -> Size {
        self.layout_area
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for backing-store changes such as resizing a canvas.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn tooltip(&self) -> &T {
        &self.tooltip
    }
}
