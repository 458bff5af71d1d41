//! Immediate-mode drawing of the topology through the camera.
//!
//! Drawing reads graph and camera state and mutates nothing but the surface,
//! so it is safe to call as often as needed.

use crate::camera::{Camera, Point, Size};
use crate::graph::{GraphState, Node, NodeKind};
use crate::surface::{Paint, Surface, TextStyle};

pub const BACKGROUND: &str = "#0d0d1a";
const BAND: Paint = Paint::solid("#667eea");
const BAND_ALPHAS: [f64; 3] = [0.03, 0.06, 0.09];
const EDGE: Paint = Paint::solid("#888888").with_alpha(0.6);
const EDGE_WIDTH: f64 = 1.5;
const LABEL: Paint = Paint::solid("#cccccc");
const LABEL_SIZE: f64 = 11.0;
const LABEL_GAP: f64 = 4.0;
const DIMMED_ALPHA: f64 = 0.35;

/// Fill color per node kind.
pub fn node_color(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Internet => "#667eea",
        NodeKind::Host => "#4caf50",
        NodeKind::Known => "#ff9800",
        NodeKind::Discovered => "#00bcd4",
    }
}

fn node_paint(node: &Node) -> Paint {
    let paint = Paint::solid(node_color(node.kind));
    if node.is_dimmed() {
        paint.with_alpha(DIMMED_ALPHA)
    } else {
        paint
    }
}

/// Draws one frame: background bands, edges, nodes, labels.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, graph: &GraphState, camera: &Camera) {
    let viewport = surface.size();
    surface.clear(BACKGROUND);

    draw_bands(surface, camera, viewport);

    for edge in graph.edges() {
        let (Some(from), Some(to)) = (endpoint(graph, &edge.from), endpoint(graph, &edge.to)) else {
            continue;
        };
        surface.draw_line(
            camera.world_to_screen(from),
            camera.world_to_screen(to),
            camera.to_screen_len(EDGE_WIDTH),
            EDGE,
        );
    }

    for node in graph.nodes() {
        let Some(center) = graph.position(&node.id) else {
            continue;
        };
        let screen = camera.world_to_screen(center);
        surface.draw_circle(screen, camera.to_screen_len(node.radius), node_paint(node));

        let label_at = camera.world_to_screen(Point::new(center.x, center.y + node.radius + LABEL_GAP));
        surface.draw_text(
            node.display_name(),
            label_at,
            TextStyle {
                size_px: camera.to_screen_len(LABEL_SIZE),
                paint: LABEL,
            },
        );
    }
}

/// Position of a registered node, `None` for dangling ids.
fn endpoint(graph: &GraphState, id: &str) -> Option<Point> {
    graph.node(id)?;
    graph.position(id)
}

/// Three horizontal world-space bands across the viewport height, fainter at
/// the top (internet) and stronger toward the devices.
fn draw_bands<S: Surface + ?Sized>(surface: &mut S, camera: &Camera, viewport: Size) {
    let band_height = viewport.height / BAND_ALPHAS.len() as f64;
    for (i, alpha) in BAND_ALPHAS.iter().enumerate() {
        let origin = camera.world_to_screen(Point::new(0.0, band_height * i as f64));
        surface.fill_rect(
            origin,
            Size::new(
                camera.to_screen_len(viewport.width),
                camera.to_screen_len(band_height),
            ),
            BAND.with_alpha(*alpha),
        );
    }
}
