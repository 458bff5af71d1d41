//! Deterministic role-based layout.
//!
//! Positions depend only on the node set and the container size at the time
//! the snapshot was loaded. Resizing the container does not rerun layout.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::camera::{Point, Size};
use crate::config::LayoutConfig;
use crate::graph::{GraphState, NodeKind};

/// Where a node goes, decided from its role in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Internet,
    Gateway,
    Host,
    KnownRing,
    DiscoveredRing,
}

/// Recomputes every node position for a container of `area`.
///
/// - internet: top center, `internet_y_fraction` of the height down
/// - gateways: one row below, spread evenly around the center line
/// - resolved host: center of the area
/// - other known/host-typed nodes: inner ring around the host
/// - discovered nodes: outer ring around the host
///
/// A degenerate area collapses both rings onto the host.
pub fn apply(graph: &mut GraphState, area: Size, config: &LayoutConfig) {
    if area.is_degenerate() {
        tracing::warn!(
            width = area.width,
            height = area.height,
            "layout area is empty, rings collapse onto the host"
        );
    }

    let host_id = graph.host_id().to_string();
    let mut gateways = Vec::new();
    let mut known = Vec::new();
    let mut discovered = Vec::new();
    let mut fixed = Vec::new();

    for node in graph.nodes() {
        let slot = if node.kind == NodeKind::Internet {
            Slot::Internet
        } else if node.id == host_id {
            Slot::Host
        } else if node.is_gateway {
            Slot::Gateway
        } else if node.kind == NodeKind::Discovered {
            Slot::DiscoveredRing
        } else {
            Slot::KnownRing
        };

        match slot {
            Slot::Gateway => gateways.push(node.id.clone()),
            Slot::KnownRing => known.push(node.id.clone()),
            Slot::DiscoveredRing => discovered.push(node.id.clone()),
            Slot::Internet | Slot::Host => fixed.push((node.id.clone(), slot)),
        }
    }

    let center = area.center();
    let positions = graph.positions_mut();
    positions.clear();

    for (id, slot) in &fixed {
        let point = match slot {
            Slot::Internet => Point::new(center.x, area.height * config.internet_y_fraction),
            _ => center,
        };
        positions.insert(id, point);
    }

    let gateway_y = area.height * config.gateway_y_fraction;
    let mid = (gateways.len() as f64 - 1.0) / 2.0;
    for (i, id) in gateways.iter().enumerate() {
        let x = center.x + (i as f64 - mid) * config.gateway_spacing;
        positions.insert(id, Point::new(x, gateway_y));
    }

    let base = area.min_side().max(0.0);
    let rings = [
        (&known, base * config.known_ring_fraction, FRAC_PI_2 - config.ring_bias),
        (&discovered, base * config.discovered_ring_fraction, FRAC_PI_2 + config.ring_bias),
    ];
    for (members, radius, offset) in rings {
        let angles = ring_angles(members.len(), offset, config.min_angle_step);
        for (id, angle) in members.iter().zip(angles) {
            positions.insert(id, point_on_ring(center, radius, angle));
        }
    }

    tracing::debug!(
        gateways = gateways.len(),
        known = known.len(),
        discovered = discovered.len(),
        "layout applied"
    );
}

/// Angles (radians) for `count` ring members centered on `offset`.
///
/// Members are spread evenly over a full turn, but adjacent members are never
/// closer than `min_step`. For large counts that pushes the span past a full
/// circle and the ends overlap; small and moderate rings stay readable.
pub fn ring_angles(count: usize, offset: f64, min_step: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![offset],
        n => {
            let step = (TAU / n as f64).max(min_step);
            let start = offset - step * (n - 1) as f64 / 2.0;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

fn point_on_ring(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NodeRadii;
    use crate::graph::{FALLBACK_HOST_ID, INTERNET_ID};
    use crate::snapshot::{Device, Interface, StatusSnapshot};

    const EPS: f64 = 1e-9;

    fn device(name: &str, ip: &str, is_host: bool) -> Device {
        Device {
            name: name.to_string(),
            up: true,
            is_host,
            interfaces: vec![Interface {
                ip: Some(ip.to_string()),
                ..Interface::default()
            }],
            ..Device::default()
        }
    }

    fn graph() -> GraphState {
        let mut snapshot = StatusSnapshot::default();
        snapshot.discovery.meta.gateway_ip = Some("10.0.0.1".to_string());
        snapshot.discovery.known_devices = vec![
            device("router", "10.0.0.1", false),
            device("laptop", "10.0.0.5", true),
            device("nas", "10.0.0.7", false),
            device("printer", "10.0.0.8", false),
        ];
        snapshot.discovery.discovered_devices = vec![
            device("tv", "10.0.0.30", false),
            device("phone", "10.0.0.31", false),
            device("speaker", "10.0.0.32", false),
        ];
        GraphState::from_snapshot(&snapshot, &NodeRadii::default())
    }

    #[test]
    fn test_ring_single_member_at_offset() {
        assert_eq!(ring_angles(1, 1.25, 0.35), vec![1.25]);
    }

    #[test]
    fn test_ring_empty_is_noop() {
        assert!(ring_angles(0, 0.0, 0.35).is_empty());
    }

    #[test]
    fn test_ring_respects_min_step() {
        for n in 2..60 {
            let angles = ring_angles(n, 0.7, 0.35);
            assert_eq!(angles.len(), n);
            for pair in angles.windows(2) {
                assert!(pair[1] - pair[0] >= 0.35 - EPS, "n={n}");
            }
        }
    }

    #[test]
    fn test_ring_is_centered_on_offset() {
        let angles = ring_angles(4, 2.0, 0.1);
        let mean: f64 = angles.iter().sum::<f64>() / angles.len() as f64;
        assert!((mean - 2.0).abs() < EPS);
        assert!((angles[1] - angles[0] - TAU / 4.0).abs() < EPS);
    }

    #[test]
    fn test_fixed_slots() {
        let mut graph = graph();
        let area = Size::new(800.0, 600.0);
        apply(&mut graph, area, &LayoutConfig::default());

        let internet = graph.position(INTERNET_ID).unwrap();
        assert!((internet.x - 400.0).abs() < EPS && (internet.y - 48.0).abs() < EPS);
        assert_eq!(graph.position("laptop"), Some(Point::new(400.0, 300.0)));
        assert_eq!(graph.position("router"), Some(Point::new(400.0, 150.0)));
        assert_eq!(graph.positions().len(), graph.nodes().len());
    }

    #[test]
    fn test_rings_use_their_radius() {
        let mut graph = graph();
        let config = LayoutConfig::default();
        apply(&mut graph, Size::new(800.0, 600.0), &config);

        let host = graph.position("laptop").unwrap();
        let nas = graph.position("nas").unwrap();
        let tv = graph.position("discovered-0-tv").unwrap();
        assert!((nas.distance_sq(host).sqrt() - 600.0 * config.known_ring_fraction).abs() < EPS);
        assert!((tv.distance_sq(host).sqrt() - 600.0 * config.discovered_ring_fraction).abs() < EPS);
    }

    #[test]
    fn test_rings_are_biased_in_opposite_directions() {
        let mut snapshot = StatusSnapshot::default();
        snapshot.discovery.known_devices = vec![device("laptop", "10.0.0.5", true), device("nas", "10.0.0.7", false)];
        snapshot.discovery.discovered_devices = vec![device("tv", "10.0.0.30", false)];
        let mut graph = GraphState::from_snapshot(&snapshot, &NodeRadii::default());
        let config = LayoutConfig::default();
        apply(&mut graph, Size::new(800.0, 600.0), &config);

        let host = graph.position("laptop").unwrap();
        let angle_of = |id: &str| {
            let p = graph.position(id).unwrap();
            (p.y - host.y).atan2(p.x - host.x)
        };
        let known = angle_of("nas");
        let discovered = angle_of("discovered-0-tv");
        assert!((known - (FRAC_PI_2 - config.ring_bias)).abs() < EPS);
        assert!((discovered - (FRAC_PI_2 + config.ring_bias)).abs() < EPS);
        assert!(graph.position("nas").unwrap().x > host.x);
        assert!(graph.position("discovered-0-tv").unwrap().x < host.x);
    }

    #[test]
    fn test_ring_members_follow_ring_angles() {
        let mut graph = graph();
        let config = LayoutConfig::default();
        apply(&mut graph, Size::new(800.0, 600.0), &config);
        let host = graph.position("laptop").unwrap();

        let rings = [
            (vec!["nas", "printer"], FRAC_PI_2 - config.ring_bias),
            (
                vec!["discovered-0-tv", "discovered-1-phone", "discovered-2-speaker"],
                FRAC_PI_2 + config.ring_bias,
            ),
        ];
        for (ids, offset) in rings {
            let expected = ring_angles(ids.len(), offset, config.min_angle_step);
            for (id, angle) in ids.iter().zip(expected) {
                let p = graph.position(id).unwrap();
                let actual = (p.y - host.y).atan2(p.x - host.x);
                let diff = (actual - angle).rem_euclid(TAU);
                assert!(diff < EPS || TAU - diff < EPS, "{id}: {actual} vs {angle}");
            }
        }
    }

    #[test]
    fn test_multiple_gateways_spread_around_center() {
        let mut snapshot = StatusSnapshot::default();
        snapshot.discovery.meta.gateway_ip = Some("10.0.0.1".to_string());
        snapshot.discovery.known_devices = vec![device("gw-a", "10.0.0.1", false)];
        snapshot.discovery.discovered_devices = vec![device("gw-b", "10.0.0.1", false)];
        let mut graph = GraphState::from_snapshot(&snapshot, &NodeRadii::default());
        let config = LayoutConfig::default();
        apply(&mut graph, Size::new(1000.0, 500.0), &config);

        let a = graph.position("gw-a").unwrap();
        let b = graph.position("discovered-0-gw-b").unwrap();
        assert!((a.x - (500.0 - config.gateway_spacing / 2.0)).abs() < EPS);
        assert!((b.x - (500.0 + config.gateway_spacing / 2.0)).abs() < EPS);
        assert_eq!(a.y, b.y);
        assert_eq!(graph.position(FALLBACK_HOST_ID), Some(Point::new(500.0, 250.0)));
    }

    #[test]
    fn test_zero_area_collapses_rings() {
        let mut graph = graph();
        apply(&mut graph, Size::new(0.0, 0.0), &LayoutConfig::default());

        let host = graph.position("laptop").unwrap();
        let nas = graph.position("nas").unwrap();
        assert!(nas.distance_sq(host) < EPS);
        assert_eq!(graph.positions().len(), graph.nodes().len());
    }

    #[test]
    fn test_layout_is_deterministic() {
        let mut a = graph();
        let mut b = graph();
        apply(&mut a, Size::new(640.0, 480.0), &LayoutConfig::default());
        apply(&mut b, Size::new(640.0, 480.0), &LayoutConfig::default());
        assert_eq!(a.positions(), b.positions());
    }
}
