//! Node and edge registries rebuilt from a status snapshot.
//!
//! The whole graph is replaced on every snapshot; nothing is merged across
//! refreshes. The resulting topology is a tree rooted at the internet node:
//! internet → gateway(s) → host → leaf devices.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::config::NodeRadii;
use crate::snapshot::{Device, StatusSnapshot};

pub const INTERNET_ID: &str = "internet";
pub const INTERNET_LABEL: &str = "Internet";
/// Id of the host node synthesized when no device claims to be the host.
pub const FALLBACK_HOST_ID: &str = "__host__";
pub const DEFAULT_HOST_LABEL: &str = "This host";
pub const UNKNOWN_DEVICE_LABEL: &str = "Unknown device";

/// Topological role of a node; drives color and default radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Internet,
    Host,
    Known,
    Discovered,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnType {
    #[default]
    Wired,
    Wireless,
}

impl ConnType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Wired => "Wired",
            Self::Wireless => "Wireless",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within one snapshot (see [`GraphState::from_snapshot`]).
    pub id: String,
    /// Display label. Untrusted: may come from a device-advertised hostname.
    pub name: String,
    pub kind: NodeKind,
    pub up: bool,
    pub missing: bool,
    pub ips: Vec<String>,
    pub mac: Option<String>,
    pub conn_type: ConnType,
    pub is_gateway: bool,
    pub is_host: bool,
    pub is_tailscale: bool,
    pub notes: Option<String>,
    pub radius: f64,
}

impl Node {
    fn internet(radii: &NodeRadii) -> Self {
        Self {
            id: INTERNET_ID.to_string(),
            name: INTERNET_LABEL.to_string(),
            kind: NodeKind::Internet,
            up: true,
            missing: false,
            ips: Vec::new(),
            mac: None,
            conn_type: ConnType::Wired,
            is_gateway: false,
            is_host: false,
            is_tailscale: false,
            notes: None,
            radius: radii.internet,
        }
    }

    fn fallback_host(hostname: Option<&str>, radii: &NodeRadii) -> Self {
        Self {
            id: FALLBACK_HOST_ID.to_string(),
            name: hostname.unwrap_or(DEFAULT_HOST_LABEL).to_string(),
            kind: NodeKind::Host,
            up: true,
            missing: false,
            ips: Vec::new(),
            mac: None,
            conn_type: ConnType::Wired,
            is_gateway: false,
            is_host: true,
            is_tailscale: false,
            notes: None,
            radius: radii.host,
        }
    }

    fn from_device(
        id: String,
        device: &Device,
        list_kind: NodeKind,
        gateway_ip: Option<&str>,
        radii: &NodeRadii,
    ) -> Self {
        let ips = device.ips();
        let is_gateway = gateway_ip.is_some_and(|gw| ips.iter().any(|ip| ip == gw));
        let kind = if device.is_host { NodeKind::Host } else { list_kind };

        Self {
            id,
            name: device.name.clone(),
            kind,
            up: device.up,
            missing: device.missing,
            ips,
            mac: device.mac.clone().filter(|m| !m.is_empty()),
            conn_type: if device.is_wireless() {
                ConnType::Wireless
            } else {
                ConnType::Wired
            },
            is_gateway,
            is_host: device.is_host,
            is_tailscale: device.is_tailscale(),
            notes: device.notes.clone().filter(|n| !n.trim().is_empty()),
            radius: radii.for_kind(kind),
        }
    }

    /// Label shown on the canvas and in the tooltip.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNKNOWN_DEVICE_LABEL
        } else {
            &self.name
        }
    }

    /// Down or never-seen nodes render at reduced opacity.
    pub fn is_dimmed(&self) -> bool {
        !self.up || self.missing
    }
}

/// Undirected drawing primitive; `from` is the parent, `to` the child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// World-space positions keyed by node id.
///
/// Written by the layout engine when a snapshot is loaded and by the input
/// controller while a node is being dragged, never both in the same call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Positions(HashMap<String, Point>);

impl Positions {
    pub fn get(&self, id: &str) -> Option<Point> {
        self.0.get(id).copied()
    }

    pub fn insert(&mut self, id: &str, point: Point) {
        self.0.insert(id.to_string(), point);
    }

    /// Moves an already placed node. Returns `false` for unknown ids.
    pub fn update(&mut self, id: &str, point: Point) -> bool {
        match self.0.get_mut(id) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Nodes, edges and positions for one snapshot.
#[derive(Debug, Clone, Default)]
pub struct GraphState {
    /// Draw order: later nodes are drawn on top and win overlapping hits.
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    positions: Positions,
    host_id: String,
    gateway_id: Option<String>,
}

impl GraphState {
    /// Builds the graph for a snapshot.
    ///
    /// Known devices use their name as id. Discovered devices use
    /// `discovered-{index}-{name}`, so two discovered devices sharing a name
    /// stay distinct and a discovered device never collides with a known one
    /// of the same name. Same-named entries are not merged.
    pub fn from_snapshot(snapshot: &StatusSnapshot, radii: &NodeRadii) -> Self {
        let gateway_ip = snapshot.gateway_ip();
        let discovery = &snapshot.discovery;

        let mut nodes =
            Vec::with_capacity(discovery.known_devices.len() + discovery.discovered_devices.len() + 2);
        nodes.push(Node::internet(radii));

        for device in &discovery.known_devices {
            nodes.push(Node::from_device(
                device.name.clone(),
                device,
                NodeKind::Known,
                gateway_ip,
                radii,
            ));
        }
        for (index, device) in discovery.discovered_devices.iter().enumerate() {
            nodes.push(Node::from_device(
                format!("discovered-{index}-{}", device.name),
                device,
                NodeKind::Discovered,
                gateway_ip,
                radii,
            ));
        }

        let host_id = match resolve_host(&nodes) {
            Some(id) => id.to_string(),
            None => {
                let fallback = Node::fallback_host(snapshot.hostname(), radii);
                let id = fallback.id.clone();
                nodes.push(fallback);
                id
            }
        };
        let gateway_id = nodes.iter().find(|n| n.is_gateway).map(|n| n.id.clone());

        let edges = nodes
            .iter()
            .filter(|n| n.kind != NodeKind::Internet)
            .map(|n| Edge::new(parent_of(n, gateway_id.as_deref(), &host_id), n.id.as_str()))
            .collect();

        Self {
            nodes,
            edges,
            positions: Positions::default(),
            host_id,
            gateway_id,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The node resolved as "the host" for this snapshot.
    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    /// First node whose address matches the reported gateway, if any.
    pub fn gateway_id(&self) -> Option<&str> {
        self.gateway_id.as_deref()
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut Positions {
        &mut self.positions
    }

    pub fn position(&self, id: &str) -> Option<Point> {
        self.positions.get(id)
    }

    #[cfg(test)]
    pub(crate) fn push_edge(&mut self, from: &str, to: &str) {
        self.edges.push(Edge::new(from, to));
    }

    /// Edges whose endpoints are not both registered nodes.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| self.node(&e.from).is_none() || self.node(&e.to).is_none())
    }

    /// Topmost node whose circle contains `world`.
    ///
    /// A node is hit when the squared distance to its center is at most
    /// `radius² + tolerance`. Nodes without a position are never hit.
    pub fn hit_test(&self, world: Point, tolerance: f64) -> Option<&Node> {
        self.nodes.iter().rev().find(|node| {
            self.positions
                .get(&node.id)
                .is_some_and(|center| center.distance_sq(world) <= node.radius.powi(2) + tolerance)
        })
    }
}

/// First node flagged `is_host`, else first node typed host.
fn resolve_host(nodes: &[Node]) -> Option<&str> {
    nodes
        .iter()
        .find(|n| n.is_host)
        .or_else(|| nodes.iter().find(|n| n.kind == NodeKind::Host))
        .map(|n| n.id.as_str())
}

/// Leaves always have a host to hang from: when no device claims the role a
/// fallback host node is synthesized before edges are built.
fn parent_of<'a>(node: &Node, gateway_id: Option<&'a str>, host_id: &'a str) -> &'a str {
    if node.is_gateway {
        INTERNET_ID
    } else if node.is_host {
        gateway_id.unwrap_or(INTERNET_ID)
    } else {
        host_id
    }
}
