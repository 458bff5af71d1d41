//! Tunable constants for the topology view.
//!
//! Every field has a default, so a partial JSON document (or none at all)
//! yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::NodeKind;

/// Top-level configuration for a [`crate::TopologyView`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub camera: CameraConfig,
    pub layout: LayoutConfig,
    pub input: InputConfig,
    pub radii: NodeRadii,
}

impl GraphConfig {
    /// Parses a configuration document, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(GraphError::InvalidConfig)
    }
}

/// Zoom limits and wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale change applied per wheel notch.
    pub zoom_step: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 2.5,
            zoom_step: 0.1,
        }
    }
}

/// Placement rules for the layout engine.
///
/// Fractions are relative to the container size observed when the snapshot
/// was loaded. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance of the internet node from the top edge, as a fraction of height.
    pub internet_y_fraction: f64,
    /// Row of gateway nodes, as a fraction of height.
    pub gateway_y_fraction: f64,
    /// Horizontal distance between neighbouring gateways.
    pub gateway_spacing: f64,
    /// Known-device ring radius, as a fraction of `min(width, height)`.
    pub known_ring_fraction: f64,
    /// Discovered-device ring radius, as a fraction of `min(width, height)`.
    pub discovered_ring_fraction: f64,
    /// Lower bound on the angle between adjacent ring members.
    pub min_angle_step: f64,
    /// Rotation applied to each ring's center, in opposite directions.
    pub ring_bias: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            internet_y_fraction: 0.08,
            gateway_y_fraction: 0.25,
            gateway_spacing: 140.0,
            known_ring_fraction: 0.28,
            discovered_ring_fraction: 0.42,
            min_angle_step: 0.35,
            ring_bias: 0.35,
        }
    }
}

/// Pointer interaction tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Added to `radius²` in the circle hit test.
    pub hit_tolerance: f64,
    /// Screen-space offset of the tooltip from the cursor.
    pub tooltip_offset: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: 36.0,
            tooltip_offset: 14.0,
        }
    }
}

/// Default node radius per kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeRadii {
    pub internet: f64,
    pub host: f64,
    pub known: f64,
    pub discovered: f64,
}

impl Default for NodeRadii {
    fn default() -> Self {
        Self {
            internet: 28.0,
            host: 22.0,
            known: 16.0,
            discovered: 12.0,
        }
    }
}

impl NodeRadii {
    pub fn for_kind(&self, kind: NodeKind) -> f64 {
        match kind {
            NodeKind::Internet => self.internet,
            NodeKind::Host => self.host,
            NodeKind::Known => self.known,
            NodeKind::Discovered => self.discovered,
        }
    }
}
