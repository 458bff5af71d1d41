//! Netdash topology graph engine.
//!
//! Renders the home network as an interactive node-link diagram: the internet
//! on top, gateways below it, the dashboard host in the middle, and known and
//! discovered devices on rings around the host.
//!
//! The engine is platform independent. Drawing goes through [`Surface`] and
//! the hover tooltip through [`TooltipPresenter`]; the browser binding lives
//! in `netdash-graph-web`.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod camera;
pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod layout;
pub mod render;
pub mod snapshot;
pub mod surface;
pub mod testing;
pub mod tooltip;
pub mod view;

pub use camera::{Camera, Point, Size};
pub use config::{CameraConfig, GraphConfig, InputConfig, LayoutConfig, NodeRadii};
pub use error::GraphError;
pub use graph::{ConnType, Edge, GraphState, Node, NodeKind, Positions};
pub use input::{InputController, InputEvent, InteractionMode, Response, TooltipUpdate};
pub use snapshot::{Device, Interface, StatusSnapshot};
pub use surface::{Paint, Surface, TextStyle};
pub use tooltip::{TooltipPresenter, escape_html};
pub use view::TopologyView;
