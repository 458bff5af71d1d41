//! Hover tooltip content and the presenter seam.
//!
//! Node names come from device-advertised hostnames, so every piece of node
//! text is escaped before it reaches the presenter as HTML.

use std::fmt::Write as _;

use crate::camera::Point;
use crate::graph::Node;

/// Displays or hides the hover tooltip. Implemented over a DOM element in
/// the browser.
pub trait TooltipPresenter {
    /// Shows `html` with its top-left corner at `anchor` (screen space).
    fn show(&mut self, anchor: Point, html: &str);

    fn hide(&mut self);
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Tooltip markup for a node: name, addresses, MAC, connection type, status,
/// plus Tailscale and notes when present.
pub fn node_html(node: &Node) -> String {
    let ips = if node.ips.is_empty() {
        "none".to_string()
    } else {
        escape_html(&node.ips.join(", "))
    };
    let mac = node.mac.as_deref().map_or_else(|| "unknown".to_string(), escape_html);

    let mut html = String::new();
    let _ = write!(
        html,
        "<strong>{}</strong><br>IP: {}<br>MAC: {}<br>Connection: {}<br>Status: {}",
        escape_html(node.display_name()),
        ips,
        mac,
        node.conn_type.label(),
        if node.up { "Up" } else { "Down" },
    );
    if node.is_tailscale {
        html.push_str("<br>Tailscale");
    }
    if let Some(notes) = &node.notes {
        let _ = write!(html, "<br>Notes: {}", escape_html(notes));
    }
    html
}
