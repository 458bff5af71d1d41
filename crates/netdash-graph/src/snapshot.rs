//! Status snapshot as served by the dashboard's `/api/status` endpoint.
//!
//! Only the fields the graph needs are modelled. Every field is optional and
//! `null` is treated the same as absent.

use serde::{Deserialize, Deserializer, Serialize};

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default, deserialize_with = "nullable")]
    pub discovery: Discovery,
    #[serde(default, deserialize_with = "nullable")]
    pub host: HostInfo,
}

impl StatusSnapshot {
    /// Gateway address reported by discovery; empty strings count as absent.
    pub fn gateway_ip(&self) -> Option<&str> {
        self.discovery
            .meta
            .gateway_ip
            .as_deref()
            .filter(|ip| !ip.is_empty())
    }

    pub fn hostname(&self) -> Option<&str> {
        self.host.hostname.as_deref().filter(|h| !h.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    #[serde(default, deserialize_with = "nullable")]
    pub known_devices: Vec<Device>,
    #[serde(default, deserialize_with = "nullable")]
    pub discovered_devices: Vec<Device>,
    #[serde(default, deserialize_with = "nullable")]
    pub meta: DiscoveryMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryMeta {
    #[serde(default)]
    pub gateway_ip: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    #[serde(default)]
    pub hostname: Option<String>,
}

/// One device entry from either the known or the discovered list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub up: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub is_host: bool,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub interfaces: Vec<Interface>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub has_tailscale: bool,
    /// Configured but not seen during the last sweep.
    #[serde(default, deserialize_with = "nullable")]
    pub missing: bool,
}

impl Device {
    /// Interface addresses in payload order, skipping entries without one.
    pub fn ips(&self) -> Vec<String> {
        self.interfaces
            .iter()
            .filter_map(|iface| iface.ip.clone())
            .filter(|ip| !ip.is_empty())
            .collect()
    }

    pub fn is_wireless(&self) -> bool {
        self.interfaces.iter().any(Interface::is_wireless)
    }

    pub fn is_tailscale(&self) -> bool {
        self.has_tailscale || self.interfaces.iter().any(Interface::is_tailscale)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub conn_type: Option<String>,
    /// `Tailscale` or `Local`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub up: bool,
}

impl Interface {
    pub fn is_wireless(&self) -> bool {
        self.conn_type
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case("wireless"))
    }

    pub fn is_tailscale(&self) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|k| k.eq_ignore_ascii_case("tailscale"))
    }
}
