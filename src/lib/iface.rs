// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum PortMode {
    #[default]
    Access,
    Trunk,
    /// Device reported a mode this crate does not understand
    Unset,
}

impl std::fmt::Display for PortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Access => "access",
                Self::Trunk => "trunk",
                Self::Unset => "unset",
            }
        )
    }
}

/// Vendor neutral view of a switch port
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct Interface {
    /// Device port name, e.g. `xe-0/0/1`
    pub name: String,
    #[serde(default)]
    pub shutdown: bool,
    #[serde(default)]
    pub port_mode: PortMode,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub access_vlan: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trunk_native_vlan: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub trunk_vlans: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub auto_negotiation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mtu: Option<u32>,
}

impl Interface {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }
}
