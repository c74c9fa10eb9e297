// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::RpcFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Please report this as bug to upstream
    Bug,
    /// Invalid argument
    InvalidArgument,
    /// Device configuration could not be understood
    InvalidConfiguration,
    /// Malformed VLAN membership entry, e.g. `800-700`
    InvalidVlanReference,
    /// VLAN membership entry names a VLAN domain which does not exist
    UnresolvableVlanReference,
    /// Not supported
    NoSupport,
    /// A VLAN with the same ID or conventional name already exists
    VlanAlreadyExist,
    /// Device rejected the VLAN number
    BadVlanNumber,
    /// Device rejected the VLAN name
    BadVlanName,
    /// VLAN not found on device
    UnknownVlan,
    /// Interface not found on device
    UnknownInterface,
    /// NETCONF transport or unclassified RPC failure
    TransportFault,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bug => "bug",
                Self::InvalidArgument => "invalid-argument",
                Self::InvalidConfiguration => "invalid-configuration",
                Self::InvalidVlanReference => "invalid-vlan-reference",
                Self::UnresolvableVlanReference =>
                    "unresolvable-vlan-reference",
                Self::NoSupport => "no-support",
                Self::VlanAlreadyExist => "vlan-already-exist",
                Self::BadVlanNumber => "bad-vlan-number",
                Self::BadVlanName => "bad-vlan-name",
                Self::UnknownVlan => "unknown-vlan",
                Self::UnknownInterface => "unknown-interface",
                Self::TransportFault => "transport-fault",
            }
        )
    }
}

// Try not implement From for NetmanError here unless you are sure this
// error should always convert to certain type of ErrorKind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NetmanError {
    pub kind: ErrorKind,
    pub msg: String,
    /// Structured NETCONF `<rpc-error>` raised by the device, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fault: Option<RpcFault>,
}

impl std::fmt::Display for NetmanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl NetmanError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self {
            kind,
            msg,
            fault: None,
        }
    }

    /// Transport failure carrying the RPC error reported by the device.
    pub fn rpc_fault(fault: RpcFault) -> Self {
        Self {
            kind: ErrorKind::TransportFault,
            msg: format!("NETCONF RPC error: {}", fault.message),
            fault: Some(fault),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }

    pub fn fault(&self) -> Option<&RpcFault> {
        self.fault.as_ref()
    }

    pub(crate) fn vlan_already_exist(vlan_id: u32) -> Self {
        Self::new(
            ErrorKind::VlanAlreadyExist,
            format!("Vlan {vlan_id} already exist"),
        )
    }

    pub(crate) fn unknown_vlan(vlan_id: u32) -> Self {
        Self::new(ErrorKind::UnknownVlan, format!("Vlan {vlan_id} not found"))
    }

    pub(crate) fn unknown_interface(name: &str) -> Self {
        Self::new(
            ErrorKind::UnknownInterface,
            format!("Unknown interface {name}"),
        )
    }
}

impl std::error::Error for NetmanError {}

impl From<quick_xml::Error> for NetmanError {
    fn from(e: quick_xml::Error) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            format!("quick_xml::Error: {e}"),
        )
    }
}

impl From<quick_xml::events::attributes::AttrError> for NetmanError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            format!("Invalid XML attribute: {e}"),
        )
    }
}

impl From<std::string::FromUtf8Error> for NetmanError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::new(ErrorKind::Bug, format!("Invalid UTF-8 string: {e}"))
    }
}
