// SPDX-License-Identifier: Apache-2.0

//! Vendor neutral switch management over NETCONF.
//!
//! [NetmanSwitch] is the API callers program against, [NetconfSession] the
//! transport an adapter is bound to. [JuniperMx] is the adapter for Juniper
//! MX routers.

mod context;
mod descriptor;
mod error;
mod iface;
mod juniper;
mod logging;
mod netconf;
mod switch;
mod vlan;
mod xml;

pub use self::context::SwitchContext;
pub use self::descriptor::{SwitchDescriptor, SwitchModel};
pub use self::error::{ErrorKind, NetmanError};
pub use self::iface::{Interface, PortMode};
pub use self::juniper::JuniperMx;
pub use self::logging::NetmanLogLevel;
pub use self::netconf::{Datastore, NetconfSession, RpcFault};
pub use self::switch::NetmanSwitch;
pub use self::vlan::{
    UnresolvedPolicy, VLAN_NAME_PREFIX, VlanDomain, resolve_vlan_members,
    vlan_domain_name, vlan_name_table,
};
pub use self::xml::XmlElement;
