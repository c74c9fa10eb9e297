// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeSet, HashMap};

use super::filter::JuniperConfigFilter;
use crate::{
    ErrorKind, Interface, NetmanError, PortMode, UnresolvedPolicy, VlanDomain,
    XmlElement, resolve_vlan_members, vlan_name_table,
};

const INTERFACE_MODE_ACCESS: &str = "access";
const INTERFACE_MODE_TRUNK: &str = "trunk";

/// `<interface>` node of the Juniper configuration, VLAN members unresolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct JuniperIface {
    pub(crate) name: String,
    pub(crate) disabled: bool,
    pub(crate) mtu: Option<u32>,
    pub(crate) auto_negotiation: Option<bool>,
    pub(crate) native_vlan_id: Option<u32>,
    pub(crate) interface_mode: Option<String>,
    /// `unit/family/bridge/vlan-id`
    pub(crate) vlan_id: Option<String>,
    /// `unit/family/bridge/vlan-id-list` entries in document order
    pub(crate) vlan_id_list: Vec<String>,
}

/// Parsed `<configuration>` reply of one `<get-config>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct JuniperConfig {
    pub(crate) domains: Vec<VlanDomain>,
    pub(crate) ifaces: Vec<JuniperIface>,
}

fn parse_u32(
    text: Option<&str>,
    what: &str,
    owner: &str,
) -> Result<Option<u32>, NetmanError> {
    match text {
        Some(t) => t.parse::<u32>().map(Some).map_err(|e| {
            let e = NetmanError::new(
                ErrorKind::InvalidConfiguration,
                format!("Invalid {what} '{t}' of {owner}: {e}"),
            );
            log::error!("{e}");
            e
        }),
        None => Ok(None),
    }
}

impl JuniperConfig {
    /// Parse the branches requested by `filter`. Absent branches mean nothing
    /// is configured.
    pub(crate) fn parse(
        reply: &XmlElement,
        filter: &JuniperConfigFilter,
    ) -> Result<Self, NetmanError> {
        let mut ret = Self::default();
        let Some(configuration) = reply.find_descendant("configuration")
        else {
            log::debug!("No configuration in reply, treating as empty");
            return Ok(ret);
        };

        if filter.wants_bridge_domains()
            && let Some(domains) = configuration.child("bridge-domains")
        {
            for domain in domains.children_named("domain") {
                if let Some(d) = parse_domain(domain)? {
                    ret.domains.push(d);
                }
            }
        }
        if filter.wants_interfaces()
            && let Some(ifaces) = configuration.child("interfaces")
        {
            for iface in ifaces.children_named("interface") {
                if let Some(i) = parse_iface(iface)? {
                    ret.ifaces.push(i);
                }
            }
        }
        log::debug!(
            "Parsed {} bridge domains and {} interfaces",
            ret.domains.len(),
            ret.ifaces.len()
        );
        Ok(ret)
    }

    pub(crate) fn domain_by_id(&self, vlan_id: u32) -> Option<&VlanDomain> {
        self.domains.iter().find(|d| d.vlan_id == vlan_id)
    }

    pub(crate) fn domain_by_name(&self, name: &str) -> Option<&VlanDomain> {
        self.domains.iter().find(|d| d.name.as_deref() == Some(name))
    }

    pub(crate) fn iface(&self, name: &str) -> Option<&JuniperIface> {
        self.ifaces.iter().find(|i| i.name == name)
    }

    pub(crate) fn name_table(&self) -> HashMap<String, u32> {
        vlan_name_table(&self.domains)
    }
}

fn parse_domain(
    domain: &XmlElement,
) -> Result<Option<VlanDomain>, NetmanError> {
    let name = domain.child_text("name");
    let owner = format!("bridge domain {}", name.unwrap_or("<unnamed>"));
    let Some(vlan_id) =
        parse_u32(domain.child_text("vlan-id"), "vlan-id", &owner)?
    else {
        log::debug!("Skipping {owner} which has no vlan-id");
        return Ok(None);
    };
    let mut ret = VlanDomain::new(vlan_id);
    ret.name = name.map(String::from);
    ret.description = domain.child_text("description").map(String::from);
    Ok(Some(ret))
}

fn parse_iface(
    iface: &XmlElement,
) -> Result<Option<JuniperIface>, NetmanError> {
    let Some(name) = iface.child_text("name") else {
        log::warn!("Skipping interface without name: {iface}");
        return Ok(None);
    };
    let owner = format!("interface {name}");
    let mut ret = JuniperIface {
        name: name.to_string(),
        disabled: iface.has_child("disable"),
        mtu: parse_u32(iface.child_text("mtu"), "mtu", &owner)?,
        native_vlan_id: parse_u32(
            iface.child_text("native-vlan-id"),
            "native-vlan-id",
            &owner,
        )?,
        ..Default::default()
    };
    if let Some(ether_opts) = iface.child("ether-options") {
        if ether_opts.has_child("no-auto-negotiation") {
            ret.auto_negotiation = Some(false);
        } else if ether_opts.has_child("auto-negotiation") {
            ret.auto_negotiation = Some(true);
        }
    }
    for bridge in iface
        .children_named("unit")
        .filter_map(|unit| unit.find(&["family", "bridge"]))
    {
        if ret.interface_mode.is_none() {
            ret.interface_mode =
                bridge.child_text("interface-mode").map(String::from);
        }
        if ret.vlan_id.is_none() {
            ret.vlan_id = bridge.child_text("vlan-id").map(String::from);
        }
        ret.vlan_id_list.extend(
            bridge
                .children_named("vlan-id-list")
                .filter_map(|e| e.text())
                .map(String::from),
        );
    }
    Ok(Some(ret))
}

impl JuniperIface {
    fn raw_members(&self) -> Vec<String> {
        let mut ret: Vec<String> = self.vlan_id.iter().cloned().collect();
        ret.extend(self.vlan_id_list.iter().cloned());
        ret
    }

    /// VLAN IDs this interface is a member of.
    pub(crate) fn vlan_members(
        &self,
        name_table: &HashMap<String, u32>,
        policy: UnresolvedPolicy,
    ) -> Result<BTreeSet<u32>, NetmanError> {
        resolve_vlan_members(&self.raw_members(), name_table, policy)
    }

    pub(crate) fn to_interface(
        &self,
        name_table: &HashMap<String, u32>,
        policy: UnresolvedPolicy,
    ) -> Result<Interface, NetmanError> {
        let mut ret = Interface::new(self.name.clone());
        ret.shutdown = self.disabled;
        ret.mtu = self.mtu;
        ret.auto_negotiation = self.auto_negotiation;
        ret.trunk_native_vlan = self.native_vlan_id;

        let members = self.vlan_members(name_table, policy)?;
        match self.interface_mode.as_deref() {
            Some(INTERFACE_MODE_TRUNK) => {
                ret.port_mode = PortMode::Trunk;
                ret.trunk_vlans = members.into_iter().collect();
            }
            None | Some(INTERFACE_MODE_ACCESS) => {
                ret.port_mode = PortMode::Access;
                ret.access_vlan = match self.vlan_id.as_deref() {
                    Some(v) => resolve_vlan_members(
                        &[v.to_string()],
                        name_table,
                        policy,
                    )?
                    .first()
                    .copied(),
                    None => members.first().copied(),
                };
            }
            Some(mode) => {
                log::warn!(
                    "Unknown interface-mode {mode} on interface {}",
                    self.name
                );
                ret.port_mode = PortMode::Unset;
            }
        }
        Ok(ret)
    }
}
