// SPDX-License-Identifier: Apache-2.0

use super::config::JuniperConfig;
use crate::{NetmanError, XmlElement, vlan_domain_name};

fn wrap_bridge_domains(domain: XmlElement) -> XmlElement {
    XmlElement::new("config").with_child(
        XmlElement::new("configuration")
            .with_child(XmlElement::new("bridge-domains").with_child(domain)),
    )
}

/// `<edit-config>` payload creating bridge domain `VLAN<vlan_id>`.
///
/// Fails with [crate::ErrorKind::VlanAlreadyExist] when `current` already
/// holds a domain with this VLAN ID or with the generated name.
pub(crate) fn add_vlan_config(
    current: &JuniperConfig,
    vlan_id: u32,
    description: Option<&str>,
) -> Result<XmlElement, NetmanError> {
    // VLAN ID range is checked by the device, see `translate`.
    let name = vlan_domain_name(vlan_id);
    if current.domain_by_id(vlan_id).is_some()
        || current.domain_by_name(&name).is_some()
    {
        let e = NetmanError::vlan_already_exist(vlan_id);
        log::error!("{e}");
        return Err(e);
    }

    let mut domain = XmlElement::new("domain")
        .with_child(XmlElement::new("name").with_text(&name))
        .with_child(
            XmlElement::new("vlan-id").with_text(&vlan_id.to_string()),
        );
    if let Some(description) = description {
        domain.push_child(
            XmlElement::new("description").with_text(description),
        );
    }
    Ok(wrap_bridge_domains(domain))
}

/// `<edit-config>` payload deleting the bridge domain holding `vlan_id`
pub(crate) fn remove_vlan_config(
    current: &JuniperConfig,
    vlan_id: u32,
) -> Result<XmlElement, NetmanError> {
    let Some(domain) = current.domain_by_id(vlan_id) else {
        let e = NetmanError::unknown_vlan(vlan_id);
        log::error!("{e}");
        return Err(e);
    };
    let name = domain.name_or_default();
    Ok(wrap_bridge_domains(
        XmlElement::new("domain")
            .with_attribute("operation", "delete")
            .with_child(XmlElement::new("name").with_text(&name)),
    ))
}
