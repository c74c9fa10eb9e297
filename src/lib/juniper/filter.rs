// SPDX-License-Identifier: Apache-2.0

use crate::XmlElement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigEntity {
    /// `<bridge-domains/>`, or a single domain when `vlan_id` is set
    BridgeDomains { vlan_id: Option<u32> },
    /// `<interfaces/>`, or a single interface when `name` is set
    Interfaces { name: Option<String> },
}

impl ConfigEntity {
    fn is_same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn to_xml(&self) -> XmlElement {
        match self {
            Self::BridgeDomains { vlan_id } => {
                let mut ret = XmlElement::new("bridge-domains");
                if let Some(vlan_id) = vlan_id {
                    ret.push_child(XmlElement::new("domain").with_child(
                        XmlElement::new("vlan-id")
                            .with_text(&vlan_id.to_string()),
                    ));
                }
                ret
            }
            Self::Interfaces { name } => {
                let mut ret = XmlElement::new("interfaces");
                if let Some(name) = name {
                    ret.push_child(XmlElement::new("interface").with_child(
                        XmlElement::new("name").with_text(name),
                    ));
                }
                ret
            }
        }
    }
}

/// `<get-config>` subtree filter. Entities are emitted in the order they were
/// requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct JuniperConfigFilter {
    entities: Vec<ConfigEntity>,
}

impl JuniperConfigFilter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn with(mut self, entity: ConfigEntity) -> Self {
        if let Some(existing) =
            self.entities.iter_mut().find(|e| e.is_same_kind(&entity))
        {
            *existing = entity;
        } else {
            self.entities.push(entity);
        }
        self
    }

    pub(crate) fn bridge_domains(self) -> Self {
        self.with(ConfigEntity::BridgeDomains { vlan_id: None })
    }

    pub(crate) fn bridge_domain(self, vlan_id: u32) -> Self {
        self.with(ConfigEntity::BridgeDomains {
            vlan_id: Some(vlan_id),
        })
    }

    pub(crate) fn interfaces(self) -> Self {
        self.with(ConfigEntity::Interfaces { name: None })
    }

    pub(crate) fn interface(self, name: &str) -> Self {
        self.with(ConfigEntity::Interfaces {
            name: Some(name.to_string()),
        })
    }

    pub(crate) fn wants_bridge_domains(&self) -> bool {
        self.entities
            .iter()
            .any(|e| matches!(e, ConfigEntity::BridgeDomains { .. }))
    }

    pub(crate) fn wants_interfaces(&self) -> bool {
        self.entities
            .iter()
            .any(|e| matches!(e, ConfigEntity::Interfaces { .. }))
    }

    pub(crate) fn to_xml(&self) -> XmlElement {
        let mut configuration = XmlElement::new("configuration");
        for entity in &self.entities {
            configuration.push_child(entity.to_xml());
        }
        XmlElement::new("filter").with_child(configuration)
    }
}
