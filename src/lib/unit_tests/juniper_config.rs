// SPDX-License-Identifier: Apache-2.0

use super::fake_session::{a_configuration, xml};
use crate::juniper::config::JuniperConfig;
use crate::juniper::edit::{add_vlan_config, remove_vlan_config};
use crate::juniper::filter::JuniperConfigFilter;
use crate::{ErrorKind, PortMode, UnresolvedPolicy};

fn everything() -> JuniperConfigFilter {
    JuniperConfigFilter::new().bridge_domains().interfaces()
}

#[test]
fn test_parse_empty_reply() {
    let config =
        JuniperConfig::parse(&xml(&a_configuration("")), &everything())
            .unwrap();
    assert_eq!(config, JuniperConfig::default());

    let config = JuniperConfig::parse(&xml("<data/>"), &everything()).unwrap();
    assert_eq!(config, JuniperConfig::default());
}

#[test]
fn test_parse_configuration_root() {
    let config = JuniperConfig::parse(
        &xml(
            "<configuration><bridge-domains><domain><name>A</name>\
             <vlan-id>3</vlan-id></domain></bridge-domains></configuration>",
        ),
        &everything(),
    )
    .unwrap();

    assert_eq!(config.domains.len(), 1);
    assert_eq!(config.domains[0].name.as_deref(), Some("A"));
}

#[test]
fn test_parse_ignores_unrequested_branch() {
    let config = JuniperConfig::parse(
        &xml(&a_configuration(
            "<bridge-domains><domain><vlan-id>3</vlan-id></domain>\
             </bridge-domains><interfaces><interface><name>xe-0/0/1</name>\
             </interface></interfaces>",
        )),
        &JuniperConfigFilter::new().bridge_domains(),
    )
    .unwrap();

    assert_eq!(config.domains.len(), 1);
    assert!(config.ifaces.is_empty());
}

#[test]
fn test_parse_skip_domain_without_vlan_id() {
    let config = JuniperConfig::parse(
        &xml(&a_configuration(
            r#"
            <bridge-domains>
              <domain>
                <name>NO_ID</name>
              </domain>
              <domain>
                <name>WITH_ID</name>
                <vlan-id> 12 </vlan-id>
                <description>Twelve</description>
              </domain>
            </bridge-domains>"#,
        )),
        &everything(),
    )
    .unwrap();

    assert_eq!(config.domains.len(), 1);
    assert_eq!(config.domains[0].vlan_id, 12);
    assert_eq!(config.domains[0].description.as_deref(), Some("Twelve"));
}

#[test]
fn test_parse_invalid_vlan_id() {
    let result = JuniperConfig::parse(
        &xml(&a_configuration(
            "<bridge-domains><domain><name>X</name>\
             <vlan-id>twelve</vlan-id></domain></bridge-domains>",
        )),
        &everything(),
    );

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidConfiguration);
    }
}

#[test]
fn test_parse_interface_access_vlan_by_name() {
    let config = JuniperConfig::parse(
        &xml(&a_configuration(
            r#"
            <bridge-domains>
              <domain>
                <name>SERVERS</name>
                <vlan-id>150</vlan-id>
              </domain>
            </bridge-domains>
            <interfaces>
              <interface>
                <name>ge-1/0/0</name>
                <ether-options>
                  <auto-negotiation/>
                </ether-options>
                <unit>
                  <name>0</name>
                  <family>
                    <bridge>
                      <interface-mode>access</interface-mode>
                      <vlan-id>SERVERS</vlan-id>
                    </bridge>
                  </family>
                </unit>
              </interface>
            </interfaces>"#,
        )),
        &everything(),
    )
    .unwrap();

    let iface = config
        .iface("ge-1/0/0")
        .unwrap()
        .to_interface(&config.name_table(), UnresolvedPolicy::Skip)
        .unwrap();

    assert_eq!(iface.port_mode, PortMode::Access);
    assert_eq!(iface.access_vlan, Some(150));
    assert_eq!(iface.auto_negotiation, Some(true));
    assert!(iface.trunk_vlans.is_empty());
}

#[test]
fn test_parse_interface_unknown_mode() {
    let config = JuniperConfig::parse(
        &xml(&a_configuration(
            "<interfaces><interface><name>ge-1/0/0</name><unit><family>\
             <bridge><interface-mode>dot1q</interface-mode></bridge>\
             </family></unit></interface></interfaces>",
        )),
        &everything(),
    )
    .unwrap();

    let iface = config.ifaces[0]
        .to_interface(&config.name_table(), UnresolvedPolicy::Skip)
        .unwrap();

    assert_eq!(iface.port_mode, PortMode::Unset);
}

#[test]
fn test_parse_interface_invalid_mtu() {
    let result = JuniperConfig::parse(
        &xml(&a_configuration(
            "<interfaces><interface><name>ge-1/0/0</name>\
             <mtu>jumbo</mtu></interface></interfaces>",
        )),
        &everything(),
    );

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidConfiguration);
        assert!(e.msg().contains("ge-1/0/0"));
    }
}

#[test]
fn test_edit_add_vlan_without_description() {
    let payload = add_vlan_config(&JuniperConfig::default(), 10, None).unwrap();

    assert_eq!(
        payload,
        xml(
            "<config><configuration><bridge-domains><domain>\
             <name>VLAN10</name><vlan-id>10</vlan-id>\
             </domain></bridge-domains></configuration></config>"
        )
    );
}

#[test]
fn test_edit_remove_unknown_vlan() {
    let result = remove_vlan_config(&JuniperConfig::default(), 10);

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::UnknownVlan);
        assert_eq!(e.msg(), "Vlan 10 not found");
    }
}
