// SPDX-License-Identifier: Apache-2.0

use super::fake_session::{an_rpc_response, xml};
use crate::juniper::terse::{
    InterfaceStatus, merge_interfaces, parse_terse_reply,
};
use crate::{ErrorKind, Interface, PortMode};

fn status(name: &str, admin_up: bool) -> InterfaceStatus {
    InterfaceStatus {
        name: name.to_string(),
        admin_up,
        oper_up: false,
    }
}

#[test]
fn test_parse_terse_ignore_logical_interface() {
    let statuses = parse_terse_reply(&xml(&an_rpc_response(
        r#"
        <interface-information style="terse">
          <physical-interface>
            <name>
              xe-0/0/1
            </name>
            <admin-status>
              up
            </admin-status>
            <oper-status>
              up
            </oper-status>
            <logical-interface>
              <name>xe-0/0/1.0</name>
              <admin-status>down</admin-status>
              <oper-status>down</oper-status>
            </logical-interface>
          </physical-interface>
          <physical-interface>
            <admin-status>up</admin-status>
          </physical-interface>
        </interface-information>"#,
    )))
    .unwrap();

    assert_eq!(
        statuses,
        vec![InterfaceStatus {
            name: "xe-0/0/1".to_string(),
            admin_up: true,
            oper_up: true,
        }]
    );
}

#[test]
fn test_parse_terse_without_interface_information() {
    let result = parse_terse_reply(&xml(&an_rpc_response("<ok/>")));

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::TransportFault);
    }
}

#[test]
fn test_merge_interfaces() {
    let mut trunk = Interface::new("xe-0/0/3".to_string());
    trunk.port_mode = PortMode::Trunk;
    trunk.trunk_vlans = vec![10, 20];
    let mut disabled = Interface::new("xe-0/0/5".to_string());
    disabled.shutdown = true;

    let merged = merge_interfaces(
        vec![disabled.clone(), trunk.clone()],
        &[status("xe-0/0/1", false), status("xe-0/0/3", false)],
    );

    let mut bare = Interface::new("xe-0/0/1".to_string());
    bare.shutdown = true;
    trunk.shutdown = true;
    assert_eq!(merged, vec![bare, trunk, disabled]);
}
