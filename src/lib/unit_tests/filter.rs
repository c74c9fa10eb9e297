// SPDX-License-Identifier: Apache-2.0

use super::fake_session::xml;
use crate::juniper::filter::JuniperConfigFilter;

#[test]
fn test_filter_keeps_request_order() {
    let filter = JuniperConfigFilter::new().interfaces().bridge_domains();

    assert_eq!(
        filter.to_xml(),
        xml(
            "<filter><configuration><interfaces/><bridge-domains/>\
             </configuration></filter>"
        )
    );
}

#[test]
fn test_filter_narrowed_to_vlan_and_interface() {
    let filter = JuniperConfigFilter::new()
        .bridge_domain(705)
        .interface("xe-0/0/1");

    assert_eq!(
        filter.to_xml().to_xml_string().unwrap(),
        "<filter><configuration>\
         <bridge-domains><domain><vlan-id>705</vlan-id></domain>\
         </bridge-domains>\
         <interfaces><interface><name>xe-0/0/1</name></interface>\
         </interfaces>\
         </configuration></filter>"
    );
}

#[test]
fn test_filter_same_entity_twice_keeps_position() {
    let filter = JuniperConfigFilter::new()
        .bridge_domains()
        .interfaces()
        .bridge_domain(10);

    assert_eq!(
        filter.to_xml(),
        xml(
            "<filter><configuration><bridge-domains><domain>\
             <vlan-id>10</vlan-id></domain></bridge-domains><interfaces/>\
             </configuration></filter>"
        )
    );
}

#[test]
fn test_filter_wants() {
    let filter = JuniperConfigFilter::new().bridge_domains();

    assert!(filter.wants_bridge_domains());
    assert!(!filter.wants_interfaces());
}
