// SPDX-License-Identifier: Apache-2.0

use crate::{ErrorKind, Interface, NetmanError, XmlElement};

const STATUS_UP: &str = "up";

/// One `<physical-interface>` entry of `show interfaces terse`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InterfaceStatus {
    pub(crate) name: String,
    pub(crate) admin_up: bool,
    pub(crate) oper_up: bool,
}

pub(crate) fn terse_request() -> XmlElement {
    XmlElement::new("get-interface-information")
        .with_child(XmlElement::new("terse"))
}

/// Collect physical interfaces in reply order. Logical interfaces nested
/// below them are ignored.
pub(crate) fn parse_terse_reply(
    reply: &XmlElement,
) -> Result<Vec<InterfaceStatus>, NetmanError> {
    let Some(info) = reply.find_descendant("interface-information") else {
        let e = NetmanError::new(
            ErrorKind::TransportFault,
            format!(
                "Invalid reply for get-interface-information, \
                 no interface-information found: {reply}"
            ),
        );
        log::error!("{e}");
        return Err(e);
    };

    let mut ret = Vec::new();
    for phy in info.children_named("physical-interface") {
        let Some(name) = phy.child_text("name") else {
            log::warn!("Ignoring physical-interface without name: {phy}");
            continue;
        };
        ret.push(InterfaceStatus {
            name: name.to_string(),
            admin_up: phy.child_text("admin-status") == Some(STATUS_UP),
            oper_up: phy.child_text("oper-status") == Some(STATUS_UP),
        });
    }
    log::debug!("Device reported {} physical interfaces", ret.len());
    Ok(ret)
}

/// Interfaces in operational order first, then configured interfaces the
/// device did not report, in configuration order.
pub(crate) fn merge_interfaces(
    configured: Vec<Interface>,
    statuses: &[InterfaceStatus],
) -> Vec<Interface> {
    let mut configured: Vec<Option<Interface>> =
        configured.into_iter().map(Some).collect();
    let mut ret = Vec::new();

    for status in statuses {
        let mut iface = configured
            .iter_mut()
            .find(|i| matches!(i, Some(i) if i.name == status.name))
            .and_then(Option::take)
            .unwrap_or_else(|| Interface::new(status.name.clone()));
        iface.shutdown = !status.admin_up;
        ret.push(iface);
    }
    ret.extend(configured.into_iter().flatten());
    ret
}
