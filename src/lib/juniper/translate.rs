// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use regex::Regex;

use crate::{ErrorKind, NetmanError};

struct FaultRule {
    message_re: Regex,
    bad_element: Option<&'static str>,
    kind: ErrorKind,
    msg: &'static str,
}

impl FaultRule {
    fn new(
        pattern: &str,
        bad_element: Option<&'static str>,
        kind: ErrorKind,
        msg: &'static str,
    ) -> Self {
        Self {
            message_re: Regex::new(pattern).expect("Invalid regex pattern"),
            bad_element,
            kind,
            msg,
        }
    }
}

// First match wins.
static FAULT_RULES: LazyLock<Vec<FaultRule>> = LazyLock::new(|| {
    vec![
        FaultRule::new(
            r"not within range",
            Some("domain"),
            ErrorKind::BadVlanNumber,
            "Vlan number is invalid",
        ),
        FaultRule::new(
            r"Must be a string of \d+ characters or less",
            Some("domain"),
            ErrorKind::BadVlanName,
            "Vlan name is invalid",
        ),
    ]
});

/// Map a device `<rpc-error>` to a domain error. Errors without RPC fault or
/// not matching any rule are returned unchanged.
pub(crate) fn translate_fault(error: NetmanError) -> NetmanError {
    let Some(fault) = error.fault() else {
        return error;
    };
    for rule in FAULT_RULES.iter() {
        if rule.message_re.is_match(&fault.message)
            && rule
                .bad_element
                .is_none_or(|b| fault.bad_element.as_deref() == Some(b))
        {
            log::debug!("Device fault '{fault}' translated to {}", rule.kind);
            let mut ret = NetmanError::new(rule.kind, rule.msg.to_string());
            ret.fault = Some(fault.clone());
            return ret;
        }
    }
    log::debug!("No translation for device fault '{fault}'");
    error
}
