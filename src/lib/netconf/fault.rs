// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetmanError, XmlElement};

/// Decoded NETCONF `<rpc-error>`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct RpcFault {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_severity: Option<String>,
    pub message: String,
    /// `error-info/bad-element`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bad_element: Option<String>,
}

impl RpcFault {
    pub fn new(message: &str, bad_element: Option<&str>) -> Self {
        Self {
            message: message.to_string(),
            bad_element: bad_element.map(ToString::to_string),
            ..Default::default()
        }
    }

    /// Decode `<rpc-error>`. The element may be nested in an `<rpc-reply>`.
    pub fn from_xml(xml: &XmlElement) -> Result<Self, NetmanError> {
        let Some(rpc_error) = xml.find_descendant("rpc-error") else {
            let e = NetmanError::new(
                ErrorKind::InvalidArgument,
                format!("No rpc-error element found in {xml}"),
            );
            log::error!("{e}");
            return Err(e);
        };
        let owned = |name: &str| rpc_error.child_text(name).map(String::from);
        Ok(Self {
            error_type: owned("error-type"),
            error_tag: owned("error-tag"),
            error_severity: owned("error-severity"),
            message: owned("error-message").unwrap_or_default(),
            bad_element: rpc_error
                .find(&["error-info", "bad-element"])
                .and_then(|e| e.text())
                .map(String::from),
        })
    }
}

impl std::fmt::Display for RpcFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.bad_element.as_deref() {
            Some(bad_element) => {
                write!(f, "{} (bad-element: {bad_element})", self.message)
            }
            None => write!(f, "{}", self.message),
        }
    }
}
