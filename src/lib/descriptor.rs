// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetmanError};

const DEFAULT_NETCONF_PORT: u16 = 830;

/// Switch families this crate has an adapter for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SwitchModel {
    /// Juniper MX series driven through bridge-domains
    JuniperMx,
}

impl SwitchModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JuniperMx => "juniper_mx",
        }
    }
}

impl std::fmt::Display for SwitchModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SwitchModel {
    type Err = NetmanError;

    fn from_str(s: &str) -> Result<Self, NetmanError> {
        match s {
            "juniper_mx" => Ok(Self::JuniperMx),
            _ => Err(NetmanError::new(
                ErrorKind::NoSupport,
                format!("Switch model {s} is not supported"),
            )),
        }
    }
}

/// How to reach a switch
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct SwitchDescriptor {
    pub hostname: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub password: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_NETCONF_PORT
}

impl SwitchDescriptor {
    pub const HIDE_PASSWORD_STR: &'static str =
        "<_password_hidden_by_netman>";

    pub fn new(hostname: &str, model: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            model: model.to_string(),
            username: None,
            password: None,
            port: DEFAULT_NETCONF_PORT,
        }
    }

    pub fn switch_model(&self) -> Result<SwitchModel, NetmanError> {
        self.model.parse()
    }

    pub fn hide_secrets(&mut self) {
        if self.password.is_some() {
            self.password = Some(Self::HIDE_PASSWORD_STR.to_string());
        }
    }
}

impl std::fmt::Debug for SwitchDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut hidden = self.clone();
        hidden.hide_secrets();
        f.debug_struct("SwitchDescriptor")
            .field("hostname", &hidden.hostname)
            .field("model", &hidden.model)
            .field("username", &hidden.username)
            .field("password", &hidden.password)
            .field("port", &hidden.port)
            .finish()
    }
}

impl std::fmt::Display for SwitchDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.username.as_deref() {
            Some(user) => write!(
                f,
                "{}@{}:{} ({})",
                user, self.hostname, self.port, self.model
            ),
            None => {
                write!(f, "{}:{} ({})", self.hostname, self.port, self.model)
            }
        }
    }
}
