// SPDX-License-Identifier: Apache-2.0

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::{NetmanError, XmlElement};

/// NETCONF configuration datastore
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Datastore {
    Candidate,
    #[default]
    Running,
}

impl Datastore {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Running => "running",
        }
    }
}

impl std::fmt::Display for Datastore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// NETCONF session the adapters talk through.
///
/// Connection setup, authentication, framing, commit and discard belong to
/// the implementer. Every method is one request/reply round-trip; timeouts and
/// retries are the implementer's business as well.
///
/// When the device answers with `<rpc-error>`, implementations should return
/// [NetmanError::rpc_fault] so adapters can classify the failure.
pub trait NetconfSession: Send {
    /// Return the reply data holding the `<configuration>` subtree matched by
    /// `filter`. Nothing matching is an empty but well formed reply.
    fn get_config(
        &mut self,
        source: Datastore,
        filter: &XmlElement,
    ) -> impl Future<Output = Result<XmlElement, NetmanError>> + Send;

    fn edit_config(
        &mut self,
        target: Datastore,
        config: &XmlElement,
    ) -> impl Future<Output = Result<(), NetmanError>> + Send;

    /// Vendor specific RPC, `request` is the operation element.
    fn rpc(
        &mut self,
        request: &XmlElement,
    ) -> impl Future<Output = Result<XmlElement, NetmanError>> + Send;
}
