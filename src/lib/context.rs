// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::Datastore;

/// Per-call session context handed to every switch operation.
///
/// Adapters read [SwitchContext::source] once when an operation starts and
/// use that datastore for every read of the operation. Edits always target
/// the candidate datastore.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct SwitchContext {
    /// Session holds an open transaction on the candidate datastore
    pub in_transaction: bool,
}

impl SwitchContext {
    pub fn new(in_transaction: bool) -> Self {
        Self { in_transaction }
    }

    pub fn in_transaction() -> Self {
        Self::new(true)
    }

    /// Datastore authoritative for reads.
    pub fn source(&self) -> Datastore {
        if self.in_transaction {
            Datastore::Candidate
        } else {
            Datastore::Running
        }
    }

    pub fn target(&self) -> Datastore {
        Datastore::Candidate
    }
}
