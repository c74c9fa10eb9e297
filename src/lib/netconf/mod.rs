// SPDX-License-Identifier: Apache-2.0

mod fault;
mod session;

pub use self::fault::RpcFault;
pub use self::session::{Datastore, NetconfSession};
