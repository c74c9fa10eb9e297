// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use netman::{NetmanError, RpcFault};

const EXIT_FAILURE: i32 = 1;
const EXIT_SWITCH_FAILURE: i32 = 2;

#[derive(Clone, Debug)]
pub(crate) struct CliError {
    msg: String,
    /// Raw `<rpc-error>` behind a failed switch operation
    fault: Option<RpcFault>,
    exit_code: i32,
}

impl CliError {
    pub(crate) fn read_file(path: &Path, e: std::io::Error) -> Self {
        Self::from(format!("Failed to read {}: {e}", path.display()))
    }

    /// Switch operation failures exit with 2, everything else with 1.
    pub(crate) fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.msg)?;
        if let Some(fault) = self.fault.as_ref() {
            write!(f, "\nDevice reported: {fault}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CliError {}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::from(format!("Invalid YAML: {e}"))
    }
}

impl From<NetmanError> for CliError {
    fn from(e: NetmanError) -> Self {
        Self {
            msg: e.to_string(),
            fault: e.fault().cloned(),
            exit_code: EXIT_SWITCH_FAILURE,
        }
    }
}

impl From<&str> for CliError {
    fn from(msg: &str) -> Self {
        Self::from(msg.to_string())
    }
}

impl From<String> for CliError {
    fn from(msg: String) -> Self {
        Self {
            msg,
            fault: None,
            exit_code: EXIT_FAILURE,
        }
    }
}
