// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use netman::{NetmanLogLevel, SwitchDescriptor};
use serde::Deserialize;

use crate::CliError;

pub(crate) const DEFAULT_CONFIG_PATH: &str = "nmt.yml";

/// `nmt` configuration file. Dump paths are relative to the file itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct CliConfig {
    pub(crate) switch: SwitchDescriptor,
    #[serde(default)]
    pub(crate) log_level: NetmanLogLevel,
    /// Saved `<configuration>` of the running datastore
    pub(crate) running: PathBuf,
    /// Saved candidate datastore, the running one when unset
    #[serde(default)]
    pub(crate) candidate: Option<PathBuf>,
    /// Saved reply of `<get-interface-information><terse/>`
    #[serde(default)]
    pub(crate) interface_information: Option<PathBuf>,
}

impl CliConfig {
    pub(crate) async fn load(path: &str) -> Result<Self, CliError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CliError::read_file(Path::new(path), e))?;
        let mut ret: Self = serde_yaml::from_str(&content)?;
        if let Some(base) = Path::new(path).parent() {
            ret.running = base.join(&ret.running);
            ret.candidate = ret.candidate.map(|p| base.join(p));
            ret.interface_information =
                ret.interface_information.map(|p| base.join(p));
        }
        Ok(ret)
    }
}
