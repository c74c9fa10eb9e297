// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::str::FromStr;

use netman::{
    Datastore, ErrorKind, NetconfSession, NetmanError, XmlElement,
};

use crate::{CliError, config::CliConfig};

const TERSE_RPC: &str = "get-interface-information";

/// NETCONF session answering from saved device dumps.
///
/// `get-config` returns the whole dump of the datastore regardless of the
/// filter. `edit-config` only prints the payload it was handed.
#[derive(Debug)]
pub(crate) struct FileSession {
    running: XmlElement,
    candidate: XmlElement,
    interface_information: Option<XmlElement>,
}

async fn load_xml(path: &Path) -> Result<XmlElement, CliError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CliError::read_file(path, e))?;
    log::debug!("Loaded {}", path.display());
    Ok(XmlElement::from_str(&content)?)
}

impl FileSession {
    pub(crate) async fn load(config: &CliConfig) -> Result<Self, CliError> {
        let running = load_xml(&config.running).await?;
        let candidate = match config.candidate.as_ref() {
            Some(path) => load_xml(path).await?,
            None => running.clone(),
        };
        let interface_information =
            match config.interface_information.as_ref() {
                Some(path) => Some(load_xml(path).await?),
                None => None,
            };
        Ok(Self {
            running,
            candidate,
            interface_information,
        })
    }
}

impl NetconfSession for FileSession {
    async fn get_config(
        &mut self,
        source: Datastore,
        filter: &XmlElement,
    ) -> Result<XmlElement, NetmanError> {
        log::debug!("Answering get-config {filter} from {source} dump");
        Ok(match source {
            Datastore::Running => self.running.clone(),
            Datastore::Candidate => self.candidate.clone(),
        })
    }

    async fn edit_config(
        &mut self,
        target: Datastore,
        config: &XmlElement,
    ) -> Result<(), NetmanError> {
        println!("<!-- edit-config target {target} -->");
        println!("{}", config.to_pretty_xml_string()?);
        Ok(())
    }

    async fn rpc(
        &mut self,
        request: &XmlElement,
    ) -> Result<XmlElement, NetmanError> {
        if request.name != TERSE_RPC {
            return Err(NetmanError::new(
                ErrorKind::NoSupport,
                format!("RPC {} cannot be answered offline", request.name),
            ));
        }
        Ok(match self.interface_information.as_ref() {
            Some(reply) => reply.clone(),
            None => {
                log::warn!(
                    "No interface-information dump configured, assuming \
                     no physical interface"
                );
                XmlElement::new("rpc-reply")
                    .with_child(XmlElement::new("interface-information"))
            }
        })
    }
}
