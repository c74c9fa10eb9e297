// SPDX-License-Identifier: Apache-2.0

//! Juniper MX adapter.
//!
//! VLANs are modelled as `bridge-domains` and interface membership is read
//! from `unit/family/bridge`. Each operation fetches one filtered
//! configuration snapshot from [SwitchContext::source], derives its answer or
//! its single `<edit-config>` payload from that snapshot, and never commits.

pub(crate) mod config;
pub(crate) mod edit;
pub(crate) mod filter;
pub(crate) mod terse;
pub(crate) mod translate;

use self::config::JuniperConfig;
use self::edit::{add_vlan_config, remove_vlan_config};
use self::filter::JuniperConfigFilter;
use self::terse::{
    InterfaceStatus, merge_interfaces, parse_terse_reply, terse_request,
};
use self::translate::translate_fault;
use crate::{
    Datastore, Interface, NetconfSession, NetmanError, NetmanSwitch,
    SwitchContext, SwitchDescriptor, SwitchModel, UnresolvedPolicy,
    XmlElement,
};

/// [NetmanSwitch] implementation for Juniper MX routers
#[derive(Debug)]
pub struct JuniperMx<S: NetconfSession> {
    session: S,
    descriptor: Option<SwitchDescriptor>,
}

impl<S: NetconfSession> JuniperMx<S> {
    pub fn new(session: S) -> Self {
        Self {
            session,
            descriptor: None,
        }
    }

    /// Bind `session` to the switch described by `descriptor`, refusing
    /// descriptors of other switch models.
    pub fn from_descriptor(
        descriptor: SwitchDescriptor,
        session: S,
    ) -> Result<Self, NetmanError> {
        match descriptor.switch_model()? {
            SwitchModel::JuniperMx => {
                log::debug!("Juniper MX adapter bound to {descriptor}");
                Ok(Self {
                    session,
                    descriptor: Some(descriptor),
                })
            }
        }
    }

    pub fn descriptor(&self) -> Option<&SwitchDescriptor> {
        self.descriptor.as_ref()
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    async fn fetch_config(
        &mut self,
        source: Datastore,
        filter: &JuniperConfigFilter,
    ) -> Result<JuniperConfig, NetmanError> {
        let filter_xml = filter.to_xml();
        log::debug!(
            "get-config from {source} datastore, filter {filter_xml}"
        );
        let reply = self
            .session
            .get_config(source, &filter_xml)
            .await
            .map_err(translate_fault)?;
        log::trace!("get-config reply {reply}");
        JuniperConfig::parse(&reply, filter)
    }

    async fn fetch_operational(
        &mut self,
    ) -> Result<Vec<InterfaceStatus>, NetmanError> {
        let request = terse_request();
        log::debug!("Sending RPC {request}");
        let reply =
            self.session.rpc(&request).await.map_err(translate_fault)?;
        log::trace!("RPC reply {reply}");
        parse_terse_reply(&reply)
    }

    async fn edit(
        &mut self,
        ctx: &SwitchContext,
        payload: &XmlElement,
    ) -> Result<(), NetmanError> {
        let target = ctx.target();
        log::debug!("edit-config on {target} datastore: {payload}");
        self.session
            .edit_config(target, payload)
            .await
            .map_err(translate_fault)
    }
}

impl<S: NetconfSession> NetmanSwitch for JuniperMx<S> {
    async fn add_vlan(
        &mut self,
        ctx: &SwitchContext,
        vlan_id: u32,
        name: Option<&str>,
    ) -> Result<(), NetmanError> {
        let filter = JuniperConfigFilter::new().bridge_domains();
        let current = self.fetch_config(ctx.source(), &filter).await?;
        let payload = add_vlan_config(&current, vlan_id, name)?;
        self.edit(ctx, &payload).await?;
        log::info!("VLAN {vlan_id} added to candidate configuration");
        Ok(())
    }

    async fn remove_vlan(
        &mut self,
        ctx: &SwitchContext,
        vlan_id: u32,
    ) -> Result<(), NetmanError> {
        let filter =
            JuniperConfigFilter::new().bridge_domains().interfaces();
        let current = self.fetch_config(ctx.source(), &filter).await?;
        let payload = remove_vlan_config(&current, vlan_id)?;

        let names = current.name_table();
        let mut still_members = Vec::new();
        for iface in &current.ifaces {
            match iface.vlan_members(&names, UnresolvedPolicy::Skip) {
                Ok(members) if members.contains(&vlan_id) => {
                    still_members.push(iface.name.as_str());
                }
                Ok(_) => (),
                Err(e) => log::warn!(
                    "Cannot tell whether {} references VLAN {vlan_id}: {e}",
                    iface.name
                ),
            }
        }
        if !still_members.is_empty() {
            log::info!(
                "Interfaces {} still reference VLAN {vlan_id} being removed",
                still_members.join(", ")
            );
        }

        self.edit(ctx, &payload).await?;
        log::info!("VLAN {vlan_id} removed from candidate configuration");
        Ok(())
    }

    async fn get_interface(
        &mut self,
        ctx: &SwitchContext,
        name: &str,
    ) -> Result<Interface, NetmanError> {
        let filter =
            JuniperConfigFilter::new().interface(name).bridge_domains();
        let current = self.fetch_config(ctx.source(), &filter).await?;
        if let Some(iface) = current.iface(name) {
            return iface
                .to_interface(&current.name_table(), UnresolvedPolicy::Skip);
        }

        log::debug!("Interface {name} not configured, checking device state");
        let statuses = self.fetch_operational().await?;
        match statuses.iter().find(|s| s.name == name) {
            Some(status) => {
                log::debug!(
                    "Interface {name} admin up: {}, oper up: {}",
                    status.admin_up,
                    status.oper_up
                );
                let mut ret = Interface::new(name.to_string());
                ret.shutdown = !status.admin_up;
                Ok(ret)
            }
            None => {
                let e = NetmanError::unknown_interface(name);
                log::error!("{e}");
                Err(e)
            }
        }
    }

    async fn get_interfaces(
        &mut self,
        ctx: &SwitchContext,
    ) -> Result<Vec<Interface>, NetmanError> {
        let filter = JuniperConfigFilter::new().interfaces().bridge_domains();
        let current = self.fetch_config(ctx.source(), &filter).await?;
        let names = current.name_table();
        let configured = current
            .ifaces
            .iter()
            .map(|i| i.to_interface(&names, UnresolvedPolicy::Skip))
            .collect::<Result<Vec<Interface>, NetmanError>>()?;
        let statuses = self.fetch_operational().await?;
        Ok(merge_interfaces(configured, &statuses))
    }

    async fn get_vlan_interfaces(
        &mut self,
        ctx: &SwitchContext,
        vlan_id: u32,
    ) -> Result<Vec<String>, NetmanError> {
        let filter = JuniperConfigFilter::new()
            .bridge_domain(vlan_id)
            .interfaces();
        let current = self.fetch_config(ctx.source(), &filter).await?;
        if current.domain_by_id(vlan_id).is_none() {
            let e = NetmanError::unknown_vlan(vlan_id);
            log::error!("{e}");
            return Err(e);
        }
        let names = current.name_table();
        let mut ret = Vec::new();
        for iface in &current.ifaces {
            if iface
                .vlan_members(&names, UnresolvedPolicy::Skip)?
                .contains(&vlan_id)
            {
                ret.push(iface.name.clone());
            }
        }
        Ok(ret)
    }
}
