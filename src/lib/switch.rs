// SPDX-License-Identifier: Apache-2.0

use std::future::Future;

use crate::{Interface, NetmanError, SwitchContext};

/// Vendor neutral switch API shared by every adapter.
///
/// Failures are reported with the domain [crate::ErrorKind] values
/// (`VlanAlreadyExist`, `UnknownVlan`, ...) whenever the adapter can tell
/// what went wrong, [crate::ErrorKind::TransportFault] otherwise.
pub trait NetmanSwitch {
    /// Create VLAN `vlan_id`. `name` becomes the VLAN description.
    fn add_vlan(
        &mut self,
        ctx: &SwitchContext,
        vlan_id: u32,
        name: Option<&str>,
    ) -> impl Future<Output = Result<(), NetmanError>> + Send;

    fn remove_vlan(
        &mut self,
        ctx: &SwitchContext,
        vlan_id: u32,
    ) -> impl Future<Output = Result<(), NetmanError>> + Send;

    fn get_interface(
        &mut self,
        ctx: &SwitchContext,
        name: &str,
    ) -> impl Future<Output = Result<Interface, NetmanError>> + Send;

    fn get_interfaces(
        &mut self,
        ctx: &SwitchContext,
    ) -> impl Future<Output = Result<Vec<Interface>, NetmanError>> + Send;

    /// Names of interfaces carrying `vlan_id`, in device configuration order.
    fn get_vlan_interfaces(
        &mut self,
        ctx: &SwitchContext,
        vlan_id: u32,
    ) -> impl Future<Output = Result<Vec<String>, NetmanError>> + Send;
}
