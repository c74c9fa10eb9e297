// SPDX-License-Identifier: Apache-2.0

use netman::NetmanSwitch;

use crate::{CliError, SwitchSetup};

fn vlan_id_arg() -> clap::Arg {
    clap::Arg::new("VLAN_ID")
        .required(true)
        .index(1)
        .value_parser(clap::value_parser!(u32))
        .help("VLAN ID")
}

fn get_vlan_id(matches: &clap::ArgMatches) -> Result<u32, CliError> {
    matches
        .get_one::<u32>("VLAN_ID")
        .copied()
        .ok_or(CliError::from("VLAN ID required"))
}

pub(crate) struct CommandAddVlan;

impl CommandAddVlan {
    pub(crate) const CMD: &'static str = "add-vlan";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .about("Print the edit-config creating a VLAN")
            .arg(vlan_id_arg())
            .arg(
                clap::Arg::new("NAME")
                    .long("name")
                    .short('n')
                    .help("VLAN description"),
            )
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
        setup: SwitchSetup,
    ) -> Result<(), CliError> {
        let SwitchSetup { mut switch, ctx } = setup;
        let vlan_id = get_vlan_id(matches)?;
        let name = matches.get_one::<String>("NAME").map(String::as_str);
        switch.add_vlan(&ctx, vlan_id, name).await?;
        Ok(())
    }
}

pub(crate) struct CommandRemoveVlan;

impl CommandRemoveVlan {
    pub(crate) const CMD: &'static str = "remove-vlan";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .about("Print the edit-config removing a VLAN")
            .arg(vlan_id_arg())
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
        setup: SwitchSetup,
    ) -> Result<(), CliError> {
        let SwitchSetup { mut switch, ctx } = setup;
        switch.remove_vlan(&ctx, get_vlan_id(matches)?).await?;
        Ok(())
    }
}
