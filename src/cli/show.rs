// SPDX-License-Identifier: Apache-2.0

use netman::NetmanSwitch;

use crate::{CliError, SwitchSetup};

pub(crate) struct CommandShow;

impl CommandShow {
    pub(crate) const CMD: &'static str = "show";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .alias("s")
            .about("Query switch interfaces and VLAN membership")
            .subcommand_required(true)
            .subcommand(
                clap::Command::new("interfaces").about("Show all interfaces"),
            )
            .subcommand(
                clap::Command::new("interface")
                    .about("Show single interface")
                    .arg(
                        clap::Arg::new("NAME")
                            .required(true)
                            .index(1)
                            .help("Interface name, e.g. xe-0/0/1"),
                    ),
            )
            .subcommand(
                clap::Command::new("vlan-members")
                    .about("Show interfaces carrying a VLAN")
                    .arg(
                        clap::Arg::new("VLAN_ID")
                            .required(true)
                            .index(1)
                            .value_parser(clap::value_parser!(u32))
                            .help("VLAN ID"),
                    ),
            )
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
        setup: SwitchSetup,
    ) -> Result<(), CliError> {
        let SwitchSetup { mut switch, ctx } = setup;
        let output = if matches.subcommand_matches("interfaces").is_some() {
            serde_yaml::to_string(&switch.get_interfaces(&ctx).await?)?
        } else if let Some(matches) = matches.subcommand_matches("interface")
        {
            let name = matches
                .get_one::<String>("NAME")
                .ok_or(CliError::from("Interface name required"))?;
            serde_yaml::to_string(&switch.get_interface(&ctx, name).await?)?
        } else if let Some(matches) =
            matches.subcommand_matches("vlan-members")
        {
            let vlan_id = matches
                .get_one::<u32>("VLAN_ID")
                .copied()
                .ok_or(CliError::from("VLAN ID required"))?;
            serde_yaml::to_string(
                &switch.get_vlan_interfaces(&ctx, vlan_id).await?,
            )?
        } else {
            return Err(CliError::from("Unknown show command"));
        };
        println!("{output}");
        Ok(())
    }
}
