// SPDX-License-Identifier: Apache-2.0

mod config;
mod error;
mod file_session;
mod show;
mod vlan;

use netman::{JuniperMx, NetmanLogLevel, SwitchContext};

pub(crate) use self::error::CliError;
use self::{
    config::{CliConfig, DEFAULT_CONFIG_PATH},
    file_session::FileSession,
    show::CommandShow,
    vlan::{CommandAddVlan, CommandRemoveVlan},
};

/// Switch adapter bound to the saved dumps plus the context to run with
pub(crate) struct SwitchSetup {
    pub(crate) switch: JuniperMx<FileSession>,
    pub(crate) ctx: SwitchContext,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let mut cli_cmd = clap::Command::new("nmt")
        .about("Offline switch management CLI working on saved dumps")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .default_value(DEFAULT_CONFIG_PATH)
                .help("Configuration file")
                .global(true),
        )
        .arg(
            clap::Arg::new("transaction")
                .short('t')
                .long("transaction")
                .action(clap::ArgAction::SetTrue)
                .help("Read the candidate datastore instead of running")
                .global(true),
        )
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .action(clap::ArgAction::SetTrue)
                .help("Disable logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .action(clap::ArgAction::Count)
                .help("Increase verbose level")
                .global(true),
        )
        .subcommand(CommandShow::new_cmd())
        .subcommand(CommandAddVlan::new_cmd())
        .subcommand(CommandRemoveVlan::new_cmd());

    let matches = cli_cmd.get_matches_mut();

    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CONFIG_PATH);
    let config = match CliConfig::load(config_path).await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };

    if !matches.get_flag("quiet") {
        init_logger(config.log_level, matches.get_count("verbose"));
    }

    log::info!("nmt version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = call_subcommand(&matches, &config).await {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn init_logger(base_level: NetmanLogLevel, verbose: u8) {
    let log_level = base_level.increase(verbose);
    let log_groups = if verbose > 2 {
        vec![]
    } else {
        vec!["netman", "nmt"]
    };

    let mut log_builder = env_logger::Builder::new();
    if log_groups.is_empty() {
        log_builder.filter(None, log_level.into());
    } else {
        for log_group in log_groups {
            log_builder.filter(Some(log_group), log_level.into());
        }
    }
    log_builder.init();
}

async fn call_subcommand(
    matches: &clap::ArgMatches,
    config: &CliConfig,
) -> Result<(), CliError> {
    let session = FileSession::load(config).await?;
    let setup = SwitchSetup {
        switch: JuniperMx::from_descriptor(config.switch.clone(), session)?,
        ctx: SwitchContext::new(matches.get_flag("transaction")),
    };

    if let Some(matches) = matches.subcommand_matches(CommandShow::CMD) {
        CommandShow::handle(matches, setup).await
    } else if let Some(matches) =
        matches.subcommand_matches(CommandAddVlan::CMD)
    {
        CommandAddVlan::handle(matches, setup).await
    } else if let Some(matches) =
        matches.subcommand_matches(CommandRemoveVlan::CMD)
    {
        CommandRemoveVlan::handle(matches, setup).await
    } else {
        Err(CliError::from("Unknown command"))
    }
}
