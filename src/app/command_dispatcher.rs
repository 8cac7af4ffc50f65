//! CLI command routing: runs the Compare and Config subcommands.
//!
//! If the user invoked a subcommand, this module runs the corresponding handler
//! and reports it as handled. Otherwise the caller continues with grouping.

use anyhow::Result;

use crate::app::config_manager::ResolvedConfig;
use crate::cli::{Cli, Command, ConfigCommand};
use crate::commands;

/// If `cli` has a subcommand, run it and return `true`; otherwise return `false`.
pub(crate) fn try_dispatch(cli: &Cli, resolved: &ResolvedConfig) -> Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    match command {
        Command::Compare(compare_args) => {
            commands::run_compare_command(compare_args, &resolved.args)?;
        }
        Command::Config { command } => match command {
            ConfigCommand::Show => {
                commands::run_config_show_command(&resolved.args, &resolved.loaded);
            }
        },
    }

    Ok(true)
}
