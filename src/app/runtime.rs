use anyhow::Result;
use tracing::{debug, info};

use crate::app::{command_dispatcher, config_manager, config_runtime, input_processor, terminal};
use crate::commands;

pub(crate) fn run() -> Result<()> {
    let (cli, cli_sources) = config_runtime::parse_cli_with_sources();
    let resolved = config_manager::resolve_config(&cli, &cli_sources)?;

    let default_level = config_runtime::resolve_default_log_level(&resolved.args);
    let force_cli_log_level = config_runtime::should_force_cli_log_level(&cli_sources);
    terminal::init_tracing(default_level, force_cli_log_level);

    debug!(?cli, config_loaded = resolved.loaded.loaded_from_file, "CLI arguments parsed");

    if command_dispatcher::try_dispatch(&cli, &resolved)? {
        return Ok(());
    }

    let Some(input) = input_processor::process_input(&resolved.args)? else {
        info!("No input provided. Pass topics as arguments, use --input, or pipe them via stdin.");
        info!("Example: printf 'Resume writing\\nResume writing tips\\n' | webinar-topics");
        return Ok(());
    };

    commands::run_group_command(input, &resolved.args)
}
