//! Configuration lifecycle: load file config and merge CLI overrides.

use anyhow::Result;

use crate::app::config_runtime::{self, CliValueSources};
use crate::app_config::{LoadedConfig, load_default_file_config};
use crate::cli::{Cli, GroupArgs};

/// Resolved configuration bundle used by command handlers.
pub(crate) struct ResolvedConfig {
    pub(crate) args: GroupArgs,
    pub(crate) loaded: LoadedConfig,
}

/// Load file config and merge CLI overrides.
pub(crate) fn resolve_config(cli: &Cli, cli_sources: &CliValueSources) -> Result<ResolvedConfig> {
    let loaded = load_default_file_config()?;
    let args =
        config_runtime::apply_config_defaults(cli.group.clone(), cli_sources, loaded.config.as_ref());
    Ok(ResolvedConfig { args, loaded })
}
