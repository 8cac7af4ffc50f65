use clap::{ArgMatches, CommandFactory, FromArgMatches, parser::ValueSource};

use crate::app_config::{FileConfig, VerbositySetting};
use crate::cli::{Cli, GroupArgs};

/// Which arguments were given explicitly on the command line (and so beat the config file).
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CliValueSources {
    pub(crate) threshold: bool,
    pub(crate) ignore_case: bool,
    pub(crate) sort: bool,
    pub(crate) format: bool,
    pub(crate) input_format: bool,
    pub(crate) verbose: bool,
    pub(crate) quiet: bool,
}

pub(crate) fn parse_cli_with_sources() -> (Cli, CliValueSources) {
    let command = Cli::command();
    let matches = command.get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());
    (cli, sources_from_matches(&matches))
}

fn sources_from_matches(matches: &ArgMatches) -> CliValueSources {
    CliValueSources {
        threshold: is_commandline_value(matches, "threshold"),
        ignore_case: is_commandline_value(matches, "ignore_case"),
        sort: is_commandline_value(matches, "sort"),
        format: is_commandline_value(matches, "format"),
        input_format: is_commandline_value(matches, "input_format"),
        verbose: is_commandline_value(matches, "verbose"),
        quiet: is_commandline_value(matches, "quiet"),
    }
}

fn is_commandline_value(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

pub(crate) fn apply_config_defaults(
    mut args: GroupArgs,
    cli_sources: &CliValueSources,
    file_config: Option<&FileConfig>,
) -> GroupArgs {
    let Some(file_config) = file_config else {
        return args;
    };

    if !cli_sources.threshold
        && let Some(threshold) = file_config.threshold
    {
        args.threshold = threshold;
    }

    if !cli_sources.ignore_case
        && let Some(ignore_case) = file_config.ignore_case
    {
        args.ignore_case = ignore_case;
    }

    if !cli_sources.sort
        && let Some(sort) = file_config.sort
    {
        args.sort = sort;
    }

    if !cli_sources.format
        && let Some(format) = file_config.format
    {
        args.format = format;
    }

    if !cli_sources.input_format
        && let Some(input_format) = file_config.input_format
    {
        args.input_format = input_format;
    }

    if !cli_sources.verbose
        && !cli_sources.quiet
        && let Some(verbosity) = file_config.verbosity
    {
        apply_config_verbosity(&mut args, verbosity);
    }

    args
}

fn apply_config_verbosity(args: &mut GroupArgs, verbosity: VerbositySetting) {
    match verbosity {
        VerbositySetting::Default => {
            args.quiet = false;
            args.verbose = 0;
        }
        VerbositySetting::Verbose => {
            args.quiet = false;
            args.verbose = 1;
        }
        VerbositySetting::Quiet => {
            args.quiet = true;
            args.verbose = 0;
        }
        VerbositySetting::Debug => {
            args.quiet = false;
            args.verbose = 2;
        }
    }
}

pub(crate) fn resolve_default_log_level(args: &GroupArgs) -> &'static str {
    if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

pub(crate) fn should_force_cli_log_level(cli_sources: &CliValueSources) -> bool {
    cli_sources.verbose || cli_sources.quiet
}

pub(crate) fn verbosity_label(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        VerbositySetting::Quiet.as_str()
    } else if verbose == 0 {
        VerbositySetting::Default.as_str()
    } else if verbose == 1 {
        VerbositySetting::Verbose.as_str()
    } else {
        VerbositySetting::Debug.as_str()
    }
}
