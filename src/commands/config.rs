//! Config command handlers: show effective configuration.

use crate::app::config_runtime::verbosity_label;
use crate::app_config::LoadedConfig;
use crate::cli::GroupArgs;

pub fn run_config_show_command(effective: &GroupArgs, loaded_config: &LoadedConfig) {
    let resolved_path = loaded_config.path.as_ref().map_or_else(
        || "<unresolved>".to_string(),
        |path| path.display().to_string(),
    );
    println!("config_path = {resolved_path}");
    println!(
        "config_file = {}",
        if loaded_config.loaded_from_file {
            "loaded"
        } else {
            "not found (using defaults)"
        }
    );
    println!("threshold = {}", effective.threshold);
    println!("ignore_case = {}", effective.ignore_case);
    println!("sort = {}", effective.sort.as_str());
    println!("format = {}", effective.format.as_str());
    println!("input_format = {}", effective.input_format);
    println!(
        "verbosity = {}",
        verbosity_label(effective.verbose, effective.quiet)
    );
}
