//! CLI command handlers.

mod compare;
mod config;
mod group;

pub use compare::run_compare_command;
pub use config::run_config_show_command;
pub use group::run_group_command;
