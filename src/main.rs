//! CLI entry point for the webinar-topics tool.

use anyhow::Result;

mod app;
mod app_config;
mod cli;
mod commands;

fn main() -> Result<()> {
    app::runtime::run()
}
