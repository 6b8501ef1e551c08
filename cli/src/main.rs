//! Entry point for the `dirnav` directory browser.

mod args;
mod commands;

use std::io;

use anyhow::Context;
use clap::Parser;
use dirnav_core::log::{self, LogConfig, LogLevel};
use dirnav_core::{BrowserConfig, ExtensionFilter, Navigator, StdDirSource};

use crate::args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(err) = log::init(log_config()) {
        eprintln!("failed to initialise logging: {err:#}");
    }

    let config = BrowserConfig::load().context("loading config")?;
    let root = match cli.path {
        Some(path) => path,
        None => config.start_dir_or_current()?,
    };
    let filter = cli
        .filter
        .as_deref()
        .map(ExtensionFilter::parse)
        .unwrap_or_else(|| config.extension_filter());

    let mut nav = Navigator::new(StdDirSource, root, filter);
    if let Some(limit) = cli.max_depth.or(config.max_depth) {
        nav = nav.with_max_depth(limit);
    }
    tracing::info!(
        path = %nav.current_path().display(),
        max_depth = ?nav.max_depth(),
        "starting dirnav"
    );

    let mut out = io::stdout().lock();
    if let Err(err) = nav.refresh() {
        commands::report(&mut out, &err)?;
    }
    commands::print_listing(&nav, &mut out)?;
    commands::run(&mut nav, io::stdin().lock(), &mut out)?;
    Ok(())
}

/// Navigation failures are already printed by the command loop, so stderr only carries errors.
fn log_config() -> LogConfig {
    LogConfig::default().with_console_level(LogLevel::ERROR)
}
