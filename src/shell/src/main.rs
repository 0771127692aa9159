mod commands;
mod config;
mod shell;
mod transport;

use crate::{config::AppConfig, shell::Shell, transport::ReqwestTransport};
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::io::{self, Write};

fn main() {
    if let Err(e) = run() {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    initialize();

    let config = AppConfig::load().context("failed to load configuration")?;
    info!("using authentication API at {}", config.api.url);

    let transport =
        ReqwestTransport::new(&config.api).context("failed to create HTTP transport")?;
    let shell = Shell::new(transport);

    shell.run(io::stdin().lock(), io::stdout().lock())
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    // stdout belongs to the interactive session
    builder
        .format(|f, record| writeln!(f, "[{}] {}", record.level(), record.args()))
        .target(Target::Stderr)
        .init();
}
