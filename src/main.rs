//! DualShock 4 pairing CLI
//!
//! `ds4-pair -r` prints the controller and paired host addresses;
//! `ds4-pair -w <ADDR>` stores a new paired host address.

use std::process::ExitCode;

use anyhow::{Context, Result};
use ds4_pair::cli::{self, Cli, Invocation};
use ds4_pair::config::{ConfigFile, DeviceConfig, PID_ENV_VAR};
use ds4_pair::{session, Outcome, PairError};
use ds4_transport::{DeviceDiscovery, HidDiscovery};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match cli::parse_args(std::env::args_os()) {
        Ok(Invocation::Run(cli)) => cli,
        Ok(Invocation::Info(text)) => {
            print!("{text}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let action = cli.action()?;

    let file = ConfigFile::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let env_pid = std::env::var(PID_ENV_VAR).ok();
    let config = DeviceConfig::resolve(cli.pid, env_pid.as_deref(), &file)?;

    let discovery = HidDiscovery::new(config.vendor_id, config.product_id);
    let transport = discovery.open_first().await.map_err(PairError::from)?;

    match session::execute(&transport, action).await? {
        Outcome::Read(info) => {
            println!("UID: {}", info.controller_id);
            println!("Paired address: {}", info.paired_address);
        }
        Outcome::Written(addr) => {
            println!("Paired address set to {addr}");
        }
    }
    Ok(())
}
