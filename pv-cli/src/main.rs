//! pv-cli - turn exported pet telemetry into dashboard chart geometry.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pv-cli",
    version,
    about = "Pet vitals chart geometry toolkit"
)]
struct Cli {
    /// Chart sizing config (JSON); defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: pv_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = pv_cmd::config::ChartConfig::load(cli.config.as_deref())?;
    log::debug!("chart config: {:?}", config);
    pv_cmd::run(cli.command, &config)
}
