//! Electron-density plotting CLI.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use edmap::config::{parse_level, Args};
use edmap::process;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize tracing
    let level = parse_level(&args.log_level);
    if args.log_json {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        plot = args.plot_type.name(),
        parameter = args.parameter,
        "Starting edmap"
    );

    if process(&args)?.is_none() {
        info!("No figure written");
    }
    Ok(())
}
