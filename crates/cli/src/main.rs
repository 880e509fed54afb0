//! dynamarshal CLI entry point.

use anyhow::Context;
use clap::Parser;
use dynamarshal_cli::cli::Cli;
use dynamarshal_cli::output::format_output;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dynamarshal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let canonical = dynamarshal_cli::run(&cli)
        .with_context(|| format!("Failed to decode {} value", cli.command.codec_name()))?;

    println!("{}", format_output(&canonical, cli.format));

    Ok(())
}
