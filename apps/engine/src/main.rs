mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_engine::config::Config;

use crate::cli::Cli;

fn main() -> Result<()> {
    // Load configuration first (fails on invalid env values)
    let config = Config::from_env()?;

    // Initialize structured logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("resume-engine v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let options = config.render_options();

    let result = cli::run(&cli.command, &options)
        .and_then(|out| cli::emit(cli.output.as_deref(), &out));

    if let Err(e) = result {
        if !e.is_user_correctable() {
            error!("Internal engine error: {e}");
        }
        eprintln!("{}", e.to_body());
        std::process::exit(if e.is_user_correctable() { 1 } else { 2 });
    }

    Ok(())
}
