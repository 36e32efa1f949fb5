use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmds;
mod scope;

/// Walks a package-level binding through nested lexical scopes and prints what
/// each scope sees.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {}

pub fn main() -> anyhow::Result<()> {
    let _ = Cli::parse();

    // Diagnostics go to stderr so stdout only ever carries the demo lines.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cmds::run()?;

    Ok(())
}
