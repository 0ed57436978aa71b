use std::io;

use anyhow::Result;
use tracing::{Level, info};

use kingfall_console::{ConsoleConfig, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();
    info!("kingfall starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = Session::new(stdin.lock(), stdout.lock(), ConsoleConfig::default()).run()?;

    info!(?end, "kingfall shutting down");
    Ok(())
}
