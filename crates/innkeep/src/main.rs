use std::io;

use innkeep::prelude::*;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), InnkeepError> {
    // Logs go to stderr; stdout belongs to the menu.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    console.run()
}
