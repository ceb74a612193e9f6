mod console;
mod logger;

use crate::console::Console;
use crate::logger::init_logger;

use anyhow::{Context, anyhow};
use log::info;

fn main() -> anyhow::Result<()> {
    init_logger().map_err(|e| anyhow!("failed to install logger: {e}"))?;

    let mut console = Console::lock();
    nodechain::demo::run_all(&mut console).context("demonstration failed")?;

    info!("all demonstrations completed");
    Ok(())
}
