use anyhow::Result;
use taskline::{config::Config, logger, ui};

fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config)?;

    Ok(())
}
