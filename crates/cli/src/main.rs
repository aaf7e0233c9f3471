use clap::Parser;
use stockroom_cli::{Config, Terminal, menu};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    stockroom_observability::init(&config.log_config())?;

    let mut warehouse = config.warehouse()?;
    tracing::info!(items = warehouse.store().len(), "session started");

    let mut terminal = Terminal::new();
    menu::run(&mut terminal, &mut warehouse)?;

    tracing::info!("session ended");
    Ok(())
}
