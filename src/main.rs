use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use blogdeck::config::{Config, ConfigStore};
use blogdeck::logging;
use blogdeck::ui;

/// Terminal client for a blog-list service.
#[derive(Parser, Debug)]
#[command(name = "blogdeck", version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the configuration file.
    #[arg(long, value_name = "URL")]
    server: Option<String>,
}

fn main() -> anyhow::Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;

    if let Some(server) = cli.server {
        config.server.base_url = server;
        config.validate().context("applying --server override")?;
    }

    let store = ConfigStore::new(config, path);
    ui::runtime::run(store).context("running the terminal interface")?;
    Ok(())
}
