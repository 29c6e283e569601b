use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tabnav::core::config::{self, CliOverrides, TabnavConfig};
use tabnav::tui;

#[derive(Parser)]
#[command(name = "tabnav", about = "Tabbed navigation with a back-stack per tab")]
struct Args {
    /// Config file to use instead of ~/.tabnav/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Start with the tab strip hidden
    #[arg(long)]
    hide_tabs: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    // Logger isn't up yet; keep the error to report once it is.
    let (file_config, config_error) = match loaded {
        Ok(c) => (c, None),
        Err(e) => (TabnavConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        log_level: args.log_level,
        hide_tabs: args.hide_tabs,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "tabnav starting with {} tabs (tab strip {})",
        resolved.tabs.len(),
        if resolved.show_tabs { "shown" } else { "hidden" }
    );

    tui::run(resolved)
}
