use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use storybook::core::book::Book;
use storybook::core::config::{self, CliOverrides, StorybookConfig};
use storybook::tui;

#[derive(Parser)]
#[command(name = "storybook", about = "An illustrated storybook for your terminal")]
struct Args {
    /// Don't ring the terminal bell on page turns
    #[arg(long)]
    mute: bool,

    /// Skip fetching illustrations at startup
    #[arg(long)]
    no_preload: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to storybook.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("storybook.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to defaults");
        StorybookConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            mute: args.mute,
            no_preload: args.no_preload,
        },
    );

    log::info!("Storybook starting up: {:?}", resolved);

    tui::run(Book::default(), resolved)
}
