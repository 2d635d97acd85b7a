use clap::Parser;
use log::{error, info};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

use streamlist::core::config::{self, ConfigNotes, ResolvedConfig};
use streamlist::tui;

#[derive(Parser)]
#[command(name = "streamlist", version, about = "Build a list of streams in your terminal")]
struct Args {
    /// Path to open at start-up (e.g. "/movies")
    #[arg(short, long)]
    path: Option<String>,

    /// Config file to use instead of ~/.streamlist/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    // The terminal belongs to the UI, so logs only ever go to a file
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut notes = ConfigNotes::new();
    let file_config = match &args.config {
        Some(path) => config::load_config_from(path, &mut notes),
        None => config::load_config(&mut notes),
    }
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let resolved = config::resolve(&file_config, args.path.as_deref(), &mut notes);
    init_logging(&resolved);
    notes.flush();

    info!("StreamList starting at {:?}", resolved.initial_path);

    let result = tui::run(resolved);
    if let Err(e) = &result {
        error!("StreamList exited with error: {}", e);
    }
    result
}
