use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "lerno.log";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory for session state and logs
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lerno")
}

/// The TUI owns stdout, so diagnostics go to a file instead.
fn init_logging(data_dir: &PathBuf) {
    let Ok(log_file) = File::create(data_dir.join(LOG_FILE)) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    if let Err(e) = fs::create_dir_all(&data_dir) {
        eprintln!("Failed to create data directory {}: {}", data_dir.display(), e);
        std::process::exit(1);
    }
    init_logging(&data_dir);

    if let Err(e) = lerno::run(&data_dir).await {
        eprintln!("Error running lerno: {}", e);
        std::process::exit(1);
    }
}
