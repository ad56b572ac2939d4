//! Command-line interface for the chess client.

use clap::Parser;
use std::path::PathBuf;

/// Terminal chess client for a remote move-adjudication service.
#[derive(Parser, Debug)]
#[command(name = "chessbot_tui")]
#[command(about = "Play chess against a remote bot from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Adjudication service URL.
    #[arg(long, default_value = "http://localhost:5000")]
    pub server_url: String,

    /// Log file path (the terminal itself is owned by the UI).
    #[arg(long, default_value = "chessbot_tui.log")]
    pub log_file: PathBuf,
}
