//! Chess Bot TUI - play chess against a remote adjudicator.

#![warn(missing_docs)]

use anyhow::Result;
use chessbot_tui::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    chessbot_tui::tui::run_tui(cli.server_url, &cli.log_file).await
}
