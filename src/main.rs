//! gogh-themes - Gogh terminal themes for ratatui
//!
//! Run without arguments to launch the interactive theme demo, or use
//! subcommands to list and inspect themes.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gogh_themes::cli::commands::{Cli, Commands};
use gogh_themes::cli::{config, themes};
use gogh_themes::core::Config;
use gogh_themes::error::Result;
use gogh_themes::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging; stderr keeps stdout free for command output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        println!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand - launch the demo
        None => run_tui(cli.theme).await,
        Some(Commands::List { filter }) => themes::handle_list(filter),
        Some(Commands::Show { name, json }) => themes::handle_show(&name, json),
        Some(Commands::Config(args)) => config::handle_config(args.command),
    }
}

/// Run the interactive demo
async fn run_tui(theme: Option<String>) -> Result<()> {
    let config = Config::load()?.with_theme_override(theme);
    let app = App::new(&config)?;
    app.run().await
}
