mod app;
mod infra;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use rl_base::dataset::Dataset;
use rl_base::share::ShareLink;

use app::App;
use app::background::{DatasetSource, fetch_text, spawn_load};
use infra::logging;
use state::State;
use state::config::{Config, default_config_path, load_config};

#[derive(Parser)]
#[command(name = "ruokalista")]
#[command(about = "Random meal plan with a shopping list, reproducible from a share link", long_about = None)]
struct Cli {
    /// Share link or bare query, e.g. "s=1a2b3c4d&a=3&k=0&v=1"
    link: Option<String>,

    /// Dataset path or http(s) URL (overrides the config file)
    #[arg(long)]
    data: Option<String>,

    /// Config file (default: .ruokalista/config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the share link, dishes and shopping list, then exit
    #[arg(long)]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let (mut config, config_error) = match load_config(&config_path) {
        Ok(found) => (found.unwrap_or_default(), None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Some(data) = cli.data {
        config.dataset = data;
    }

    logging::init_or_warn(&config.log_file);
    match config_error {
        Some(e) => log::warn!("{}; using defaults", e),
        None => log::info!("config: {}", config_path.display()),
    }

    let link = ShareLink::parse(cli.link.as_deref().unwrap_or(""));
    let state = State::new(link, config.markers.clone(), config.share_base.clone());
    let source = DatasetSource::from_location(&config.dataset);
    log::info!("dataset source: {}", source.describe());

    if cli.print {
        return print_plan(state, &source);
    }

    let (load_tx, load_rx) = mpsc::channel();
    spawn_load(source, load_tx);

    logging::install_panic_hook();

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(state, load_rx);
    let result = app.run(&mut terminal);

    // Cleanup, also when the loop failed
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result?;

    // Reopen the same plan with this link
    println!("{}", app.state.share_url());
    Ok(())
}

/// Non-interactive mode: load synchronously and print the plan.
fn print_plan(mut state: State, source: &DatasetSource) -> anyhow::Result<()> {
    let text = fetch_text(source).with_context(|| format!("cannot load dataset from {}", source.describe()))?;
    state.set_dataset(Dataset::parse(&text));

    println!("{}", state.share_url());
    for (i, name) in state.chosen_names().iter().enumerate() {
        println!("{:>2}. {}", i + 1, name);
    }
    if !state.shopping.is_empty() {
        println!();
        for item in state.shopping.items() {
            println!("- {}", item.label());
        }
    }
    Ok(())
}
