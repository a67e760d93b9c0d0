use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::ai::Strategy;
use connect_four::config::{AppConfig, LogConfig};
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Connect Four in the terminal against a computer opponent.
#[derive(Parser)]
#[command(name = "connect_four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override the computer's strategy: random or negamax
    #[arg(long)]
    opponent: Option<Strategy>,

    /// Seed the random opponent for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Override the log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(strategy) = cli.opponent {
        config.opponent.strategy = strategy;
    }
    if cli.seed.is_some() {
        config.opponent.seed = cli.seed;
    }
    if let Some(path) = cli.log_file {
        config.logging.file = path;
    }
    config.validate().context("validating config")?;

    init_logging(&config.logging)?;
    info!(
        rows = config.game.rows,
        cols = config.game.cols,
        connect_n = config.game.connect_n,
        opponent = ?config.opponent.strategy,
        "starting Connect Four"
    );

    let mut app = App::from_config(&config).context("setting up game")?;
    run(&mut app).context("running terminal UI")
}

/// Log to a file so output does not interfere with the TUI.
fn init_logging(config: &LogConfig) -> Result<()> {
    let log_file = std::fs::File::create(&config.file)
        .with_context(|| format!("creating log file {}", config.file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    let scores = app.session().scores().current_scores();
    info!(?scores, "session ended");
    res
}
