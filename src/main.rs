//! Wiki-Swipe main entry point
//!
//! This is the terminal front end: it prints one article card at a time and
//! reads swipes from stdin.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use wiki_swipe::config::{load_config_with_hash, validate, validate_run_pair, Config};
use wiki_swipe::output::{generate_markdown_summary, print_card};
use wiki_swipe::state::{DragGesture, Mode, SwipeDirection, SwipeOutcome};
use wiki_swipe::GameCoordinator;

const RUN_FINISHED_MESSAGE: &str = "Run finished. Press 'n' for a new run or 'm' to switch mode.";

/// Wiki-Swipe: swipe through Wikipedia
///
/// Rabbit hole mode follows links wherever they lead. Speedrun mode times you
/// from a random start article to a random target article.
#[derive(Parser, Debug)]
#[command(name = "wiki-swipe")]
#[command(version)]
#[command(about = "Swipe through Wikipedia, one card at a time", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults if omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Mode to start in (rabbit-hole or speedrun)
    #[arg(long, default_value = "rabbit-hole")]
    mode: Mode,

    /// Speedrun start article (requires --target)
    #[arg(long, requires = "target")]
    start: Option<String>,

    /// Speedrun target article (requires --start)
    #[arg(long, requires = "start")]
    target: Option<String>,

    /// Seed for deck draws and speedrun pairs
    #[arg(long)]
    seed: Option<u64>,

    /// Write a markdown report of each finished speedrun to this file
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Validate config and show the resolved settings without playing
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load(cli.config.as_deref())?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_play(config, &cli).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is the game card.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wiki_swipe=info,warn"),
            1 => EnvFilter::new("wiki_swipe=debug,info"),
            2 => EnvFilter::new("wiki_swipe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file, or validates the built-in defaults when none is given
fn load(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        None => {
            let config = Config::default();
            validate(&config).context("Built-in configuration is invalid")?;
            Ok(config)
        }
    }
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    println!("=== Wiki-Swipe Dry Run ===\n");

    println!("API:");
    println!("  REST base: {}", config.api.rest_base);
    println!("  Action base: {}", config.api.action_base);
    println!("  Max link pages: {}", config.api.max_link_pages);
    println!("  Max load attempts: {}", config.api.max_load_attempts);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nRabbit Hole:");
    println!("  Deck ({}): {}", config.rabbit_hole.deck.len(), config.rabbit_hole.deck.join(", "));
    println!("  Refill below: {}", config.rabbit_hole.refill_below);

    println!("\nSpeedrun:");
    println!("  Title pool: {} titles", config.speedrun.titles.len());
    println!("  Top candidates: {}", config.speedrun.top_candidates);
    println!("  Extra candidates: {}", config.speedrun.extra_candidates);
    println!("  Start window: {}", config.speedrun.start_window);

    println!("\nDisplay:");
    println!("  Preview blocks: {}", config.display.preview_blocks);

    println!("\n✓ Configuration is valid");
}

/// Handles the interactive game loop
async fn handle_play(config: Config, cli: &Cli) -> anyhow::Result<()> {
    let mut game = GameCoordinator::new(config, cli.mode, cli.seed)
        .context("Failed to start the game")?;

    let mut card = match (&cli.start, &cli.target) {
        (Some(start), Some(target)) => {
            validate_run_pair(start, target).context("Invalid --start/--target")?;
            game.restart_with(start, target).await
        }
        _ => game.refresh().await,
    };
    print_card(game.session(), &card);
    print_help();

    let mut drag = DragGesture::new();
    let mut summary_written = false;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let input = line.trim();
        let (command, arg) = match input.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (input, ""),
        };

        drag.set_locked(game.session().is_locked());

        match command {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "?" | "help" => {
                print_help();
                continue;
            }
            "m" | "mode" => {
                let mode = if arg.is_empty() {
                    game.session().mode().toggled()
                } else {
                    match arg.parse::<Mode>() {
                        Ok(mode) => mode,
                        Err(e) => {
                            println!("{}", e);
                            continue;
                        }
                    }
                };
                if mode == Mode::Speedrun && game.session().mode() != Mode::Speedrun {
                    summary_written = false;
                }
                card = game.switch_mode(mode).await;
            }
            "n" | "new" | "restart" => {
                if game.session().mode() != Mode::Speedrun {
                    println!("Restart applies to speedrun mode; press 'm' to switch.");
                    continue;
                }
                summary_written = false;
                card = game.restart().await;
            }
            "drag" => {
                if drag.is_locked() {
                    println!("{}", RUN_FINISHED_MESSAGE);
                    continue;
                }
                let Ok(dx) = arg.parse::<f32>() else {
                    println!("Usage: drag <dx>  (e.g. drag 200, drag -250)");
                    continue;
                };
                drag.begin(0.0, 0.0);
                drag.update(dx, 0.0);
                match drag.release(dx) {
                    Some(direction) => card = swipe(&mut game, direction).await,
                    None => {
                        println!("Not far enough; the card snaps back.");
                        continue;
                    }
                }
            }
            key => match SwipeDirection::from_key(key) {
                Some(direction) => card = swipe(&mut game, direction).await,
                None => {
                    println!("Unknown command '{}'. Type ? for help.", input);
                    continue;
                }
            },
        }

        print_card(game.session(), &card);

        if let (Some(path), Some(summary)) = (&cli.summary, game.session().run_summary()) {
            if !summary_written {
                generate_markdown_summary(&summary, path)
                    .with_context(|| format!("Failed to write summary to {}", path.display()))?;
                println!("✓ Run summary written to: {}", path.display());
                summary_written = true;
            }
        }
    }

    Ok(())
}

async fn swipe(game: &mut GameCoordinator, direction: SwipeDirection) -> wiki_swipe::ArticleCard {
    let (outcome, card) = game.swipe(direction).await;
    if outcome == SwipeOutcome::Ignored {
        println!("{}", RUN_FINISHED_MESSAGE);
    }
    card
}

fn print_help() {
    println!();
    println!("Swipe: a/h/left = left, d/l/right = right, drag <dx> = drag the card");
    println!("Other: m [mode] = switch mode, n = new speedrun, ? = help, q = quit");
}
