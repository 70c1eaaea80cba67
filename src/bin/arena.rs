use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use square_wars::arena::evaluate;
use square_wars::config::AppConfig;
use square_wars::game::{Difficulty, ScoringMode};

/// Play every difficulty level against a random baseline and report win rates.
#[derive(Parser)]
#[command(name = "arena", about = "Evaluate Square Wars opponents")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override games played per color
    #[arg(long)]
    games: Option<usize>,

    /// Override the arena seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the scoring mode: classic, territory, or quickfire
    #[arg(long)]
    scoring: Option<String>,

    /// Only evaluate this difficulty
    #[arg(long)]
    difficulty: Option<String>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.arena.games_per_color = games;
    }
    if let Some(seed) = cli.seed {
        app_config.arena.seed = seed;
    }
    if let Some(scoring) = &cli.scoring {
        app_config.game.scoring_mode = match scoring.parse::<ScoringMode>() {
            Ok(mode) => mode,
            Err(msg) => bail!(msg),
        };
    }
    app_config
        .validate()
        .context("invalid configuration after command-line overrides")?;

    let levels: Vec<Difficulty> = match &cli.difficulty {
        Some(name) => match name.parse::<Difficulty>() {
            Ok(level) => vec![level],
            Err(msg) => bail!(msg),
        },
        None => Difficulty::ALL.to_vec(),
    };

    let setup = app_config.arena_setup();
    info!(
        games_per_color = setup.games_per_color,
        seed = setup.seed,
        rows = setup.rows,
        cols = setup.cols,
        scoring = %setup.settings.scoring_mode,
        "starting arena"
    );

    for difficulty in levels {
        let stats = evaluate(difficulty, &setup)
            .with_context(|| format!("evaluating {difficulty} opponent"))?;
        info!(
            %difficulty,
            games = stats.games(),
            wins = stats.wins,
            losses = stats.losses,
            ties = stats.ties,
            win_rate = %format!("{:.1}%", stats.win_rate() * 100.0),
            avg_moves = %format!("{:.1}", stats.average_length()),
            "difficulty evaluated"
        );
    }

    Ok(())
}
