//! Command line front end for the Glo rating engine
//!
//! Every subcommand takes plain numbers on the command line and prints its
//! result as JSON on stdout, so the engine can be driven from scripts that
//! own the storage of ratings.

use anyhow::Result;
use clap::{Parser, Subcommand};
use glo_rating::config::{validate_config, AppConfig};
use glo_rating::rating::{
    calc_expected_score_with_scale, calc_player_k_factor_with, estimate_performance,
    to_score, to_strokes, total_score, GloRatingCalculator, PerformanceRatingInput,
    RatingCalculator,
};
use glo_rating::types::{HolePlay, RatingUpdateInput};
use serde::Serialize;
use tracing::{debug, info};

/// Glo Rating Engine - player and hole ratings from strokes
#[derive(Parser)]
#[command(
    name = "glo",
    version,
    about = "Compute Glo player and hole ratings",
    long_about = "Glo is an Elo-family rating system for players and holes. Ratings are read \
                 from the command line, model parameters from GLO_* environment variables, and \
                 results are written to stdout as JSON."
)]
struct Args {
    /// Log level override
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert strokes to a score in (0, 1)
    Score {
        #[arg(allow_negative_numbers = true)]
        strokes: f64,
    },

    /// Convert a score in (0, 1) back to strokes
    Strokes { score: f64 },

    /// Expected score of a competing rating against a hole
    Expected {
        #[arg(long, allow_negative_numbers = true)]
        hole_rating: f64,
        #[arg(long, allow_negative_numbers = true)]
        competing_rating: f64,
    },

    /// Dynamic K-factor for a player rating
    KFactor {
        #[arg(allow_negative_numbers = true)]
        player_rating: f64,
    },

    /// Solve the performance rating of a round
    Performance {
        /// Comma separated hole ratings
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        hole_ratings: Vec<f64>,

        /// Total score across the holes
        #[arg(long, conflicts_with = "strokes")]
        total_score: Option<f64>,

        /// Comma separated strokes per hole, summed into the total score
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        strokes: Option<Vec<f64>>,
    },

    /// Update player and hole ratings from a single play
    Update {
        #[arg(long, allow_negative_numbers = true)]
        player_rating: f64,
        #[arg(long, allow_negative_numbers = true)]
        hole_rating: f64,
        #[arg(long, allow_negative_numbers = true)]
        strokes: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        performance_rating: f64,
    },

    /// Apply a whole round of plays for one player
    Round {
        #[arg(long, allow_negative_numbers = true)]
        player_rating: f64,

        /// Comma separated hole ratings
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        hole_ratings: Vec<f64>,

        /// Comma separated strokes, one per hole
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        strokes: Vec<f64>,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from environment and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::from_env()?;

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    validate_config(&config)?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(command: Command, config: &AppConfig) -> Result<()> {
    let rating = &config.rating;
    let calculator = GloRatingCalculator::new(*rating)?;

    match command {
        Command::Score { strokes } => print_json(&serde_json::json!({
            "strokes": strokes,
            "score": to_score(strokes),
        })),
        Command::Strokes { score } => print_json(&serde_json::json!({
            "score": score,
            "strokes": to_strokes(score)?,
        })),
        Command::Expected {
            hole_rating,
            competing_rating,
        } => print_json(&serde_json::json!({
            "expected_score": calc_expected_score_with_scale(hole_rating, competing_rating, rating.rd),
        })),
        Command::KFactor { player_rating } => print_json(&serde_json::json!({
            "player_rating": player_rating,
            "k_factor": calc_player_k_factor_with(player_rating, &rating.k_factor),
        })),
        Command::Performance {
            hole_ratings,
            total_score: total,
            strokes,
        } => {
            let total = match (total, strokes) {
                (Some(total), _) => total,
                (None, Some(strokes)) => total_score(&strokes),
                (None, None) => anyhow::bail!("Either --total-score or --strokes is required"),
            };

            let input = PerformanceRatingInput::new(hole_ratings, total).with_search(rating.search);
            print_json(&estimate_performance(&input)?)
        }
        Command::Update {
            player_rating,
            hole_rating,
            strokes,
            performance_rating,
        } => {
            let input = RatingUpdateInput::new(player_rating, hole_rating, strokes)
                .with_performance_rating(performance_rating);
            print_json(&calculator.calc_rating_updates(&input)?)
        }
        Command::Round {
            player_rating,
            hole_ratings,
            strokes,
        } => {
            if hole_ratings.len() != strokes.len() {
                anyhow::bail!(
                    "Got {} hole ratings but {} strokes",
                    hole_ratings.len(),
                    strokes.len()
                );
            }

            let plays: Vec<HolePlay> = hole_ratings
                .into_iter()
                .zip(strokes)
                .map(|(hole_rating, strokes)| HolePlay {
                    hole_rating,
                    strokes,
                })
                .collect();

            print_json(&calculator.process_round(player_rating, &plays)?)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("{} v{}", config.service.name, glo_rating::VERSION);
    debug!("Rating configuration: {:?}", config.rating);

    run(args.command, &config)
}
