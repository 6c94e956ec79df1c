//! Wordle benchmark - CLI
//!
//! Plays single games, runs benchmark batches and prints raw feedback codes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_bench::{
    commands::{feedback, load_table, play, run_benchmarks},
    config::Settings,
    logging,
    output::{print_feedback, print_game, print_metrics},
    stats::{BenchmarkConfig, save_benchmark_results},
};

#[derive(Parser)]
#[command(
    name = "wordle_bench",
    about = "Simulate Wordle games and benchmark guessing strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    settings: Settings,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and print the transcript
    Play {
        /// Strategy: random, random-all or consistent
        #[arg(short, long, default_value = "consistent")]
        strategy: String,

        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play many games and report statistics
    Benchmark {
        /// Strategies to compare: random, random-all, consistent
        /// (repeat the flag or separate with commas)
        #[arg(
            short,
            long = "strategy",
            value_delimiter = ',',
            num_args = 1..,
            default_value = "consistent"
        )]
        strategies: Vec<String>,

        /// Number of games (default: derived from confidence and margin)
        #[arg(short = 'n', long)]
        games: Option<usize>,

        /// Confidence level for the derived sample size
        #[arg(long, default_value_t = 0.95)]
        confidence: f64,

        /// Margin of error for the derived sample size
        #[arg(long, default_value_t = 0.01)]
        margin: f64,

        /// Base seed; game i uses seed + i
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Save the batch and a summary under the statistics folder
        #[arg(long)]
        export: bool,
    },

    /// Print the feedback for a guess against an answer
    Feedback {
        /// The guessed word
        guess: String,

        /// The hidden answer
        answer: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.settings.validate()?;
    logging::init(&cli.settings.logging);

    match cli.command {
        Commands::Play { strategy, seed } => run_play_command(&cli.settings, &strategy, seed),
        Commands::Benchmark {
            strategies,
            games,
            confidence,
            margin,
            seed,
            export,
        } => {
            let config = BenchmarkConfig {
                games,
                confidence_level: confidence,
                margin_of_error: margin,
                base_seed: seed,
                max_turns: cli.settings.game.max_turns,
                show_progress: true,
                ..BenchmarkConfig::default()
            };
            run_benchmark_command(&cli.settings, &strategies, &config, export)
        }
        Commands::Feedback { guess, answer } => {
            let (guess, answer, code) = feedback(&guess, &answer)?;
            print_feedback(&guess, &answer, code);
            Ok(())
        }
    }
}

fn run_play_command(settings: &Settings, strategy: &str, seed: Option<u64>) -> Result<()> {
    let table = load_table(settings).context("Failed to prepare word lists")?;
    let result = play(table, settings.game.max_turns, strategy, seed).context("Game aborted")?;
    print_game(&result.state, result.strategy);
    Ok(())
}

fn run_benchmark_command(
    settings: &Settings,
    strategies: &[String],
    config: &BenchmarkConfig,
    export: bool,
) -> Result<()> {
    let table = load_table(settings).context("Failed to prepare word lists")?;
    let results = run_benchmarks(&table, strategies, config).context("Benchmark failed")?;

    for (batch, metrics) in &results {
        print_metrics(batch, metrics);
    }

    if export {
        let exported = save_benchmark_results(&results, &settings.paths)
            .context("Failed to export benchmark results")?;
        for dir in &exported.runs {
            println!("\nSaved results to {}", dir.display());
        }
        if let Some((summary, _)) = &exported.comparison {
            println!("Saved comparison to {}", summary.display());
        }
    }
    Ok(())
}
