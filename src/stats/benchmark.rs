//! Benchmark runner
//!
//! Plays many independent games and collects one [`GameResult`] per game.
//! Game `i` seeds its chooser and solver with `base_seed + i`, so a batch is
//! reproducible no matter how rayon schedules the games. All games share one
//! read-only feedback table.

use super::{BenchmarkBatch, GameResult};
use crate::core::FeedbackTable;
use crate::error::{Error, Result};
use crate::game::{Chooser, GameEngine, RandomUniformChooser};
use crate::solver::{Solver, SolverKind};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

/// Parameters for one benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Solver name accepted by [`SolverKind::from_name`]
    pub strategy: String,
    /// Number of games; derived from the sampling parameters when `None`
    pub games: Option<usize>,
    pub confidence_level: f64,
    pub margin_of_error: f64,
    pub estimated_proportion: f64,
    pub base_seed: u64,
    pub max_turns: usize,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            strategy: "consistent".into(),
            games: None,
            confidence_level: 0.95,
            margin_of_error: 0.01,
            estimated_proportion: 0.5,
            base_seed: 0,
            max_turns: 6,
            show_progress: false,
        }
    }
}

impl BenchmarkConfig {
    /// Games to play: the explicit count, or the derived sample size
    ///
    /// # Errors
    /// Returns `Error::InvalidSettings` for out-of-range sampling parameters.
    pub fn game_count(&self) -> Result<usize> {
        match self.games {
            Some(games) => Ok(games),
            None => {
                let games = calculate_sample_size(
                    self.confidence_level,
                    self.margin_of_error,
                    self.estimated_proportion,
                )?;
                info!(
                    "Calculated sample size: {games} games ({:.1}% confidence, ±{:.1}%)",
                    self.confidence_level * 100.0,
                    self.margin_of_error * 100.0
                );
                Ok(games)
            }
        }
    }
}

/// Games needed to estimate a proportion
///
/// `n = z² · p(1 − p) / e²`, rounded up, where `z` is the two-sided normal
/// quantile for `confidence_level`.
///
/// # Errors
/// Returns `Error::InvalidSettings` unless `0 < confidence_level < 1`,
/// `margin_of_error > 0` and `0 <= estimated_proportion <= 1`.
pub fn calculate_sample_size(
    confidence_level: f64,
    margin_of_error: f64,
    estimated_proportion: f64,
) -> Result<usize> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(Error::InvalidSettings(format!(
            "confidence level must be between 0 and 1, got {confidence_level}"
        )));
    }
    if margin_of_error <= 0.0 || margin_of_error.is_nan() {
        return Err(Error::InvalidSettings(format!(
            "margin of error must be positive, got {margin_of_error}"
        )));
    }
    if !(0.0..=1.0).contains(&estimated_proportion) {
        return Err(Error::InvalidSettings(format!(
            "estimated proportion must be between 0 and 1, got {estimated_proportion}"
        )));
    }

    let z = inverse_normal_cdf(f64::midpoint(1.0, confidence_level));
    let p = estimated_proportion;
    let n = z * z * p * (1.0 - p) / (margin_of_error * margin_of_error);
    Ok(n.ceil() as usize)
}

/// Standard normal quantile (Acklam's rational approximation, |ε| < 1.2e-9)
fn inverse_normal_cdf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.024_25;

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    }
}

/// Play a single seeded game
///
/// # Errors
/// Propagates any engine or solver error.
pub fn play_game(
    table: &Arc<FeedbackTable>,
    strategy: &str,
    max_turns: usize,
    seed: Option<u64>,
) -> Result<GameResult> {
    let solver = SolverKind::from_name(strategy, seed)?;
    let chooser = RandomUniformChooser::new(seed);
    let mut engine = GameEngine::new(Arc::clone(table), max_turns, chooser, solver);

    let start = Instant::now();
    let state = engine.run()?;
    let duration_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

    Ok(GameResult {
        answer: state
            .revealed_answer()
            .map(|w| w.to_string())
            .unwrap_or_default(),
        won: state.is_won(),
        guesses: state.history().iter().map(|(g, _)| g.to_string()).collect(),
        duration_ns,
        random_seed: seed,
    })
}

/// Run a whole benchmark batch
///
/// # Errors
/// Returns the first error any game produced, or `Error::InvalidSettings`
/// for a bad strategy name or sampling parameters.
pub fn run_benchmark(table: &Arc<FeedbackTable>, config: &BenchmarkConfig) -> Result<BenchmarkBatch> {
    // Fail on a bad name before spinning up any games
    let strategy_name = SolverKind::from_name(&config.strategy, Some(0))?.name();
    let oracle_name = RandomUniformChooser::new(Some(0)).name();
    let games = config.game_count()?;
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();

    info!("Starting benchmark: {strategy_name} with {oracle_name} ({games} games)");

    let progress = if config.show_progress {
        let pb = ProgressBar::new(games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb.set_message(strategy_name);
        pb
    } else {
        ProgressBar::hidden()
    };

    let results = (0..games)
        .into_par_iter()
        .map(|index| {
            let seed = config.base_seed.wrapping_add(index as u64);
            let result = play_game(table, &config.strategy, config.max_turns, Some(seed));
            progress.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;

    progress.finish_with_message("Complete!");

    let wins = results.iter().filter(|r| r.won).count();
    info!("Benchmark complete: {strategy_name} - {wins}/{games} wins");

    Ok(BenchmarkBatch {
        oracle_name: oracle_name.to_string(),
        strategy_name: strategy_name.to_string(),
        timestamp,
        settings: settings_snapshot(config, games),
        games: results,
    })
}

fn settings_snapshot(config: &BenchmarkConfig, games: usize) -> BTreeMap<String, serde_json::Value> {
    BTreeMap::from([
        ("games".to_string(), games.into()),
        ("max_turns".to_string(), config.max_turns.into()),
        ("base_seed".to_string(), config.base_seed.into()),
        ("confidence_level".to_string(), config.confidence_level.into()),
        ("margin_of_error".to_string(), config.margin_of_error.into()),
        (
            "estimated_proportion".to_string(),
            config.estimated_proportion.into(),
        ),
    ])
}
