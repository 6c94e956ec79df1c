//! Benchmark records

use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub answer: String,
    pub won: bool,
    pub guesses: Vec<String>,
    pub duration_ns: u64,
    pub random_seed: Option<u64>,
}

impl GameResult {
    #[must_use]
    pub fn number_of_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// All games from one benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkBatch {
    pub oracle_name: String,
    pub strategy_name: String,
    /// Local time the run started, `YYYYMMDD_HHMMSS`
    pub timestamp: String,
    /// Settings the run used, for reproducing it
    pub settings: BTreeMap<String, serde_json::Value>,
    pub games: Vec<GameResult>,
}

impl BenchmarkBatch {
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.games.len()
    }
}

/// Statistics derived from a batch
///
/// Guess statistics only consider won games.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    pub total_games: usize,
    /// Percentage of games won (0-100)
    pub win_rate: f64,
    pub average_duration_ms: f64,
    pub solve_efficiency_mean: f64,
    pub solve_efficiency_median: f64,
    pub solve_efficiency_standard_deviation: f64,
    /// Won games keyed by number of guesses
    pub guess_distribution: BTreeMap<usize, usize>,
    pub worst_case_guesses: usize,
    pub failed_words: Vec<String>,
    /// Shannon entropy (bits) of letter frequencies across failed words
    pub failure_entropy: f64,
}
