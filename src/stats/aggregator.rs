//! Batch statistics

use super::{BenchmarkBatch, PerformanceMetrics};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Shannon entropy of the letter frequencies in `failed_words`
///
/// Low values mean failures cluster around a few letters. Rounded to three
/// decimals; zero when there are no failures.
#[must_use]
pub fn failure_entropy(failed_words: &[String]) -> f64 {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    let mut total = 0usize;
    for ch in failed_words.iter().flat_map(|w| w.chars()) {
        *counts.entry(ch.to_ascii_lowercase()).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum();

    round(entropy, 3)
}

/// Summarise a batch of games
#[must_use]
pub fn compute_metrics(batch: &BenchmarkBatch) -> PerformanceMetrics {
    let total = batch.games.len();
    if total == 0 {
        return PerformanceMetrics::default();
    }

    let mut guess_counts: Vec<usize> = batch
        .games
        .iter()
        .filter(|g| g.won)
        .map(super::GameResult::number_of_guesses)
        .collect();
    guess_counts.sort_unstable();

    let mut guess_distribution = BTreeMap::new();
    for &count in &guess_counts {
        *guess_distribution.entry(count).or_insert(0) += 1;
    }

    let failed_words: Vec<String> = batch
        .games
        .iter()
        .filter(|g| !g.won)
        .map(|g| g.answer.clone())
        .collect();

    let counts: Vec<f64> = guess_counts.iter().map(|&c| c as f64).collect();
    let mean_duration_ns =
        batch.games.iter().map(|g| g.duration_ns as f64).sum::<f64>() / total as f64;

    PerformanceMetrics {
        total_games: total,
        win_rate: guess_counts.len() as f64 / total as f64 * 100.0,
        average_duration_ms: round(mean_duration_ns / 1_000_000.0, 2),
        solve_efficiency_mean: round(mean(&counts), 3),
        solve_efficiency_median: round(median(&counts), 3),
        solve_efficiency_standard_deviation: round(sample_std_dev(&counts), 3),
        guess_distribution,
        worst_case_guesses: guess_counts.last().copied().unwrap_or(0),
        failure_entropy: failure_entropy(&failed_words),
        failed_words,
    }
}

pub(super) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an already sorted slice
pub(super) fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    match n {
        0 => 0.0,
        _ if n % 2 == 1 => sorted[n / 2],
        _ => f64::midpoint(sorted[n / 2 - 1], sorted[n / 2]),
    }
}

/// Sample standard deviation; zero below two values
pub(super) fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean(values);
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}

pub(super) fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::GameResult;

    fn game(answer: &str, won: bool, guesses: usize) -> GameResult {
        GameResult {
            answer: answer.to_string(),
            won,
            guesses: vec!["crane".to_string(); guesses],
            duration_ns: 2_000_000,
            random_seed: None,
        }
    }

    fn batch(games: Vec<GameResult>) -> BenchmarkBatch {
        BenchmarkBatch {
            oracle_name: "random-uniform".into(),
            strategy_name: "random-consistent".into(),
            timestamp: "20240101_000000".into(),
            settings: BTreeMap::new(),
            games,
        }
    }

    #[test]
    fn empty_batch_is_all_zero() {
        assert_eq!(compute_metrics(&batch(vec![])), PerformanceMetrics::default());
    }

    #[test]
    fn metrics_over_wins_only() {
        let metrics = compute_metrics(&batch(vec![
            game("apple", true, 2),
            game("grape", true, 4),
            game("mango", true, 3),
            game("lemon", false, 6),
        ]));

        assert_eq!(metrics.total_games, 4);
        assert!((metrics.win_rate - 75.0).abs() < f64::EPSILON);
        assert!((metrics.average_duration_ms - 2.0).abs() < f64::EPSILON);
        assert!((metrics.solve_efficiency_mean - 3.0).abs() < f64::EPSILON);
        assert!((metrics.solve_efficiency_median - 3.0).abs() < f64::EPSILON);
        assert!((metrics.solve_efficiency_standard_deviation - 1.0).abs() < f64::EPSILON);
        assert_eq!(metrics.worst_case_guesses, 4);
        assert_eq!(metrics.failed_words, ["lemon"]);
        assert_eq!(
            metrics.guess_distribution,
            BTreeMap::from([(2, 1), (3, 1), (4, 1)])
        );
    }

    #[test]
    fn no_wins() {
        let metrics = compute_metrics(&batch(vec![game("apple", false, 6)]));
        assert!(metrics.win_rate.abs() < f64::EPSILON);
        assert!(metrics.solve_efficiency_mean.abs() < f64::EPSILON);
        assert_eq!(metrics.worst_case_guesses, 0);
        assert!(metrics.guess_distribution.is_empty());
    }

    #[test]
    fn median_of_even_count() {
        assert!((median(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_of_failures() {
        assert!(failure_entropy(&[]).abs() < f64::EPSILON);
        // A single repeated letter carries no information
        assert!(failure_entropy(&["aaaaa".to_string()]).abs() < f64::EPSILON);
        // Four equally likely letters: 2 bits
        let words = ["abcd".to_string(), "dcba".to_string()];
        assert!((failure_entropy(&words) - 2.0).abs() < 1e-9);
    }
}
