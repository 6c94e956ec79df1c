//! Benchmark command
//!
//! Runs one batch per requested strategy and summarises each.

use crate::core::FeedbackTable;
use crate::error::{Error, Result};
use crate::stats::{BenchmarkBatch, BenchmarkConfig, PerformanceMetrics, compute_metrics, run_benchmark};
use std::sync::Arc;

/// Benchmark every strategy in turn with otherwise identical settings
///
/// Each batch uses the same seeds, so all strategies face the same answers.
///
/// # Errors
/// Returns `Error::InvalidSettings` if no strategy is given, or the first
/// error from [`run_benchmark`].
pub fn run_benchmarks(
    table: &Arc<FeedbackTable>,
    strategies: &[String],
    config: &BenchmarkConfig,
) -> Result<Vec<(BenchmarkBatch, PerformanceMetrics)>> {
    if strategies.is_empty() {
        return Err(Error::InvalidSettings(
            "at least one strategy is required".into(),
        ));
    }

    strategies
        .iter()
        .map(|strategy| {
            let config = BenchmarkConfig {
                strategy: strategy.clone(),
                ..config.clone()
            };
            let batch = run_benchmark(table, &config)?;
            let metrics = compute_metrics(&batch);
            Ok((batch, metrics))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn table() -> Arc<FeedbackTable> {
        let words = words_from_slice(&["crane", "slate", "apple", "grape", "mango"]).unwrap();
        Arc::new(FeedbackTable::build(&words, &words).unwrap())
    }

    fn config() -> BenchmarkConfig {
        BenchmarkConfig {
            games: Some(12),
            base_seed: 3,
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn one_batch_per_strategy() {
        let strategies = ["consistent".to_string(), "random".to_string()];
        let results = run_benchmarks(&table(), &strategies, &config()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0.strategy_name, "random-consistent");
        assert_eq!(results[1].0.strategy_name, "random-uniform");
        assert!(results.iter().all(|(_, m)| m.total_games == 12));

        // Same seeds, same answers
        let answers = |b: &BenchmarkBatch| -> Vec<String> {
            b.games.iter().map(|g| g.answer.clone()).collect()
        };
        assert_eq!(answers(&results[0].0), answers(&results[1].0));
    }

    #[test]
    fn needs_a_strategy() {
        assert!(matches!(
            run_benchmarks(&table(), &[], &config()),
            Err(Error::InvalidSettings(_))
        ));
    }
}
