//! Benchmarking and statistics
//!
//! Runs batches of simulated games, summarises them and exports the results.

mod aggregator;
pub mod benchmark;
pub mod export;
mod models;

pub use aggregator::{compute_metrics, failure_entropy};
pub use benchmark::{BenchmarkConfig, calculate_sample_size, play_game, run_benchmark};
pub use export::{ExportedPaths, save_benchmark_results};
pub use models::{BenchmarkBatch, GameResult, PerformanceMetrics};
