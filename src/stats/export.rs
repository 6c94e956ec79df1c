//! Writing benchmark runs to disk
//!
//! Every batch gets its own directory,
//! `<statistics>/runs/<oracle>/<strategy>/<timestamp>/`, holding:
//! - `summary.txt`: human-readable report
//! - `results.csv`: one row per game, one column per guess
//! - `performance_by_guesses.csv`: game durations grouped by guess count
//! - `batch.json`: the raw batch together with its metrics
//!
//! When several strategies are exported together, a side-by-side summary and
//! JSON file are also written to `<statistics>/comparisons/`. All batches of
//! one export share the first batch's timestamp.

use super::aggregator::{mean, median, round, sample_std_dev};
use super::{BenchmarkBatch, PerformanceMetrics};
use crate::config::PathSettings;
use crate::error::{Error, Result};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct ExportedRun<'a> {
    batch: &'a BenchmarkBatch,
    metrics: &'a PerformanceMetrics,
}

#[derive(Serialize)]
struct ComparedStrategy<'a> {
    name: &'a str,
    settings: &'a BTreeMap<String, serde_json::Value>,
    metrics: &'a PerformanceMetrics,
}

#[derive(Serialize)]
struct Comparison<'a> {
    timestamp: &'a str,
    strategies: Vec<ComparedStrategy<'a>>,
}

/// Where an export wrote its files
#[derive(Debug, Clone, Default)]
pub struct ExportedPaths {
    /// One directory per batch, in input order
    pub runs: Vec<PathBuf>,
    /// Comparison summary and JSON, only for multi-strategy exports
    pub comparison: Option<(PathBuf, PathBuf)>,
}

/// Directory a batch is written to
#[must_use]
fn run_directory(batch: &BenchmarkBatch, timestamp: &str, paths: &PathSettings) -> PathBuf {
    paths
        .runs_folder()
        .join(sanitize(&batch.oracle_name))
        .join(sanitize(&batch.strategy_name))
        .join(sanitize(timestamp))
}

/// Write every batch with its metrics, plus a comparison when there are
/// several
///
/// An empty slice writes nothing.
///
/// # Errors
/// Returns `Error::Io` if a directory or file cannot be written.
pub fn save_benchmark_results(
    results: &[(BenchmarkBatch, PerformanceMetrics)],
    paths: &PathSettings,
) -> Result<ExportedPaths> {
    let Some((first, _)) = results.first() else {
        return Ok(ExportedPaths::default());
    };
    let timestamp = first.timestamp.as_str();

    create_gitignore(&paths.statistics_folder)?;

    let mut exported = ExportedPaths::default();
    for (batch, metrics) in results {
        exported.runs.push(save_run(batch, metrics, timestamp, paths)?);
    }

    if results.len() > 1 {
        let dir = paths.comparisons_folder();
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        let summary_path = dir.join(format!("summary_{}.txt", sanitize(timestamp)));
        write_file(&summary_path, &comparison_summary(results, timestamp))?;

        let json_path = dir.join(format!("comparison_{}.json", sanitize(timestamp)));
        let comparison = Comparison {
            timestamp,
            strategies: results
                .iter()
                .map(|(batch, metrics)| ComparedStrategy {
                    name: &batch.strategy_name,
                    settings: &batch.settings,
                    metrics,
                })
                .collect(),
        };
        write_json(&json_path, &comparison)?;

        info!("Saved strategy comparison to {}", dir.display());
        exported.comparison = Some((summary_path, json_path));
    }

    Ok(exported)
}

fn save_run(
    batch: &BenchmarkBatch,
    metrics: &PerformanceMetrics,
    timestamp: &str,
    paths: &PathSettings,
) -> Result<PathBuf> {
    let dir = run_directory(batch, timestamp, paths);
    fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

    write_file(&dir.join("summary.txt"), &summary(batch, metrics))?;
    write_results_csv(batch, &dir.join("results.csv"))?;
    write_performance_csv(batch, &dir.join("performance_by_guesses.csv"))?;
    write_json(&dir.join("batch.json"), &ExportedRun { batch, metrics })?;

    info!("Saved benchmark run to {}", dir.display());
    Ok(dir)
}

/// Keep generated statistics out of version control
fn create_gitignore(directory: &Path) -> Result<()> {
    fs::create_dir_all(directory).map_err(|e| Error::io(directory, e))?;
    write_file(
        &directory.join(".gitignore"),
        "# Automatically created by wordle_bench\n*\n",
    )
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| Error::io(path, e.into()))?;
    writer.flush().map_err(|e| Error::io(path, e))
}

fn duration_ms(duration_ns: u64) -> f64 {
    duration_ns as f64 / 1_000_000.0
}

/// One row per game; guess columns are padded to the longest game
fn write_results_csv(batch: &BenchmarkBatch, path: &Path) -> Result<()> {
    let csv_error = |e: csv::Error| Error::io(path, e.into());
    let max_guesses = batch
        .games
        .iter()
        .map(|g| g.guesses.len())
        .max()
        .unwrap_or(0);

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;

    let mut header: Vec<String> = ["Answer", "Won", "Number of Guesses", "Duration (ms)", "Seed"]
        .iter()
        .map(ToString::to_string)
        .collect();
    header.extend((1..=max_guesses).map(|i| format!("Guess {i}")));
    writer.write_record(&header).map_err(csv_error)?;

    for game in &batch.games {
        let mut row = vec![
            game.answer.clone(),
            game.won.to_string(),
            game.guesses.len().to_string(),
            format!("{:.2}", duration_ms(game.duration_ns)),
            game.random_seed.map(|s| s.to_string()).unwrap_or_default(),
        ];
        row.extend(game.guesses.iter().cloned());
        row.resize(header.len(), String::new());
        writer.write_record(&row).map_err(csv_error)?;
    }

    writer.flush().map_err(|e| Error::io(path, e))
}

/// Duration statistics for games grouped by number of guesses, won or lost
fn write_performance_csv(batch: &BenchmarkBatch, path: &Path) -> Result<()> {
    let csv_error = |e: csv::Error| Error::io(path, e.into());

    let mut groups: BTreeMap<usize, (Vec<f64>, usize)> = BTreeMap::new();
    for game in &batch.games {
        let (durations, wins) = groups.entry(game.guesses.len()).or_default();
        durations.push(duration_ms(game.duration_ns));
        *wins += usize::from(game.won);
    }

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer
        .write_record([
            "Guesses",
            "Total Games",
            "Wins",
            "Losses",
            "Mean Duration (ms)",
            "Median Duration (ms)",
            "Std Dev Duration (ms)",
            "Min Duration (ms)",
            "Max Duration (ms)",
        ])
        .map_err(csv_error)?;

    for (guesses, (mut durations, wins)) in groups {
        durations.sort_by(f64::total_cmp);
        let total = durations.len();
        let min = durations.first().copied().unwrap_or(0.0);
        let max = durations.last().copied().unwrap_or(0.0);
        writer
            .write_record([
                guesses.to_string(),
                total.to_string(),
                wins.to_string(),
                (total - wins).to_string(),
                format!("{:.2}", round(mean(&durations), 2)),
                format!("{:.2}", round(median(&durations), 2)),
                format!("{:.2}", round(sample_std_dev(&durations), 2)),
                format!("{min:.2}"),
                format!("{max:.2}"),
            ])
            .map_err(csv_error)?;
    }

    writer.flush().map_err(|e| Error::io(path, e))
}

/// Plain-text report of a run
#[must_use]
fn summary(batch: &BenchmarkBatch, metrics: &PerformanceMetrics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Oracle:            {}", batch.oracle_name);
    let _ = writeln!(out, "Strategy:          {}", batch.strategy_name);
    let _ = writeln!(out, "Timestamp:         {}", batch.timestamp);
    for (key, value) in &batch.settings {
        let _ = writeln!(out, "  {key}: {value}");
    }
    let _ = writeln!(out);
    write_metrics(&mut out, metrics);
    if !metrics.failed_words.is_empty() {
        let _ = writeln!(out, "Failed words: {}", metrics.failed_words.join(", "));
    }
    out
}

fn write_metrics(out: &mut String, metrics: &PerformanceMetrics) {
    let _ = writeln!(out, "Games:             {}", metrics.total_games);
    let _ = writeln!(out, "Win rate:          {:.2}%", metrics.win_rate);
    let _ = writeln!(out, "Average duration:  {:.2} ms", metrics.average_duration_ms);
    let _ = writeln!(out, "Mean guesses:      {:.3}", metrics.solve_efficiency_mean);
    let _ = writeln!(out, "Median guesses:    {:.3}", metrics.solve_efficiency_median);
    let _ = writeln!(
        out,
        "Std deviation:     {:.3}",
        metrics.solve_efficiency_standard_deviation
    );
    let _ = writeln!(out, "Worst case:        {}", metrics.worst_case_guesses);
    let _ = writeln!(out, "Failure entropy:   {:.3} bits", metrics.failure_entropy);
    let _ = writeln!(out);
    let _ = writeln!(out, "Guess distribution:");
    for (guesses, count) in &metrics.guess_distribution {
        let pct = if metrics.total_games == 0 {
            0.0
        } else {
            *count as f64 / metrics.total_games as f64 * 100.0
        };
        let _ = writeln!(out, "  {guesses}: {count} ({pct:.1}%)");
    }
}

/// Per-strategy details followed by a side-by-side table
#[must_use]
fn comparison_summary(results: &[(BenchmarkBatch, PerformanceMetrics)], timestamp: &str) -> String {
    let rule = "-".repeat(80);
    let mut out = String::new();
    let _ = writeln!(out, "Timestamp:          {timestamp}");
    let _ = writeln!(out, "Strategies tested:  {}", results.len());

    for (batch, metrics) in results {
        let _ = writeln!(out, "\n{rule}");
        let _ = writeln!(out, "Strategy: {}", batch.strategy_name);
        let _ = writeln!(out, "{rule}");
        write_metrics(&mut out, metrics);
    }

    let _ = writeln!(out, "\n{}", "=".repeat(80));
    let _ = writeln!(
        out,
        "{:<35} {:<10} {:<12} {:<10}",
        "Strategy", "Win Rate", "Avg Guesses", "Time (ms)"
    );
    let _ = writeln!(out, "{rule}");
    for (batch, metrics) in results {
        let _ = writeln!(
            out,
            "{:<35} {:>6.2}%   {:>8.3}    {:>8.2}",
            batch.strategy_name,
            metrics.win_rate,
            metrics.solve_efficiency_mean,
            metrics.average_duration_ms
        );
    }
    out
}

/// Keep a name usable as a single path component
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "unnamed".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{GameResult, compute_metrics};

    fn game(answer: &str, won: bool, guesses: &[&str], duration_ns: u64, seed: u64) -> GameResult {
        GameResult {
            answer: answer.into(),
            won,
            guesses: guesses.iter().map(ToString::to_string).collect(),
            duration_ns,
            random_seed: Some(seed),
        }
    }

    fn batch(strategy: &str, timestamp: &str) -> BenchmarkBatch {
        BenchmarkBatch {
            oracle_name: "random-uniform".into(),
            strategy_name: strategy.into(),
            timestamp: timestamp.into(),
            settings: BTreeMap::from([("games".to_string(), 3.into())]),
            games: vec![
                game("apple", true, &["crane", "apple"], 1_000_000, 7),
                game("mango", false, &["crane", "slate", "grape"], 3_000_000, 8),
                game("grape", true, &["slate", "grape"], 2_000_000, 9),
            ],
        }
    }

    fn with_metrics(batch: BenchmarkBatch) -> (BenchmarkBatch, PerformanceMetrics) {
        let metrics = compute_metrics(&batch);
        (batch, metrics)
    }

    fn export_single(batch: BenchmarkBatch, paths: &PathSettings) -> PathBuf {
        let mut exported = save_benchmark_results(&[with_metrics(batch)], paths).unwrap();
        exported.runs.remove(0)
    }

    fn statistics_root(name: &str) -> PathSettings {
        let root = std::env::temp_dir().join(format!("wordle_bench_export_{name}"));
        let _ = fs::remove_dir_all(&root);
        PathSettings {
            statistics_folder: root,
            ..PathSettings::default()
        }
    }

    fn read_csv(path: &Path) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .unwrap()
            .records()
            .map(|r| r.unwrap().iter().map(ToString::to_string).collect())
            .collect()
    }

    #[test]
    fn names_become_safe_components() {
        assert_eq!(sanitize("random/consistent"), "random_consistent");
        assert_eq!(sanitize("../.."), "_");
        assert_eq!(sanitize(""), "unnamed");
    }

    #[test]
    fn writes_json_and_summary() {
        let paths = statistics_root("single");
        let dir = export_single(batch("random/consistent", "20240101_120000"), &paths);
        assert_eq!(
            dir,
            paths
                .statistics_folder
                .join("runs")
                .join("random-uniform")
                .join("random_consistent")
                .join("20240101_120000")
        );

        let text = fs::read_to_string(dir.join("batch.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["batch"]["games"].as_array().unwrap().len(), 3);
        assert_eq!(json["metrics"]["failed_words"][0], "mango");
        assert_eq!(json["batch"]["games"][0]["random_seed"], 7);

        let text = fs::read_to_string(dir.join("summary.txt")).unwrap();
        assert!(text.contains("Win rate:          66.67%"));
        assert!(text.contains("  2: 2 (66.7%)"));
        assert!(text.contains("Failed words: mango"));
    }

    #[test]
    fn results_csv_has_one_column_per_guess() {
        let paths = statistics_root("results");
        let dir = export_single(batch("random-consistent", "20240101_120000"), &paths);

        let rows = read_csv(&dir.join("results.csv"));
        assert_eq!(
            rows[0],
            [
                "Answer",
                "Won",
                "Number of Guesses",
                "Duration (ms)",
                "Seed",
                "Guess 1",
                "Guess 2",
                "Guess 3"
            ]
        );
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], ["apple", "true", "2", "1.00", "7", "crane", "apple", ""]);
        assert_eq!(
            rows[2],
            ["mango", "false", "3", "3.00", "8", "crane", "slate", "grape"]
        );
    }

    #[test]
    fn performance_csv_groups_by_guess_count() {
        let paths = statistics_root("performance");
        let dir = export_single(batch("random-consistent", "20240101_120000"), &paths);

        let rows = read_csv(&dir.join("performance_by_guesses.csv"));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "Guesses");
        assert_eq!(
            rows[1],
            ["2", "2", "2", "0", "1.50", "1.50", "0.71", "1.00", "2.00"]
        );
        assert_eq!(
            rows[2],
            ["3", "1", "0", "1", "3.00", "3.00", "0.00", "3.00", "3.00"]
        );
    }

    #[test]
    fn statistics_folder_is_gitignored() {
        let paths = statistics_root("gitignore");
        export_single(batch("random-consistent", "20240101_120000"), &paths);

        let text = fs::read_to_string(paths.statistics_folder.join(".gitignore")).unwrap();
        assert!(text.lines().any(|line| line == "*"));
    }

    #[test]
    fn several_strategies_are_compared() {
        let paths = statistics_root("comparison");
        let results = [
            with_metrics(batch("random-consistent", "20240101_120000")),
            with_metrics(batch("random-uniform", "20240101_120005")),
        ];

        let exported = save_benchmark_results(&results, &paths).unwrap();

        // Every run shares the first batch's timestamp
        assert_eq!(exported.runs.len(), 2);
        assert!(exported.runs.iter().all(|dir| dir.ends_with("20240101_120000")));
        assert!(exported.runs[1].join("results.csv").exists());

        let (summary_path, json_path) = exported.comparison.unwrap();
        assert_eq!(
            summary_path,
            paths.comparisons_folder().join("summary_20240101_120000.txt")
        );
        let text = fs::read_to_string(&summary_path).unwrap();
        assert!(text.contains("Strategies tested:  2"));
        assert!(text.contains("Strategy: random-uniform"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["timestamp"], "20240101_120000");
        assert_eq!(json["strategies"][0]["name"], "random-consistent");
        assert_eq!(json["strategies"][1]["metrics"]["total_games"], 3);
    }

    #[test]
    fn single_strategy_has_no_comparison() {
        let paths = statistics_root("no_comparison");
        let results = [with_metrics(batch("random-consistent", "20240101_120000"))];

        let exported = save_benchmark_results(&results, &paths).unwrap();
        assert!(exported.comparison.is_none());
        assert!(!paths.comparisons_folder().exists());

        assert!(save_benchmark_results(&[], &paths).unwrap().runs.is_empty());
    }
}
