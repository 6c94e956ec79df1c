//! Display functions for command results

use super::formatters::{code_to_emoji, create_progress_bar};
use crate::core::{FeedbackCode, Word};
use crate::game::GameState;
use crate::stats::{BenchmarkBatch, PerformanceMetrics};
use colored::Colorize;

/// Print the transcript of a finished game
pub fn print_game(state: &GameState, strategy: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    match state.revealed_answer() {
        Some(answer) => println!(
            "Answer: {}   Strategy: {}",
            answer.as_str().to_uppercase().bright_yellow().bold(),
            strategy.bright_cyan()
        ),
        None => println!("Strategy: {}", strategy.bright_cyan()),
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, (guess, code)) in state.history().iter().enumerate() {
        println!(
            "\nTurn {}: {} {}  {}",
            i + 1,
            guess.as_str().to_uppercase(),
            code_to_emoji(*code),
            format!("({code})").bright_black()
        );
    }

    println!();
    if state.is_won() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", state.turn())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", state.turn())
                .red()
                .bold()
        );
    }
}

/// Print the feedback for one guess against one answer
pub fn print_feedback(guess: &Word, answer: &Word, code: FeedbackCode) {
    println!(
        "{} vs {}: {} {} {}",
        guess.as_str().to_uppercase().bright_yellow(),
        answer.as_str().to_uppercase().bright_yellow(),
        code_to_emoji(code),
        code.pattern().bold(),
        format!("(code {})", code.value()).bright_black()
    );
}

/// Print the metrics of a benchmark batch
pub fn print_metrics(batch: &BenchmarkBatch, metrics: &PerformanceMetrics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Strategy:         {} (answers: {})",
        batch.strategy_name.bright_yellow(),
        batch.oracle_name
    );

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", metrics.total_games);
    println!(
        "   Win rate:         {}",
        format!("{:.2}%", metrics.win_rate).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", metrics.solve_efficiency_mean)
            .bright_yellow()
            .bold()
    );
    println!("   Median guesses:   {:.1}", metrics.solve_efficiency_median);
    println!(
        "   Std deviation:    {:.3}",
        metrics.solve_efficiency_standard_deviation
    );
    println!(
        "   Worst case:       {}",
        format!("{}", metrics.worst_case_guesses).yellow()
    );
    println!("   Avg game time:    {:.2}ms", metrics.average_duration_ms);

    if !metrics.guess_distribution.is_empty() {
        println!("\n📈 {}", "Distribution (wins):".bright_cyan().bold());
        for (&guesses, &count) in &metrics.guess_distribution {
            let pct = count as f64 / metrics.total_games as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guesses:2}: {} {count:6} ({pct:5.1}%)", bar.green());
        }
    }

    if !metrics.failed_words.is_empty() {
        println!("\n⚠️  {}", "Failures:".red().bold());
        println!("   Count:            {}", metrics.failed_words.len());
        println!("   Letter entropy:   {:.3} bits", metrics.failure_entropy);
        let shown: Vec<&str> = metrics
            .failed_words
            .iter()
            .take(10)
            .map(String::as_str)
            .collect();
        let more = metrics.failed_words.len().saturating_sub(shown.len());
        if more > 0 {
            println!("   Words:            {} (+{more} more)", shown.join(", "));
        } else {
            println!("   Words:            {}", shown.join(", "));
        }
    }
}
