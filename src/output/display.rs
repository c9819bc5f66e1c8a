//! Display functions for command results

use super::formatters::{create_progress_bar, format_countdown, keyboard_rows, pattern_row};
use crate::commands::{CheckResult, DailyInfo, StatsReport, ValidationReport};
use crate::game::Game;
use crate::puzzle::Difficulty;
use crate::stats::GameStats;
use colored::Colorize;

const HISTOGRAM_WIDTH: usize = 30;

/// Print the guesses so far, then one empty row per remaining guess
pub fn print_board(game: &Game) {
    for (guess, pattern) in game.guesses().iter().zip(game.patterns()) {
        println!("  {}", pattern_row(guess, pattern));
    }
    let empty = "  ·  ".repeat(game.difficulty().word_length());
    for _ in 0..game.remaining_guesses() {
        println!("  {}", empty.bright_black());
    }
}

pub fn print_keyboard(game: &Game) {
    for row in keyboard_rows(game.keyboard()) {
        println!("  {row}");
    }
}

/// Print the statistics of one difficulty with a histogram of wins
pub fn print_game_stats(difficulty: Difficulty, stats: &GameStats) {
    println!(
        "\n{} {}",
        "Statisztika".bright_cyan().bold(),
        format!("({difficulty} betű)").bright_black()
    );
    let rows = [
        ("Összes játék", stats.total_games.to_string()),
        ("Megnyert játék", stats.games_won().to_string()),
        ("Sikerráta", format!("{}%", stats.success_rate)),
        ("Jelenlegi folyamatos siker", stats.current_streak.to_string()),
        ("Leghosszabb folyamatos siker", stats.best_streak.to_string()),
    ];
    for (label, value) in rows {
        println!("   {:<30}{}", format!("{label}:"), value.bright_yellow());
    }

    println!("\n   {}", "A megoldások eloszlása".bright_cyan());
    let max = stats.win_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.win_distribution.iter().enumerate() {
        let bar = create_progress_bar(u64::from(count), u64::from(max), HISTOGRAM_WIDTH);
        println!("   {:>2}: {} {count}", i + 1, bar.green());
    }
    if stats.games_failed > 0 {
        println!("    X: {}", stats.games_failed.to_string().red());
    }
}

/// Print every difficulty played so far and their sum
pub fn print_stats_report(report: &StatsReport) {
    if report.played().next().is_none() {
        println!("Még nincs befejezett játék.");
        return;
    }
    for (difficulty, stats) in report.played() {
        print_game_stats(*difficulty, stats);
    }

    let overall = &report.overall;
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " {} {} játék, {} sikertelen, {}% sikerráta",
        "Összesen:".bright_cyan().bold(),
        overall.total_count,
        overall.failed_count,
        overall.success_rate()
    );
}

pub fn print_check_result(result: &CheckResult) {
    println!("\n  {}", pattern_row(&result.guess, &result.pattern));
    println!("  {}", result.pattern.to_emoji());
    println!(
        "  {} jó helyen, {} rossz helyen",
        result.pattern.count_correct(),
        result.pattern.count_present()
    );
    println!();
    for (unit, status) in result.guess.units().iter().zip(result.pattern.statuses()) {
        println!("  {unit:<4}{}", status.as_str());
    }
    if result.pattern.is_perfect() {
        println!("\n{}", "✅ Telitalálat!".green().bold());
    }
}

pub fn print_daily_info(info: &DailyInfo) {
    println!(
        "{} {}. nap, {} ({} betű)",
        "Szózat".bright_cyan().bold(),
        info.index,
        info.date.format("%Y. %m. %d."),
        info.difficulty
    );
    println!("   Napok az első feladvány óta: {}", info.day_number);
    println!("   Feladványok a listában:      {}", info.list_len);
    println!(
        "   Következő feladvány:         {}",
        format_countdown(info.remaining_ms).bright_yellow()
    );
}

pub fn print_validation_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST VALIDATION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Words checked:  {}", report.words_checked);
    println!("   Time taken:     {:.2}s", report.duration.as_secs_f64());

    if report.is_clean() {
        println!("\n{}", "✅ Every word tokenizes to its list's length".green().bold());
        return;
    }

    println!(
        "\n{}",
        format!("❌ {} issues", report.issues.len()).red().bold()
    );
    for issue in &report.issues {
        println!(
            "   {}-{}: {} ({})",
            issue.list,
            issue.difficulty,
            issue.word.bright_yellow(),
            issue.kind
        );
    }
}
