//! Display functions for games and command results

use super::formatters::{create_progress_bar, format_numbers, format_step};
use crate::commands::{ReplayEvent, ReplayResult, SampleStatistics};
use crate::config::Deal;
use crate::core::{LARGE_TILES, Number};
use crate::game::{Ending, FinalChoiceError, GameState, MoveError, Outcome, Step};
use colored::Colorize;

/// Print the title, the deal and the rules
pub fn print_banner(deal: &Deal) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Le compte est bon                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Target: {}    Tiles: {}",
        deal.target.to_string().bright_yellow().bold(),
        format_numbers(deal.hand.tiles()).bright_white()
    );
    println!("\nRules:");
    println!("  - Each number can be used once");
    println!("  - Division must give a whole number");
    println!("  - Subtraction must not go below 0");
    println!("\nSeed {} replays this deal with --seed.", deal.seed);
}

/// Print target, unused tiles and unused results
pub fn print_state(state: &GameState) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target:  {}",
        state.target().to_string().bright_yellow().bold()
    );
    println!("Tiles:   {}", format_numbers(state.tiles()));
    println!("Results: {}", format_numbers(state.results()));
}

pub fn print_step(step: &Step) {
    println!("\nResult: {}", format_step(step).bright_green().bold());
}

/// Explain why a move was refused
pub fn print_move_rejection(err: &MoveError, available: &[Number]) {
    println!("\n{}", format!("❌ {err}").red());
    if err.names_missing_operand() {
        println!("   Available: {}", format_numbers(available));
    }
}

pub fn print_choice_prompt(available: &[Number]) {
    println!("\n{}", "FINAL NUMBER".bright_cyan().bold());
    println!("Choose ONE number (no operation)");
    println!("Available: {}", format_numbers(available));
}

pub fn print_choice_rejection(err: &FinalChoiceError, available: &[Number]) {
    println!("{}", format!("❌ {err}").red());
    println!("Available: {}", format_numbers(available));
}

/// Print how the game ended
pub fn print_outcome(outcome: &Outcome) {
    println!("\n{}", "═".repeat(60).bright_cyan());

    match outcome.ending() {
        Ending::Forced => println!("Game over: no tiles left and a single number"),
        Ending::Stopped => println!("Game stopped."),
        Ending::Won => {}
    }

    let Ok(final_number) = outcome.final_number() else {
        println!("{}", "No number available!".red().bold());
        println!("{}", "═".repeat(60).bright_cyan());
        return;
    };

    if outcome.is_exact() {
        println!(
            "{}",
            format!("    🎯  LE COMPTE EST BON! You reached {}!  🎯    ", outcome.target())
                .bright_green()
                .bold()
        );
    } else {
        println!("Final number: {}", final_number.to_string().bright_white().bold());
        println!("Target:       {}", outcome.target().to_string().bright_yellow());
        if let Some(gap) = outcome.gap() {
            println!("Gap:          {gap}");
        }
        if outcome.is_close() {
            println!("{}", "Very close!".bright_green());
        }
    }

    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a deal on its own
pub fn print_deal(deal: &Deal) {
    println!("Seed:   {}", deal.seed);
    println!("Tiles:  {}", deal.hand.to_string().bright_white().bold());
    println!(
        "Target: {}",
        deal.target.to_string().bright_yellow().bold()
    );
    println!(
        "Large tiles: {}  (drawn in {} {})",
        deal.hand.large_count(),
        deal.attempts,
        if deal.attempts == 1 { "attempt" } else { "attempts" }
    );
}

/// Print the result of a replay
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replaying: {} → {}",
        result.deal.hand.to_string().bright_white(),
        result.deal.target.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut turn = 0;
    for event in &result.events {
        match event {
            ReplayEvent::Applied(step) => {
                turn += 1;
                println!("\nTurn {turn}: {}", format_step(step));
            }
            ReplayEvent::Rejected { input, reason } => {
                println!("\n{} {}", format!("✗ {input}:").red(), reason);
            }
        }
    }

    println!("\nRemaining: {}", format_numbers(&result.remaining));
    print_outcome(&result.outcome);
}

/// Print deal statistics
pub fn print_sample_result(stats: &SampleStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DEAL STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Deals:".bright_cyan().bold());
    println!("   Deals drawn:      {}", stats.total_deals);
    println!(
        "   Draw attempts:    {} mean, {} max",
        format!("{:.2}", stats.mean_attempts).bright_yellow(),
        stats.max_attempts
    );
    println!(
        "   Targets:          {}..={} (mean {:.1})",
        stats.target_min, stats.target_max, stats.target_mean
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Large tiles per hand:".bright_cyan().bold());
    for (large, &count) in stats.large_tile_distribution.iter().enumerate() {
        let pct = if stats.total_deals > 0 {
            count as f64 / stats.total_deals as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {large}: {} {count:7} ({pct:5.1}%)", bar.green());
    }

    println!("\n🎲 {}", "Tile frequency:".bright_cyan().bold());
    for value in (1..=10).chain(LARGE_TILES) {
        let share = stats.tile_share(value) * 100.0;
        let bar = create_progress_bar(share, 10.0, 30);
        println!("   {value:>3}: {} {share:5.2}%", bar.green());
    }
}
