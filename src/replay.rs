// Replay module for analyzing historical decisions
//
// This module provides functionality to:
// 1. Parse JSONL debug logs
// 2. Re-run a personality on the logged board states
// 3. Compare logged vs replayed moves
// 4. Generate detailed analysis reports

use log::{info, warn};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::bot::Bot;
use crate::debug_logger::DecisionRecord;
use crate::scorecard::Score;
use crate::types::Direction;

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: i32,
    pub original_move: Direction,
    pub replayed_move: Direction,
    pub matches: bool,
    pub original_scores: HashMap<Direction, Score>,
    pub replayed_scores: HashMap<Direction, Score>,
    pub computation_time_us: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

/// Replay engine for analyzing debug logs
pub struct ReplayEngine {
    bot: Bot,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine around the bot whose decisions are replayed
    pub fn new(bot: Bot, verbose: bool) -> Self {
        ReplayEngine { bot, verbose }
    }

    /// Loads all log entries from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(&self, log_path: P) -> Result<Vec<DecisionRecord>, String> {
        let file =
            File::open(log_path.as_ref()).map_err(|e| format!("Failed to open log file: {}", e))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| format!("Failed to read line {}: {}", line_num + 1, e))?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: DecisionRecord = serde_json::from_str(&line)
                .map_err(|e| format!("Failed to parse JSON on line {}: {}", line_num + 1, e))?;

            entries.push(entry);
        }

        info!("Loaded {} log entries", entries.len());
        Ok(entries)
    }

    /// Replays a single log entry and compares the result
    pub fn replay_entry(&self, entry: &DecisionRecord) -> ReplayResult {
        if self.verbose {
            info!("Replaying turn {}...", entry.turn);
        }

        let start_time = Instant::now();
        let decision = self.bot.decide(&entry.board, &entry.you);
        let computation_time_us = start_time.elapsed().as_micros();

        let matches = decision.direction == entry.chosen_move;
        if self.verbose {
            if matches {
                info!(
                    "Turn {}: MATCH - {} {:?} ({}us)",
                    entry.turn, decision.direction, decision.scores, computation_time_us
                );
            } else {
                warn!(
                    "Turn {}: MISMATCH - Original: {} {:?}, Replayed: {} {:?} ({}us)",
                    entry.turn,
                    entry.chosen_move,
                    entry.scores,
                    decision.direction,
                    decision.scores,
                    computation_time_us
                );
            }
        }

        ReplayResult {
            turn: entry.turn,
            original_move: entry.chosen_move,
            replayed_move: decision.direction,
            matches,
            original_scores: entry.scores.clone(),
            replayed_scores: decision.scores,
            computation_time_us,
        }
    }

    /// Replays all entries in a log file
    pub fn replay_all(&self, entries: &[DecisionRecord]) -> Vec<ReplayResult> {
        entries.iter().map(|entry| self.replay_entry(entry)).collect()
    }

    /// Replays specific turns from a log file
    pub fn replay_turns(
        &self,
        entries: &[DecisionRecord],
        turn_numbers: &[i32],
    ) -> Result<Vec<ReplayResult>, String> {
        turn_numbers
            .iter()
            .map(|turn_num| {
                entries
                    .iter()
                    .find(|e| e.turn == *turn_num)
                    .map(|entry| self.replay_entry(entry))
                    .ok_or_else(|| format!("Turn {} not found in log file", turn_num))
            })
            .collect()
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let mismatches = total_turns - matches;
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches,
            match_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Personality:    {}", self.bot.personality().name());
        println!("Total Turns:    {}", stats.total_turns);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("═══════════════════════════════════════════════════════════\n");

        if !results.is_empty() {
            let avg_time: f64 = results
                .iter()
                .map(|r| r.computation_time_us as f64)
                .sum::<f64>()
                / results.len() as f64;

            println!("Average Computation Time:   {:.1}us\n", avg_time);
        }

        // Show mismatches in detail
        let mismatches: Vec<_> = results.iter().filter(|r| !r.matches).collect();
        if !mismatches.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                  DETAILED MISMATCHES");
            println!("═══════════════════════════════════════════════════════════");

            for result in mismatches {
                println!(
                    "Turn {}: {} → {} (logged {:?}, replayed {:?})",
                    result.turn,
                    result.original_move,
                    result.replayed_move,
                    result.original_scores,
                    result.replayed_scores
                );
            }
            println!();
        }
    }

    /// Validates that specific expected moves were made
    pub fn validate_expected_moves(
        &self,
        entries: &[DecisionRecord],
        expected_moves: &[(i32, Vec<Direction>)], // (turn, acceptable_moves)
    ) -> Result<(), String> {
        for (turn, acceptable) in expected_moves {
            let entry = entries
                .iter()
                .find(|e| e.turn == *turn)
                .ok_or_else(|| format!("Turn {} not found in log", turn))?;

            if !acceptable.contains(&entry.chosen_move) {
                return Err(format!(
                    "Turn {}: Expected one of {:?}, but got {}",
                    turn,
                    acceptable.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
                    entry.chosen_move
                ));
            }
        }

        Ok(())
    }
}
