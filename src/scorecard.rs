// Per-turn ranking ledger for the four candidate directions
//
// A direction stays on the scorecard until some strategy marks it unsafe.
// Once removed it never comes back for the rest of the turn.

use log::{debug, info, warn};
use std::collections::HashMap;

use crate::types::Direction;

pub type Score = i32;

/// Played when every direction has been eliminated
pub const FALLBACK_DIRECTION: Direction = Direction::Down;

/// Iteration order of the scorecard, which doubles as the tie-break priority
const PRIORITY: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
];

/// Side channel for scoring events emitted while a decision is made
pub trait DecisionObserver: Send + Sync {
    /// A strategy added a non-zero delta to a surviving direction
    fn scored(&self, source: &str, direction: Direction, delta: Score, total: Score);

    /// A strategy removed a direction from consideration
    fn eliminated(&self, source: &str, direction: Direction);

    /// The scorecard picked its best direction
    fn decided(&self, direction: Direction, scores: &HashMap<Direction, Score>);
}

/// Default observer that writes events through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl DecisionObserver for LogObserver {
    fn scored(&self, source: &str, direction: Direction, delta: Score, total: Score) {
        debug!("{}: {} {:+} (now {})", source, direction, delta, total);
    }

    fn eliminated(&self, source: &str, direction: Direction) {
        debug!("{}: {} unsafe", source, direction);
    }

    fn decided(&self, direction: Direction, scores: &HashMap<Direction, Score>) {
        if scores.is_empty() {
            warn!("No safe moves! Falling back to {}", direction);
        } else {
            info!("Chose {} as best from {:?}", direction, scores);
        }
    }
}

static LOG_OBSERVER: LogObserver = LogObserver;

/// Scores for the directions that are still considered safe
pub struct Scorecard<'a> {
    moves: [Option<Score>; 4],
    source: &'static str,
    observer: &'a dyn DecisionObserver,
}

impl Scorecard<'static> {
    /// Creates a scorecard that reports through the `log` facade
    pub fn new() -> Self {
        Scorecard::with_observer(&LOG_OBSERVER)
    }
}

impl Default for Scorecard<'static> {
    fn default() -> Self {
        Scorecard::new()
    }
}

impl<'a> Scorecard<'a> {
    /// Creates a scorecard with all four directions safe and scored zero
    pub fn with_observer(observer: &'a dyn DecisionObserver) -> Self {
        Scorecard {
            moves: [Some(0); 4],
            source: "scorecard",
            observer,
        }
    }

    /// Attributes subsequent events to the named strategy
    pub fn set_source(&mut self, source: &'static str) {
        self.source = source;
    }

    fn slot(direction: Direction) -> usize {
        match direction {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Adds to a direction's score and returns the new total.
    ///
    /// Adding to an eliminated direction does nothing and returns zero.
    pub fn add(&mut self, direction: Direction, delta: Score) -> Score {
        match self.moves[Self::slot(direction)].as_mut() {
            Some(score) => {
                *score += delta;
                if delta != 0 {
                    self.observer.scored(self.source, direction, delta, *score);
                }
                *score
            }
            None => 0,
        }
    }

    /// Permanently removes a direction for the rest of the turn
    pub fn mark_unsafe(&mut self, direction: Direction) {
        if self.moves[Self::slot(direction)].take().is_some() {
            self.observer.eliminated(self.source, direction);
        }
    }

    pub fn is_safe(&self, direction: Direction) -> bool {
        self.moves[Self::slot(direction)].is_some()
    }

    /// The surviving direction with the strictly highest score.
    ///
    /// Ties go to the earlier direction in RIGHT, LEFT, UP, DOWN order.
    /// Falls back to DOWN when nothing survives.
    pub fn best(&self) -> Direction {
        let mut best: Option<(Direction, Score)> = None;
        for (direction, score) in self.iter() {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((direction, score)),
            }
        }

        let chosen = best.map_or(FALLBACK_DIRECTION, |(direction, _)| direction);
        self.observer.decided(chosen, &self.scores());
        chosen
    }

    pub fn safe_directions(&self) -> Vec<Direction> {
        self.iter().map(|(direction, _)| direction).collect()
    }

    /// A copy of the surviving direction scores
    pub fn scores(&self) -> HashMap<Direction, Score> {
        self.iter().collect()
    }

    fn iter(&self) -> impl Iterator<Item = (Direction, Score)> + '_ {
        PRIORITY
            .iter()
            .filter_map(move |&direction| self.moves[Self::slot(direction)].map(|s| (direction, s)))
    }
}
