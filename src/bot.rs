// Welcome to
// __________         __    __  .__                               __
// \______   \_____ _/  |__/  |_|  |   ____   ______ ____ _____  |  | __ ____
//  |    |  _/\__  \\   __\   __\  | _/ __ \ /  ___//    \\__  \ |  |/ // __ \
//  |    |   \ / __ \|  |  |  | |  |_\  ___/ \___ \|   |  \/ __ \|    <\  ___/
//  |________/(______/__|  |__| |____/\_____>______>___|__(______/__|__\\_____>
//
// The decision engine: every move runs the personality's strategies, in
// order, against one fresh scorecard and plays whatever ranks highest.
// For more info see docs.battlesnake.com

use log::info;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::debug_logger::{DebugLogger, DecisionRecord};
use crate::personality::Personality;
use crate::scorecard::{DecisionObserver, LogObserver, Score, Scorecard};
use crate::types::{Battlesnake, Board, Direction, Game};

/// Result of a finished game from our snake's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

impl GameOutcome {
    /// Classifies the final board.
    ///
    /// No survivors is a draw; otherwise we won only if we are the first
    /// snake still listed.
    pub fn classify(board: &Board, you: &Battlesnake) -> Self {
        match board.snakes.first() {
            None => GameOutcome::Draw,
            Some(first) if first.id == you.id => GameOutcome::Win,
            Some(_) => GameOutcome::Loss,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::Win => "Won",
            GameOutcome::Loss => "Lost",
            GameOutcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chosen direction together with the final surviving scores
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub direction: Direction,
    pub scores: HashMap<Direction, Score>,
}

/// Battlesnake Bot with OOP-style API
/// Takes static configuration dependencies and exposes methods corresponding to API endpoints
pub struct Bot {
    personality: Personality,
    author: String,
    observer: Arc<dyn DecisionObserver>,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot instance from configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    ///
    /// # Returns
    /// * `Result<Bot, String>` - Fails only if the configured personality is unknown
    pub fn new(config: Config) -> Result<Self, String> {
        let personality = Personality::from_config(&config)?;
        let debug_logger = DebugLogger::new(config.debug.enabled, &config.debug.log_file_path);

        Ok(Bot::with_personality(personality, config.snake.author).with_debug_logger(debug_logger))
    }

    /// Creates a Bot around an already built personality, logging through `log`
    pub fn with_personality(personality: Personality, author: impl Into<String>) -> Self {
        Bot {
            personality,
            author: author.into(),
            observer: Arc::new(LogObserver),
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Replaces the observer that receives scoring events
    pub fn with_observer(mut self, observer: Arc<dyn DecisionObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_debug_logger(mut self, debug_logger: DebugLogger) -> Self {
        self.debug_logger = debug_logger;
        self
    }

    pub fn personality(&self) -> &Personality {
        &self.personality
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        let appearance = self.personality.appearance();
        json!({
            "apiversion": "1",
            "author": self.author,
            "color": appearance.color,
            "head": appearance.head,
            "tail": appearance.tail,
            "version": env!("CARGO_PKG_VERSION"),
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, turn: &i32, _board: &Board, you: &Battlesnake) {
        info!(
            "GAME START game={} turn={} snake={} head={} health={} length={}",
            game.id,
            turn,
            self.personality.name(),
            you.head,
            you.health,
            you.length
        );
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, turn: &i32, board: &Board, you: &Battlesnake) -> GameOutcome {
        let outcome = GameOutcome::classify(board, you);
        info!(
            "GAME OVER game={} snake={}: {} in {} move(s)",
            game.id,
            self.personality.name(),
            outcome,
            turn + 1
        );
        outcome
    }

    /// Runs every strategy against a fresh scorecard and picks the best direction.
    ///
    /// Never fails: when every direction is eliminated the scorecard fallback is played.
    pub fn decide(&self, board: &Board, you: &Battlesnake) -> Decision {
        let mut scorecard = Scorecard::with_observer(self.observer.as_ref());
        for strategy in self.personality.strategies() {
            scorecard.set_source(strategy.label());
            strategy.evaluate(board, you, &mut scorecard);
        }

        Decision {
            direction: scorecard.best(),
            scores: scorecard.scores(),
        }
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// # Arguments
    /// * `game` - Current game metadata
    /// * `turn` - Current turn number
    /// * `board` - Current board state
    /// * `you` - Your snake's current state
    ///
    /// # Returns
    /// * `Value` - JSON response containing the chosen move direction
    pub fn get_move(&self, game: &Game, turn: &i32, board: &Board, you: &Battlesnake) -> Value {
        let decision = self.decide(board, you);

        info!(
            "Turn {}: moved {} (game={} head={} health={} length={})",
            turn,
            decision.direction,
            game.id,
            you.head,
            you.health,
            you.length
        );

        if self.debug_logger.is_enabled() {
            self.debug_logger.log_decision(DecisionRecord {
                game_id: game.id.clone(),
                turn: *turn,
                personality: self.personality.name().to_string(),
                chosen_move: decision.direction,
                scores: decision.scores.clone(),
                board: board.clone(),
                you: you.clone(),
                timestamp: chrono::Utc::now().to_rfc3339(),
            });
        }

        json!({ "move": decision.direction.as_str(), "shout": "" })
    }
}
