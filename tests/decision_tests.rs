// Integration tests for the decision engine
//
// Runs whole personalities through the Bot and checks the move it plays,
// including the fallback when every direction has been eliminated.

use battlesnake_snacks::bot::{Bot, GameOutcome};
use battlesnake_snacks::config::Config;
use battlesnake_snacks::personality::{Personality, PersonalityKind};
use battlesnake_snacks::scorecard::{DecisionObserver, Score};
use battlesnake_snacks::types::{Battlesnake, Board, Coord, Direction, Game};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

fn game() -> Game {
    Game {
        id: "test-game".to_string(),
        ruleset: HashMap::new(),
        map: "standard".to_string(),
        source: "test".to_string(),
        timeout: 500,
    }
}

fn snake(id: &str, body: Vec<Coord>) -> Battlesnake {
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health: 50,
        head: body[0],
        length: body.len() as i32,
        body,
        latency: "0".to_string(),
        shout: None,
    }
}

fn bot(kind: PersonalityKind) -> Bot {
    let config = Config::default_hardcoded();
    Bot::with_personality(Personality::build(kind, &config.weights), "test")
}

/// Snake at the top wall, boxed in by its own body and an opponent
fn trapped_at_top_wall() -> (Board, Battlesnake) {
    let you = snake(
        "our-snake",
        vec![
            Coord::new(5, 10), // head at top wall
            Coord::new(5, 9),  // neck blocks down
            Coord::new(4, 9),
            Coord::new(4, 10), // blocks left
        ],
    );
    let opponent = snake(
        "opponent",
        vec![Coord::new(6, 10), Coord::new(6, 9), Coord::new(6, 8)],
    );
    let board = Board {
        height: 11,
        width: 11,
        food: vec![],
        snakes: vec![you.clone(), opponent],
        hazards: vec![],
    };
    (board, you)
}

#[test]
fn test_trapped_snake_falls_back_to_down() {
    let (board, you) = trapped_at_top_wall();
    for kind in PersonalityKind::all().iter() {
        let decision = bot(*kind).decide(&board, &you);
        assert_eq!(decision.direction, Direction::Down, "personality {}", kind);
        assert!(decision.scores.is_empty());
    }
}

#[test]
fn test_fallback_ignores_bounds() {
    // Boxed in at the bottom wall: DOWN is played even though it leaves the board
    let you = snake(
        "our-snake",
        vec![Coord::new(5, 0), Coord::new(5, 1), Coord::new(4, 1), Coord::new(4, 0)],
    );
    let opponent = snake("opponent", vec![Coord::new(6, 0), Coord::new(6, 1)]);
    let board = Board {
        height: 11,
        width: 11,
        snakes: vec![you.clone(), opponent],
        ..Board::default()
    };

    let response = bot(PersonalityKind::Dumb).get_move(&game(), &12, &board, &you);
    assert_eq!(response["move"], "down");
}

#[test]
fn test_get_move_response_shape() {
    let you = snake("you", vec![Coord::new(0, 0), Coord::new(0, 0), Coord::new(0, 0)]);
    let board = Board {
        height: 11,
        width: 11,
        snakes: vec![you.clone()],
        ..Board::default()
    };

    let response = bot(PersonalityKind::Dumb).get_move(&game(), &0, &board, &you);
    // Both survivors tie at zero and RIGHT ranks ahead of UP
    assert_eq!(response["move"], "right");
    assert_eq!(response["shout"], "");
}

#[test]
fn test_hungry_heads_for_closest_food() {
    let you = snake("you", vec![Coord::new(5, 5), Coord::new(5, 4), Coord::new(5, 3)]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![Coord::new(0, 0), Coord::new(5, 8)],
        snakes: vec![you.clone()],
        hazards: vec![],
    };

    let decision = bot(PersonalityKind::Hungry).decide(&board, &you);
    assert_eq!(decision.direction, Direction::Up);
    assert_eq!(decision.scores[&Direction::Up], 20);
    assert!(!decision.scores.contains_key(&Direction::Down));
}

#[test]
fn test_solo_drifts_toward_nearest_wall() {
    let you = snake("you", vec![Coord::new(3, 5), Coord::new(3, 4), Coord::new(3, 3)]);
    let board = Board {
        height: 11,
        width: 11,
        snakes: vec![you.clone()],
        ..Board::default()
    };

    let decision = bot(PersonalityKind::Solo).decide(&board, &you);
    assert_eq!(decision.direction, Direction::Left);
    assert_eq!(decision.scores[&Direction::Left], 4);
}

#[test]
fn test_battle_runs_from_bigger_snake() {
    let you = snake("you", vec![Coord::new(5, 5), Coord::new(5, 4), Coord::new(5, 3)]);
    let bigger = snake(
        "bigger",
        vec![
            Coord::new(8, 5),
            Coord::new(8, 4),
            Coord::new(8, 3),
            Coord::new(8, 2),
            Coord::new(8, 1),
            Coord::new(8, 0),
        ],
    );
    let board = Board {
        height: 11,
        width: 11,
        snakes: vec![bigger, you.clone()],
        ..Board::default()
    };

    let decision = bot(PersonalityKind::Battle).decide(&board, &you);
    assert_eq!(decision.direction, Direction::Left);
    // 17 * 1.8 away from the bigger snake plus 112/121 of the board * 30
    assert_eq!(decision.scores[&Direction::Left], 57);
    assert_eq!(decision.scores[&Direction::Right], 27);
    assert_eq!(decision.scores[&Direction::Up], 27);
}

#[test]
fn test_decisions_are_deterministic() {
    let you = snake("you", vec![Coord::new(2, 7), Coord::new(2, 6), Coord::new(2, 5)]);
    let other = snake("other", vec![Coord::new(7, 2), Coord::new(7, 1)]);
    let board = Board {
        height: 11,
        width: 11,
        food: vec![Coord::new(9, 9), Coord::new(1, 1), Coord::new(4, 7)],
        snakes: vec![you.clone(), other],
        hazards: vec![Coord::new(3, 3)],
    };

    let bot = bot(PersonalityKind::Battle);
    let first = bot.decide(&board, &you);
    for _ in 0..5 {
        assert_eq!(bot.decide(&board, &you), first);
    }
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl DecisionObserver for Recorder {
    fn scored(&self, source: &str, direction: Direction, delta: Score, _total: Score) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{} {} {}", source, direction, delta));
    }

    fn eliminated(&self, source: &str, direction: Direction) {
        self.events
            .lock()
            .unwrap()
            .push(format!("{} {} unsafe", source, direction));
    }

    fn decided(&self, direction: Direction, _scores: &HashMap<Direction, Score>) {
        self.events
            .lock()
            .unwrap()
            .push(format!("decided {}", direction));
    }
}

#[test]
fn test_observer_sees_events_attributed_to_strategies() {
    let recorder = Arc::new(Recorder::default());
    let bot = bot(PersonalityKind::Hungry).with_observer(recorder.clone());

    let you = snake("you", vec![Coord::new(0, 0)]);
    let board = Board {
        height: 5,
        width: 5,
        food: vec![Coord::new(0, 3)],
        snakes: vec![you.clone()],
        hazards: vec![],
    };
    assert_eq!(bot.decide(&board, &you).direction, Direction::Up);

    let events = recorder.events.lock().unwrap();
    assert!(events.contains(&"stay-in-bounds left unsafe".to_string()));
    assert!(events.contains(&"stay-in-bounds down unsafe".to_string()));
    assert!(events.contains(&"move-to-closest-food up 20".to_string()));
    assert_eq!(events.last().map(String::as_str), Some("decided up"));
}

#[test]
fn test_end_classifies_outcome() {
    let you = snake("you", vec![Coord::new(1, 1)]);
    let other = snake("other", vec![Coord::new(3, 3)]);
    let bot = bot(PersonalityKind::Dumb);

    let won = Board {
        height: 5,
        width: 5,
        snakes: vec![you.clone()],
        ..Board::default()
    };
    assert_eq!(bot.end(&game(), &40, &won, &you), GameOutcome::Win);

    let lost = Board {
        snakes: vec![other],
        ..won.clone()
    };
    assert_eq!(bot.end(&game(), &40, &lost, &you), GameOutcome::Loss);

    let draw = Board {
        snakes: vec![],
        ..won
    };
    assert_eq!(bot.end(&game(), &40, &draw, &you), GameOutcome::Draw);
}

#[test]
fn test_bot_from_config_uses_named_personality() {
    let mut config = Config::default_hardcoded();
    config.snake.personality = "solo".to_string();
    let bot = Bot::new(config).unwrap();
    assert_eq!(bot.personality().kind(), Some(PersonalityKind::Solo));
    assert_eq!(bot.info()["color"], "#256D7B");
}
