// Named snake personalities
//
// A personality is a fixed composition of strategies plus the cosmetic
// metadata reported on the info endpoint. Elimination strategies run first.

use std::fmt;
use std::str::FromStr;

use crate::config::{Config, WeightsConfig};
use crate::strategy::{
    AttackSmallerSnakes, AvoidBiggerSnakes, AvoidDeadEnds, MoveToCenter, MoveToClosestFood,
    MoveToFood, MoveToSpace, MoveToWalls, NoCollisions, StayInBounds, Strategy,
};

/// The personalities a server can be started with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalityKind {
    /// Only stays on the board and out of bodies
    Dumb,
    /// Chases the nearest food while drifting to the center
    Hungry,
    /// Hugs the walls and stays out of dead ends
    Solo,
    /// Multiplayer: food, space, and size-aware aggression
    Battle,
}

impl PersonalityKind {
    pub fn all() -> [PersonalityKind; 4] {
        [
            PersonalityKind::Dumb,
            PersonalityKind::Hungry,
            PersonalityKind::Solo,
            PersonalityKind::Battle,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalityKind::Dumb => "dumb",
            PersonalityKind::Hungry => "hungry",
            PersonalityKind::Solo => "solo",
            PersonalityKind::Battle => "battle",
        }
    }
}

impl fmt::Display for PersonalityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dumb" => Ok(PersonalityKind::Dumb),
            "hungry" => Ok(PersonalityKind::Hungry),
            "solo" => Ok(PersonalityKind::Solo),
            "battle" => Ok(PersonalityKind::Battle),
            _ => Err(format!(
                "Unknown personality '{}', expected one of: dumb, hungry, solo, battle",
                s
            )),
        }
    }
}

/// Cosmetic metadata for the info endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub name: &'static str,
    pub color: &'static str,
    pub head: &'static str,
    pub tail: &'static str,
}

/// An ordered list of strategies and the look that goes with it
#[derive(Debug)]
pub struct Personality {
    kind: Option<PersonalityKind>,
    appearance: Appearance,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Personality {
    /// Builds the named personality with weights taken from configuration
    pub fn build(kind: PersonalityKind, weights: &WeightsConfig) -> Self {
        match kind {
            PersonalityKind::Dumb => Personality {
                kind: Some(kind),
                appearance: Appearance {
                    name: "dumb",
                    color: "#b5ca60",
                    head: "dead",
                    tail: "do-sammy",
                },
                strategies: vec![Box::new(StayInBounds), Box::new(NoCollisions)],
            },
            PersonalityKind::Hungry => Personality {
                kind: Some(kind),
                appearance: Appearance {
                    name: "hungry",
                    color: "#2F4538",
                    head: "ski",
                    tail: "coffee",
                },
                strategies: vec![
                    Box::new(StayInBounds),
                    Box::new(NoCollisions),
                    Box::new(MoveToClosestFood::new(weights.hungry.closest_food)),
                    Box::new(MoveToCenter::new(weights.hungry.center)),
                ],
            },
            PersonalityKind::Solo => Personality {
                kind: Some(kind),
                appearance: Appearance {
                    name: "Solo Survival",
                    color: "#256D7B",
                    head: "ski",
                    tail: "coffee",
                },
                strategies: vec![
                    Box::new(StayInBounds),
                    Box::new(NoCollisions),
                    Box::new(AvoidDeadEnds),
                    Box::new(MoveToWalls::new(weights.solo.walls)),
                ],
            },
            PersonalityKind::Battle => Personality {
                kind: Some(kind),
                appearance: Appearance {
                    name: "BattleSnack",
                    color: "#256D7B",
                    head: "ski",
                    tail: "coffee",
                },
                strategies: vec![
                    Box::new(StayInBounds),
                    Box::new(NoCollisions),
                    Box::new(MoveToFood::new(weights.battle.food)),
                    Box::new(AvoidBiggerSnakes::new(weights.battle.avoid_bigger)),
                    Box::new(MoveToSpace::new(weights.battle.space)),
                    Box::new(AttackSmallerSnakes::new(weights.battle.attack_smaller)),
                ],
            },
        }
    }

    /// Builds whichever personality `[snake] personality` names
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let kind = config.snake.personality.parse::<PersonalityKind>()?;
        Ok(Self::build(kind, &config.weights))
    }

    /// A personality with a caller-supplied strategy list
    pub fn custom(appearance: Appearance, strategies: Vec<Box<dyn Strategy>>) -> Self {
        Personality {
            kind: None,
            appearance,
            strategies,
        }
    }

    /// The named personality this was built from, if any
    pub fn kind(&self) -> Option<PersonalityKind> {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.appearance.name
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn strategies(&self) -> &[Box<dyn Strategy>] {
        &self.strategies
    }
}
