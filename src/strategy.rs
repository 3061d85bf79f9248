// Scoring strategies
//
// Each strategy looks at the board and either adds score to directions or
// eliminates them from the scorecard. Strategies carry only their weight;
// everything else is derived from the board passed in on each call.

use log::debug;
use std::fmt;

use crate::grid::OccupancyGrid;
use crate::scorecard::{Score, Scorecard};
use crate::types::{Battlesnake, Board, Coord, Direction};

/// A single scoring or elimination rule
pub trait Strategy: fmt::Debug + Send + Sync {
    /// Name used to attribute scorecard events
    fn label(&self) -> &'static str;

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>);
}

/// Per-direction accumulator for fractional contributions.
///
/// Contributions are summed as floats and truncated once when applied.
#[derive(Debug, Default)]
struct Weights {
    right: f64,
    left: f64,
    up: f64,
    down: f64,
}

impl Weights {
    fn apply(&self, scorecard: &mut Scorecard<'_>) {
        scorecard.add(Direction::Right, self.right as Score);
        scorecard.add(Direction::Left, self.left as Score);
        scorecard.add(Direction::Up, self.up as Score);
        scorecard.add(Direction::Down, self.down as Score);
    }
}

/// Eliminates directions that leave the board
#[derive(Debug, Default, Clone)]
pub struct StayInBounds;

impl Strategy for StayInBounds {
    fn label(&self) -> &'static str {
        "stay-in-bounds"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        for direction in Direction::all().iter() {
            if !board.contains(&you.head.step(*direction)) {
                scorecard.mark_unsafe(*direction);
            }
        }
    }
}

/// Eliminates directions that run into any snake body, our own included, or a hazard
#[derive(Debug, Default, Clone)]
pub struct NoCollisions;

impl Strategy for NoCollisions {
    fn label(&self) -> &'static str {
        "no-collisions"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        let grid = OccupancyGrid::new(board, you);
        for direction in Direction::all().iter() {
            if grid.is_occupied(&you.head.step(*direction)) {
                scorecard.mark_unsafe(*direction);
            }
        }
    }
}

/// Rewards the directions that close in on the single nearest food
#[derive(Debug, Clone)]
pub struct MoveToClosestFood {
    pub weight: Score,
}

impl MoveToClosestFood {
    pub fn new(weight: Score) -> Self {
        MoveToClosestFood { weight }
    }
}

/// Nearest food by Manhattan distance; the first one listed wins a tie
fn closest_food(board: &Board, head: &Coord) -> Option<Coord> {
    let mut closest: Option<(Coord, i32)> = None;
    for food in &board.food {
        let distance = head.distance_to(food);
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((*food, distance)),
        }
    }
    closest.map(|(food, _)| food)
}

impl Strategy for MoveToClosestFood {
    fn label(&self) -> &'static str {
        "move-to-closest-food"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        let head = you.head;
        let food = match closest_food(board, &head) {
            Some(food) => food,
            None => return,
        };
        debug!("Found closest food: {}", food);

        if head.x > food.x {
            scorecard.add(Direction::Left, self.weight);
        }
        if head.x < food.x {
            scorecard.add(Direction::Right, self.weight);
        }
        if head.y > food.y {
            scorecard.add(Direction::Down, self.weight);
        }
        if head.y < food.y {
            scorecard.add(Direction::Up, self.weight);
        }
    }
}

/// Rewards directions toward every food, closer food counting for more
#[derive(Debug, Clone)]
pub struct MoveToFood {
    pub weight: f64,
}

impl MoveToFood {
    pub fn new(weight: f64) -> Self {
        MoveToFood { weight }
    }
}

impl Strategy for MoveToFood {
    fn label(&self) -> &'static str {
        "move-to-food"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        if board.food.is_empty() {
            return;
        }

        let head = you.head;
        let max_distance = board.max_distance();
        let mut weights = Weights::default();
        for food in &board.food {
            let weight = self.weight * f64::from(max_distance - head.distance_to(food));
            if food.x > head.x {
                weights.right += weight;
            }
            if food.x < head.x {
                weights.left += weight;
            }
            if food.y > head.y {
                weights.up += weight;
            }
            if food.y < head.y {
                weights.down += weight;
            }
        }
        weights.apply(scorecard);
    }
}

/// Offset of the head from the board center on each axis.
///
/// The center of an axis of size n is (n - 1) / 2, so the middle cell of an
/// odd-sized board has zero offset.
fn center_offset(board: &Board, head: &Coord) -> (f64, f64) {
    let center_x = f64::from(board.width - 1) / 2.0;
    let center_y = f64::from(board.height - 1) / 2.0;
    (f64::from(head.x) - center_x, f64::from(head.y) - center_y)
}

/// Rewards directions that bring the head back toward the center
#[derive(Debug, Clone)]
pub struct MoveToCenter {
    pub weight: f64,
}

impl MoveToCenter {
    pub fn new(weight: f64) -> Self {
        MoveToCenter { weight }
    }
}

impl Strategy for MoveToCenter {
    fn label(&self) -> &'static str {
        "move-to-center"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        let (offset_x, offset_y) = center_offset(board, &you.head);
        let mut weights = Weights::default();
        if offset_x < 0.0 {
            weights.right = self.weight * -offset_x;
        }
        if offset_x > 0.0 {
            weights.left = self.weight * offset_x;
        }
        if offset_y < 0.0 {
            weights.up = self.weight * -offset_y;
        }
        if offset_y > 0.0 {
            weights.down = self.weight * offset_y;
        }
        weights.apply(scorecard);
    }
}

/// Rewards directions that push the head further out toward the walls
#[derive(Debug, Clone)]
pub struct MoveToWalls {
    pub weight: f64,
}

impl MoveToWalls {
    pub fn new(weight: f64) -> Self {
        MoveToWalls { weight }
    }
}

impl Strategy for MoveToWalls {
    fn label(&self) -> &'static str {
        "move-to-walls"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        let (offset_x, offset_y) = center_offset(board, &you.head);
        let mut weights = Weights::default();
        if offset_x < 0.0 {
            weights.left = self.weight * -offset_x;
        }
        if offset_x > 0.0 {
            weights.right = self.weight * offset_x;
        }
        if offset_y < 0.0 {
            weights.down = self.weight * -offset_y;
        }
        if offset_y > 0.0 {
            weights.up = self.weight * offset_y;
        }
        weights.apply(scorecard);
    }
}

/// Other snakes whose length relative to ours satisfies `keep`
fn opponents<'b>(
    board: &'b Board,
    you: &'b Battlesnake,
    keep: impl Fn(i32) -> bool + 'b,
) -> impl Iterator<Item = &'b Battlesnake> + 'b {
    board
        .snakes
        .iter()
        .filter(move |snake| snake.id != you.id && keep(snake.length))
}

/// Rewards moving away from snakes at least as long as us
#[derive(Debug, Clone)]
pub struct AvoidBiggerSnakes {
    pub weight: f64,
}

impl AvoidBiggerSnakes {
    pub fn new(weight: f64) -> Self {
        AvoidBiggerSnakes { weight }
    }
}

impl Strategy for AvoidBiggerSnakes {
    fn label(&self) -> &'static str {
        "avoid-bigger-snakes"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        let head = you.head;
        let max_distance = board.max_distance();
        let mut weights = Weights::default();
        for snake in opponents(board, you, move |length| length >= you.length) {
            let distance = head.distance_to(&snake.head);
            let weight = self.weight * f64::from(max_distance - distance);
            debug!(
                "Found bigger snake at {}, {} block(s) away",
                snake.head, distance
            );

            if head.x > snake.head.x {
                weights.right += weight;
            } else {
                weights.left += weight;
            }
            if head.y > snake.head.y {
                weights.up += weight;
            } else {
                weights.down += weight;
            }
        }
        weights.apply(scorecard);
    }
}

/// Rewards moving toward snakes strictly shorter than us
#[derive(Debug, Clone)]
pub struct AttackSmallerSnakes {
    pub weight: f64,
}

impl AttackSmallerSnakes {
    pub fn new(weight: f64) -> Self {
        AttackSmallerSnakes { weight }
    }
}

impl Strategy for AttackSmallerSnakes {
    fn label(&self) -> &'static str {
        "attack-smaller-snakes"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        let head = you.head;
        let max_distance = board.max_distance();
        let mut weights = Weights::default();
        for snake in opponents(board, you, move |length| length < you.length) {
            let distance = head.distance_to(&snake.head);
            let weight = self.weight * f64::from(max_distance - distance);
            debug!(
                "Found smaller snake at {}, {} block(s) away",
                snake.head, distance
            );

            if head.x > snake.head.x {
                weights.left += weight;
            } else {
                weights.right += weight;
            }
            if head.y > snake.head.y {
                weights.down += weight;
            } else {
                weights.up += weight;
            }
        }
        weights.apply(scorecard);
    }
}

/// Rewards directions in proportion to the open space reachable from them
#[derive(Debug, Clone)]
pub struct MoveToSpace {
    pub weight: f64,
}

impl MoveToSpace {
    pub fn new(weight: f64) -> Self {
        MoveToSpace { weight }
    }
}

impl Strategy for MoveToSpace {
    fn label(&self) -> &'static str {
        "move-to-space"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        let total = board.total_cells();
        if total <= 0 {
            return;
        }

        let grid = OccupancyGrid::new(board, you);
        for direction in Direction::all().iter() {
            let space = grid.available_space(you.head.step(*direction));
            let weight = space as f64 / f64::from(total) * 10.0 * self.weight;
            scorecard.add(*direction, weight as Score);
        }
    }
}

/// Eliminates directions leading into a pocket too small to hold our body
#[derive(Debug, Default, Clone)]
pub struct AvoidDeadEnds;

impl Strategy for AvoidDeadEnds {
    fn label(&self) -> &'static str {
        "avoid-dead-ends"
    }

    fn evaluate(&self, board: &Board, you: &Battlesnake, scorecard: &mut Scorecard<'_>) {
        let grid = OccupancyGrid::new(board, you);
        let needed = you.length.max(0) as usize;
        for direction in Direction::all().iter() {
            let space = grid.available_space(you.head.step(*direction));
            if space < needed {
                debug!(
                    "Dead-end {}! Have {} square(s), need {}",
                    direction, space, needed
                );
                scorecard.mark_unsafe(*direction);
            }
        }
    }
}
