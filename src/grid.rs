// Occupancy grid and reachability analysis
//
// The grid is a read-only, per-turn view of which cells are blocked by snake
// bodies or hazards. It is rebuilt by every strategy that needs it.

use std::collections::{HashSet, VecDeque};

use crate::types::{Battlesnake, Board, Coord};

/// Blocked cells for the current turn plus the board bounds
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    occupied: HashSet<Coord>,
    width: i32,
    height: i32,
}

impl OccupancyGrid {
    /// Builds the grid from every snake body on the board, our own body, and every hazard
    pub fn new(board: &Board, you: &Battlesnake) -> Self {
        let occupied = board
            .snakes
            .iter()
            .flat_map(|snake| snake.body.iter())
            .chain(you.body.iter())
            .chain(board.hazards.iter())
            .copied()
            .collect();

        OccupancyGrid {
            occupied,
            width: board.width,
            height: board.height,
        }
    }

    pub fn in_bounds(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    pub fn is_occupied(&self, coord: &Coord) -> bool {
        self.occupied.contains(coord)
    }

    /// A cell is empty when it is on the board and nothing blocks it
    pub fn is_empty(&self, coord: &Coord) -> bool {
        self.in_bounds(coord) && !self.is_occupied(coord)
    }

    /// Counts the empty cells reachable from `start` through 4-directional moves.
    ///
    /// `start` itself is counted when empty; a blocked or off-board start yields 0.
    pub fn available_space(&self, start: Coord) -> usize {
        if !self.is_empty(&start) {
            return 0;
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        let mut space = 0;
        while let Some(current) = queue.pop_front() {
            space += 1;
            for next in current.neighbors().iter() {
                if self.is_empty(next) && visited.insert(*next) {
                    queue.push_back(*next);
                }
            }
        }

        space
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake(id: &str, body: Vec<Coord>) -> Battlesnake {
        Battlesnake {
            id: id.to_string(),
            health: 100,
            head: body[0],
            length: body.len() as i32,
            body,
            ..Battlesnake::default()
        }
    }

    #[test]
    fn test_is_empty_marks_bodies_and_hazards() {
        let you = snake("you", vec![Coord::new(0, 0), Coord::new(1, 1)]);
        let board = Board {
            width: 2,
            height: 2,
            snakes: vec![you.clone()],
            hazards: vec![Coord::new(0, 1)],
            ..Board::default()
        };
        let grid = OccupancyGrid::new(&board, &you);

        assert!(!grid.is_empty(&Coord::new(0, 0)));
        assert!(!grid.is_empty(&Coord::new(0, 1)));
        assert!(grid.is_empty(&Coord::new(1, 0)));
        assert!(!grid.is_empty(&Coord::new(1, 1)));
    }

    #[test]
    fn test_out_of_bounds_is_never_empty() {
        let board = Board {
            width: 2,
            height: 2,
            ..Board::default()
        };
        let grid = OccupancyGrid::new(&board, &Battlesnake::default());

        assert!(!grid.is_empty(&Coord::new(-1, 0)));
        assert!(!grid.is_empty(&Coord::new(2, 2)));
        assert!(!grid.is_empty(&Coord::new(-1, -2)));
        assert!(!grid.is_empty(&Coord::new(0, 2)));
    }

    #[test]
    fn test_own_body_is_blocked_even_if_missing_from_board() {
        let you = snake("you", vec![Coord::new(1, 1), Coord::new(1, 0)]);
        let board = Board {
            width: 3,
            height: 3,
            ..Board::default()
        };
        let grid = OccupancyGrid::new(&board, &you);

        assert!(grid.is_occupied(&Coord::new(1, 0)));
        assert!(!grid.is_empty(&Coord::new(1, 1)));
    }

    #[test]
    fn test_available_space_on_empty_board() {
        let board = Board {
            width: 4,
            height: 3,
            ..Board::default()
        };
        let grid = OccupancyGrid::new(&board, &Battlesnake::default());

        assert_eq!(grid.available_space(Coord::new(0, 0)), 12);
        assert_eq!(grid.available_space(Coord::new(3, 2)), 12);
    }

    #[test]
    fn test_available_space_blocked_start() {
        let you = snake("you", vec![Coord::new(1, 1)]);
        let board = Board {
            width: 3,
            height: 3,
            snakes: vec![you.clone()],
            ..Board::default()
        };
        let grid = OccupancyGrid::new(&board, &you);

        assert_eq!(grid.available_space(Coord::new(1, 1)), 0);
        assert_eq!(grid.available_space(Coord::new(3, 1)), 0);
        assert_eq!(grid.available_space(Coord::new(-1, 1)), 0);
    }

    #[test]
    fn test_available_space_pocket() {
        // Body walls off the bottom-right corner of a 3x3 board
        let you = snake(
            "you",
            vec![
                Coord::new(2, 1),
                Coord::new(1, 1),
                Coord::new(1, 0),
                Coord::new(0, 0),
            ],
        );
        let board = Board {
            width: 3,
            height: 3,
            snakes: vec![you.clone()],
            ..Board::default()
        };
        let grid = OccupancyGrid::new(&board, &you);

        assert_eq!(grid.available_space(Coord::new(2, 0)), 1);
        assert_eq!(grid.available_space(Coord::new(2, 2)), 4);
        assert_eq!(grid.available_space(Coord::new(0, 1)), 4);
    }

    #[test]
    fn test_single_cell_board() {
        let board = Board {
            width: 1,
            height: 1,
            ..Board::default()
        };
        let grid = OccupancyGrid::new(&board, &Battlesnake::default());
        assert_eq!(grid.available_space(Coord::new(0, 0)), 1);
    }
}
