//! Player state for the interactive escape mode.

use crate::maze::{Maze, Point, Tile};

/// Player position inside a maze.
///
/// The runner starts on a boundary opening and moves one cell at a time. Walls and the grid edge
/// stop a move; every other tile, a marked route included, is fair ground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Runner {
    /// Current cell of the runner.
    pos: Point,
}

impl Runner {
    /// Places a runner on its starting cell.
    pub(crate) const fn new(start: Point) -> Self {
        Self { pos: start }
    }

    /// Returns the runner's current cell.
    pub(crate) const fn pos(&self) -> Point {
        self.pos
    }

    /// Attempts to move the runner by one step.
    ///
    /// The move is dropped when it would leave the grid or land on a wall.
    pub(crate) fn step(&mut self, drow: isize, dcol: isize, maze: &Maze) {
        if let Some(next) = self.pos.offset(drow, dcol) {
            if maze.tile(next).is_some_and(Tile::walkable) {
                self.pos = next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze_of(rows: &[&str]) -> Maze {
        let tiles = rows
            .iter()
            .map(|line| {
                line.bytes()
                    .map(|digit| Tile::from_digit(digit).expect("test rows use valid digits"))
                    .collect()
            })
            .collect();
        Maze::from_rows(tiles).expect("test rows are rectangular")
    }

    #[test]
    fn runner_walks_onto_open_floor() {
        let maze = maze_of(&["010", "000", "010"]);
        let mut runner = Runner::new(Point::new(0, 0));
        runner.step(1, 0, &maze);
        assert_eq!(runner.pos(), Point::new(1, 0));
        runner.step(0, 1, &maze);
        assert_eq!(runner.pos(), Point::new(1, 1));
    }

    #[test]
    fn walls_stop_the_runner() {
        let maze = maze_of(&["010", "000", "010"]);
        let mut runner = Runner::new(Point::new(0, 0));
        runner.step(0, 1, &maze);
        assert_eq!(runner.pos(), Point::new(0, 0));
    }

    #[test]
    fn the_grid_edge_stops_the_runner() {
        let maze = maze_of(&["010", "000", "010"]);
        let mut runner = Runner::new(Point::new(0, 0));
        runner.step(-1, 0, &maze);
        runner.step(0, -1, &maze);
        assert_eq!(runner.pos(), Point::new(0, 0));
    }

    #[test]
    fn marked_route_cells_stay_walkable() {
        let maze = maze_of(&["010", "020", "010"]);
        let mut runner = Runner::new(Point::new(1, 0));
        runner.step(0, 1, &maze);
        assert_eq!(runner.pos(), Point::new(1, 1));
    }
}
