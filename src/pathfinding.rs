//! Shortest-route search over maze grids.
//!
//! This module scans the outer border for openings, runs a breadth-first search between the first
//! and the last one, and marks the route it finds on a fresh grid. It also holds the animation
//! state used to replay a found route on screen.

use std::{
    collections::{HashMap, VecDeque},
    time::{Duration, Instant},
};

use crate::maze::{Maze, Point, Tile};

/// Search step offsets in expansion order: down, up, right, left.
///
/// The order is fixed so that equal-length routes always resolve to the same one.
const SEARCH_STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Milliseconds between route replay steps.
///
/// This constant controls how quickly the solve screen reveals the found route. A lower value
/// speeds the reveal up, a higher one makes the route easier to follow.
pub(crate) const ROUTE_STEP_DELAY_MS: u64 = 80;

/// Collects every passable cell on the outer border, in row-major order.
///
/// The scan visits whole rows top to bottom and cells left to right, so openings come out in a
/// reproducible order; the search below treats the first one as the entry and the last one as the
/// exit.
pub(crate) fn boundary_openings(maze: &Maze) -> Vec<Point> {
    let mut openings = Vec::new();

    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            let border =
                row == 0 || row == maze.rows() - 1 || col == 0 || col == maze.cols() - 1;
            if border && maze.tile(Point::new(row, col)) == Some(Tile::Pass) {
                openings.push(Point::new(row, col));
            }
        }
    }

    openings
}

/// Finds the shortest passable route between the first and the last boundary opening.
///
/// Breadth-first search over the 4-connected graph of open floor cells; each cell is enqueued at
/// most once, which pins its distance, and the search stops as soon as the exit leaves the
/// frontier. Returns the route ordered from entry to exit, or `None` when the border has fewer
/// than two openings or the frontier drains without reaching the exit.
pub(crate) fn shortest_path(maze: &Maze) -> Option<Vec<Point>> {
    let openings = boundary_openings(maze);
    if openings.len() < 2 {
        return None;
    }
    let start = *openings.first()?;
    let end = *openings.last()?;

    let mut frontier = VecDeque::new();
    let mut came_from: HashMap<Point, Option<Point>> = HashMap::new();
    frontier.push_back(start);
    let _ = came_from.insert(start, None);

    let mut found = false;
    while let Some(current) = frontier.pop_front() {
        if current == end {
            found = true;
            break;
        }

        for (drow, dcol) in SEARCH_STEPS {
            let Some(next) = current.offset(drow, dcol) else {
                continue;
            };
            if maze.tile(next) == Some(Tile::Pass) && !came_from.contains_key(&next) {
                let _ = came_from.insert(next, Some(current));
                frontier.push_back(next);
            }
        }
    }

    if !found {
        return None;
    }

    let mut route = Vec::new();
    let mut step = Some(end);
    while let Some(point) = step {
        route.push(point);
        step = came_from.get(&point).copied().flatten();
    }
    route.reverse();

    Some(route)
}

/// Marks the shortest route through the maze on a fresh copy.
///
/// The input grid is left untouched; the copy carries the route cells as [`Tile::Route`]. `None`
/// mirrors the search outcome of [`shortest_path`].
pub(crate) fn find_path(maze: &Maze) -> Option<Maze> {
    let route = shortest_path(maze)?;

    let mut marked = maze.clone();
    for point in route {
        marked.set(point, Tile::Route);
    }

    Some(marked)
}

/// Timed replay of a found route.
///
/// This structure reveals a route one cell per frame delay, entry first, for the solve screen.
/// Once every cell is shown the replay stays complete.
pub(crate) struct PathAnimation {
    /// Full route from entry to exit.
    route: Vec<Point>,
    /// Number of route cells currently revealed.
    shown: usize,
    /// Timestamp of the last reveal step.
    last_step: Instant,
}

impl PathAnimation {
    /// Starts a new replay over the given route.
    pub(crate) fn new(route: Vec<Point>) -> Self {
        Self {
            route,
            shown: 0,
            last_step: Instant::now(),
        }
    }

    /// Advances the replay by one cell when the frame delay has elapsed.
    pub(crate) fn update(&mut self) {
        if self.shown < self.route.len()
            && self.last_step.elapsed() >= Duration::from_millis(ROUTE_STEP_DELAY_MS)
        {
            self.last_step = Instant::now();
            self.shown += 1;
        }
    }

    /// Returns the revealed part of the route.
    pub(crate) fn visible(&self) -> &[Point] {
        self.route.get(..self.shown).unwrap_or_default()
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

    /// Collects the route-marked cells of a maze.
    fn marked_cells(maze: &Maze) -> Vec<Point> {
        let mut cells = Vec::new();
        for (row_idx, row) in maze.rows_of_tiles().enumerate() {
            for (col_idx, tile) in row.iter().enumerate() {
                if *tile == Tile::Route {
                    cells.push(Point::new(row_idx, col_idx));
                }
            }
        }
        cells
    }

    #[test]
    fn border_scan_is_row_major() {
        let maze = maze_of(&["010", "000", "010"]);
        assert_eq!(
            boundary_openings(&maze),
            vec![
                Point::new(0, 0),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(2, 0),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn search_marks_the_shortest_route() {
        let maze = maze_of(&["010", "000", "010"]);
        let marked = find_path(&maze).expect("a route exists");

        // (0,0) to (2,2) is four steps away, so five cells carry the mark.
        let cells = marked_cells(&marked);
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(&Point::new(0, 0)));
        assert!(cells.contains(&Point::new(2, 2)));
    }

    #[test]
    fn marked_route_is_a_single_corridor() {
        let maze = maze_of(&["010", "000", "010"]);
        let marked = find_path(&maze).expect("a route exists");

        // Endpoints touch one marked neighbor, every cell in between exactly two.
        let cells = marked_cells(&marked);
        let mut endpoint_count = 0;
        for cell in &cells {
            let marked_neighbors = SEARCH_STEPS
                .iter()
                .filter(|&&(drow, dcol)| {
                    cell.offset(drow, dcol)
                        .is_some_and(|next| cells.contains(&next))
                })
                .count();
            match marked_neighbors {
                1 => endpoint_count += 1,
                2 => {}
                other => panic!("{cell:?} touches {other} marked cells"),
            }
        }
        assert_eq!(endpoint_count, 2);
    }

    #[test]
    fn search_leaves_the_input_untouched() {
        let maze = maze_of(&["010", "000", "010"]);
        let before = maze.clone();
        let _ = find_path(&maze).expect("a route exists");
        assert_eq!(maze, before);
    }

    #[test]
    fn search_is_deterministic() {
        let maze = maze_of(&["01010", "00000", "01010", "00000", "01010"]);
        let first = find_path(&maze).expect("a route exists");
        let second = find_path(&maze).expect("a route exists");
        assert_eq!(first, second);
    }

    #[test]
    fn closed_borders_yield_nothing() {
        let walled = maze_of(&["111", "101", "111"]);
        assert!(find_path(&walled).is_none());

        let single = maze_of(&["101", "101", "111"]);
        assert_eq!(boundary_openings(&single).len(), 1);
        assert!(find_path(&single).is_none());
    }

    #[test]
    fn unreachable_exit_yields_nothing() {
        // Openings on both flanks, but a solid wall line between them.
        let maze = maze_of(&["011", "010", "010", "110"]);
        assert_eq!(boundary_openings(&maze).len(), 6);
        assert!(find_path(&maze).is_none());
    }

    #[test]
    fn route_comes_out_entry_first() {
        let maze = maze_of(&["010", "000", "010"]);
        let route = shortest_path(&maze).expect("a route exists");
        assert_eq!(route.first(), Some(&Point::new(0, 0)));
        assert_eq!(route.last(), Some(&Point::new(2, 2)));
        assert_eq!(route.len(), 5);
    }

    #[test]
    fn replay_reveals_nothing_before_the_first_step() {
        let animation = PathAnimation::new(vec![Point::new(0, 0), Point::new(1, 0)]);
        assert!(animation.visible().is_empty());
    }
}
