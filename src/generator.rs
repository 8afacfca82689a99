//! Random maze generation.
//!
//! This module carves a spanning structure over the odd-coordinate cell lattice of a walled grid,
//! growing-tree style, then patches up the far edges of even-sized grids and cuts an entry and an
//! exit into the outer border.

use rand::{seq::SliceRandom as _, Rng};

use crate::maze::{Maze, Point, Tile};

/// Cell-lattice step offsets: up, down, left, right.
///
/// Cells sit two grid units apart; the wall between two cells is the midpoint of a step.
const LATTICE_STEPS: [(isize, isize); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Unit step offsets: down, up, right, left.
const UNIT_STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Wall/destination pair queued while growing the maze.
///
/// Each link records the wall sitting between an already carved cell and a not-yet-carved
/// neighbor two steps away, along with that neighbor itself. Links only live for the duration of a
/// single carve.
#[derive(Clone, Copy, Debug)]
struct CarveLink {
    /// Wall cell to break when the link is taken.
    wall: Point,
    /// Destination cell two steps from an already carved cell.
    cell: Point,
}

/// Generates a random maze of the given dimensions.
///
/// The grid starts as solid wall. On grids with at least a 3x3 footprint a spanning structure is
/// carved over the odd-coordinate lattice, even dimensions get a correction sweep so the structure
/// reaches the far edges, and two boundary openings are cut wherever enough candidate positions
/// exist. Smaller grids are returned untouched; they have no interior to carve. Generation never
/// fails, it only degrades.
pub(crate) fn generate<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Maze {
    let mut maze = Maze::walls(rows, cols);

    if maze.rows() < 3 || maze.cols() < 3 {
        return maze;
    }

    carve(&mut maze, rng);
    widen_even_edges(&mut maze);
    place_openings(&mut maze, rng);

    maze
}

/// Carves the spanning structure over the odd-coordinate lattice.
///
/// Starting from a random lattice cell, pending carve links are consumed in uniformly random
/// order; swap-removal keeps the random pick O(1). A link whose destination was reached through
/// another link in the meantime is dropped, so every lattice cell joins the structure through
/// exactly one broken wall. The caller guarantees a footprint of at least 3x3.
fn carve<R: Rng>(maze: &mut Maze, rng: &mut R) {
    let seed = Point::new(
        1 + 2 * rng.gen_range(0..(maze.rows() - 1) / 2),
        1 + 2 * rng.gen_range(0..(maze.cols() - 1) / 2),
    );
    maze.set(seed, Tile::Pass);

    let mut pending = Vec::new();
    push_links(maze, seed, &mut pending);

    while !pending.is_empty() {
        let pick = rng.gen_range(0..pending.len());
        let link = pending.swap_remove(pick);

        if maze.tile(link.cell) == Some(Tile::Wall) {
            maze.set(link.wall, Tile::Pass);
            maze.set(link.cell, Tile::Pass);
            push_links(maze, link.cell, &mut pending);
        }
    }
}

/// Queues the carvable links around a freshly carved cell.
///
/// A link is queued only when its destination lies strictly inside the outer border and is still
/// a wall.
fn push_links(maze: &Maze, from: Point, pending: &mut Vec<CarveLink>) {
    for (drow, dcol) in LATTICE_STEPS {
        let Some(cell) = from.offset(drow, dcol) else {
            continue;
        };
        let Some(wall) = from.offset(drow / 2, dcol / 2) else {
            continue;
        };

        let inside = cell.row > 0
            && cell.row < maze.rows() - 1
            && cell.col > 0
            && cell.col < maze.cols() - 1;
        if inside && maze.tile(cell) == Some(Tile::Wall) {
            pending.push(CarveLink { wall, cell });
        }
    }
}

/// Opens stranded cells along the far edges of even-sized grids.
///
/// The lattice only reaches odd coordinates, so an even row count leaves the second-to-last row
/// untouched; likewise for columns. Any interior cell there with exactly one open neighbor is
/// opened to join it to the carved structure. The sweep runs in place and reads its own earlier
/// openings.
fn widen_even_edges(maze: &mut Maze) {
    if maze.rows() % 2 == 0 {
        let row = maze.rows() - 2;
        for col in 1..maze.cols() - 1 {
            let probe = Point::new(row, col);
            if open_neighbors(maze, probe) == 1 {
                maze.set(probe, Tile::Pass);
            }
        }
    }

    if maze.cols() % 2 == 0 {
        let col = maze.cols() - 2;
        for row in 1..maze.rows() - 1 {
            let probe = Point::new(row, col);
            if open_neighbors(maze, probe) == 1 {
                maze.set(probe, Tile::Pass);
            }
        }
    }
}

/// Counts the passable 4-neighbors of a cell, border positions included.
fn open_neighbors(maze: &Maze, at: Point) -> usize {
    UNIT_STEPS
        .iter()
        .filter(|&&(drow, dcol)| {
            at.offset(drow, dcol).and_then(|next| maze.tile(next)) == Some(Tile::Pass)
        })
        .count()
}

/// Cuts the entry and exit openings into the outer border.
///
/// Border positions one step outside a carved interior cell are collected side by side; with
/// fewer than two candidates the border stays fully closed. The first opening is a uniform pick.
/// The second is a uniform pick among the candidates at least `hypot(height, width) / 3` away from
/// the first, falling back to the farthest remaining candidate when none qualifies; the earliest
/// scan position wins a distance tie.
fn place_openings<R: Rng>(maze: &mut Maze, rng: &mut R) {
    let mut candidates = collect_candidates(maze);
    if candidates.len() < 2 {
        return;
    }

    let first = candidates.remove(rng.gen_range(0..candidates.len()));
    let min_separation = span(maze) / 3.0;

    let far: Vec<Point> = candidates
        .iter()
        .copied()
        .filter(|candidate| distance(first, *candidate) >= min_separation)
        .collect();

    let Some(second) = far
        .choose(rng)
        .copied()
        .or_else(|| farthest_from(first, &candidates))
    else {
        return;
    };

    maze.set(first, Tile::Pass);
    maze.set(second, Tile::Pass);
}

/// Collects the border positions eligible to become openings.
///
/// A border cell qualifies when the interior cell one step inward is already carved. Sides are
/// scanned in a fixed order, left and right flanks by row and then top and bottom edges by
/// column, so the distance tie-break stays reproducible.
fn collect_candidates(maze: &Maze) -> Vec<Point> {
    let mut candidates = Vec::new();
    let height = maze.rows() - 1;
    let width = maze.cols() - 1;

    for row in 1..height {
        if maze.tile(Point::new(row, 1)) == Some(Tile::Pass) {
            candidates.push(Point::new(row, 0));
        }
        if maze.tile(Point::new(row, width - 1)) == Some(Tile::Pass) {
            candidates.push(Point::new(row, width));
        }
    }

    for col in 1..width {
        if maze.tile(Point::new(1, col)) == Some(Tile::Pass) {
            candidates.push(Point::new(0, col));
        }
        if maze.tile(Point::new(height - 1, col)) == Some(Tile::Pass) {
            candidates.push(Point::new(height, col));
        }
    }

    candidates
}

/// Returns the candidate farthest from an origin point.
///
/// Ties keep the earliest candidate; the comparison is strictly-greater on purpose.
fn farthest_from(origin: Point, candidates: &[Point]) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;

    for &candidate in candidates {
        let dist = distance(origin, candidate);
        if best.map_or(true, |(_, best_dist)| dist > best_dist) {
            best = Some((candidate, dist));
        }
    }

    best.map(|(point, _)| point)
}

/// Euclidean distance between two grid coordinates.
#[expect(
    clippy::cast_precision_loss,
    reason = "Grid dimensions stay far below f64's exact integer range."
)]
fn distance(from: Point, to: Point) -> f64 {
    let drow = from.row.abs_diff(to.row) as f64;
    let dcol = from.col.abs_diff(to.col) as f64;
    drow.hypot(dcol)
}

/// Diagonal span of the grid's coordinate range.
#[expect(
    clippy::cast_precision_loss,
    reason = "Grid dimensions stay far below f64's exact integer range."
)]
fn span(maze: &Maze) -> f64 {
    ((maze.rows() - 1) as f64).hypot((maze.cols() - 1) as f64)
}
