//! Maze grid data model.
//!
//! This module contains the tile and coordinate value types together with the [`Maze`] grid
//! container shared by the generator, the path finder, persistence and the rendering code.

/// Grid cell states.
///
/// This enumeration represents the three values a maze cell can take: open floor, solid wall, or
/// floor that belongs to a marked solution route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tile {
    /// Traversable floor cell.
    Pass,
    /// Impassable wall cell.
    Wall,
    /// Floor cell that is part of a marked solution route.
    Route,
}

impl Tile {
    /// Builds a tile from its text-encoding digit.
    ///
    /// This function maps the digits of the on-disk maze format to tile values and rejects every
    /// other byte.
    pub(crate) const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'0' => Some(Self::Pass),
            b'1' => Some(Self::Wall),
            b'2' => Some(Self::Route),
            _ => None,
        }
    }

    /// Returns the text-encoding digit for the tile.
    pub(crate) const fn digit(self) -> char {
        match self {
            Self::Pass => '0',
            Self::Wall => '1',
            Self::Route => '2',
        }
    }

    /// Checks whether a runner may stand on the tile.
    ///
    /// Walls block movement; open floor and marked route cells do not.
    pub(crate) const fn walkable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// Grid coordinate.
///
/// This structure is a plain row/column pair, 0-indexed with rows growing downward and columns
/// growing rightward. Equality and hashing are value-based so that coordinates can key the
/// predecessor map during the route search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Point {
    /// Row index into the grid.
    pub row: usize,
    /// Column index into the grid.
    pub col: usize,
}

impl Point {
    /// Builds a coordinate from its row and column indices.
    pub(crate) const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the coordinate shifted by the given deltas.
    ///
    /// Offsets that would take either index below zero yield `None`; upper bounds are left to the
    /// grid lookup that follows.
    pub(crate) fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        Some(Self { row, col })
    }
}

/// Rectangular maze grid.
///
/// This structure owns a row-major tile matrix with at least one row and equal-length rows. The
/// generator and the path finder hand out fresh owned grids instead of mutating anything their
/// callers can observe; in-place mutation stays inside this crate and only ever touches working
/// copies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Maze {
    /// Tile matrix in row-major order. Every row has the same length.
    tiles: Vec<Vec<Tile>>,
}

impl Maze {
    /// Builds a maze from pre-filled tile rows.
    ///
    /// `None` flags a shape violation: no rows at all, an empty row, or rows that disagree in
    /// length.
    pub(crate) fn from_rows(tiles: Vec<Vec<Tile>>) -> Option<Self> {
        let width = tiles.first().map(Vec::len)?;
        if width == 0 || tiles.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self { tiles })
    }

    /// Builds an all-wall maze of the given dimensions.
    ///
    /// Zero dimensions are bumped to one so the shape invariant holds for any input.
    pub(crate) fn walls(rows: usize, cols: usize) -> Self {
        Self {
            tiles: vec![vec![Tile::Wall; cols.max(1)]; rows.max(1)],
        }
    }

    /// Returns the number of rows in the grid.
    pub(crate) fn rows(&self) -> usize {
        self.tiles.len()
    }

    /// Returns the number of columns in the grid.
    pub(crate) fn cols(&self) -> usize {
        self.tiles.first().map_or(0, Vec::len)
    }

    /// Returns the tile at a coordinate, or `None` outside the grid.
    pub(crate) fn tile(&self, at: Point) -> Option<Tile> {
        self.tiles.get(at.row)?.get(at.col).copied()
    }

    /// Overwrites the tile at a coordinate.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub(crate) fn set(&mut self, at: Point, tile: Tile) {
        if let Some(cell) = self.tiles.get_mut(at.row).and_then(|row| row.get_mut(at.col)) {
            *cell = tile;
        }
    }

    /// Iterates over the grid's rows as tile slices.
    pub(crate) fn rows_of_tiles(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.iter().map(Vec::as_slice)
    }
}
