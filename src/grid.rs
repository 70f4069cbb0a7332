//! The game board: a `width` × `height` array of owners that validates and
//! applies Blokus placement rules.
//!
//! The grid knows nothing about turns or which pieces a player still holds.
//! It only answers whether a given shape may be put down at a given anchor and
//! records who owns every cell.

use crate::{
    coordinate::{Coordinate, ADJACENT, DIAGONAL},
    piece::Shape,
};
use std::fmt;

/// Identifier of a player. `0` is reserved for empty cells.
pub type Player = u8;

/// Owner value of a cell that nobody has claimed.
pub const EMPTY: Player = 0;

/// Mutable board state.
///
/// Cells are stored row-major: the owner of `(x, y)` is at index
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Player>,
}

impl Grid {
    /// Create an empty grid with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "Grid dimensions must be positive.");

        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells on the board.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Return true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Return true if the coordinate is one of the four board corners.
    pub fn is_corner(&self, coord: Coordinate) -> bool {
        let last_x = self.width as i32 - 1;
        let last_y = self.height as i32 - 1;

        (coord.x == 0 || coord.x == last_x) && (coord.y == 0 || coord.y == last_y)
    }

    /// Owner of the given cell, or `None` if it is off the board.
    pub fn get(&self, coord: Coordinate) -> Option<Player> {
        self.index(coord).map(|index| self.cells[index])
    }

    /// Every cell of the board in row-major order, paired with its owner.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Player)> + '_ {
        self.cells.iter().enumerate().map(move |(index, owner)| {
            let coord = Coordinate::new((index % self.width) as i32, (index / self.width) as i32);
            (coord, *owner)
        })
    }

    /// Number of cells owned by any player.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|owner| **owner != EMPTY).count()
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    fn is_owned_by(&self, coord: Coordinate, player: Player) -> bool {
        self.get(coord) == Some(player)
    }

    fn fill(&mut self, player: Player, shape: &Shape, anchor: Coordinate) {
        for cell in shape.cells() {
            if let Some(index) = self.index(anchor + *cell) {
                self.cells[index] = player;
            }
        }
    }

    /// Place the first piece of `player`.
    ///
    /// Every cell of `shape`, offset by `anchor`, must be on the board and
    /// empty, and at least one of them must be a board corner. Returns false
    /// and leaves the board untouched if any of these checks fails.
    pub fn place_initial(&mut self, player: Player, shape: &Shape, anchor: Coordinate) -> bool {
        assert_ne!(player, EMPTY, "Player 0 denotes an empty cell.");

        let targets: Vec<_> = shape.cells().iter().map(|cell| anchor + *cell).collect();

        if !targets.iter().all(|coord| self.contains(*coord)) {
            return false;
        }

        if !targets.iter().any(|coord| self.is_corner(*coord)) {
            return false;
        }

        if !targets.iter().all(|coord| self.is_owned_by(*coord, EMPTY)) {
            return false;
        }

        self.fill(player, shape, anchor);
        true
    }

    /// Place a subsequent piece of `player`.
    ///
    /// Every cell of `shape`, offset by `anchor`, must be on the board, empty,
    /// and not share an edge with a cell the player already owns. At least one
    /// of the cells must touch a cell of the same player diagonally. Returns
    /// false and leaves the board untouched if any of these checks fails.
    pub fn try_place(&mut self, player: Player, shape: &Shape, anchor: Coordinate) -> bool {
        assert_ne!(player, EMPTY, "Player 0 denotes an empty cell.");

        let mut found_diagonal = false;
        for cell in shape.cells() {
            let coord = anchor + *cell;

            if !self.is_owned_by(coord, EMPTY) {
                return false;
            }

            if ADJACENT
                .iter()
                .any(|offset| self.is_owned_by(coord + *offset, player))
            {
                return false;
            }

            found_diagonal = found_diagonal
                || DIAGONAL
                    .iter()
                    .any(|offset| self.is_owned_by(coord + *offset, player));
        }

        if !found_diagonal {
            return false;
        }

        self.fill(player, shape, anchor);
        true
    }

    /// Remove a piece previously put down with [`Grid::place_initial`] or
    /// [`Grid::try_place`] using the same arguments.
    ///
    /// # Panics
    ///
    /// Panics if any of the cells is not owned by `player`. That only happens
    /// when the caller undoes a move it never made, and the board can no
    /// longer be trusted.
    pub fn unplace(&mut self, player: Player, shape: &Shape, anchor: Coordinate) {
        for cell in shape.cells() {
            let coord = anchor + *cell;
            let found = self.get(coord);
            if found != Some(player) {
                match found {
                    Some(owner) => panic!(
                        "Expected to find player {} at {}, but found {}",
                        player, coord, owner
                    ),
                    None => panic!(
                        "Expected to find player {} at {}, but it is off the board",
                        player, coord
                    ),
                }
            }
        }

        self.fill(EMPTY, shape, anchor);
    }

    /// All cells currently owned by `player`, in row-major order.
    pub fn occupied_cells(&self, player: Player) -> Vec<Coordinate> {
        self.iter()
            .filter(|(_, owner)| *owner == player)
            .map(|(coord, _)| coord)
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for owner in row {
                let symbol = match *owner {
                    EMPTY => '.',
                    owner => char::from_digit(u32::from(owner), 36).unwrap_or('#'),
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
