//! Integer points on the board and the fixed neighbor offset tables.

use std::{
    fmt,
    ops::{Add, Sub},
};

/// A point (or offset) on the board.
///
/// `x` is the column and `y` is the row. Coordinates are plain values:
/// equality, ordering and hashing are all derived from `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

/// Offsets of the four orthogonally adjacent cells.
pub const ADJACENT: [Coordinate; 4] = [
    Coordinate::new(-1, 0),
    Coordinate::new(0, -1),
    Coordinate::new(0, 1),
    Coordinate::new(1, 0),
];

/// Offsets of the four diagonally adjacent cells.
pub const DIAGONAL: [Coordinate; 4] = [
    Coordinate::new(-1, -1),
    Coordinate::new(1, -1),
    Coordinate::new(-1, 1),
    Coordinate::new(1, 1),
];

impl Coordinate {
    /// Create a new coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum of two coordinates.
    pub const fn plus(self, other: Coordinate) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference of two coordinates.
    pub const fn minus(self, other: Coordinate) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// The four orthogonal neighbors of this coordinate.
    pub fn adjacent(self) -> impl Iterator<Item = Coordinate> {
        ADJACENT.into_iter().map(move |offset| self + offset)
    }

    /// The four diagonal neighbors of this coordinate.
    pub fn diagonal(self) -> impl Iterator<Item = Coordinate> {
        DIAGONAL.into_iter().map(move |offset| self + offset)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Self::Output {
        self.plus(rhs)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Self::Output {
        self.minus(rhs)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
