//! A [polyomino](https://en.wikipedia.org/wiki/Polyomino) piece and the set
//! of its distinct 90° rotations.
//!
//! Shapes are stored as a sorted list of cell offsets, normalized so that the
//! smallest `x` and the smallest `y` among the cells are both `0`. Two shapes
//! are equal exactly when they cover the same cells after normalization.

use crate::coordinate::Coordinate;
use std::{fmt, sync::Arc};

/// A normalized set of cell offsets describing one polyomino orientation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    cells: Vec<Coordinate>,
}

impl Shape {
    /// Create a new shape from the given cells.
    ///
    /// The cells are translated so that the minimum `x` and minimum `y` are
    /// `0`, sorted, and duplicate cells are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    pub fn new(cells: impl IntoIterator<Item = Coordinate>) -> Self {
        let cells: Vec<_> = cells.into_iter().collect();
        assert!(!cells.is_empty(), "Piece must contain at least one cell.");

        Self::normalized(cells)
    }

    fn normalized(mut cells: Vec<Coordinate>) -> Self {
        let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
        let origin = Coordinate::new(min_x, min_y);

        for cell in cells.iter_mut() {
            *cell = *cell - origin;
        }
        cells.sort();
        cells.dedup();

        Self { cells }
    }

    /// The cell offsets of this shape, in sorted order.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Number of cells in the shape.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, a shape has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of columns spanned by the shape.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|c| c.x).max().map_or(0, |x| x as usize + 1)
    }

    /// Number of rows spanned by the shape.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|c| c.y).max().map_or(0, |y| y as usize + 1)
    }

    /// Return this shape rotated 90° clockwise, `(x, y) -> (y, -x)`, and
    /// normalized again.
    pub fn rotate(&self) -> Shape {
        Self::normalized(
            self.cells
                .iter()
                .map(|c| Coordinate::new(c.y, -c.x))
                .collect(),
        )
    }

    /// Return the orbit of this shape under rotation, starting with the shape
    /// itself.
    ///
    /// The result has 1, 2 or 4 entries depending on the rotational symmetry
    /// of the shape.
    pub fn rotations(&self) -> Vec<Shape> {
        let mut rotations = vec![self.clone()];
        let mut current = self.rotate();
        while current != *self {
            let next = current.rotate();
            rotations.push(current);
            current = next;
        }
        rotations
    }
}

impl<const W: usize, const H: usize> From<[[u8; W]; H]> for Shape {
    /// Build a shape from a row-major mask, where row `i` is `y = i` and
    /// column `j` is `x = j`. Any non-zero element is a filled cell.
    fn from(arr: [[u8; W]; H]) -> Self {
        let cells = arr.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, filled)| **filled != 0)
                .map(move |(x, _)| Coordinate::new(x as i32, y as i32))
        });

        Self::new(cells)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let filled = self
                    .cells
                    .binary_search(&Coordinate::new(x as i32, y as i32))
                    .is_ok();
                write!(f, "{}", if filled { 'X' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// An immutable piece: its normalized shape plus every distinct rotation of
/// that shape.
///
/// The rotation set is computed once in [`Piece::new`] and shared between
/// clones.
#[derive(Debug, Clone)]
pub struct Piece {
    shape: Shape,
    rotations: Arc<[Shape]>,
}

impl Piece {
    /// Create a new piece from a non-empty collection of cell offsets.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    pub fn new(cells: impl IntoIterator<Item = Coordinate>) -> Self {
        Self::from_shape(Shape::new(cells))
    }

    /// Create a new piece with the given shape.
    pub fn from_shape(shape: Shape) -> Self {
        let rotations = shape.rotations().into();

        Self { shape, rotations }
    }

    /// The normalized shape this piece was constructed with.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The cell offsets of the piece in its original orientation.
    pub fn cells(&self) -> &[Coordinate] {
        self.shape.cells()
    }

    /// Number of cells covered by the piece.
    pub fn len(&self) -> usize {
        self.shape.len()
    }

    /// Always false, a piece has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// All distinct orientations of the piece. The first entry is the
    /// original shape.
    pub fn rotations(&self) -> &[Shape] {
        &self.rotations
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
    }
}

impl Eq for Piece {}

impl std::hash::Hash for Piece {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.shape.hash(state);
    }
}

impl From<Shape> for Piece {
    fn from(shape: Shape) -> Self {
        Self::from_shape(shape)
    }
}

impl<const W: usize, const H: usize> From<[[u8; W]; H]> for Piece {
    fn from(arr: [[u8; W]; H]) -> Self {
        Self::from_shape(Shape::from(arr))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.shape, f)
    }
}
