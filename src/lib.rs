#![deny(missing_docs)]

//! Decide whether a set of [polyomino](https://en.wikipedia.org/wiki/Polyomino)
//! pieces, handed to several players, can all be placed on a rectangular board
//! under [Blokus](https://en.wikipedia.org/wiki/Blokus) placement rules.
//!
//! Each player's first piece must cover a corner of the board. Every later
//! piece must touch one of the player's own pieces at a corner and must not
//! share an edge with any of them. The [`Solver`] runs an exhaustive
//! backtracking search over all placements and stops at the first complete
//! one.
//!
//! ```
//! use blokus_fill::{Piece, Puzzle};
//!
//! let puzzle = Puzzle::new(3, 3, vec![Piece::from([[1, 1]]), Piece::from([[1]])], 1).unwrap();
//! let mut solver = puzzle.solver();
//!
//! assert!(solver.solve());
//! assert_eq!(solver.grid().filled_count(), 3);
//! ```

pub mod coordinate;
pub(crate) mod error;
pub mod grid;
pub mod piece;
pub mod puzzle;
pub(crate) mod solver;

pub use coordinate::Coordinate;
pub use error::ConfigError;
pub use grid::{Grid, Player};
pub use piece::{Piece, Shape};
pub use puzzle::{validate_capacity, Puzzle};
pub use solver::{run_search, Placement, SearchStats, Solver};
