//! Configuration of a filling puzzle: board size, the piece set every player
//! receives, and the order in which players take turns.

use crate::{
    error::ConfigError,
    grid::{Grid, Player},
    piece::Piece,
    solver::{Placement, Solver},
};

/// Side length of the board used by [`Puzzle::standard`].
pub const STANDARD_BOARD_SIZE: usize = 6;

/// Number of players in [`Puzzle::standard`].
pub const STANDARD_PLAYER_COUNT: u8 = 4;

/// The piece set of [`Puzzle::standard`]: a 3-cell L, a 3-cell line, a 2-cell
/// line and a single cell.
pub fn standard_pieces() -> Vec<Piece> {
    vec![
        Piece::from([[1, 1], [1, 0]]),
        Piece::from([[1], [1], [1]]),
        Piece::from([[1], [1]]),
        Piece::from([[1]]),
    ]
}

/// Check that `player_count` copies of `pieces` fit on the board at all.
pub fn validate_capacity(
    grid: &Grid,
    pieces: &[Piece],
    player_count: usize,
) -> Result<(), ConfigError> {
    let required = pieces.iter().map(Piece::len).sum::<usize>() * player_count;
    let available = grid.area();

    if required > available {
        return Err(ConfigError::Capacity {
            required,
            available,
        });
    }

    Ok(())
}

/// A validated puzzle configuration.
///
/// Every player receives their own copy of the same piece set.
#[derive(Debug, Clone)]
pub struct Puzzle {
    width: usize,
    height: usize,
    piece_sets: Vec<Vec<Piece>>,
    turn_order: Vec<Player>,
}

impl Puzzle {
    /// Create a puzzle where players `1..=player_count` move in ascending
    /// order.
    pub fn new(
        width: usize,
        height: usize,
        pieces: Vec<Piece>,
        player_count: u8,
    ) -> Result<Self, ConfigError> {
        Self::with_turn_order(width, height, pieces, (1..=player_count).collect())
    }

    /// Create a puzzle with a custom turn order. The number of players is the
    /// length of `turn_order`, which must be a permutation of
    /// `1..=turn_order.len()`.
    pub fn with_turn_order(
        width: usize,
        height: usize,
        pieces: Vec<Piece>,
        turn_order: Vec<Player>,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::BoardTooSmall { width, height });
        }
        if turn_order.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if pieces.is_empty() {
            return Err(ConfigError::EmptyPieceSet);
        }

        let player_count = match u8::try_from(turn_order.len()) {
            Ok(count) => count,
            Err(_) => {
                return Err(ConfigError::InvalidTurnOrder {
                    turn_order,
                    player_count: u8::MAX,
                })
            }
        };
        let mut sorted = turn_order.clone();
        sorted.sort_unstable();
        if !sorted.iter().copied().eq(1..=player_count) {
            return Err(ConfigError::InvalidTurnOrder {
                turn_order,
                player_count,
            });
        }

        validate_capacity(&Grid::new(width, height), &pieces, turn_order.len())?;

        log::debug!(
            "Configured {}x{} board, {} players, {} pieces each",
            width,
            height,
            player_count,
            pieces.len()
        );

        Ok(Self {
            width,
            height,
            piece_sets: vec![pieces; turn_order.len()],
            turn_order,
        })
    }

    /// The 6×6 board with four players, each holding [`standard_pieces`].
    /// The pieces cover the board exactly.
    pub fn standard() -> Self {
        Self {
            width: STANDARD_BOARD_SIZE,
            height: STANDARD_BOARD_SIZE,
            piece_sets: vec![standard_pieces(); usize::from(STANDARD_PLAYER_COUNT)],
            turn_order: (1..=STANDARD_PLAYER_COUNT).collect(),
        }
    }

    /// Board width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.turn_order.len()
    }

    /// The order in which players move.
    pub fn turn_order(&self) -> &[Player] {
        &self.turn_order
    }

    /// The piece set each player starts with, indexed by `player - 1`.
    pub fn piece_sets(&self) -> &[Vec<Piece>] {
        &self.piece_sets
    }

    /// Total number of cells covered once every piece is placed.
    pub fn total_cells(&self) -> usize {
        self.piece_sets.iter().flatten().map(Piece::len).sum()
    }

    /// An empty board of the configured size.
    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    /// Return a solver for this puzzle, starting from an empty board.
    pub fn solver(&self) -> Solver<'_> {
        Solver::new(self.grid(), &self.piece_sets, &self.turn_order)
    }

    /// Apply `placements` in order to an empty board, checking the placement
    /// rules for each of them.
    ///
    /// A player's first placement must satisfy the corner rule and every
    /// later one the edge and diagonal rules. Returns `None` if any placement
    /// is rejected or refers to a piece that does not exist or was already
    /// used.
    pub fn replay(&self, placements: &[Placement]) -> Option<Grid> {
        let mut grid = self.grid();
        let mut used: Vec<Vec<bool>> = self
            .piece_sets
            .iter()
            .map(|pieces| vec![false; pieces.len()])
            .collect();

        for placement in placements {
            let slot = usize::from(placement.player).checked_sub(1)?;
            let pieces = self.piece_sets.get(slot)?;
            let shape = pieces
                .get(placement.piece_index)?
                .rotations()
                .get(placement.rotation)?;

            let used = used.get_mut(slot)?;
            if used[placement.piece_index] {
                return None;
            }
            let is_initial = used.iter().all(|used| !used);

            let placed = if is_initial {
                grid.place_initial(placement.player, shape, placement.anchor)
            } else {
                grid.try_place(placement.player, shape, placement.anchor)
            };
            if !placed {
                return None;
            }
            used[placement.piece_index] = true;
        }

        Some(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    #[test]
    fn standard_puzzle_fills_board_exactly() {
        let puzzle = Puzzle::standard();
        assert_eq!(puzzle.player_count(), 4);
        assert_eq!(puzzle.turn_order(), &[1, 2, 3, 4]);
        assert_eq!(puzzle.total_cells(), 36);
        assert_eq!(puzzle.grid().area(), 36);
        assert_eq!(
            validate_capacity(&puzzle.grid(), &standard_pieces(), 4),
            Ok(())
        );
    }

    #[test]
    fn capacity_exceeded() {
        let grid = Grid::new(5, 5);
        assert_eq!(
            validate_capacity(&grid, &standard_pieces(), 4),
            Err(ConfigError::Capacity {
                required: 36,
                available: 25
            })
        );
        assert!(Puzzle::new(5, 5, standard_pieces(), 4).is_err());
        assert!(Puzzle::new(5, 5, standard_pieces(), 2).is_ok());
    }

    #[test]
    fn capacity_error_message() {
        let err = validate_capacity(&Grid::new(2, 2), &standard_pieces(), 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Player pieces take 9 spots, but board only has 4 spots"
        );
    }

    #[test]
    fn invalid_configurations() {
        assert_eq!(
            Puzzle::new(0, 6, standard_pieces(), 4).unwrap_err(),
            ConfigError::BoardTooSmall {
                width: 0,
                height: 6
            }
        );
        assert_eq!(
            Puzzle::new(6, 6, standard_pieces(), 0).unwrap_err(),
            ConfigError::NoPlayers
        );
        assert_eq!(
            Puzzle::new(6, 6, vec![], 4).unwrap_err(),
            ConfigError::EmptyPieceSet
        );
        assert_eq!(
            Puzzle::with_turn_order(6, 6, standard_pieces(), vec![1, 3]).unwrap_err(),
            ConfigError::InvalidTurnOrder {
                turn_order: vec![1, 3],
                player_count: 2
            }
        );
        assert!(Puzzle::with_turn_order(6, 6, standard_pieces(), vec![2, 2]).is_err());
        assert!(Puzzle::with_turn_order(6, 6, standard_pieces(), vec![3, 1, 2]).is_ok());
    }

    #[test]
    fn replay_checks_rules() {
        let puzzle = Puzzle::new(4, 4, vec![Piece::from([[1]]), Piece::from([[1]])], 1)
            .expect("valid configuration");

        let first = Placement {
            player: 1,
            piece_index: 0,
            rotation: 0,
            anchor: Coordinate::new(0, 0),
        };
        let diagonal = Placement {
            piece_index: 1,
            anchor: Coordinate::new(1, 1),
            ..first
        };
        let edge = Placement {
            piece_index: 1,
            anchor: Coordinate::new(1, 0),
            ..first
        };

        let grid = puzzle.replay(&[first, diagonal]).expect("valid replay");
        assert_eq!(grid.filled_count(), 2);

        assert!(puzzle.replay(&[first, edge]).is_none());
        assert!(puzzle.replay(&[first, first]).is_none());
        assert!(puzzle.replay(&[diagonal]).is_none());
        assert!(puzzle
            .replay(&[Placement {
                player: 2,
                ..first
            }])
            .is_none());
    }
}
