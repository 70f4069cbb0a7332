//! Errors reported while validating a puzzle configuration, before any
//! search step runs.

use thiserror::Error;

/// A puzzle configuration that can never be searched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The pieces of all players together cover more cells than the board has.
    #[error("Player pieces take {required} spots, but board only has {available} spots")]
    Capacity {
        /// Total number of cells covered by every player's pieces.
        required: usize,
        /// Number of cells on the board.
        available: usize,
    },
    /// The board has zero width or zero height.
    #[error("Board dimensions must be positive, got {width}x{height}")]
    BoardTooSmall {
        /// Requested board width.
        width: usize,
        /// Requested board height.
        height: usize,
    },
    /// No players were configured.
    #[error("At least one player is required")]
    NoPlayers,
    /// The piece set handed to each player is empty.
    #[error("Piece set cannot be empty")]
    EmptyPieceSet,
    /// The turn order is not a permutation of `1..=player_count`.
    #[error("Turn order {turn_order:?} is not a permutation of players 1..={player_count}")]
    InvalidTurnOrder {
        /// The rejected turn order.
        turn_order: Vec<u8>,
        /// Number of configured players.
        player_count: u8,
    },
}
