use crate::{
    coordinate::{Coordinate, DIAGONAL},
    grid::{Grid, Player},
    piece::{Piece, Shape},
};
use std::fmt;

/// One committed move: which piece a player put down, in which orientation,
/// and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The player who moved.
    pub player: Player,
    /// Index of the piece in the player's piece set.
    pub piece_index: usize,
    /// Index into [`Piece::rotations`] of that piece.
    pub rotation: usize,
    /// Board coordinate the shape's origin was mapped to.
    pub anchor: Coordinate,
}

/// Counters collected while searching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of turns visited.
    pub nodes: u64,
    /// Number of placements tried against the grid.
    pub attempts: u64,
    /// Number of placements the grid accepted.
    pub commits: u64,
    /// Number of placements undone after their branch failed.
    pub backtracks: u64,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} attempts, {} commits, {} backtracks",
            self.nodes, self.attempts, self.commits, self.backtracks
        )
    }
}

/// Depth-first backtracking search for a full placement of every player's
/// pieces.
///
/// Players move in the fixed cyclic `turn_order`. On each turn the current
/// player tries every remaining piece in every orientation at every candidate
/// anchor; an accepted placement is kept while the search continues with the
/// next player and undone if that branch fails. The first complete placement
/// found ends the search.
#[derive(Debug)]
pub struct Solver<'p> {
    piece_sets: &'p [Vec<Piece>],
    turn_order: &'p [Player],

    grid: Grid,
    // Indices into `piece_sets[player - 1]` that are still unplaced.
    pools: Vec<Vec<usize>>,
    placements: Vec<Placement>,
    stats: SearchStats,
}

impl<'p> Solver<'p> {
    /// Create a new `Solver` over `grid`.
    ///
    /// `piece_sets[i]` holds the pieces of player `i + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `turn_order` is empty or names a player without a piece set.
    pub fn new(grid: Grid, piece_sets: &'p [Vec<Piece>], turn_order: &'p [Player]) -> Self {
        assert!(!turn_order.is_empty(), "Turn order cannot be empty.");
        assert!(
            turn_order
                .iter()
                .all(|player| (1..=piece_sets.len()).contains(&usize::from(*player))),
            "Every player in the turn order needs a piece set."
        );

        let pools = piece_sets
            .iter()
            .map(|pieces| (0..pieces.len()).collect())
            .collect();

        Self {
            piece_sets,
            turn_order,

            grid,
            pools,
            placements: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Run the search. Returns true if every piece of every player was placed;
    /// the grid is then left in the solved state.
    ///
    /// If there is no solution the grid is restored to the state it had
    /// before the call.
    pub fn solve(&mut self) -> bool {
        log::info!(
            "Searching {}x{} board with {} players",
            self.grid.width(),
            self.grid.height(),
            self.turn_order.len()
        );

        let solved = self.search(0);

        log::info!(
            "Search finished, solved: {}, {}",
            solved,
            self.stats
        );
        solved
    }

    /// The current board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the solver and return the board.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The moves of the solution, in the order they were made. Empty unless
    /// [`Solver::solve`] succeeded.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Counters for the work done so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn search(&mut self, turn: usize) -> bool {
        self.stats.nodes += 1;

        if self.pools.iter().all(Vec::is_empty) {
            return true;
        }

        let player = self.turn_order[turn];
        let next_turn = (turn + 1) % self.turn_order.len();
        let slot = usize::from(player) - 1;

        let piece_sets = self.piece_sets;
        let pieces = &piece_sets[slot];
        let is_initial = self.pools[slot].len() == pieces.len();
        let existing = if is_initial {
            Vec::new()
        } else {
            self.grid.occupied_cells(player)
        };

        for pool_position in 0..self.pools[slot].len() {
            let piece_index = self.pools[slot][pool_position];

            for (rotation, shape) in pieces[piece_index].rotations().iter().enumerate() {
                let anchors = if is_initial {
                    Self::initial_anchors(&self.grid)
                } else {
                    Self::diagonal_anchors(shape, &existing)
                };

                for anchor in anchors {
                    self.stats.attempts += 1;

                    let placed = if is_initial {
                        self.grid.place_initial(player, shape, anchor)
                    } else {
                        self.grid.try_place(player, shape, anchor)
                    };
                    if !placed {
                        continue;
                    }

                    self.stats.commits += 1;
                    self.pools[slot].remove(pool_position);
                    self.placements.push(Placement {
                        player,
                        piece_index,
                        rotation,
                        anchor,
                    });
                    log::debug!(
                        "Player {} plays piece {} (rotation {}) at {}",
                        player,
                        piece_index,
                        rotation,
                        anchor
                    );
                    log::trace!("Board is now:\n{}", self.grid);

                    if self.search(next_turn) {
                        return true;
                    }

                    self.placements.pop();
                    self.pools[slot].insert(pool_position, piece_index);
                    self.grid.unplace(player, shape, anchor);
                    self.stats.backtracks += 1;
                    log::debug!(
                        "Undoing piece {} (rotation {}) of player {} at {}",
                        piece_index,
                        rotation,
                        player,
                        anchor
                    );
                    log::trace!("Board is now:\n{}", self.grid);
                }
            }
        }

        log::debug!(
            "No more valid moves for player {} with {} remaining pieces",
            player,
            self.pools[slot].len()
        );
        false
    }

    /// Every cell of the board, for a player's first move.
    fn initial_anchors(grid: &Grid) -> Vec<Coordinate> {
        let (width, height) = (grid.width() as i32, grid.height() as i32);

        (0..height)
            .flat_map(|y| (0..width).map(move |x| Coordinate::new(x, y)))
            .collect()
    }

    /// Every anchor at which some cell of `shape` touches some cell in
    /// `existing` diagonally, without duplicates and in sorted order.
    fn diagonal_anchors(shape: &Shape, existing: &[Coordinate]) -> Vec<Coordinate> {
        let mut anchors: Vec<_> = existing
            .iter()
            .flat_map(|square| {
                DIAGONAL.iter().flat_map(move |diagonal| {
                    shape
                        .cells()
                        .iter()
                        .map(move |cell| *square + *diagonal - *cell)
                })
            })
            .collect();

        anchors.sort();
        anchors.dedup();
        anchors
    }
}

/// Search `grid` for a placement of every player's pieces.
///
/// `piece_sets[i]` holds the pieces of player `i + 1`. Returns whether a
/// solution was found together with the final board, which holds the solution
/// if there is one.
pub fn run_search(grid: Grid, piece_sets: &[Vec<Piece>], turn_order: &[Player]) -> (bool, Grid) {
    let mut solver = Solver::new(grid, piece_sets, turn_order);
    let solved = solver.solve();

    (solved, solver.into_grid())
}
