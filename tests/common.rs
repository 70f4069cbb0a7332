use blokus_fill::{Grid, Piece, Placement, Puzzle};

/// A single cell.
#[allow(dead_code)]
pub fn monomino() -> Piece {
    Piece::from([[1]])
}

/// Two cells in a line.
#[allow(dead_code)]
pub fn domino() -> Piece {
    Piece::from([[1, 1]])
}

/// Three cells in a line.
#[allow(dead_code)]
pub fn straight_tromino() -> Piece {
    Piece::from([[1, 1, 1]])
}

/// Three cells bent into an L.
#[allow(dead_code)]
pub fn l_tromino() -> Piece {
    Piece::from([[1, 1], [1, 0]])
}

/// A 2x2 square.
#[allow(dead_code)]
pub fn square_tetromino() -> Piece {
    Piece::from([[1, 1], [1, 1]])
}

/// Check that `placements` form a complete, rule-abiding solution of
/// `puzzle` that ends in `grid`.
///
/// # Panics
///  - If replaying the placements from an empty board breaks a placement rule
///  - If the replayed board differs from `grid`
///  - If any player did not place every piece exactly once
#[allow(dead_code)]
pub fn assert_valid_solution(puzzle: &Puzzle, placements: &[Placement], grid: &Grid) {
    log::debug!("Checking solution:\n{}", grid);

    let replayed = puzzle
        .replay(placements)
        .expect("Solution breaks a placement rule.");
    assert_eq!(&replayed, grid, "Replayed board differs from the solution.");
    assert_eq!(grid.filled_count(), puzzle.total_cells());

    for (slot, pieces) in puzzle.piece_sets().iter().enumerate() {
        let player = u8::try_from(slot + 1).unwrap();
        let mut used: Vec<_> = placements
            .iter()
            .filter(|placement| placement.player == player)
            .map(|placement| placement.piece_index)
            .collect();
        used.sort();
        assert_eq!(used, (0..pieces.len()).collect::<Vec<_>>());

        let expected_cells: usize = pieces.iter().map(Piece::len).sum();
        assert_eq!(grid.occupied_cells(player).len(), expected_cells);
    }
}
