mod common;

use blokus_fill::{Piece, Puzzle};
use common::{assert_valid_solution, domino, l_tromino, monomino, square_tetromino, straight_tromino};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

struct Case {
    width: usize,
    height: usize,
    pieces: Vec<Piece>,
    player_count: u8,
    solvable: bool,
}

fn case(width: usize, height: usize, pieces: Vec<Piece>, player_count: u8, solvable: bool) -> Case {
    Case {
        width,
        height,
        pieces,
        player_count,
        solvable,
    }
}

fn cases() -> Vec<Case> {
    vec![
        case(2, 2, vec![monomino()], 1, true),
        case(2, 2, vec![domino(), monomino()], 1, false),
        case(3, 3, vec![monomino(); 3], 1, true),
        case(3, 3, vec![l_tromino(), monomino()], 1, true),
        case(3, 3, vec![domino(), monomino()], 2, true),
        case(3, 3, vec![square_tetromino()], 2, false),
        case(3, 3, vec![straight_tromino(), monomino()], 2, false),
        case(3, 3, vec![domino()], 4, true),
        case(4, 4, vec![l_tromino(), monomino()], 2, true),
        case(4, 4, vec![domino(), monomino()], 4, true),
        case(4, 4, vec![l_tromino(), monomino()], 4, true),
        case(4, 4, vec![straight_tromino()], 4, true),
        case(4, 4, vec![square_tetromino()], 4, true),
        case(4, 4, vec![monomino(); 4], 4, true),
        case(4, 4, vec![l_tromino(), l_tromino(), monomino()], 1, true),
        case(5, 5, vec![l_tromino(), domino()], 4, true),
        case(5, 5, vec![domino(), monomino(), monomino()], 4, true),
        case(5, 5, vec![l_tromino(), straight_tromino(), domino(), monomino()], 2, true),
    ]
}

#[test]
fn solve_small_puzzles() {
    let _ = env_logger::builder().is_test(true).try_init();

    cases().into_par_iter().for_each(|case| {
        let puzzle = Puzzle::new(case.width, case.height, case.pieces, case.player_count)
            .expect("valid configuration");
        let mut solver = puzzle.solver();
        let solved = solver.solve();

        log::debug!(
            "{}x{} with {} players: solved {}, {}",
            case.width,
            case.height,
            case.player_count,
            solved,
            solver.stats()
        );

        assert_eq!(
            solved, case.solvable,
            "{}x{} with {} players",
            case.width, case.height, case.player_count
        );
        if solved {
            assert_valid_solution(&puzzle, solver.placements(), solver.grid());
        } else {
            assert_eq!(solver.grid(), &puzzle.grid());
        }
    });
}
