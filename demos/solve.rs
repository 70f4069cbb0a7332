//! Search for a complete placement of every player's pieces.
//! Usage:
//!
//! ```bash
//! RUST_LOG=blokus_fill=info cargo run --release --example solve -- --width 6 --height 6 --players 4
//! ```

use blokus_fill::{
    puzzle::{standard_pieces, STANDARD_BOARD_SIZE, STANDARD_PLAYER_COUNT},
    Puzzle,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "solve")]
struct Args {
    /// Board width.
    #[arg(long, default_value_t = STANDARD_BOARD_SIZE)]
    width: usize,

    /// Board height.
    #[arg(long, default_value_t = STANDARD_BOARD_SIZE)]
    height: usize,

    /// Number of players, each holding the L tromino, straight tromino,
    /// domino and monomino.
    #[arg(long, default_value_t = STANDARD_PLAYER_COUNT)]
    players: u8,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let puzzle = match Puzzle::new(args.width, args.height, standard_pieces(), args.players) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    for piece in &puzzle.piece_sets()[0] {
        log::info!(
            "Piece with {} rotations:\n{}",
            piece.rotations().len(),
            piece
        );
    }

    let mut solver = puzzle.solver();
    let solved = solver.solve();

    println!("Can be solved? {}", solved);
    println!("{}", solver.stats());
    if solved {
        println!("Final board:");
        print!("{}", solver.grid());
    }
}
