#![no_main]

use blokus_fill::{Coordinate, Grid, Shape};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct Move {
    player: u8,
    shape: Shape,
    anchor: Coordinate,
}

#[derive(Debug)]
struct PlacementInput {
    moves: Vec<Move>,
}

impl<'a> arbitrary::Arbitrary<'a> for PlacementInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let count = u.int_in_range(1..=12)?;
        let mut moves = Vec::with_capacity(count);

        for _ in 0..count {
            let player = u.int_in_range(1..=4)?;
            // Each bit of the mask fills one cell of a 3x3 box.
            let mask = u.int_in_range(1..=0x1ffu16)?;
            let cells = (0..9)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(|bit| Coordinate::new(bit % 3, bit / 3));
            let anchor = Coordinate::new(u.int_in_range(-2..=7)?, u.int_in_range(-2..=7)?);

            moves.push(Move {
                player,
                shape: Shape::new(cells),
                anchor,
            });
        }

        Ok(PlacementInput { moves })
    }
}

fuzz_target!(|data: PlacementInput| {
    let mut grid = Grid::new(6, 6);
    let mut history = Vec::new();
    let mut placed_before = [false; 5];

    for mv in &data.moves {
        let before = grid.clone();
        let slot = usize::from(mv.player);
        let placed = if placed_before[slot] {
            grid.try_place(mv.player, &mv.shape, mv.anchor)
        } else {
            grid.place_initial(mv.player, &mv.shape, mv.anchor)
        };

        if placed {
            placed_before[slot] = true;
            history.push((before, mv));
        } else {
            assert_eq!(grid, before, "rejected placement changed the board");
        }
    }

    while let Some((before, mv)) = history.pop() {
        grid.unplace(mv.player, &mv.shape, mv.anchor);
        assert_eq!(grid, before, "unplace did not restore the board");
    }
    assert_eq!(grid.filled_count(), 0);
});
