use quickcheck::{Arbitrary, Gen};

use crate::board::{Board, Grid};
use crate::types::{Piece, Position};

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        // Weighted towards occupied cells so rays are long enough to matter.
        *g.choose(&[Piece::Empty, Piece::Empty, Piece::Black, Piece::Black, Piece::White, Piece::White])
            .unwrap()
    }
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut grid = Grid::default();
        for pos in Grid::positions() {
            grid.set(pos, Piece::arbitrary(g));
        }
        let next = *g.choose(&[Piece::Black, Piece::White]).unwrap();
        Board::new(grid, next).unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Clear one occupied cell at a time.
        let board = *self;
        Box::new(
            Grid::positions()
                .filter(move |&pos| board.get(pos) != Some(Piece::Empty))
                .map(move |pos: Position| {
                    let mut grid = *board.grid();
                    grid.set(pos, Piece::Empty);
                    Board::new(grid, board.next()).unwrap()
                }),
        )
    }
}
