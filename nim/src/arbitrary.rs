use quickcheck::{Arbitrary, Gen};

use crate::{Board, Move, MAX_ROWS, MAX_ROW_LENGTH};

/// A board that still has at least one unmarked stick.
#[derive(Clone, Debug)]
pub struct NonEmptyBoard(pub Board);

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        // Half of the boards are the standard one, the rest have a random shape
        let row_lengths: Vec<usize> = if bool::arbitrary(g) {
            crate::STANDARD_ROW_LENGTHS.to_vec()
        } else {
            let row_count = 1 + usize::arbitrary(g) % MAX_ROWS;
            (0..row_count)
                .map(|_| 1 + usize::arbitrary(g) % MAX_ROW_LENGTH)
                .collect()
        };
        let mut board = Board::with_row_lengths(&row_lengths).unwrap();

        // Marking density varies from board to board
        let density = u8::arbitrary(g) % 5;
        for (idx, &length) in row_lengths.iter().enumerate() {
            for stick in 1..=length {
                if u8::arbitrary(g) % 5 < density {
                    board.apply_move(&Move::single(idx + 1, stick)).unwrap();
                }
            }
        }
        board
    }
}

impl Arbitrary for NonEmptyBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        loop {
            let board = Board::arbitrary(g);
            if !board.is_empty() {
                return NonEmptyBoard(board);
            }
        }
    }
}

impl Arbitrary for Move {
    fn arbitrary(g: &mut Gen) -> Self {
        // Mostly plausible moves, with the occasional one off the board
        let row = usize::arbitrary(g) % (MAX_ROWS + 2);
        let left = usize::arbitrary(g) % (MAX_ROW_LENGTH + 2);
        let right = if bool::arbitrary(g) {
            left + usize::arbitrary(g) % 3
        } else {
            usize::arbitrary(g) % (MAX_ROW_LENGTH + 2)
        };
        Move::new(row, left, right)
    }
}
