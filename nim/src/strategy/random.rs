use rand::Rng;

use crate::{Board, Move};

/// Marks a random run of sticks.
///
/// The left end is a uniformly chosen unmarked stick, the right end is drawn
/// uniformly from the rest of the row and then pulled back to the first
/// marked stick in between, so the move is always legal.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Move {
    super::assert_not_empty(board);

    let (row, left, row_length) = loop {
        let row = rng.gen_range(1..=board.row_count());
        let row_length = board.row_length(row).unwrap(); // Can't fail, the row was drawn from the board
        let left = rng.gen_range(1..=row_length);
        if board.is_unmarked(row, left) {
            break (row, left, row_length);
        }
    };

    let mut right = rng.gen_range(left..=row_length);
    if let Some(marked) = (left + 1..=right).find(|&stick| !board.is_unmarked(row, stick)) {
        right = marked - 1;
    }
    Move::new(row, left, right)
}
