use crate::{Board, Move};

/// Takes from the first sequence on the board.
///
/// With an odd number of sequences only the first stick of that sequence is
/// marked, with an even number the whole sequence is.
pub fn smart_move(board: &Board) -> Move {
    super::assert_not_empty(board);

    let sequences = board.sequences();
    let first = sequences[0]; // Can't fail, the board is not empty
    if sequences.len() % 2 != 0 {
        Move::single(first.row, first.left)
    } else {
        Move::new(first.row, first.left, first.right())
    }
}
