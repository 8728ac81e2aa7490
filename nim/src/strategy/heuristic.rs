use crate::{Board, Move, Sequence};

/// Number of binary digits used to describe a sequence length.
const BINARY_LENGTH: usize = 3;

/// Binary digits of a length, most significant first.
type Digits = [u32; BINARY_LENGTH];

fn digits(len: usize) -> Digits {
    let mut digits = [0; BINARY_LENGTH];
    for (idx, digit) in digits.iter_mut().enumerate() {
        *digit = ((len >> (BINARY_LENGTH - idx - 1)) & 1) as u32;
    }
    digits
}

/// Value of the digit at `idx`.
fn place_value(idx: usize) -> i32 {
    1 << (BINARY_LENGTH - idx - 1)
}

/// What the heuristic needs to know about the board.
struct Summary {
    /// Per row, the digit-wise sum (not XOR) of the lengths of its sequences.
    row_digits: Vec<Digits>,
    /// Digit-wise parity over all rows.
    parity: Digits,
    /// Number of sequences longer than one stick.
    multi_count: usize,
    /// The last sequence longer than one stick.
    last_multi: Option<Sequence>,
    /// Number of sequences of exactly one stick.
    single_count: usize,
    /// The last sequence of any length.
    last_sequence: Sequence,
}

impl Summary {
    fn new(board: &Board) -> Self {
        let sequences = board.sequences();
        let mut row_digits = vec![[0; BINARY_LENGTH]; board.row_count()];
        let mut multi_count = 0;
        let mut single_count = 0;
        let mut last_multi = None;
        for seq in &sequences {
            for (sum, digit) in row_digits[seq.row - 1].iter_mut().zip(digits(seq.len)) {
                *sum += digit;
            }
            if seq.len > 1 {
                multi_count += 1;
                last_multi = Some(*seq);
            } else {
                single_count += 1;
            }
        }

        let mut parity = [0; BINARY_LENGTH];
        for row in &row_digits {
            for (p, d) in parity.iter_mut().zip(row) {
                *p = (*p + d) % 2;
            }
        }

        Self {
            row_digits,
            parity,
            multi_count,
            last_multi,
            single_count,
            // Can't fail, the board is not empty
            last_sequence: *sequences.last().unwrap(),
        }
    }
}

/// Tries to leave the opponent a board where every binary digit sums to an
/// even number, and plays out the end game once at most one sequence longer
/// than a single stick is left.
pub fn heuristic_move(board: &Board) -> Move {
    super::assert_not_empty(board);

    let summary = Summary::new(board);
    let last_one = Move::single(summary.last_sequence.row, summary.last_sequence.right());

    let Some(last_multi) = summary.last_multi else {
        // Only single sticks are left
        return last_one;
    };

    if summary.multi_count == 1 {
        let Sequence { row, left, len } = last_multi;
        let right = if summary.single_count == 0 {
            left + len - 2
        } else {
            left + (len - 1) - (1 - summary.single_count % 2)
        };
        return Move::new(row, left, right);
    }

    // The least significant digit is handled below
    for idx in 0..BINARY_LENGTH - 1 {
        if summary.parity[idx] == 0 {
            continue;
        }

        // Can't fail, a digit with odd parity is set in at least one row
        let row_idx = (0..summary.row_digits.len())
            .find(|&k| summary.row_digits[k][idx] > 0)
            .unwrap();
        let erase_size = place_value(idx);
        let mut final_sum = 0;
        for idx2 in idx + 1..BINARY_LENGTH {
            if summary.parity[idx2] > 0 {
                if summary.row_digits[row_idx][idx2] == 0 {
                    final_sum += place_value(idx2);
                } else {
                    final_sum -= place_value(idx2);
                }
            }
        }
        let num_remove = (erase_size - final_sum) as usize;

        return match find_run(board, row_idx + 1, num_remove) {
            Some(left) => Move::new(row_idx + 1, left, left + num_remove - 1),
            // The sticks of that row are too fragmented
            None => Move::single(last_multi.row, last_multi.left),
        };
    }

    if summary.parity[BINARY_LENGTH - 1] > 0 {
        return last_one;
    }

    // Every digit is balanced already
    Move::single(last_multi.row, last_multi.left)
}

/// The left end of the first run of `num_remove` unmarked sticks in `row`.
///
/// Longer sequences also contain such a run, starting at their left end.
fn find_run(board: &Board, row: usize, num_remove: usize) -> Option<usize> {
    let row_length = board.row_length(row).ok()?;
    let mut run = 0;
    let mut stick = 0;
    while run < num_remove && stick < row_length {
        stick += 1;
        if board.is_unmarked(row, stick) {
            run += 1;
        } else {
            run = 0;
        }
    }
    (run == num_remove).then(|| stick + 1 - run)
}
