use crate::{IllegalMove, InvalidBoard, Move, OutOfRange};

/// The maximum number of rows on a board.
pub const MAX_ROWS: usize = 4;

/// The maximum number of sticks in a row.
///
/// Sequences longer than this cannot be represented by the heuristic
/// strategy's three binary digits.
pub const MAX_ROW_LENGTH: usize = 7;

/// The row lengths of the board every round starts with.
pub const STANDARD_ROW_LENGTHS: [usize; MAX_ROWS] = [1, 3, 5, 7];

/// The rows of sticks and which of them have been marked already.
///
/// Rows and sticks are counted from 1. The shape of the board never changes
/// after construction, only the marks do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
}

/// A single row, stored as a bit set of its marked sticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Row {
    length: u8,
    // Bit `i` is set iff stick `i + 1` is marked. Bits at or above `length` are never set.
    marked: u8,
}

/// A maximal run of unmarked sticks within one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sequence {
    pub row: usize,
    pub left: usize,
    pub len: usize,
}

impl Sequence {
    /// The last stick of the sequence.
    pub fn right(&self) -> usize {
        self.left + self.len - 1
    }
}

impl Row {
    fn new(length: usize) -> Self {
        debug_assert!(length <= MAX_ROW_LENGTH);
        Self {
            length: length as u8,
            marked: 0,
        }
    }

    fn length(self) -> usize {
        self.length as usize
    }

    fn unmarked_count(self) -> usize {
        (self.length as u32 - self.marked.count_ones()) as usize
    }

    /// Callers must ensure `1 <= stick <= length`.
    fn is_marked(self, stick: usize) -> bool {
        self.marked & (1u8 << (stick - 1)) != 0
    }

    /// Callers must ensure `1 <= left <= right <= length`.
    #[must_use]
    fn mark(self, left: usize, right: usize) -> Self {
        let range = ((1u16 << right) - (1u16 << (left - 1))) as u8;
        Self {
            length: self.length,
            marked: self.marked | range,
        }
    }
}

impl Board {
    /// Creates the standard board with rows of 1, 3, 5 and 7 sticks.
    pub fn new() -> Self {
        Self {
            rows: STANDARD_ROW_LENGTHS.iter().map(|&len| Row::new(len)).collect(),
        }
    }

    /// Creates a board with the given row lengths and no marked sticks.
    ///
    /// There must be between 1 and [`MAX_ROWS`] rows, each with between 1
    /// and [`MAX_ROW_LENGTH`] sticks.
    pub fn with_row_lengths(row_lengths: &[usize]) -> Result<Self, InvalidBoard> {
        if row_lengths.is_empty() {
            return Err(InvalidBoard::NoRows);
        }
        if row_lengths.len() > MAX_ROWS {
            return Err(InvalidBoard::TooManyRows {
                row_count: row_lengths.len(),
            });
        }
        for (idx, &length) in row_lengths.iter().enumerate() {
            if length == 0 {
                return Err(InvalidBoard::EmptyRow { row: idx + 1 });
            }
            if length > MAX_ROW_LENGTH {
                return Err(InvalidBoard::RowTooLong {
                    row: idx + 1,
                    length,
                });
            }
        }
        Ok(Self {
            rows: row_lengths.iter().map(|&len| Row::new(len)).collect(),
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The number of sticks in `row`, marked or not.
    pub fn row_length(&self, row: usize) -> Result<usize, OutOfRange> {
        self.get_row(row).map(|r| r.length()).ok_or(OutOfRange {
            row,
            row_count: self.row_count(),
        })
    }

    /// Whether the stick exists and has not been marked yet.
    ///
    /// Positions outside the board, including stick 0 and the stick right
    /// after the end of a row, count as marked. Scanning code relies on this
    /// to find the ends of a sequence without separate bounds checks.
    pub fn is_unmarked(&self, row: usize, stick: usize) -> bool {
        match self.get_row(row) {
            Some(r) if stick >= 1 && stick <= r.length() => !r.is_marked(stick),
            _ => false,
        }
    }

    /// The total number of unmarked sticks. The round is over when this is 0.
    pub fn unmarked_count(&self) -> usize {
        self.rows.iter().map(|r| r.unmarked_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.unmarked_count() == 0
    }

    /// Marks all sticks of the move, or nothing at all if the move is illegal.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), IllegalMove> {
        let (row, left, right) = (mv.row(), mv.left(), mv.right());
        let row_count = self.row_count();
        let Some(&target) = self.get_row(row) else {
            return Err(IllegalMove::RowOutOfRange { row, row_count });
        };
        if left > right {
            return Err(IllegalMove::EmptyRange { left, right });
        }
        if left == 0 || right > target.length() {
            return Err(IllegalMove::SticksOutOfRange {
                left,
                right,
                row_length: target.length(),
            });
        }
        if let Some(stick) = (left..=right).find(|&stick| target.is_marked(stick)) {
            return Err(IllegalMove::StickAlreadyMarked { row, stick });
        }
        self.rows[row - 1] = target.mark(left, right);
        Ok(())
    }

    /// All sequences on the board, row by row and from left to right.
    pub fn sequences(&self) -> Vec<Sequence> {
        let mut sequences = Vec::new();
        for row in 1..=self.row_count() {
            let length = self.rows[row - 1].length();
            for stick in 1..=length {
                // A sequence starts wherever the stick to its left is marked or missing
                if self.is_unmarked(row, stick) && !self.is_unmarked(row, stick - 1) {
                    let mut right = stick;
                    while self.is_unmarked(row, right + 1) {
                        right += 1;
                    }
                    sequences.push(Sequence {
                        row,
                        left: stick,
                        len: right - stick + 1,
                    });
                }
            }
        }
        sequences
    }

    fn get_row(&self, row: usize) -> Option<&Row> {
        row.checked_sub(1).and_then(|idx| self.rows.get(idx))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
