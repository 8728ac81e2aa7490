/// The error type for [`Board::row_length()`](crate::Board::row_length).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    pub row: usize,
    pub row_count: usize,
}

impl std::error::Error for OutOfRange {}

impl std::fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Row {} does not exist, the board has rows 1 to {}",
            self.row, self.row_count
        )
    }
}

/// The error type for [`Board::apply_move()`](crate::Board::apply_move).
///
/// A rejected move leaves the board untouched, so the caller can simply ask
/// for another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    RowOutOfRange { row: usize, row_count: usize },
    EmptyRange { left: usize, right: usize },
    SticksOutOfRange { left: usize, right: usize, row_length: usize },
    StickAlreadyMarked { row: usize, stick: usize },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::RowOutOfRange { row, row_count } => {
                write!(f, "Row {} does not exist, the board has rows 1 to {}", row, row_count)
            }
            IllegalMove::EmptyRange { left, right } => write!(
                f,
                "The leftmost stick {} is to the right of the rightmost stick {}",
                left, right
            ),
            IllegalMove::SticksOutOfRange {
                left,
                right,
                row_length,
            } => write!(
                f,
                "Sticks {} to {} are not all within the row, which has sticks 1 to {}",
                left, right, row_length
            ),
            IllegalMove::StickAlreadyMarked { row, stick } => {
                write!(f, "Stick {} in row {} is already marked", stick, row)
            }
        }
    }
}

/// The error type for [`Board::with_row_lengths()`](crate::Board::with_row_lengths).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidBoard {
    NoRows,
    TooManyRows { row_count: usize },
    EmptyRow { row: usize },
    RowTooLong { row: usize, length: usize },
}

impl std::error::Error for InvalidBoard {}

impl std::fmt::Display for InvalidBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidBoard::NoRows => write!(f, "A board needs at least one row"),
            InvalidBoard::TooManyRows { row_count } => write!(
                f,
                "A board has at most {} rows, got {}",
                crate::MAX_ROWS,
                row_count
            ),
            InvalidBoard::EmptyRow { row } => write!(f, "Row {} has no sticks", row),
            InvalidBoard::RowTooLong { row, length } => write!(
                f,
                "Row {} has {} sticks, but a row has at most {}",
                row,
                length,
                crate::MAX_ROW_LENGTH
            ),
        }
    }
}

/// The error type for parsing a [`Strategy`](crate::Strategy) from its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl std::error::Error for UnknownStrategy {}

impl std::fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown strategy '{}'", self.0)
    }
}
