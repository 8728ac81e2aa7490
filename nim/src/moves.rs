/// Marks the sticks `left..=right` of a row.
///
/// Rows and sticks are counted from 1. A `Move` is not validated when it is
/// created, since it may come straight from user input. Validation happens in
/// [`Board::apply_move()`](crate::Board::apply_move).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    row: usize,
    left: usize,
    right: usize,
}

impl Move {
    pub fn new(row: usize, left: usize, right: usize) -> Self {
        Self { row, left, right }
    }

    /// A move that marks exactly one stick.
    pub fn single(row: usize, stick: usize) -> Self {
        Self::new(row, stick, stick)
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    /// Number of sticks covered by the move, or 0 if `left > right`.
    pub fn len(&self) -> usize {
        (self.right + 1).saturating_sub(self.left)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}-{}", self.row, self.left, self.right)
    }
}
