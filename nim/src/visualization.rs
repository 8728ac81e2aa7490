use crate::Board;

const UNMARKED: char = '|';
const MARKED: char = ' ';

/// One line per row, e.g. `3: | |   | |` for a row of five sticks where the
/// third one is marked.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 1..=self.row_count() {
            let length = self.row_length(row).map_err(|_| std::fmt::Error)?;
            let mut line = format!("{}:", row);
            for stick in 1..=length {
                line.push(' ');
                line.push(if self.is_unmarked(row, stick) {
                    UNMARKED
                } else {
                    MARKED
                });
            }
            if row > 1 {
                writeln!(f)?;
            }
            write!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
