#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors of the judge that are not I/O errors.
pub enum JudgeError {
    /// A player type given on the command line is neither a known number nor a known name.
    UnknownPlayerType(String),
    /// The human player's input ended before a move was complete.
    InputClosed,
}

impl std::error::Error for JudgeError {}

impl std::fmt::Display for JudgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JudgeError::UnknownPlayerType(player_type) => write!(
                f,
                "Unknown player type '{}', expected 1 (random), 2 (heuristic), 3 (smart) or 4 (human)",
                player_type
            ),
            JudgeError::InputClosed => write!(f, "The input ended while waiting for a move"),
        }
    }
}
