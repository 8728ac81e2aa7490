use std::str::FromStr;

use nim::{Board, Move, Strategy};
use rand::rngs::StdRng;

use crate::error::JudgeError;
use crate::input::MoveInput;

/// Who decides the moves of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Computer(Strategy),
    Human,
}

impl PlayerKind {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerKind::Computer(strategy) => strategy.name(),
            PlayerKind::Human => "Human",
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, PlayerKind::Human)
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the numbers 1 (random), 2 (heuristic), 3 (smart) and 4 (human),
/// or the names, in any case.
impl FromStr for PlayerKind {
    type Err = JudgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(PlayerKind::Computer(Strategy::Random)),
            "2" => Ok(PlayerKind::Computer(Strategy::Heuristic)),
            "3" => Ok(PlayerKind::Computer(Strategy::Smart)),
            "4" => Ok(PlayerKind::Human),
            name if name.eq_ignore_ascii_case("human") => Ok(PlayerKind::Human),
            name => name
                .parse::<Strategy>()
                .map(PlayerKind::Computer)
                .map_err(|_| JudgeError::UnknownPlayerType(String::from(s))),
        }
    }
}

pub struct Player {
    /// 1 or 2
    pub id: usize,
    pub kind: PlayerKind,
}

impl Player {
    pub fn new(id: usize, kind: PlayerKind) -> Self {
        Self { id, kind }
    }

    /// Asks the player for their next move.
    ///
    /// Only human players use `input`, so it's the only source of errors.
    pub fn produce_move(
        &self,
        board: &Board,
        rng: &mut StdRng,
        input: &mut dyn MoveInput,
    ) -> anyhow::Result<Move> {
        match self.kind {
            PlayerKind::Computer(strategy) => Ok(strategy.produce_move(board, rng)),
            PlayerKind::Human => input.request_move(board),
        }
    }
}
