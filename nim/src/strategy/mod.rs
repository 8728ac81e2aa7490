//! The computer strategies.
//!
//! Every strategy is a function of the board (plus an RNG for the random
//! one) and keeps no state between moves. All of them require a board with
//! at least one unmarked stick and panic otherwise.

mod heuristic;
mod random;
mod smart;

pub use heuristic::heuristic_move;
pub use random::random_move;
pub use smart::smart_move;

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Board, Move, UnknownStrategy};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Marks a random run of sticks.
    Random,
    /// Tries to leave a board whose binary digit sums are all even.
    Heuristic,
    /// Takes from the first sequence, depending on the parity of the number of sequences.
    Smart,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Random, Strategy::Heuristic, Strategy::Smart];

    /// Picks the next move on `board`.
    ///
    /// Only [`Strategy::Random`] draws from `rng`.
    pub fn produce_move<R: Rng>(&self, board: &Board, rng: &mut R) -> Move {
        match self {
            Strategy::Random => random_move(board, rng),
            Strategy::Heuristic => heuristic_move(board),
            Strategy::Smart => smart_move(board),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random => "Random",
            Strategy::Heuristic => "Heuristic",
            Strategy::Smart => "Smart",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStrategy(String::from(s)))
    }
}

fn assert_not_empty(board: &Board) {
    assert!(
        !board.is_empty(),
        "a move was requested for a board without unmarked sticks"
    );
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::NonEmptyBoard;

    quickcheck! {
        fn every_strategy_plays_legal_moves(board: NonEmptyBoard, seed: u64) -> bool {
            let mut rng = StdRng::seed_from_u64(seed);
            Strategy::ALL.iter().all(|strategy| {
                let mv = strategy.produce_move(&board.0, &mut rng);
                board.0.clone().apply_move(&mv).is_ok()
            })
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("random".parse(), Ok(Strategy::Random));
        assert_eq!("Heuristic".parse(), Ok(Strategy::Heuristic));
        assert_eq!(" SMART ".parse(), Ok(Strategy::Smart));
        assert_eq!(
            "clever".parse::<Strategy>(),
            Err(UnknownStrategy(String::from("clever")))
        );
    }

    #[test]
    fn serializes_as_name() {
        assert_eq!(
            serde_json::to_string(&Strategy::Heuristic).unwrap(),
            "\"Heuristic\""
        );
        let strategy: Strategy = serde_json::from_str("\"Smart\"").unwrap();
        assert_eq!(strategy, Strategy::Smart);
    }

    #[test]
    #[should_panic(expected = "without unmarked sticks")]
    fn empty_board_is_a_precondition_violation() {
        let mut board = Board::with_row_lengths(&[2]).unwrap();
        board.apply_move(&Move::new(1, 1, 2)).unwrap();
        Strategy::Smart.produce_move(&board, &mut StdRng::seed_from_u64(0));
    }

    #[test]
    fn smart_players_finish_within_sixteen_turns() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut turns = 0;
        while !board.is_empty() {
            let mv = Strategy::Smart.produce_move(&board, &mut rng);
            board.apply_move(&mv).unwrap();
            turns += 1;
        }
        assert!(turns <= 16, "took {} turns", turns);
    }
}
