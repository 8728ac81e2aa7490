use std::io::Write;

use nim::{Board, Move};
use tracing::{debug, trace, warn};

use crate::input::MoveInput;
use crate::player::{Player, PlayerKind};
use crate::score::MatchScore;
use crate::Config;

pub struct RoundResult {
    pub winner_idx: usize,
    /// Number of moves that were played, rejected attempts not included.
    pub turns: usize,
}

/// Plays one round on a fresh board. Player 1 always starts.
///
/// The player who marks the last stick loses the round. Returns an error only
/// when a human player's input fails, never for an illegal move.
pub fn play_round<W: Write>(
    players: &[Player; 2],
    config: &mut Config,
    input: &mut dyn MoveInput,
    out: &mut W,
) -> anyhow::Result<RoundResult> {
    let mut board = Board::new();
    announce(config, out, "Welcome to the sticks game!")?;

    let mut current_player_idx = 0;
    let mut turns = 0;
    while !board.is_empty() {
        play_turn(&players[current_player_idx], &mut board, config, input, out)?;
        turns += 1;
        current_player_idx = 1 - current_player_idx;
    }

    // The previous player took the last stick, so the current one has won
    announce(
        config,
        out,
        format!("Player {} won!", players[current_player_idx].id),
    )?;
    Ok(RoundResult {
        winner_idx: current_player_idx,
        turns,
    })
}

/// Asks the player for moves until one of them is legal, and applies it.
fn play_turn<W: Write>(
    player: &Player,
    board: &mut Board,
    config: &mut Config,
    input: &mut dyn MoveInput,
    out: &mut W,
) -> anyhow::Result<Move> {
    announce(
        config,
        out,
        format!("Player {}, it is now your turn!", player.id),
    )?;
    let mv = loop {
        let mv = player.produce_move(board, &mut config.rng, input)?;
        match board.apply_move(&mv) {
            Ok(()) => break mv,
            Err(err) => {
                if let PlayerKind::Computer(strategy) = player.kind {
                    warn!(player = player.id, %strategy, %mv, %err, "Computer player made an illegal move");
                } else {
                    debug!(player = player.id, %mv, %err, "Illegal move");
                }
                announce(config, out, "Invalid move. Enter another:")?;
            }
        }
    };
    trace!(player = player.id, %mv, remaining = board.unmarked_count());
    announce(
        config,
        out,
        format!("Player {} made the move: {}", player.id, mv),
    )?;
    Ok(mv)
}

/// Plays `num_rounds` rounds and counts the wins.
pub fn play_competition<W: Write>(
    players: &[Player; 2],
    num_rounds: usize,
    config: &mut Config,
    input: &mut dyn MoveInput,
    out: &mut W,
) -> anyhow::Result<MatchScore> {
    writeln!(
        out,
        "Starting a Nim competition of {} rounds between a {} player and a {} player.",
        num_rounds, players[0].kind, players[1].kind
    )?;

    let mut match_score = MatchScore::default();
    for round_idx in 0..num_rounds {
        let RoundResult { winner_idx, turns } = play_round(players, config, input, out)?;
        debug!(winner = players[winner_idx].id, round_idx, turns);
        match_score.wins[winner_idx] += 1;
    }
    Ok(match_score)
}

fn announce<W: Write>(
    config: &Config,
    out: &mut W,
    message: impl std::fmt::Display,
) -> std::io::Result<()> {
    if config.display_messages {
        writeln!(out, "{}", message)?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use nim::Strategy;

    use super::*;
    use crate::input::ConsoleInput;

    fn computer(id: usize, strategy: Strategy) -> Player {
        Player::new(id, PlayerKind::Computer(strategy))
    }

    fn no_input() -> ConsoleInput<std::io::Empty, std::io::Sink> {
        ConsoleInput::new(std::io::empty(), std::io::sink())
    }

    #[test]
    fn smart_round_ends_within_sixteen_turns() {
        let players = [computer(1, Strategy::Smart), computer(2, Strategy::Smart)];
        let mut config = Config::new(0, false);
        let mut out = Vec::new();
        let result = play_round(&players, &mut config, &mut no_input(), &mut out).unwrap();
        assert!(result.turns >= 1 && result.turns <= 16);
        assert!(result.winner_idx < 2);
        assert!(out.is_empty());
    }

    #[test]
    fn every_round_awards_one_point() {
        for (s1, s2) in [
            (Strategy::Random, Strategy::Heuristic),
            (Strategy::Heuristic, Strategy::Smart),
            (Strategy::Random, Strategy::Random),
        ] {
            let players = [computer(1, s1), computer(2, s2)];
            let mut config = Config::new(17, false);
            let score = play_competition(&players, 25, &mut config, &mut no_input(), &mut std::io::sink())
                .unwrap();
            assert_eq!(score.wins[0] + score.wins[1], 25);
            assert_eq!(score.rounds(), 25);
        }
    }

    #[test]
    fn messages_only_when_enabled() {
        let players = [computer(1, Strategy::Heuristic), computer(2, Strategy::Smart)];
        let mut config = Config::new(0, true);
        let mut out = Vec::new();
        play_round(&players, &mut config, &mut no_input(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Welcome to the sticks game!\nPlayer 1, it is now your turn!\n"));
        // The heuristic opens by taking one stick from the longest row
        assert!(out.contains("Player 1 made the move: 4:1-1\n"));
        assert!(out.trim_end().ends_with("won!"));
    }

    #[test]
    fn human_input_failure_is_an_error() {
        let players = [Player::new(1, PlayerKind::Human), computer(2, Strategy::Smart)];
        let mut config = Config::new(0, false);
        let result = play_round(&players, &mut config, &mut no_input(), &mut std::io::sink());
        assert!(result.is_err());
    }
}
