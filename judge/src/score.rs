use serde::Serialize;

use crate::player::Player;

/// Wins per player, indexed like the players of the competition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    pub wins: [usize; 2],
}

impl MatchScore {
    /// Every round has exactly one winner, so this is the number of rounds played.
    pub fn rounds(&self) -> usize {
        self.wins.iter().sum()
    }
}

/// The machine-readable result of a competition.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub rounds: usize,
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Serialize)]
pub struct PlayerSummary {
    pub id: usize,
    #[serde(rename = "type")]
    pub player_type: String,
    pub wins: usize,
}

impl Summary {
    pub fn new(players: &[Player; 2], score: &MatchScore) -> Self {
        Self {
            rounds: score.rounds(),
            players: players
                .iter()
                .zip(score.wins)
                .map(|(player, wins)| PlayerSummary {
                    id: player.id,
                    player_type: player.kind.to_string(),
                    wins,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use nim::Strategy;

    use super::*;
    use crate::player::PlayerKind;

    #[test]
    fn summary_json() {
        let players = [
            Player::new(1, PlayerKind::Computer(Strategy::Heuristic)),
            Player::new(2, PlayerKind::Human),
        ];
        let score = MatchScore { wins: [3, 1] };
        assert_eq!(
            serde_json::to_string(&Summary::new(&players, &score)).unwrap(),
            r#"{"rounds":4,"players":[{"id":1,"type":"Heuristic","wins":3},{"id":2,"type":"Human","wins":1}]}"#
        );
    }
}
