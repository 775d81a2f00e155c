//! Round results from the human's point of view.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::tiles::Hand;

/// Terminal result of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The human won; `score` is the opponents' remaining pips.
    Won {
        /// Points earned.
        score: u32,
    },
    /// An opponent won.
    Lost,
    /// Blocked round with the human tied for the lowest pip total.
    Draw,
}

/// Result tag for renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    /// Human won.
    Won,
    /// Human lost.
    Lost,
    /// Nobody won.
    Draw,
}

/// Flat `{result, score}` payload announced when a round ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReport {
    /// Won, lost or draw.
    pub result: OutcomeKind,
    /// Points earned; 0 unless won.
    pub score: u32,
}

impl Outcome {
    /// Result tag.
    #[must_use]
    pub fn kind(self) -> OutcomeKind {
        match self {
            Outcome::Won { .. } => OutcomeKind::Won,
            Outcome::Lost => OutcomeKind::Lost,
            Outcome::Draw => OutcomeKind::Draw,
        }
    }

    /// Points earned by the human.
    #[must_use]
    pub fn score(self) -> u32 {
        match self {
            Outcome::Won { score } => score,
            Outcome::Lost | Outcome::Draw => 0,
        }
    }

    /// Payload for renderers.
    #[must_use]
    pub fn report(self) -> OutcomeReport {
        OutcomeReport {
            result: self.kind(),
            score: self.score(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won { score } => write!(f, "You Won ({})", score),
            Outcome::Lost => write!(f, "You Lost"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Sum of every opponent's remaining pips.
#[must_use]
pub fn opponents_pip_total(hands: &PlayerMap<Hand>) -> u32 {
    hands.bots().map(|(_, hand)| hand.pip_total()).sum()
}

/// Result when `winner` has emptied their hand.
#[must_use]
pub fn domino_outcome(winner: PlayerId, hands: &PlayerMap<Hand>) -> Outcome {
    if winner.is_human() {
        Outcome::Won {
            score: opponents_pip_total(hands),
        }
    } else {
        Outcome::Lost
    }
}

/// Result of a blocked round: lowest pip total wins.
///
/// The human wins outright only with a strictly lower total than every bot;
/// sharing the lowest total is a draw.
#[must_use]
pub fn blocked_outcome(hands: &PlayerMap<Hand>) -> Outcome {
    let human = hands[PlayerId::HUMAN].pip_total();
    let lowest_bot = hands.bots().map(|(_, hand)| hand.pip_total()).min();

    match lowest_bot {
        Some(bot) if human > bot => Outcome::Lost,
        Some(bot) if human == bot => Outcome::Draw,
        _ => Outcome::Won {
            score: opponents_pip_total(hands),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Tile;

    /// Hands whose pip totals are exactly `totals`, built from 0-x tiles.
    fn hands_with_totals(totals: &[u32]) -> PlayerMap<Hand> {
        let hands = totals
            .iter()
            .map(|&total| {
                let mut hand = Hand::new();
                let mut left = total;
                while left > 0 {
                    let pip = left.min(6) as u8;
                    hand.draw(Tile::new(0, pip));
                    left -= u32::from(pip);
                }
                hand
            })
            .collect();
        PlayerMap::from_vec(hands)
    }

    #[test]
    fn test_domino_outcome() {
        let hands = hands_with_totals(&[0, 11, 4]);
        assert_eq!(domino_outcome(PlayerId::HUMAN, &hands), Outcome::Won { score: 15 });
        assert_eq!(domino_outcome(PlayerId::new(2), &hands), Outcome::Lost);
    }

    #[test]
    fn test_blocked_lower_bot_wins() {
        let hands = hands_with_totals(&[12, 15, 9]);
        assert_eq!(blocked_outcome(&hands), Outcome::Lost);
    }

    #[test]
    fn test_blocked_human_lowest_wins() {
        let hands = hands_with_totals(&[8, 15, 9]);
        assert_eq!(blocked_outcome(&hands), Outcome::Won { score: 24 });
    }

    #[test]
    fn test_blocked_tie_is_draw() {
        let hands = hands_with_totals(&[9, 15, 9]);
        assert_eq!(blocked_outcome(&hands), Outcome::Draw);

        // Two bots tied below the human is still a loss
        let hands = hands_with_totals(&[12, 9, 9]);
        assert_eq!(blocked_outcome(&hands), Outcome::Lost);
    }

    #[test]
    fn test_blocked_is_deterministic() {
        let hands = hands_with_totals(&[7, 7, 20, 3]);
        assert_eq!(blocked_outcome(&hands), blocked_outcome(&hands.clone()));
    }

    #[test]
    fn test_report() {
        assert_eq!(
            Outcome::Won { score: 30 }.report(),
            OutcomeReport { result: OutcomeKind::Won, score: 30 }
        );
        assert_eq!(Outcome::Draw.report().score, 0);

        let json = serde_json::to_string(&Outcome::Lost.report()).unwrap();
        assert_eq!(json, r#"{"result":"lost","score":0}"#);
    }
}
