use serde::{Deserialize, Serialize};

use crate::domain::{Card, SeatIndex};

/// Ход: положить набор карт или пасовать.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Move {
    Play(Vec<Card>),
    Pass,
}

impl Move {
    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }
}

/// Конкретное действие места.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какое место действует (0..NUM_SEATS-1).
    pub seat: SeatIndex,
    /// Само действие.
    pub kind: Move,
}

impl PlayerAction {
    pub fn play(seat: SeatIndex, cards: Vec<Card>) -> Self {
        Self {
            seat,
            kind: Move::Play(cards),
        }
    }

    pub fn pass(seat: SeatIndex) -> Self {
        Self {
            seat,
            kind: Move::Pass,
        }
    }
}
