use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::SeatIndex;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Новая партия началась.
    GameStarted { seed: Option<u64> },

    /// Место получило карты при раздаче.
    CardsDealt { seat: SeatIndex, count: usize },

    /// Принятый ход.
    CardsPlayed { seat: SeatIndex, cards: Vec<Card> },

    /// Пас. `consecutive` — счётчик пасов сразу после этого паса.
    Passed { seat: SeatIndex, consecutive: u8 },

    /// Три паса подряд: стол очищен, следующий ходит с чистого стола.
    TableCleared,

    /// Ход перешёл к месту.
    TurnPassed { seat: SeatIndex },

    /// Рука опустела — партия окончена.
    GameWon { seat: SeatIndex },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Все принятые ходы по порядку.
    pub fn plays(&self) -> impl Iterator<Item = (SeatIndex, &[Card])> {
        self.events.iter().filter_map(|e| match &e.kind {
            GameEventKind::CardsPlayed { seat, cards } => Some((*seat, cards.as_slice())),
            _ => None,
        })
    }
}
