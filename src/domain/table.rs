use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};

/// Индекс места за столом (0..NUM_SEATS-1).
pub type SeatIndex = u8;

/// Количество мест за столом.
pub const NUM_SEATS: usize = 4;

/// Место человека по умолчанию.
pub const HUMAN_SEAT: SeatIndex = 0;

/// Сколько пасов подряд "убивают" последний ход и очищают стол.
pub const PASSES_TO_CLEAR: u8 = 3;

/// Следующее место по кругу.
pub fn next_seat(seat: SeatIndex) -> SeatIndex {
    ((seat as usize + 1) % NUM_SEATS) as SeatIndex
}

/// Общее состояние круга. Меняется только через движок.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableState {
    /// Последний принятый ход. Пусто — стол чист.
    pub last_played: Vec<Card>,
    /// Пасы подряд с момента последнего принятого хода.
    pub consecutive_passes: u8,
    /// Чей сейчас ход.
    pub active_seat: SeatIndex,
}

impl TableState {
    pub fn new(active_seat: SeatIndex) -> Self {
        Self {
            last_played: Vec::new(),
            consecutive_passes: 0,
            active_seat,
        }
    }

    /// Стол с уже лежащим ходом (удобно для проверок валидатора и стратегии).
    pub fn with_last_played(last_played: Vec<Card>) -> Self {
        Self {
            last_played,
            ..Self::default()
        }
    }

    pub fn is_clear(&self) -> bool {
        self.last_played.is_empty()
    }

    /// Ранг последнего хода (все карты хода одного ранга).
    pub fn last_rank(&self) -> Option<Rank> {
        self.last_played.first().map(|c| c.rank)
    }

    /// Сколько карт нужно положить, чтобы побить последний ход.
    pub fn required_arity(&self) -> usize {
        self.last_played.len()
    }

    pub(crate) fn clear(&mut self) {
        self.last_played.clear();
        self.consecutive_passes = 0;
    }
}
