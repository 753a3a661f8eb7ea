use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::SeatIndex;
use crate::engine::actions::PlayerAction;

/// DTO места за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatViewDto {
    pub seat: SeatIndex,
    pub is_human: bool,
    pub is_active: bool,
    pub card_count: usize,
    /// Карты — только для смотрящего места (или для всех в режиме администратора).
    pub cards: Option<Vec<Card>>,
}

/// DTO партии — всё, что слою представления нужно перерисовать после хода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub seats: Vec<SeatViewDto>,
    pub last_played: Vec<Card>,
    pub active_seat: SeatIndex,
    pub consecutive_passes: u8,
    pub winner: Option<SeatIndex>,
    /// Автоматическое место, которое ждёт хода.
    pub pending_automated_seat: Option<SeatIndex>,
    /// Выбранные индексы карт человека.
    pub selected: Vec<usize>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Выбор карт изменился.
    SelectionChanged { selected: Vec<usize> },

    /// Обновлённое состояние партии.
    GameState(GameViewDto),

    /// Автоматические места сделали ходы.
    AutomatedMoves {
        actions: Vec<PlayerAction>,
        game: GameViewDto,
    },

    /// Партия закончена.
    GameFinished { winner: SeatIndex, game: GameViewDto },
}
