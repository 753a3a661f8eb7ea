use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::config::GameConfig;
use crate::domain::SeatIndex;

/// Команда верхнего уровня — всё, что меняет состояние сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Начать новую партию с заданным конфигом.
    NewGame(GameConfig),

    /// Выбрать / снять выбор с карты руки человека по индексу.
    /// На движок не влияет до `PlaySelection`.
    ToggleSelection { index: usize },

    /// Снять весь выбор.
    ClearSelection,

    /// Сыграть выбранные карты за место человека.
    PlaySelection,

    /// Сыграть конкретные карты за конкретное место.
    PlayCards(PlayCardsCommand),

    /// Пас за конкретное место.
    Pass { seat: SeatIndex },

    /// Сделать один ход за ожидающее автоматическое место.
    RunAutomatedTurn,

    /// Доиграть все автоматические ходы до хода человека или конца партии.
    RunAutomatedTurns,
}

/// Сыграть карты.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayCardsCommand {
    pub seat: SeatIndex,
    pub cards: Vec<Card>,
}
