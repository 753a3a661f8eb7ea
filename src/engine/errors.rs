use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{HandError, Rank, SeatIndex};

/// Почему валидатор отклонил набор карт.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayRejection {
    #[error("no cards selected")]
    Empty,

    #[error("all cards of a set must share one rank")]
    MixedRanks,

    #[error("must play {expected} card(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },

    #[error("{proposed} does not beat {last}")]
    NotHigher { proposed: Rank, last: Rank },
}

/// Нарушения контракта вызывающим кодом. Не пользовательские ошибки.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractViolation {
    #[error(transparent)]
    Hand(#[from] HandError),

    #[error("game is already over (seat {winner} won)")]
    GameOver { winner: SeatIndex },

    #[error("seat {0} does not exist")]
    InvalidSeat(SeatIndex),

    #[error("no automated turn is pending")]
    NoPendingAutomatedTurn,
}

/// Ошибки движка.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Ход не проходит проверку. Состояние не изменилось, можно выбрать другие карты.
    #[error("invalid play: {0}")]
    InvalidPlay(#[from] PlayRejection),

    /// Сейчас ход другого места.
    #[error("seat {seat} acted out of turn (active seat is {active})")]
    OutOfTurn { seat: SeatIndex, active: SeatIndex },

    /// Ошибка интеграции: так вызывать движок нельзя.
    #[error("contract violation: {0}")]
    ContractViolation(#[from] ContractViolation),
}

impl EngineError {
    /// Можно ли продолжать партию после этой ошибки тем же вызывающим кодом.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EngineError::ContractViolation(_))
    }
}

impl From<HandError> for EngineError {
    fn from(err: HandError) -> Self {
        EngineError::ContractViolation(ContractViolation::Hand(err))
    }
}
