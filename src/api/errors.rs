use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{HandError, SeatIndex};
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что видит слой представления).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Ход не прошёл проверку, можно выбрать другие карты.
    #[error("invalid play: {0}")]
    InvalidPlay(String),

    /// Сейчас ход другого места.
    #[error("seat {seat} acted out of turn (active seat is {active})")]
    OutOfTurn { seat: SeatIndex, active: SeatIndex },

    /// В партии нет места человека, выбор карт недоступен.
    #[error("this game has no human seat")]
    NoHumanSeat,

    /// Ошибка интеграции с движком (не пользовательская).
    #[error("internal: {0}")]
    Internal(String),
}

impl ApiError {
    /// Пользователь может исправиться и повторить.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ApiError::Internal(_))
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidPlay(rejection) => ApiError::InvalidPlay(rejection.to_string()),
            EngineError::OutOfTurn { seat, active } => ApiError::OutOfTurn { seat, active },
            EngineError::ContractViolation(v) => ApiError::Internal(v.to_string()),
        }
    }
}

impl From<HandError> for ApiError {
    fn from(err: HandError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
