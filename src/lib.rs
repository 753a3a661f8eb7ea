//! Движок правил карточной игры "President" на четверых: человек против трёх автоматов.
//!
//! Слои:
//! - `domain` — карты, колода, руки, состояние стола, конфиг;
//! - `engine` — проверка ходов, очередь ходов, пасы, конец партии, стратегия соперников;
//! - `infra` — реализации RNG;
//! - `api` — команды/запросы/DTO для слоя представления.
//!
//! Отрисовка, обработчики кликов и диалоги сюда не входят: они вызывают движок
//! и читают его состояние после каждого хода.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use crate::api::{Command, CommandResponse, GameSession, Query, QueryResponse};
pub use crate::domain::{Card, CardColor, Deck, GameConfig, Hand, Rank, SeatIndex, Suit, TableState};
pub use crate::engine::{EngineError, GameEngine, GameStatus, Move, OpponentStrategy};
