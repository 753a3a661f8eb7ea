//! Движок правил: проверка ходов, очередь ходов, пасы, конец партии, автоматические соперники.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `submit_play` – положить набор карт
//!   - `submit_pass` – пропустить ход
//!   - `play_automated_turn` – сделать ход за автоматическое место

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod history;
pub mod strategy;
pub mod validation;

pub use actions::{Move, PlayerAction};
pub use errors::{ContractViolation, EngineError, PlayRejection};
pub use game_loop::{GameEngine, GameStatus};
pub use history::{GameEvent, GameEventKind, GameHistory};
pub use strategy::{choose_move, LowestBeatStrategy, OpponentStrategy};
pub use validation::{is_valid_play, validate_play};

/// RNG интерфейс для engine.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно случайный индекс в диапазоне `0..upper` (`upper > 0`).
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Перемешивание Фишера–Йетса: от последнего индекса к 1,
    /// элемент i меняется местами со случайным j <= i.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }
}
