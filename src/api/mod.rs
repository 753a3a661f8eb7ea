//! Внешний API движка для слоя представления (GUI, CLI, тестовый стенд).
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (ход, пас, выбор карт);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для отрисовки;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - выбор карт (selection.rs) и сессия партии (session.rs).

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;
pub mod selection;
pub mod session;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use selection::Selection;
pub use session::GameSession;
