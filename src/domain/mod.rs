//! Доменная модель игры: карты, колода, руки, состояние стола, конфиг партии.

pub mod card;
pub mod config;
pub mod deck;
pub mod hand;
pub mod table;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use config::*;
pub use deck::*;
pub use hand::*;
pub use table::*;
