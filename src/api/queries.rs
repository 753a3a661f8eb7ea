use serde::{Deserialize, Serialize};

use crate::domain::SeatIndex;
use crate::engine::{GameEngine, GameEvent};

use super::dto::{GameViewDto, SeatViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Состояние партии глазами места. `viewer: None` — открыть все руки.
    GetGame { viewer: Option<SeatIndex> },

    /// История партии.
    GetHistory,

    /// Текущий выбор карт человека.
    GetSelection,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Game(GameViewDto),
    History(Vec<GameEvent>),
    Selection(Vec<usize>),
}

/// Сформировать DTO партии.
/// Карты показываются только смотрящему месту; `viewer: None` показывает все руки.
pub fn build_game_view(engine: &GameEngine, viewer: Option<SeatIndex>, selected: Vec<usize>) -> GameViewDto {
    let seats = engine
        .hands()
        .iter()
        .enumerate()
        .map(|(idx, hand)| {
            let seat = idx as SeatIndex;
            let show_cards = viewer.map_or(true, |v| v == seat);
            SeatViewDto {
                seat,
                is_human: engine.config().is_human(seat),
                is_active: !engine.is_finished() && engine.active_seat() == seat,
                card_count: hand.len(),
                cards: show_cards.then(|| hand.cards().to_vec()),
            }
        })
        .collect();

    GameViewDto {
        seats,
        last_played: engine.last_played().to_vec(),
        active_seat: engine.active_seat(),
        consecutive_passes: engine.consecutive_passes(),
        winner: engine.winner(),
        pending_automated_seat: engine.pending_automated_seat(),
        selected,
    }
}
