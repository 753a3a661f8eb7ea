use serde::{Deserialize, Serialize};

use crate::domain::table::{SeatIndex, HUMAN_SEAT, NUM_SEATS};

/// Конфиг партии.
///
/// Правила игры не настраиваются — только кто сидит за столом и как тасуется колода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Место под управлением человека. `None` — все четыре места играет автомат.
    pub human_seat: Option<SeatIndex>,
    /// Seed для воспроизводимой раздачи. `None` — системный RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_seat: Some(HUMAN_SEAT),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Партия без человека: все ходы делает стратегия.
    pub fn autoplay(seed: Option<u64>) -> Self {
        Self {
            human_seat: None,
            seed,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn is_human(&self, seat: SeatIndex) -> bool {
        self.human_seat == Some(seat)
    }

    /// Место человека должно существовать за столом.
    pub fn is_valid(&self) -> bool {
        self.human_seat.map_or(true, |s| (s as usize) < NUM_SEATS)
    }
}
