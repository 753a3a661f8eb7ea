use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{Hand, HandError};

/// Выбор карт человеком: индексы в текущем порядке руки.
///
/// Это состояние представления, движок о нём не знает, пока выбор не отправлен.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить индекс или убрать, если он уже выбран.
    /// Возвращает `true`, если индекс теперь выбран.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.indices.iter().position(|&i| i == index) {
            Some(pos) => {
                self.indices.remove(pos);
                false
            }
            None => {
                self.indices.push(index);
                true
            }
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Выбранные индексы по возрастанию.
    pub fn indices(&self) -> Vec<usize> {
        let mut sorted = self.indices.clone();
        sorted.sort_unstable();
        sorted
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Карты руки, соответствующие выбору, в порядке руки.
    pub fn resolve(&self, hand: &Hand) -> Result<Vec<Card>, HandError> {
        hand.cards_at(&self.indices())
    }
}
