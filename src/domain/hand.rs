use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank};

/// Нарушения контракта при работе с рукой.
/// Возникают только из-за ошибки вызывающего кода, а не из-за хода игрока.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandError {
    #[error("card {0} is not in hand")]
    CardNotInHand(Card),

    #[error("card {0} listed more than once")]
    DuplicateCard(Card),

    #[error("index {index} is out of range for a hand of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Рука одного места: упорядоченный список карт.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Стабильная сортировка по возрастанию ранга (масти между собой не упорядочиваются).
    pub fn sort_by_rank(&mut self) {
        self.cards.sort_by_key(|c| c.rank);
    }

    /// Младшая карта руки (после сортировки — первая).
    pub fn lowest(&self) -> Option<Card> {
        self.cards.iter().copied().min_by_key(|c| c.rank)
    }

    /// Группировка карт по рангу, от младшего к старшему.
    /// Внутри группы сохраняется порядок карт в руке.
    pub fn groups_by_rank(&self) -> BTreeMap<Rank, Vec<Card>> {
        let mut groups: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
        for card in &self.cards {
            groups.entry(card.rank).or_default().push(*card);
        }
        groups
    }

    /// Карты по индексам в текущем порядке руки (для выбора карт человеком).
    pub fn cards_at(&self, indices: &[usize]) -> Result<Vec<Card>, HandError> {
        indices
            .iter()
            .map(|&index| {
                self.cards.get(index).copied().ok_or(HandError::IndexOutOfRange {
                    index,
                    len: self.cards.len(),
                })
            })
            .collect()
    }

    /// Проверить, что все карты есть в руке и ни одна не указана дважды.
    pub fn check_removable(&self, to_remove: &[Card]) -> Result<(), HandError> {
        for (i, card) in to_remove.iter().enumerate() {
            if to_remove[..i].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
            if !self.contains(card) {
                return Err(HandError::CardNotInHand(*card));
            }
        }
        Ok(())
    }

    /// Убрать карты из руки. Либо убираются все, либо рука не меняется.
    pub fn remove_cards(&mut self, to_remove: &[Card]) -> Result<(), HandError> {
        self.check_removable(to_remove)?;
        self.cards.retain(|c| !to_remove.contains(c));
        Ok(())
    }
}
