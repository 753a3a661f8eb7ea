use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::Hand;
use crate::engine::RandomSource;

/// Колода карт. В домене — просто упорядоченный список карт.
/// Существует только на этапе подготовки партии и целиком уходит в раздачу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 3..2, Diamonds 3..2, Clubs 3..2, Spades 3..2.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Полная колода, перемешанная источником случайности (Fisher–Yates).
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        rng.shuffle(&mut deck.cards);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Раздать всю колоду по кругу, по одной карте на место, пока она не кончится.
    /// После раздачи каждая рука сортируется по возрастанию ранга.
    ///
    /// Если размер колоды не делится на `num_seats`, первые места получат на карту больше.
    pub fn deal(mut self, num_seats: usize) -> Vec<Hand> {
        let mut hands = vec![Hand::default(); num_seats];
        if num_seats == 0 {
            return hands;
        }

        'dealing: loop {
            for hand in hands.iter_mut() {
                match self.draw_one() {
                    Some(card) => hand.push(card),
                    None => break 'dealing,
                }
            }
        }

        for hand in hands.iter_mut() {
            hand.sort_by_rank();
        }
        hands
    }
}

/// Собрать 52 карты и перемешать их.
pub fn build_shuffled_deck<R: RandomSource>(rng: &mut R) -> Deck {
    Deck::shuffled(rng)
}
