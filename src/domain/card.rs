use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты. Порядок мастей в игре роли не играет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Цвет масти: червы и бубны красные, остальные чёрные.
    pub fn color(self) -> CardColor {
        match self {
            Suit::Hearts | Suit::Diamonds => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Ранг карты. Двойка — старшая карта (15), выше туза (14).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Three = 3,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    /// Все ранги от младшего к старшему.
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Числовое значение ранга в диапазоне 3..=15.
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.iter().copied().find(|r| r.value() == value)
    }
}

/// Цветовая категория карты (для отрисовки).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Black,
}

/// Карта из 52-карточной колоды.
///
/// В одной колоде каждая пара (rank, suit) встречается ровно один раз,
/// поэтому равенство значений совпадает с "физической" идентичностью карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_red(&self) -> bool {
        self.color() == CardColor::Red
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            Rank::Two => write!(f, "2"),
            r => write!(f, "{}", r.value()),
        }
    }
}

impl fmt::Display for Card {
    /// Формат вида `J♥`, `10♠`, `2♣`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Ошибка разбора строкового представления карты.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("card string is empty")]
    Empty,

    #[error("invalid rank: {0}")]
    InvalidRank(String),

    #[error("invalid suit: {0}")]
    InvalidSuit(char),
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            "2" => Rank::Two,
            other => return Err(ParseCardError::InvalidRank(other.to_string())),
        };
        Ok(rank)
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '♥' | 'h' | 'H' => Ok(Suit::Hearts),
            '♦' | 'd' | 'D' => Ok(Suit::Diamonds),
            '♣' | 'c' | 'C' => Ok(Suit::Clubs),
            '♠' | 's' | 'S' => Ok(Suit::Spades),
            other => Err(ParseCardError::InvalidSuit(other)),
        }
    }
}

/// Парсинг строки вида "J♥", "10♠", "Th", "2c".
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let suit_ch = s.chars().last().ok_or(ParseCardError::Empty)?;
        let rank_part = &s[..s.len() - suit_ch.len_utf8()];
        if rank_part.is_empty() {
            return Err(ParseCardError::InvalidRank(String::new()));
        }

        let rank = rank_part.parse::<Rank>()?;
        let suit = Suit::try_from(suit_ch)?;

        Ok(Card { rank, suit })
    }
}
