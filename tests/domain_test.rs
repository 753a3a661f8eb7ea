//! Интеграционные тесты для доменной модели (crate::domain).

use std::collections::HashSet;

use president_engine::domain::*;

fn c(s: &str) -> Card {
    s.parse().expect("parse card")
}

/// Rank: числовые значения, двойка старше туза.
#[test]
fn rank_values_and_ordering() {
    assert_eq!(Rank::Three.value(), 3);
    assert_eq!(Rank::Jack.value(), 11);
    assert_eq!(Rank::Queen.value(), 12);
    assert_eq!(Rank::King.value(), 13);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::Two.value(), 15);

    assert!(Rank::Two > Rank::Ace);
    assert!(Rank::Ace > Rank::King);
    assert!(Rank::Four > Rank::Three);

    assert_eq!(Rank::from_value(15), Some(Rank::Two));
    assert_eq!(Rank::from_value(10), Some(Rank::Ten));
    assert_eq!(Rank::from_value(2), None);
    assert_eq!(Rank::from_value(16), None);

    // ALL идёт по возрастанию.
    assert!(Rank::ALL.windows(2).all(|w| w[0] < w[1]));
}

/// Цвет: червы и бубны красные.
#[test]
fn card_color_category() {
    assert_eq!(Card::new(Rank::Five, Suit::Hearts).color(), CardColor::Red);
    assert_eq!(Card::new(Rank::Five, Suit::Diamonds).color(), CardColor::Red);
    assert_eq!(Card::new(Rank::Five, Suit::Clubs).color(), CardColor::Black);
    assert_eq!(Card::new(Rank::Five, Suit::Spades).color(), CardColor::Black);
    assert!(c("Qh").is_red());
    assert!(!c("Qs").is_red());
}

/// Card: Display в виде "J♥", "10♠", "2♣" и разбор обратно.
#[test]
fn card_display_and_parse_roundtrip() {
    assert_eq!(Card::new(Rank::Jack, Suit::Hearts).to_string(), "J♥");
    assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10♠");
    assert_eq!(Card::new(Rank::Two, Suit::Clubs).to_string(), "2♣");
    assert_eq!(Card::new(Rank::Seven, Suit::Diamonds).to_string(), "7♦");

    for card in Deck::standard_52().cards {
        let parsed: Card = card.to_string().parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    // ASCII-масти и "T" для десятки.
    assert_eq!(c("Th"), Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!(c("10h"), Card::new(Rank::Ten, Suit::Hearts));
    assert_eq!(c("as"), Card::new(Rank::Ace, Suit::Spades));

    // Неверные строки
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert!("h".parse::<Card>().is_err());
    assert!("1c".parse::<Card>().is_err());
    assert!("7x".parse::<Card>().is_err());
    assert!("11c".parse::<Card>().is_err());
}

/// Deck: 52 уникальные карты, 13 рангов × 4 масти.
#[test]
fn deck_standard_52_basic_properties() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    assert!(!deck.is_empty());

    let set: HashSet<_> = deck.cards.iter().collect();
    assert_eq!(set.len(), 52);

    for suit in Suit::ALL {
        assert_eq!(deck.cards.iter().filter(|c| c.suit == suit).count(), 13);
    }
    for rank in Rank::ALL {
        assert_eq!(deck.cards.iter().filter(|c| c.rank == rank).count(), 4);
    }
}

/// Раздача: по кругу, 13 карт каждому, руки отсортированы, колода разбита без потерь.
#[test]
fn deal_round_robin_partitions_deck() {
    let deck = Deck::standard_52();
    let original: HashSet<Card> = deck.cards.iter().copied().collect();

    // Первая карта с верха (конец вектора) уходит месту 0.
    let top = *deck.cards.last().unwrap();
    let second = deck.cards[deck.len() - 2];

    let hands = deck.deal(NUM_SEATS);
    assert_eq!(hands.len(), 4);

    let mut union = HashSet::new();
    for hand in &hands {
        assert_eq!(hand.len(), 13);
        assert!(hand.cards().windows(2).all(|w| w[0].rank <= w[1].rank));
        for card in hand.cards() {
            assert!(union.insert(*card), "card {card} dealt twice");
        }
    }
    assert_eq!(union, original);

    assert!(hands[0].contains(&top));
    assert!(hands[1].contains(&second));
}

/// Неровная колода раздаётся насколько хватает.
#[test]
fn deal_uneven_deck() {
    let deck = Deck {
        cards: vec![c("3h"), c("4h"), c("5h"), c("6h"), c("7h")],
    };
    let hands = deck.deal(4);
    let sizes: Vec<usize> = hands.iter().map(Hand::len).collect();
    assert_eq!(sizes, vec![2, 1, 1, 1]);
}

/// Hand: группировка по рангу, младшая карта, выбор по индексам.
#[test]
fn hand_grouping_and_lookup() {
    let mut hand = Hand::new(vec![c("9s"), c("7d"), c("5c"), c("7h"), c("2c")]);
    hand.sort_by_rank();

    let ranks: Vec<Rank> = hand.cards().iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![Rank::Five, Rank::Seven, Rank::Seven, Rank::Nine, Rank::Two]);
    // Стабильная сортировка: 7♦ остался перед 7♥.
    assert_eq!(hand.cards()[1], c("7d"));
    assert_eq!(hand.cards()[2], c("7h"));

    assert_eq!(hand.lowest(), Some(c("5c")));

    let groups = hand.groups_by_rank();
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[&Rank::Seven], vec![c("7d"), c("7h")]);
    assert_eq!(groups.keys().next(), Some(&Rank::Five));
    assert_eq!(groups.keys().last(), Some(&Rank::Two));

    assert_eq!(hand.cards_at(&[0, 3]).unwrap(), vec![c("5c"), c("9s")]);
    assert_eq!(
        hand.cards_at(&[5]),
        Err(HandError::IndexOutOfRange { index: 5, len: 5 })
    );

    assert_eq!(Hand::default().lowest(), None);
}

/// Hand: удаление либо целиком, либо никак.
#[test]
fn hand_remove_cards_is_all_or_nothing() {
    let mut hand = Hand::new(vec![c("5c"), c("7d"), c("7h")]);

    assert_eq!(
        hand.remove_cards(&[c("7d"), c("Ah")]),
        Err(HandError::CardNotInHand(c("Ah")))
    );
    assert_eq!(hand.len(), 3);

    assert_eq!(
        hand.remove_cards(&[c("7d"), c("7d")]),
        Err(HandError::DuplicateCard(c("7d")))
    );
    assert_eq!(hand.len(), 3);

    hand.remove_cards(&[c("7h"), c("7d")]).unwrap();
    assert_eq!(hand.cards(), &[c("5c")]);

    hand.remove_cards(&[c("5c")]).unwrap();
    assert!(hand.is_empty());
}

/// TableState: чистый стол и ранг последнего хода.
#[test]
fn table_state_helpers() {
    let table = TableState::new(0);
    assert!(table.is_clear());
    assert_eq!(table.last_rank(), None);
    assert_eq!(table.required_arity(), 0);

    let table = TableState::with_last_played(vec![c("8c"), c("8d")]);
    assert!(!table.is_clear());
    assert_eq!(table.last_rank(), Some(Rank::Eight));
    assert_eq!(table.required_arity(), 2);

    assert_eq!(next_seat(0), 1);
    assert_eq!(next_seat(3), 0);
}

/// GameConfig: место человека по умолчанию — 0.
#[test]
fn game_config_defaults() {
    let cfg = GameConfig::default();
    assert_eq!(cfg.human_seat, Some(HUMAN_SEAT));
    assert!(cfg.is_human(0));
    assert!(!cfg.is_human(1));
    assert!(cfg.is_valid());

    let auto = GameConfig::autoplay(Some(9));
    assert!(!auto.is_human(0));
    assert_eq!(auto.seed, Some(9));

    let bad = GameConfig {
        human_seat: Some(4),
        seed: None,
    };
    assert!(!bad.is_valid());

    let json = serde_json::to_string(&cfg.clone().with_seed(5)).unwrap();
    let back: GameConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.seed, Some(5));
}
