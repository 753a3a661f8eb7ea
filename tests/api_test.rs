//! Тесты внешнего API: команды, запросы, скрытые руки, выбор карт.

use president_engine::api::*;
use president_engine::domain::{Card, GameConfig, Hand, NUM_SEATS};
use president_engine::engine::{GameEngine, GameEventKind, LowestBeatStrategy, PlayerAction};

fn c(s: &str) -> Card {
    s.parse().expect("parse card")
}

fn hand(list: &str) -> Hand {
    let mut hand = Hand::new(list.split_whitespace().map(c).collect());
    hand.sort_by_rank();
    hand
}

fn session(hands: [&str; NUM_SEATS]) -> GameSession {
    let engine = GameEngine::from_hands(hands.map(hand), GameConfig::default()).expect("engine");
    GameSession::from_engine(engine, LowestBeatStrategy)
}

fn game_view(s: &GameSession) -> GameViewDto {
    match s.query(Query::GetGame { viewer: Some(0) }) {
        QueryResponse::Game(view) => view,
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn new_session_hides_opponent_hands() {
    let s = GameSession::new(GameConfig::default().with_seed(5)).unwrap();
    let view = game_view(&s);

    assert_eq!(view.seats.len(), NUM_SEATS);
    assert!(view.seats[0].is_human);
    assert!(view.seats[0].is_active);
    assert_eq!(view.seats[0].cards.as_ref().map(Vec::len), Some(13));
    for seat in &view.seats[1..] {
        assert!(!seat.is_human);
        assert_eq!(seat.cards, None);
        assert_eq!(seat.card_count, 13);
    }
    assert_eq!(view.winner, None);
    assert_eq!(view.pending_automated_seat, None);

    // viewer: None открывает все руки.
    match s.query(Query::GetGame { viewer: None }) {
        QueryResponse::Game(all) => assert!(all.seats.iter().all(|seat| seat.cards.is_some())),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn toggle_selection_and_bad_index() {
    let mut s = session(["3c 3d 9c", "4h 5h", "6d 8d", "7s Ts"]);

    assert_eq!(
        s.handle(Command::ToggleSelection { index: 1 }).unwrap(),
        CommandResponse::SelectionChanged { selected: vec![1] }
    );
    assert_eq!(
        s.handle(Command::ToggleSelection { index: 0 }).unwrap(),
        CommandResponse::SelectionChanged { selected: vec![0, 1] }
    );
    assert_eq!(
        s.handle(Command::ToggleSelection { index: 1 }).unwrap(),
        CommandResponse::SelectionChanged { selected: vec![0] }
    );

    let err = s.handle(Command::ToggleSelection { index: 3 }).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(err.is_recoverable());

    assert_eq!(
        s.handle(Command::ClearSelection).unwrap(),
        CommandResponse::SelectionChanged { selected: vec![] }
    );
    assert!(s.selection().is_empty());
}

#[test]
fn play_selection_submits_and_clears() {
    let mut s = session(["3c 3d 9c", "4h 5h", "6d 8d", "7s Ts"]);
    s.handle(Command::ToggleSelection { index: 0 }).unwrap();
    s.handle(Command::ToggleSelection { index: 1 }).unwrap();

    let resp = s.handle(Command::PlaySelection).unwrap();
    let CommandResponse::GameState(view) = resp else {
        panic!("expected GameState, got {resp:?}");
    };
    assert_eq!(view.last_played, vec![c("3c"), c("3d")]);
    assert_eq!(view.active_seat, 1);
    assert_eq!(view.pending_automated_seat, Some(1));
    assert!(view.selected.is_empty());
    assert_eq!(view.seats[0].card_count, 1);
}

#[test]
fn rejected_play_keeps_selection() {
    let mut s = session(["3c 4d 9c", "4h 5h", "6d 8d", "7s Ts"]);
    s.handle(Command::ToggleSelection { index: 0 }).unwrap();
    s.handle(Command::ToggleSelection { index: 1 }).unwrap();

    let err = s.handle(Command::PlaySelection).unwrap_err();
    assert!(matches!(err, ApiError::InvalidPlay(_)));
    assert_eq!(s.selection().indices(), vec![0, 1]);
    assert_eq!(s.engine().hand(0).map(Hand::len), Some(3));

    // Пустой выбор тоже отклоняется как ход.
    s.handle(Command::ClearSelection).unwrap();
    assert!(matches!(s.handle(Command::PlaySelection), Err(ApiError::InvalidPlay(_))));
}

#[test]
fn out_of_turn_and_internal_errors() {
    let mut s = session(["3c 4d 9c", "4h 5h", "6d 8d", "7s Ts"]);

    assert_eq!(
        s.handle(Command::Pass { seat: 2 }).unwrap_err(),
        ApiError::OutOfTurn { seat: 2, active: 0 }
    );

    let err = s
        .handle(Command::PlayCards(PlayCardsCommand {
            seat: 0,
            cards: vec![c("Ah")],
        }))
        .unwrap_err();
    assert!(matches!(err, ApiError::Internal(_)));
    assert!(!err.is_recoverable());

    // Автоматам сейчас не ходить.
    assert!(matches!(s.handle(Command::RunAutomatedTurn), Err(ApiError::Internal(_))));
}

#[test]
fn automated_turns_report_actions() {
    let mut s = session(["3c 9c Kc", "4h 5h", "6d 8d", "7s Ts"]);
    s.handle(Command::PlayCards(PlayCardsCommand {
        seat: 0,
        cards: vec![c("3c")],
    }))
    .unwrap();

    let resp = s.handle(Command::RunAutomatedTurn).unwrap();
    let CommandResponse::AutomatedMoves { actions, game } = resp else {
        panic!("expected AutomatedMoves, got {resp:?}");
    };
    assert_eq!(actions, vec![PlayerAction::play(1, vec![c("4h")])]);
    assert_eq!(game.active_seat, 2);

    let resp = s.handle(Command::RunAutomatedTurns).unwrap();
    let CommandResponse::AutomatedMoves { actions, game } = resp else {
        panic!("expected AutomatedMoves, got {resp:?}");
    };
    assert_eq!(actions.len(), 2);
    assert_eq!(game.active_seat, 0);
    assert_eq!(game.pending_automated_seat, None);
}

#[test]
fn winning_play_reports_game_finished() {
    let mut s = session(["9c", "4h 5h", "6d 8d", "7s Ts"]);
    s.handle(Command::ToggleSelection { index: 0 }).unwrap();

    let resp = s.handle(Command::PlaySelection).unwrap();
    let CommandResponse::GameFinished { winner, game } = resp else {
        panic!("expected GameFinished, got {resp:?}");
    };
    assert_eq!(winner, 0);
    assert_eq!(game.winner, Some(0));
    assert!(game.seats.iter().all(|seat| !seat.is_active));

    assert!(matches!(s.handle(Command::Pass { seat: 1 }), Err(ApiError::Internal(_))));
}

#[test]
fn autoplay_session_runs_to_a_winner() {
    let mut s = GameSession::new(GameConfig::autoplay(Some(77))).unwrap();

    assert_eq!(
        s.handle(Command::ToggleSelection { index: 0 }).unwrap_err(),
        ApiError::NoHumanSeat
    );
    assert_eq!(s.handle(Command::PlaySelection).unwrap_err(), ApiError::NoHumanSeat);

    let resp = s.handle(Command::RunAutomatedTurns).unwrap();
    let CommandResponse::AutomatedMoves { actions, game } = resp else {
        panic!("expected AutomatedMoves, got {resp:?}");
    };
    assert!(!actions.is_empty());
    let winner = game.winner.expect("autoplay ends with a winner");
    assert_eq!(game.seats[winner as usize].card_count, 0);
    // Без человека видно все руки.
    assert!(game.seats.iter().all(|seat| seat.cards.is_some()));
}

#[test]
fn history_query_lists_events() {
    let mut s = session(["3c 9c Kc", "4h 5h", "6d 8d", "7s Ts"]);
    s.handle(Command::Pass { seat: 0 }).unwrap();

    let QueryResponse::History(events) = s.query(Query::GetHistory) else {
        panic!("expected history");
    };
    let kinds: Vec<GameEventKind> = events.into_iter().map(|ev| ev.kind).collect();
    assert_eq!(
        kinds,
        vec![
            GameEventKind::GameStarted { seed: None },
            GameEventKind::Passed { seat: 0, consecutive: 1 },
            GameEventKind::TurnPassed { seat: 1 },
        ]
    );

    s.handle(Command::RunAutomatedTurn).unwrap();
    match s.query(Query::GetSelection) {
        QueryResponse::Selection(sel) => assert!(sel.is_empty()),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn new_game_command_replaces_the_engine() {
    let mut s = session(["9c", "4h 5h", "6d 8d", "7s Ts"]);
    s.handle(Command::ToggleSelection { index: 0 }).unwrap();

    let resp = s.handle(Command::NewGame(GameConfig::default().with_seed(3))).unwrap();
    let CommandResponse::GameState(view) = resp else {
        panic!("expected GameState, got {resp:?}");
    };
    assert!(view.selected.is_empty());
    assert!(view.seats.iter().all(|seat| seat.card_count == 13));
    assert_eq!(s.engine().config().seed, Some(3));
}

#[test]
fn responses_serialize_to_json() {
    let mut s = session(["3c 9c Kc", "4h 5h", "6d 8d", "7s Ts"]);
    let resp = s.handle(Command::ToggleSelection { index: 2 }).unwrap();
    let json = serde_json::to_string(&resp).unwrap();
    let back: CommandResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(back, resp);

    let cmd: Command = serde_json::from_str(r#"{"Pass":{"seat":0}}"#).unwrap();
    assert!(matches!(cmd, Command::Pass { seat: 0 }));
}
