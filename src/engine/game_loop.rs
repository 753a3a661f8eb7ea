use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::domain::table::{next_seat, SeatIndex, TableState, NUM_SEATS, PASSES_TO_CLEAR};
use crate::engine::actions::{Move, PlayerAction};
use crate::engine::errors::{ContractViolation, EngineError};
use crate::engine::history::{GameEventKind, GameHistory};
use crate::engine::strategy::OpponentStrategy;
use crate::engine::validation::validate_play;
use crate::engine::RandomSource;

/// Сколько пасов подряд автоматические места могут сделать без единого хода,
/// прежде чем прогон считается зависшим. Нормальная стратегия упирается в
/// `PASSES_TO_CLEAR` и открывает чистый стол.
const AUTOMATED_STALL_LIMIT: usize = 2 * NUM_SEATS;

/// Статус партии для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing { active_seat: SeatIndex },
    Finished { winner: SeatIndex },
}

/// Движок партии: четыре руки, состояние стола, победитель, история.
///
/// Поля закрыты: всё состояние меняется только через `submit_play` / `submit_pass`
/// (и `play_automated_turn`, который идёт через них же).
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    hands: Vec<Hand>,
    table: TableState,
    winner: Option<SeatIndex>,
    history: GameHistory,
}

impl GameEngine {
    /// Новая партия: перемешать колоду, раздать по кругу, первым ходит место 0.
    pub fn new_game<R: RandomSource>(config: GameConfig, rng: &mut R) -> Result<Self, EngineError> {
        let deck = Deck::shuffled(rng);
        let hands = deck.deal(NUM_SEATS);

        let mut history = GameHistory::new();
        history.push(GameEventKind::GameStarted { seed: config.seed });
        for (seat, hand) in hands.iter().enumerate() {
            history.push(GameEventKind::CardsDealt {
                seat: seat as SeatIndex,
                count: hand.len(),
            });
        }

        log::info!(
            "new game dealt: {} seats, human seat {:?}, seed {:?}",
            NUM_SEATS,
            config.human_seat,
            config.seed
        );

        Self::assemble(config, hands, history)
    }

    /// Партия с заранее заданными руками (тесты, неравные раздачи).
    pub fn from_hands(hands: [Hand; NUM_SEATS], config: GameConfig) -> Result<Self, EngineError> {
        let mut history = GameHistory::new();
        history.push(GameEventKind::GameStarted { seed: config.seed });
        Self::assemble(config, Vec::from(hands), history)
    }

    fn assemble(config: GameConfig, hands: Vec<Hand>, history: GameHistory) -> Result<Self, EngineError> {
        if !config.is_valid() {
            let seat = config.human_seat.unwrap_or_default();
            return Err(ContractViolation::InvalidSeat(seat).into());
        }

        let mut engine = Self {
            config,
            hands,
            table: TableState::new(0),
            winner: None,
            history,
        };
        // Место с пустой рукой не спрашиваем о ходе — партия сразу окончена.
        engine.check_termination();
        Ok(engine)
    }

    // ---------------------------------------------------------------------
    // Чтение состояния
    // ---------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, seat: SeatIndex) -> Option<&Hand> {
        self.hands.get(seat as usize)
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn last_played(&self) -> &[Card] {
        &self.table.last_played
    }

    pub fn active_seat(&self) -> SeatIndex {
        self.table.active_seat
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.table.consecutive_passes
    }

    pub fn winner(&self) -> Option<SeatIndex> {
        self.winner
    }

    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(winner) => GameStatus::Finished { winner },
            None => GameStatus::Ongoing {
                active_seat: self.table.active_seat,
            },
        }
    }

    /// Автоматическое место, которое ждёт ровно одного хода стратегии.
    /// Когда и с какой задержкой его делать — решает слой представления.
    pub fn pending_automated_seat(&self) -> Option<SeatIndex> {
        if self.is_finished() || self.config.is_human(self.table.active_seat) {
            None
        } else {
            Some(self.table.active_seat)
        }
    }

    // ---------------------------------------------------------------------
    // Действия
    // ---------------------------------------------------------------------

    /// Положить набор карт.
    pub fn submit_play(&mut self, seat: SeatIndex, cards: &[Card]) -> Result<GameStatus, EngineError> {
        self.check_actor(seat)?;

        if let Err(rejection) = validate_play(cards, &self.table) {
            log::debug!("seat {seat}: play rejected: {rejection}");
            return Err(rejection.into());
        }

        let hand = &mut self.hands[seat as usize];
        if let Err(err) = hand.remove_cards(cards) {
            log::warn!("seat {seat}: contract violation on play: {err}");
            return Err(err.into());
        }

        self.table.last_played = cards.to_vec();
        self.table.consecutive_passes = 0;
        self.history.push(GameEventKind::CardsPlayed {
            seat,
            cards: cards.to_vec(),
        });
        log::debug!(
            "seat {seat} played {} ({} left)",
            format_cards(cards),
            self.hands[seat as usize].len()
        );

        Ok(self.advance_turn())
    }

    /// Пропустить ход. Третий пас подряд очищает стол.
    pub fn submit_pass(&mut self, seat: SeatIndex) -> Result<GameStatus, EngineError> {
        self.check_actor(seat)?;

        self.table.consecutive_passes += 1;
        self.history.push(GameEventKind::Passed {
            seat,
            consecutive: self.table.consecutive_passes,
        });
        log::debug!("seat {seat} passed ({} in a row)", self.table.consecutive_passes);

        if self.table.consecutive_passes >= PASSES_TO_CLEAR {
            self.table.clear();
            self.history.push(GameEventKind::TableCleared);
            log::info!("table cleared, seat {} opens", next_seat(seat));
        }

        Ok(self.advance_turn())
    }

    /// Применить действие места.
    pub fn apply(&mut self, action: &PlayerAction) -> Result<GameStatus, EngineError> {
        match &action.kind {
            Move::Play(cards) => self.submit_play(action.seat, cards),
            Move::Pass => self.submit_pass(action.seat),
        }
    }

    /// Сделать один ход за ожидающее автоматическое место.
    pub fn play_automated_turn<S: OpponentStrategy + ?Sized>(
        &mut self,
        strategy: &S,
    ) -> Result<(PlayerAction, GameStatus), EngineError> {
        if let Some(winner) = self.winner {
            return Err(ContractViolation::GameOver { winner }.into());
        }
        let seat = self
            .pending_automated_seat()
            .ok_or(EngineError::ContractViolation(ContractViolation::NoPendingAutomatedTurn))?;

        let kind = strategy.choose_move(&self.hands[seat as usize], &self.table);
        let action = PlayerAction { seat, kind };
        log::debug!("seat {seat} ({}) chose {:?}", strategy.name(), action.kind);

        let status = self.apply(&action)?;
        Ok((action, status))
    }

    /// Играть за автоматические места, пока ход не вернётся к человеку
    /// или партия не закончится. Возвращает сделанные действия по порядку.
    pub fn run_automated_turns<S: OpponentStrategy + ?Sized>(
        &mut self,
        strategy: &S,
    ) -> Result<Vec<PlayerAction>, EngineError> {
        let mut actions = Vec::new();
        let mut passes_in_a_row = 0usize;

        while self.pending_automated_seat().is_some() {
            let (action, _) = self.play_automated_turn(strategy)?;
            let passed = action.kind.is_pass();
            actions.push(action);

            if !passed {
                passes_in_a_row = 0;
                continue;
            }
            passes_in_a_row += 1;
            if passes_in_a_row > AUTOMATED_STALL_LIMIT {
                log::warn!("{} stalled after {passes_in_a_row} passes", strategy.name());
                break;
            }
        }

        Ok(actions)
    }

    // ---------------------------------------------------------------------
    // Внутреннее
    // ---------------------------------------------------------------------

    fn check_actor(&self, seat: SeatIndex) -> Result<(), EngineError> {
        if let Some(winner) = self.winner {
            log::warn!("seat {seat} acted after the game ended");
            return Err(ContractViolation::GameOver { winner }.into());
        }
        if seat as usize >= NUM_SEATS {
            log::warn!("seat {seat} does not exist");
            return Err(ContractViolation::InvalidSeat(seat).into());
        }
        if seat != self.table.active_seat {
            return Err(EngineError::OutOfTurn {
                seat,
                active: self.table.active_seat,
            });
        }
        Ok(())
    }

    /// Передать ход следующему месту и проверить конец партии.
    fn advance_turn(&mut self) -> GameStatus {
        self.table.active_seat = next_seat(self.table.active_seat);
        self.history.push(GameEventKind::TurnPassed {
            seat: self.table.active_seat,
        });

        self.check_termination();
        self.status()
    }

    /// Первая пустая рука (по порядку мест) объявляется победителем.
    fn check_termination(&mut self) {
        if self.winner.is_some() {
            return;
        }
        if let Some(seat) = self.hands.iter().position(Hand::is_empty) {
            let seat = seat as SeatIndex;
            self.winner = Some(seat);
            self.history.push(GameEventKind::GameWon { seat });
            log::info!("seat {seat} emptied their hand and wins");
        }
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
