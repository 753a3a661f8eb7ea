use crate::domain::config::GameConfig;
use crate::domain::SeatIndex;
use crate::engine::{GameEngine, GameStatus, LowestBeatStrategy, OpponentStrategy, PlayerAction};
use crate::infra::GameRng;

use super::commands::{Command, PlayCardsCommand};
use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{build_game_view, Query, QueryResponse};
use super::selection::Selection;

/// Сессия одной партии: движок + выбор карт человека + стратегия соперников.
///
/// Это точка входа для слоя представления: команды меняют состояние,
/// запросы его читают (pull-модель, движок ничего не рассылает сам).
pub struct GameSession<S: OpponentStrategy = LowestBeatStrategy> {
    engine: GameEngine,
    selection: Selection,
    strategy: S,
}

impl GameSession<LowestBeatStrategy> {
    pub fn new(config: GameConfig) -> Result<Self, ApiError> {
        Self::with_strategy(config, LowestBeatStrategy)
    }
}

impl<S: OpponentStrategy> GameSession<S> {
    pub fn with_strategy(config: GameConfig, strategy: S) -> Result<Self, ApiError> {
        let engine = start_engine(config)?;
        Ok(Self {
            engine,
            selection: Selection::new(),
            strategy,
        })
    }

    /// Сессия поверх уже собранного движка (например, с заданными руками).
    pub fn from_engine(engine: GameEngine, strategy: S) -> Self {
        Self {
            engine,
            selection: Selection::new(),
            strategy,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    fn human_seat(&self) -> Result<SeatIndex, ApiError> {
        self.engine.config().human_seat.ok_or(ApiError::NoHumanSeat)
    }

    /// Выполнить команду.
    pub fn handle(&mut self, command: Command) -> Result<CommandResponse, ApiError> {
        match command {
            Command::NewGame(config) => {
                self.engine = start_engine(config)?;
                self.selection.clear();
                Ok(self.state_response())
            }

            Command::ToggleSelection { index } => {
                let seat = self.human_seat()?;
                let len = self.engine.hand(seat).map_or(0, |h| h.len());
                if index >= len {
                    return Err(ApiError::BadRequest(format!(
                        "card index {index} is out of range for a hand of {len} cards"
                    )));
                }
                self.selection.toggle(index);
                Ok(CommandResponse::SelectionChanged {
                    selected: self.selection.indices(),
                })
            }

            Command::ClearSelection => {
                self.selection.clear();
                Ok(CommandResponse::SelectionChanged {
                    selected: Vec::new(),
                })
            }

            Command::PlaySelection => {
                let seat = self.human_seat()?;
                let hand = self
                    .engine
                    .hand(seat)
                    .ok_or_else(|| ApiError::Internal(format!("seat {seat} has no hand")))?;
                let cards = self.selection.resolve(hand)?;
                self.engine.submit_play(seat, &cards)?;
                self.selection.clear();
                Ok(self.state_response())
            }

            Command::PlayCards(PlayCardsCommand { seat, cards }) => {
                self.engine.submit_play(seat, &cards)?;
                if self.engine.config().is_human(seat) {
                    self.selection.clear();
                }
                Ok(self.state_response())
            }

            Command::Pass { seat } => {
                self.engine.submit_pass(seat)?;
                if self.engine.config().is_human(seat) {
                    self.selection.clear();
                }
                Ok(self.state_response())
            }

            Command::RunAutomatedTurn => {
                let (action, _) = self.engine.play_automated_turn(&self.strategy)?;
                Ok(self.automated_response(vec![action]))
            }

            Command::RunAutomatedTurns => {
                let actions = self.engine.run_automated_turns(&self.strategy)?;
                Ok(self.automated_response(actions))
            }
        }
    }

    /// Выполнить запрос "только чтение".
    pub fn query(&self, query: Query) -> QueryResponse {
        match query {
            Query::GetGame { viewer } => {
                QueryResponse::Game(build_game_view(&self.engine, viewer, self.selection.indices()))
            }
            Query::GetHistory => QueryResponse::History(self.engine.history().events.clone()),
            Query::GetSelection => QueryResponse::Selection(self.selection.indices()),
        }
    }

    fn viewer(&self) -> Option<SeatIndex> {
        self.engine.config().human_seat
    }

    fn state_response(&self) -> CommandResponse {
        let game = build_game_view(&self.engine, self.viewer(), self.selection.indices());
        match self.engine.status() {
            GameStatus::Finished { winner } => CommandResponse::GameFinished { winner, game },
            GameStatus::Ongoing { .. } => CommandResponse::GameState(game),
        }
    }

    /// Ходы автоматов возвращаем всегда: даже последний, закончивший партию,
    /// нужно показать. Победитель виден в `game.winner`.
    fn automated_response(&self, actions: Vec<PlayerAction>) -> CommandResponse {
        let game = build_game_view(&self.engine, self.viewer(), self.selection.indices());
        CommandResponse::AutomatedMoves { actions, game }
    }
}

/// Собрать движок по конфигу: RNG выбирается по seed.
fn start_engine(config: GameConfig) -> Result<GameEngine, ApiError> {
    let mut rng = GameRng::from_config_seed(config.seed);
    Ok(GameEngine::new_game(config, &mut rng)?)
}
