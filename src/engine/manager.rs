use std::collections::HashMap;

use crate::domain::GameId;
use crate::engine::actions::PlayerAction;
use crate::engine::errors::EngineError;
use crate::engine::game::{self, ActionStatus, GameState, GameStatus};
use crate::engine::rules::GameRules;
use crate::engine::RandomSource;

/// Ошибки уровня менеджера партий (над движком одной партии).
#[derive(Debug)]
pub enum ManagerError {
    /// Партия с таким ID не найдена.
    GameNotFound(GameId),

    /// Проброшенная ошибка из движка.
    Engine(EngineError),
}

impl From<EngineError> for ManagerError {
    fn from(e: EngineError) -> Self {
        ManagerError::Engine(e)
    }
}

/// Менеджер партий:
/// - хранит несколько независимых партий по GameId;
/// - даёт методы create_game/apply_action поверх engine::start_game /
///   engine::apply_action.
///
/// Благодаря тому, что всё состояние партии лежит в GameState,
/// параллельные партии не делят ничего, кроме самого реестра.
#[derive(Debug, Default)]
pub struct GameManager {
    games: HashMap<GameId, GameState>,
}

impl GameManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Запустить новую партию под заданным ID.
    ///
    /// Если партия с таким id уже была — заменяем её
    /// (это и есть «рестарт» для presentation-слоя).
    pub fn create_game<R: RandomSource>(&mut self, game_id: GameId, rules: GameRules, rng: &mut R) {
        let game = game::start_game(rules, rng);
        self.games.insert(game_id, game);
    }

    /// Есть ли партия с таким id.
    pub fn has_game(&self, game_id: GameId) -> bool {
        self.games.contains_key(&game_id)
    }

    /// Получить ссылку на партию (read-only).
    pub fn game(&self, game_id: GameId) -> Option<&GameState> {
        self.games.get(&game_id)
    }

    /// Получить ссылку на партию (mutable).
    pub fn game_mut(&mut self, game_id: GameId) -> Option<&mut GameState> {
        self.games.get_mut(&game_id)
    }

    /// Статус партии (если она существует).
    pub fn status(&self, game_id: GameId) -> Option<GameStatus> {
        self.games.get(&game_id).map(game::check_end)
    }

    /// Применить действие игрока в конкретной партии.
    pub fn apply_action(
        &mut self,
        game_id: GameId,
        action: PlayerAction,
    ) -> Result<ActionStatus, ManagerError> {
        let game = self
            .games
            .get_mut(&game_id)
            .ok_or(ManagerError::GameNotFound(game_id))?;

        let status = game::apply_action(game, action)?;
        Ok(status)
    }

    /// Убрать завершённую партию из реестра.
    pub fn remove_game(&mut self, game_id: GameId) -> Option<GameState> {
        self.games.remove(&game_id)
    }
}
