use serde::{Deserialize, Serialize};

use crate::domain::GameId;
use crate::engine::{GameManager, GameRules, PlayerAction, RandomSource};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_game_view;

/// Команда верхнего уровня — всё, что меняет состояние.
/// Presentation-слой переводит жест игрока (drag-and-drop карты)
/// в одну из этих команд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать новую партию (или перезапустить существующую под тем же id).
    CreateGame(CreateGameCommand),

    /// Действие игрока в партии.
    GameAction(GameActionCommand),
}

/// Команда создания партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CreateGameCommand {
    /// Идентификатор новой партии.
    pub game_id: GameId,
    /// Правила (лимит атак, добор и т.п.).
    pub rules: GameRules,
}

/// Действие игрока в конкретной партии.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GameActionCommand {
    pub game_id: GameId,
    pub action: PlayerAction,
}

/// Применить команду поверх менеджера партий.
/// RNG передаётся снаружи: в проде SystemRng, в тестах DeterministicRng.
pub fn apply_command<R: RandomSource>(
    manager: &mut GameManager,
    rng: &mut R,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::CreateGame(cmd) => {
            manager.create_game(cmd.game_id, cmd.rules, rng);
            let game = manager
                .game(cmd.game_id)
                .ok_or_else(|| ApiError::Internal("партия не создалась".into()))?;
            Ok(CommandResponse::GameState(build_game_view(
                cmd.game_id,
                game,
                None,
            )))
        }
        Command::GameAction(cmd) => {
            manager.apply_action(cmd.game_id, cmd.action)?;
            let game = manager
                .game(cmd.game_id)
                .ok_or(ApiError::GameNotFound(cmd.game_id))?;
            Ok(CommandResponse::GameState(build_game_view(
                cmd.game_id,
                game,
                None,
            )))
        }
    }
}
